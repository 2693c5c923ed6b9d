use crate::domain::group::Group;
use crate::domain::ids::{GroupId, LevelId};

/// A curriculum tier inside an area.
#[derive(Debug, Clone)]
pub struct Level {
    id: LevelId,
    name: String,
    description: String,
    groups: Vec<Group>,
}

impl Level {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: LevelId::next(),
            name: name.into(),
            description: description.into(),
            groups: Vec::new(),
        }
    }

    pub fn id(&self) -> LevelId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut [Group] {
        &mut self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id() == id)
    }

    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id() == id)
    }

    pub fn add_group(&mut self, group: Group) -> GroupId {
        let id = group.id();
        tracing::debug!("Adding {} to level '{}'", id, self.name);
        self.groups.push(group);
        id
    }

    pub fn remove_group(&mut self, id: GroupId) -> Option<Group> {
        let index = self.groups.iter().position(|g| g.id() == id)?;
        tracing::debug!("Removing {} from level '{}'", id, self.name);
        Some(self.groups.remove(index))
    }
}
