use crate::domain::ids::{AreaId, LevelId};
use crate::domain::level::Level;

#[derive(Debug, Clone)]
pub struct Area {
    id: AreaId,
    name: String,
    levels: Vec<Level>,
}

impl Area {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: AreaId::next(),
            name: name.into(),
            levels: Vec::new(),
        }
    }

    pub fn id(&self) -> AreaId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn levels_mut(&mut self) -> &mut [Level] {
        &mut self.levels
    }

    pub fn level(&self, id: LevelId) -> Option<&Level> {
        self.levels.iter().find(|l| l.id() == id)
    }

    pub fn level_mut(&mut self, id: LevelId) -> Option<&mut Level> {
        self.levels.iter_mut().find(|l| l.id() == id)
    }

    pub fn add_level(&mut self, level: Level) -> LevelId {
        let id = level.id();
        tracing::debug!("Adding {} to area '{}'", id, self.name);
        self.levels.push(level);
        id
    }

    pub fn remove_level(&mut self, id: LevelId) -> Option<Level> {
        let index = self.levels.iter().position(|l| l.id() == id)?;
        tracing::debug!("Removing {} from area '{}'", id, self.name);
        Some(self.levels.remove(index))
    }
}
