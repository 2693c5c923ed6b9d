use crate::domain::area::Area;
use crate::domain::group::Group;
use crate::domain::ids::AreaId;
use crate::domain::model::Lecturer;

/// Aggregate root: the areas hierarchy plus a flat list of lecturers.
#[derive(Debug, Clone, Default)]
pub struct School {
    areas: Vec<Area>,
    lecturers: Vec<Lecturer>,
}

impl School {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn lecturers(&self) -> &[Lecturer] {
        &self.lecturers
    }

    pub fn area(&self, id: AreaId) -> Option<&Area> {
        self.areas.iter().find(|a| a.id() == id)
    }

    pub fn area_mut(&mut self, id: AreaId) -> Option<&mut Area> {
        self.areas.iter_mut().find(|a| a.id() == id)
    }

    pub fn add_area(&mut self, area: Area) -> AreaId {
        let id = area.id();
        tracing::debug!("Adding {} ('{}') to school", id, area.name());
        self.areas.push(area);
        id
    }

    /// Detaches the area; its levels, groups and students go with it.
    pub fn remove_area(&mut self, id: AreaId) -> Option<Area> {
        let index = self.areas.iter().position(|a| a.id() == id)?;
        tracing::debug!("Removing {} from school", id);
        Some(self.areas.remove(index))
    }

    pub fn add_lecturer(&mut self, lecturer: Lecturer) {
        tracing::debug!("Adding lecturer {} {}", lecturer.name, lecturer.surname);
        self.lecturers.push(lecturer);
    }

    /// Removes every lecturer equal to `lecturer`; returns whether any matched.
    pub fn remove_lecturer(&mut self, lecturer: &Lecturer) -> bool {
        let before = self.lecturers.len();
        self.lecturers.retain(|l| l != lecturer);
        before != self.lecturers.len()
    }

    /// Every group in the hierarchy, area by area and level by level.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.areas
            .iter()
            .flat_map(|area| area.levels())
            .flat_map(|level| level.groups())
    }

    pub fn groups_mut(&mut self) -> impl Iterator<Item = &mut Group> {
        self.areas
            .iter_mut()
            .flat_map(|area| area.levels_mut())
            .flat_map(|level| level.groups_mut())
    }
}
