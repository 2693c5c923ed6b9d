use crate::domain::ids::{AreaId, GroupId, StudentId};
use crate::domain::model::GroupStatus;
use crate::domain::student::Student;
use std::cmp::Ordering;

/// A cohort of students under a direction/level label.
#[derive(Debug, Clone)]
pub struct Group {
    id: GroupId,
    area: Option<AreaId>,
    status: GroupStatus,
    students: Vec<Student>,
    pub direction_name: String,
    pub level_name: String,
}

impl Group {
    pub fn new(direction_name: impl Into<String>, level_name: impl Into<String>) -> Self {
        Self {
            id: GroupId::next(),
            area: None,
            status: GroupStatus::default(),
            students: Vec::new(),
            direction_name: direction_name.into(),
            level_name: level_name.into(),
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Informational tag only; the group is not registered anywhere by setting it.
    pub fn area(&self) -> Option<AreaId> {
        self.area
    }

    pub fn set_area(&mut self, area: Option<AreaId>) {
        self.area = area;
    }

    pub fn status(&self) -> GroupStatus {
        self.status
    }

    pub fn set_status(&mut self, status: GroupStatus) {
        tracing::debug!("Group {} status {} -> {}", self.id, self.status, status);
        self.status = status;
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    pub fn student_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id() == id)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn add_student(&mut self, student: Student) -> StudentId {
        let id = student.id();
        tracing::debug!("Adding {} to group {}", id, self.id);
        self.students.push(student);
        id
    }

    /// Returns the removed student, or `None` if it was not a member.
    pub fn remove_student(&mut self, id: StudentId) -> Option<Student> {
        let index = self.students.iter().position(|s| s.id() == id)?;
        tracing::debug!("Removing {} from group {}", id, self.id);
        Some(self.students.remove(index))
    }

    /// Reorders the students in place, best rating first, and returns them.
    ///
    /// Ratings are computed once per student at call time. The sort is stable:
    /// students with equal ratings keep their previous relative order. A NaN
    /// rating (from a NaN mark, or infinite marks that cancel) ranks last.
    pub fn show_performance(&mut self) -> &[Student] {
        let mut rated: Vec<(f64, Student)> = self
            .students
            .drain(..)
            .map(|student| (student.performance_rating(), student))
            .collect();
        rated.sort_by(|(a, _), (b, _)| match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => b.total_cmp(a),
        });
        self.students = rated.into_iter().map(|(_, student)| student).collect();

        tracing::debug!("Ranked {} students in group {}", self.students.len(), self.id);
        &self.students
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_with(first: &str, grade: f64, present: bool) -> Student {
        let mut student = Student::new(first, "Test", 2000);
        student.set_grade("exam", grade);
        student.set_visit("lesson", present);
        student
    }

    fn first_names(students: &[Student]) -> Vec<&str> {
        students.iter().map(|s| s.first_name()).collect()
    }

    #[test]
    fn test_new_group_is_active_and_empty() {
        let group = Group::new("Frontend", "Beginner");
        assert_eq!(group.status(), GroupStatus::Active);
        assert!(group.is_empty());
        assert_eq!(group.area(), None);
        assert_eq!(group.direction_name, "Frontend");
        assert_eq!(group.level_name, "Beginner");
    }

    #[test]
    fn test_add_then_remove_restores_list() {
        let mut group = Group::new("Frontend", "Beginner");
        group.add_student(Student::new("Ann", "Lee", 2002));
        let before: Vec<StudentId> = group.students().iter().map(|s| s.id()).collect();

        let id = group.add_student(Student::new("John", "Smith", 2001));
        assert_eq!(group.len(), 2);
        let removed = group.remove_student(id).unwrap();
        assert_eq!(removed.id(), id);

        let after: Vec<StudentId> = group.students().iter().map(|s| s.id()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_absent_student_is_noop() {
        let mut group = Group::new("Frontend", "Beginner");
        group.add_student(Student::new("Ann", "Lee", 2002));
        let outsider = Student::new("Ann", "Lee", 2002);

        assert!(group.remove_student(outsider.id()).is_none());
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_show_performance_sorts_descending() {
        let mut group = Group::new("Frontend", "Beginner");
        group.add_student(student_with("low", 40.0, false));
        group.add_student(student_with("high", 95.0, true));
        group.add_student(student_with("mid", 70.0, true));
        group.add_student(Student::new("none", "Test", 2000));

        let ranked = group.show_performance();
        assert_eq!(first_names(ranked), vec!["high", "mid", "low", "none"]);
        let ratings: Vec<f64> = ranked.iter().map(|s| s.performance_rating()).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_show_performance_is_stable_and_idempotent() {
        let mut group = Group::new("Frontend", "Beginner");
        group.add_student(student_with("a", 80.0, true));
        group.add_student(student_with("b", 90.0, true));
        group.add_student(student_with("c", 80.0, true));

        let first = first_names(group.show_performance())
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        assert_eq!(first, vec!["b", "a", "c"]);

        let second = first_names(group.show_performance());
        assert_eq!(first, second);
    }

    #[test]
    fn test_nan_rating_ranks_last() {
        let mut group = Group::new("Frontend", "Beginner");
        group.add_student(student_with("nan", f64::NAN, true));
        let mut cancelled = Student::new("cancelled", "Test", 2000);
        cancelled.set_grade("a", f64::INFINITY);
        cancelled.set_grade("b", f64::NEG_INFINITY);
        group.add_student(cancelled);
        group.add_student(student_with("good", 100.0, true));
        group.add_student(Student::new("none", "Test", 2000));

        let ranked = group.show_performance();
        assert_eq!(first_names(ranked), vec!["good", "none", "nan", "cancelled"]);
    }

    #[test]
    fn test_ranking_is_in_place() {
        let mut group = Group::new("Frontend", "Beginner");
        group.add_student(student_with("low", 10.0, false));
        group.add_student(student_with("high", 100.0, true));
        group.show_performance();
        assert_eq!(group.students()[0].first_name(), "high");
    }

    #[test]
    fn test_status_and_area_are_free_slots() {
        let mut group = Group::new("Frontend", "Beginner");
        group.set_status(GroupStatus::Inactive);
        group.set_status(GroupStatus::Inactive);
        assert_eq!(group.status(), GroupStatus::Inactive);
        group.set_status(GroupStatus::Active);
        assert_eq!(group.status(), GroupStatus::Active);

        let area = crate::domain::area::Area::new("Programming");
        group.set_area(Some(area.id()));
        assert_eq!(group.area(), Some(area.id()));
        assert!(area.levels().is_empty());
        group.set_area(None);
        assert_eq!(group.area(), None);
    }

    #[test]
    fn test_student_mut_reaches_member() {
        let mut group = Group::new("Frontend", "Beginner");
        let id = group.add_student(Student::new("Ann", "Lee", 2002));
        group.student_mut(id).unwrap().set_grade("exam", 90.0);
        assert_eq!(group.student(id).unwrap().grades()["exam"], 90.0);
    }
}
