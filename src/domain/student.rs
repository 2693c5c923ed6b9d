use crate::domain::ids::StudentId;
use crate::utils::error::Result;
use crate::utils::validation::split_full_name;
use chrono::Datelike;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Student {
    id: StudentId,
    first_name: String,
    last_name: String,
    birth_year: i32,
    grades: HashMap<String, f64>,
    visits: HashMap<String, bool>,
}

impl Student {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, birth_year: i32) -> Self {
        Self {
            id: StudentId::next(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_year,
            grades: HashMap::new(),
            visits: HashMap::new(),
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    pub fn grades(&self) -> &HashMap<String, f64> {
        &self.grades
    }

    pub fn visits(&self) -> &HashMap<String, bool> {
        &self.visits
    }

    /// `"<last> <first>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Accepts exactly two whitespace-separated tokens, surname first.
    /// On error the student is left untouched.
    pub fn set_full_name(&mut self, value: &str) -> Result<()> {
        let (last, first) = split_full_name(value)?;
        self.last_name = last.to_string();
        self.first_name = first.to_string();
        Ok(())
    }

    pub fn age(&self) -> i64 {
        self.age_at(chrono::Local::now().year())
    }

    /// Whole years between the birth year and `current_year`; widened so any
    /// pair of `i32` years subtracts without overflow.
    pub fn age_at(&self, current_year: i32) -> i64 {
        i64::from(current_year) - i64::from(self.birth_year)
    }

    /// Records or overwrites a mark. Marks are not range-checked.
    pub fn set_grade(&mut self, work_name: impl Into<String>, mark: f64) {
        let work_name = work_name.into();
        tracing::debug!("Grade {} = {} for {}", work_name, mark, self.id);
        self.grades.insert(work_name, mark);
    }

    pub fn set_visit(&mut self, lesson: impl Into<String>, present: bool) {
        let lesson = lesson.into();
        tracing::debug!("Visit {} = {} for {}", lesson, present, self.id);
        self.visits.insert(lesson, present);
    }

    pub fn average_grade(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let total: f64 = self.grades.values().sum();
        Some(total / self.grades.len() as f64)
    }

    pub fn attendance_percentage(&self) -> Option<f64> {
        if self.visits.is_empty() {
            return None;
        }
        let present = self.visits.values().filter(|&&present| present).count();
        Some(present as f64 / self.visits.len() as f64 * 100.0)
    }

    /// Mean of average grade and attendance percentage.
    ///
    /// A student without grades rates 0 whatever the attendance. With grades
    /// but no recorded visits, attendance counts as 0%.
    pub fn performance_rating(&self) -> f64 {
        match self.average_grade() {
            Some(average) => (average + self.attendance_percentage().unwrap_or(0.0)) / 2.0,
            None => 0.0,
        }
    }
}
