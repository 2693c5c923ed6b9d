use crate::domain::{Area, Group, GroupStatus, Lecturer, Level, School, Student};
use crate::utils::error::{Result, SchoolError};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const EARLIEST_BIRTH_YEAR: i32 = 1900;

/// Declarative description of a school, loaded once at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub areas: Vec<AreaConfig>,
    #[serde(default)]
    pub lecturers: Vec<Lecturer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaConfig {
    pub name: String,
    #[serde(default)]
    pub levels: Vec<LevelConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    pub direction: String,
    pub level: String,
    pub status: Option<GroupStatus>,
    #[serde(default)]
    pub students: Vec<StudentConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentConfig {
    pub first_name: String,
    pub last_name: String,
    pub birth_year: i32,
    #[serde(default)]
    pub grades: HashMap<String, f64>,
    #[serde(default)]
    pub visits: HashMap<String, bool>,
}

impl RosterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let roster = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded roster from {}: {} areas, {} lecturers",
            path.as_ref().display(),
            roster.areas.len(),
            roster.lecturers.len()
        );
        Ok(roster)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SchoolError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SchoolError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Builds the school. Each group's area tag points at the area it is declared under.
    pub fn into_school(self) -> School {
        let mut school = School::new();

        for area_config in self.areas {
            let mut area = Area::new(area_config.name);
            let area_id = area.id();

            for level_config in area_config.levels {
                let mut level = Level::new(level_config.name, level_config.description);

                for group_config in level_config.groups {
                    let mut group = Group::new(group_config.direction, group_config.level);
                    group.set_area(Some(area_id));
                    if let Some(status) = group_config.status {
                        group.set_status(status);
                    }

                    for student_config in group_config.students {
                        group.add_student(student_config.into_student());
                    }
                    level.add_group(group);
                }
                area.add_level(level);
            }
            school.add_area(area);
        }

        for lecturer in self.lecturers {
            school.add_lecturer(lecturer);
        }

        school
    }
}

impl StudentConfig {
    fn into_student(self) -> Student {
        let mut student = Student::new(self.first_name, self.last_name, self.birth_year);
        for (work, mark) in self.grades {
            student.set_grade(work, mark);
        }
        for (lesson, present) in self.visits {
            student.set_visit(lesson, present);
        }
        student
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        let current_year = chrono::Local::now().year();

        for (a, area) in self.areas.iter().enumerate() {
            validate_non_empty_string(&format!("areas[{}].name", a), &area.name)?;

            for (l, level) in area.levels.iter().enumerate() {
                let level_path = format!("areas[{}].levels[{}]", a, l);
                validate_non_empty_string(&format!("{}.name", level_path), &level.name)?;

                for (g, group) in level.groups.iter().enumerate() {
                    let group_path = format!("{}.groups[{}]", level_path, g);
                    validate_non_empty_string(&format!("{}.direction", group_path), &group.direction)?;
                    validate_non_empty_string(&format!("{}.level", group_path), &group.level)?;

                    for (s, student) in group.students.iter().enumerate() {
                        let student_path = format!("{}.students[{}]", group_path, s);
                        validate_non_empty_string(
                            &format!("{}.first_name", student_path),
                            &student.first_name,
                        )?;
                        validate_non_empty_string(
                            &format!("{}.last_name", student_path),
                            &student.last_name,
                        )?;
                        validate_range(
                            &format!("{}.birth_year", student_path),
                            student.birth_year,
                            EARLIEST_BIRTH_YEAR,
                            current_year,
                        )?;
                    }
                }
            }
        }

        for (i, lecturer) in self.lecturers.iter().enumerate() {
            validate_non_empty_string(&format!("lecturers[{}].name", i), &lecturer.name)?;
            validate_non_empty_string(&format!("lecturers[{}].surname", i), &lecturer.surname)?;
            validate_range(
                &format!("lecturers[{}].experience", i),
                lecturer.experience,
                0.0,
                f64::MAX,
            )?;
        }

        Ok(())
    }
}
