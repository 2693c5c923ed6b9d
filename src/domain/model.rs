use serde::{Deserialize, Serialize};
use std::fmt;

/// A lecturer's academic rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Professor")]
    Professor,
    #[serde(rename = "Assistant Professor")]
    AssistantProfessor,
    #[serde(rename = "Lecturer")]
    Lecturer,
    #[serde(rename = "Other")]
    Other,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Position::Professor => "Professor",
            Position::AssistantProfessor => "Assistant Professor",
            Position::Lecturer => "Lecturer",
            Position::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Lifecycle flag of a group. Any value may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GroupStatus {
    #[default]
    #[serde(rename = "Active", alias = "active")]
    Active,
    #[serde(rename = "Inactive", alias = "inactive")]
    Inactive,
}

impl fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupStatus::Active => f.write_str("Active"),
            GroupStatus::Inactive => f.write_str("Inactive"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Plain lecturer record. Two lecturers are the same lecturer when all fields match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecturer {
    pub name: String,
    pub surname: String,
    pub position: Position,
    pub company: String,
    /// Years of experience; fractional values such as 2.5 are allowed.
    pub experience: f64,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub contacts: Contacts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_labels() {
        assert_eq!(Position::AssistantProfessor.to_string(), "Assistant Professor");
        assert_eq!(
            serde_json::to_string(&Position::AssistantProfessor).unwrap(),
            "\"Assistant Professor\""
        );
        let parsed: Position = serde_json::from_str("\"Professor\"").unwrap();
        assert_eq!(parsed, Position::Professor);
    }

    #[test]
    fn test_group_status_defaults_to_active() {
        assert_eq!(GroupStatus::default(), GroupStatus::Active);
        let parsed: GroupStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(parsed, GroupStatus::Inactive);
        assert_eq!(parsed.to_string(), "Inactive");
    }
}
