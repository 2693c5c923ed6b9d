pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{roster::RosterConfig, OutputFormat};
pub use domain::{
    Area, AreaId, Contacts, Group, GroupId, GroupStatus, Lecturer, Level, LevelId, Position,
    School, Student, StudentId,
};
pub use utils::error::{Result, SchoolError};
