// Domain layer: the school hierarchy and its entities. No I/O.

pub mod area;
pub mod group;
pub mod ids;
pub mod level;
pub mod model;
pub mod school;
pub mod student;

pub use area::Area;
pub use group::Group;
pub use ids::{AreaId, GroupId, LevelId, StudentId};
pub use level::Level;
pub use model::{Contacts, GroupStatus, Lecturer, Position};
pub use school::School;
pub use student::Student;
