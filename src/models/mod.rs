pub mod employee;
pub mod project;
pub mod user;

pub use employee::Employee;
pub use project::{Project, ProjectExpanded};
pub use user::User;
