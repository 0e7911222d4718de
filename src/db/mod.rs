pub mod employees;
pub mod projects;
pub mod users;
