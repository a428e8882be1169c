pub mod health;
pub mod journals;
pub mod medications;
pub mod moods;
pub mod session;
pub mod todos;
pub mod users;
