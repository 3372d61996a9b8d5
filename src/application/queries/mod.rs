pub mod contact;
pub mod photos;
pub mod todos;
pub mod users;
