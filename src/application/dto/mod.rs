pub mod auth;
pub mod contact;
pub mod listing;
pub mod photos;
pub mod todos;
pub mod users;

pub use auth::{Actor, AuthenticatedUser};
pub use contact::ContactMessageDto;
pub use listing::Listing;
pub use photos::PhotoDto;
pub use todos::TodoDto;
pub use users::UserDto;
