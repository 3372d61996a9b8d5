mod change_password;
mod login;
mod password;
mod register;
mod service;
mod update;

pub use change_password::ChangePasswordCommand;
pub use login::LoginCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
pub use update::UpdateUserCommand;
