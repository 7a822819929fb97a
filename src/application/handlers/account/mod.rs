//! Account command handlers: signup, login, change password.

mod change_password;
mod log_in;
mod sign_up;

pub use change_password::{ChangePasswordCommand, ChangePasswordHandler};
pub use log_in::{LogInCommand, LogInHandler, LogInResult};
pub use sign_up::{SignUpCommand, SignUpHandler};
