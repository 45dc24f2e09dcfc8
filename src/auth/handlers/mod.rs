//! Auth endpoint handlers: register, login, logout, current user.

pub mod login;
pub mod logout;
pub mod me;
pub mod register;
pub mod types;

pub use login::login;
pub use logout::logout;
pub use me::current_user;
pub use register::register;
pub use types::{LoginRequest, RegisterRequest, UserResponse};
