//! Authentication and user management.
//!
//! - **`users`** - user rows and their queries
//! - **`sessions`** - server-side session store and the session cookie
//! - **`handlers`** - register / login / logout / current-user endpoints
//!
//! Sessions are opaque UUIDs persisted in PostgreSQL and carried in a
//! signed HTTP-only cookie, so they survive server restarts and are never
//! readable by client script.

pub mod handlers;
pub mod sessions;
pub mod users;

pub use handlers::{current_user, login, logout, register};
