//! Server setup: configuration, shared state, initialization and seeding.

pub mod config;
pub mod init;
pub mod seed;
pub mod state;

pub use init::create_app;
pub use state::AppState;
