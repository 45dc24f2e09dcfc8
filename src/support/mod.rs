//! Emergency contacts and the public contact form.

pub mod db;
pub mod handlers;
