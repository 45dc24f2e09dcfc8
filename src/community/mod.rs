//! Community forum: posts, comments and public like counters.

pub mod db;
pub mod handlers;
