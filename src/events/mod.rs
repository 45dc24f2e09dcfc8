//! Community events and the public attend counter.

pub mod db;
pub mod handlers;
