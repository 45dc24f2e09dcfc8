//! Per-country guides and categorized resource articles.

pub mod db;
pub mod handlers;
