//! Slug redirector server library

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod slug;
pub mod store;

pub mod test_helpers;
