//! Core placement portal library (config, portal client, capabilities).

pub mod config;
pub mod error;
pub mod nav;
pub mod portal;
pub mod session;
pub mod store;
