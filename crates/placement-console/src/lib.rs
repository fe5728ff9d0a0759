//! Login console state machine and runtime for the placement portal.

pub mod common;
pub mod effects;
pub mod events;
pub mod forms;
pub mod runtime;
pub mod state;
pub mod update;

pub use runtime::ConsoleRuntime;
