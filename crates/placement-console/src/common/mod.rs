//! Shared leaf types for the console.
//!
//! This module must NOT import UiEvent or console state to avoid circular
//! dependencies.

pub mod task;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, Tasks};
