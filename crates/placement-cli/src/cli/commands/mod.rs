//! CLI command handlers.

use anyhow::Result;
use placement_console::ConsoleRuntime;
use placement_core::config::{Config, paths};
use placement_core::nav::SystemNavigator;
use placement_core::store::JsonFileStore;

pub mod config;
pub mod login;
pub mod predict;
pub mod register;
pub mod session;

/// Runtime wired to the real capabilities: file-backed storage and the
/// system browser.
pub type FlowRuntime = ConsoleRuntime<JsonFileStore, SystemNavigator>;

/// Builds the runtime a flow command drives.
pub fn build_runtime(config: Config) -> Result<FlowRuntime> {
    let store = JsonFileStore::open(paths::store_path());
    let navigator = SystemNavigator::with_origin(config.effective_base_url()?);
    ConsoleRuntime::new(config, store, navigator)
}

/// Prints what a flow produced: notices, navigations, and the prediction
/// panel when it has left the idle state.
pub fn print_outcome(runtime: &FlowRuntime) {
    for notice in &runtime.state.notices {
        println!("{}", notice.text);
    }
    for destination in &runtime.navigator.destinations {
        println!("Opening {destination}");
    }
    for line in runtime.state.prediction.lines() {
        println!("{line}");
    }
}
