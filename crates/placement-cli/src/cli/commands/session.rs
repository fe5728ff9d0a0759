//! Session command handlers.

use anyhow::Result;
use placement_core::config::paths;
use placement_core::session;
use placement_core::store::JsonFileStore;

pub fn show() -> Result<()> {
    let store = JsonFileStore::open(paths::store_path());

    let Some(email) = session::student_email(&store) else {
        println!("No student session.");
        return Ok(());
    };
    println!("Student email: {email}");

    if let Some(profile) = session::student_profile(&store) {
        println!("Name: {}", profile.name);
        println!("Major: {}", profile.major);
        println!("Status: {}", profile.status);
    }
    Ok(())
}

pub fn clear() -> Result<()> {
    let mut store = JsonFileStore::open(paths::store_path());
    session::clear(&mut store);
    println!("Session cleared.");
    Ok(())
}
