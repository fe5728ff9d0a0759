//! Session markers persisted in the key-value store.
//!
//! A successful student sign-in or account creation leaves an email marker
//! behind; local account creation additionally writes a starter profile.
//! Recruiter logins leave no marker.

use serde::{Deserialize, Serialize};

use crate::store::{KeyValueStore, STUDENT_EMAIL_KEY, STUDENT_PROFILE_KEY};

/// Profile written for locally created student accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub email: String,
    #[serde(default = "default_major")]
    pub major: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_major() -> String {
    "Not specified".to_string()
}

fn default_status() -> String {
    "New User".to_string()
}

impl StudentProfile {
    /// Profile for a freshly created account. Major and status start at
    /// placeholder values until the student fills them in elsewhere.
    pub fn new_user(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            major: default_major(),
            status: default_status(),
        }
    }
}

/// Records the signed-in student's email marker.
pub fn save_student_email(store: &mut dyn KeyValueStore, email: &str) {
    store.set(STUDENT_EMAIL_KEY, email);
}

/// Returns the signed-in student's email marker, if present.
pub fn student_email(store: &dyn KeyValueStore) -> Option<String> {
    store.get(STUDENT_EMAIL_KEY)
}

/// Records a created account's profile. The email marker is saved
/// separately.
pub fn save_student_profile(store: &mut dyn KeyValueStore, profile: &StudentProfile) {
    match serde_json::to_string(profile) {
        Ok(json) => store.set(STUDENT_PROFILE_KEY, &json),
        Err(e) => tracing::warn!(error = %e, "failed to serialize student profile"),
    }
}

/// Returns the stored student profile, if present and readable.
pub fn student_profile(store: &dyn KeyValueStore) -> Option<StudentProfile> {
    let json = store.get(STUDENT_PROFILE_KEY)?;
    match serde_json::from_str(&json) {
        Ok(profile) => Some(profile),
        Err(e) => {
            tracing::warn!(error = %e, "stored student profile unreadable");
            None
        }
    }
}

/// Removes all session markers.
pub fn clear(store: &mut dyn KeyValueStore) {
    store.remove(STUDENT_EMAIL_KEY);
    store.remove(STUDENT_PROFILE_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    /// New-user profiles carry the placeholder major and status.
    #[test]
    fn test_new_user_profile_defaults() {
        let profile = StudentProfile::new_user("Ana", "ana@example.com");
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.email, "ana@example.com");
        assert_eq!(profile.major, "Not specified");
        assert_eq!(profile.status, "New User");
    }

    /// Email marker write and read round-trip through the store.
    #[test]
    fn test_student_email_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(student_email(&store), None);

        save_student_email(&mut store, "a@b.com");
        assert_eq!(student_email(&store), Some("a@b.com".to_string()));
    }

    /// Profiles serialize to JSON and back without loss.
    #[test]
    fn test_student_profile_round_trip() {
        let mut store = MemoryStore::new();
        let profile = StudentProfile::new_user("Ana", "ana@example.com");

        save_student_profile(&mut store, &profile);
        assert_eq!(student_profile(&store), Some(profile));
    }

    /// Profiles stored without major or status pick up the placeholders.
    #[test]
    fn test_partial_profile_fills_defaults() {
        let mut store = MemoryStore::new();
        store.set(
            STUDENT_PROFILE_KEY,
            "{\"name\":\"Ana\",\"email\":\"ana@example.com\"}",
        );

        let profile = student_profile(&store).unwrap();
        assert_eq!(profile.major, "Not specified");
        assert_eq!(profile.status, "New User");
    }

    /// A corrupt stored profile reads as absent rather than erroring.
    #[test]
    fn test_corrupt_profile_reads_as_none() {
        let mut store = MemoryStore::new();
        store.set(STUDENT_PROFILE_KEY, "not json");
        assert_eq!(student_profile(&store), None);
    }

    /// Clearing the session removes both markers.
    #[test]
    fn test_clear_removes_all_markers() {
        let mut store = MemoryStore::new();
        save_student_email(&mut store, "a@b.com");
        save_student_profile(&mut store, &StudentProfile::new_user("Ana", "a@b.com"));

        clear(&mut store);
        assert_eq!(student_email(&store), None);
        assert_eq!(store.get(STUDENT_PROFILE_KEY), None);
    }
}
