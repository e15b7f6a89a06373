//! GUID creation.

use uuid::Uuid;

/// Returns a fresh hyphenated lowercase GUID string,
/// e.g. `9a9681bb-4dfa-6750-5ae4-9530209d8a9d`.
pub fn new_guid() -> String {
    Uuid::new_v4().to_string()
}
