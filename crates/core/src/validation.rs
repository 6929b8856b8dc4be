//! Pure validation rules shared by the HTTP layer and tests.

use crate::error::CoreError;

/// Cohort years a team member can belong to. The store enforces the same
/// set with a CHECK constraint; this is the canonical list.
pub const TEAM_BATCHES: &[&str] = &["2022-2026", "2023-2027", "2024-2028"];

/// Validate that `batch` is one of the allowed cohort values.
pub fn validate_batch(batch: &str) -> Result<(), CoreError> {
    if !TEAM_BATCHES.contains(&batch) {
        return Err(CoreError::Validation(format!(
            "Invalid batch '{}'. Must be one of: {}",
            batch,
            TEAM_BATCHES.join(", ")
        )));
    }
    Ok(())
}

/// Split a comma-separated tag string into its parts.
///
/// Intentionally does not trim whitespace or deduplicate; the admin form
/// submits the string exactly as typed and the list round-trips as-is.
pub fn split_tags(input: &str) -> Vec<String> {
    input.split(',').map(str::to_string).collect()
}
