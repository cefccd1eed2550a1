use std::fs;
use std::path::Path;

use tracing::debug;

/// Shown in place of the release notes when the resource is missing.
pub const RELEASE_NOTES_FALLBACK: &str = "Release notes are not available.";

/// Reads the release-notes resource.
///
/// A missing or unreadable file is not an error the user can act on,
/// so any failure degrades to a literal fallback message.
pub fn release_notes(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "release notes unavailable, using fallback");
            RELEASE_NOTES_FALLBACK.to_string()
        }
    }
}
