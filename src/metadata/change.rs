//! Staleness check for previously imported items.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::sidecar::sidecar_path;

/// Whether the item's sidecar was modified after `date_last_saved`.
///
/// A missing sidecar, or one whose modification time cannot be read, is
/// reported as unchanged so the host never loops on refreshes.
pub fn has_changed(item_path: &Path, date_last_saved: DateTime<Utc>) -> bool {
    let Some(path) = sidecar_path(item_path) else {
        return false;
    };

    let modified = match std::fs::metadata(&path).and_then(|m| m.modified()) {
        Ok(modified) => DateTime::<Utc>::from(modified),
        Err(_) => return false,
    };

    let changed = modified > date_last_saved;
    debug!(
        path = %path.display(),
        modified = %modified,
        last_saved = %date_last_saved,
        changed,
        "Checked sidecar modification time"
    );
    changed
}
