//! Uploader credit derived from a sidecar.

use ytmeta_common::PersonType;

use super::item::{PersonCredit, ProviderIds};
use super::sidecar::SidecarDescriptor;

/// Prefix for the namespaced provider-id aliases.
const YTDL_KEY: &str = "ytdl";

/// Build the uploader credit for a sidecar.
///
/// The display name prefers `uploader`, then `uploader_id`; the identity
/// prefers `channel_id`, then `uploader_id`, then `uploader`. The identity is
/// recorded under three keys so host links resolve whichever form they use:
/// `{canonical}`, `ytdl:{canonical}` and `ytdl` (as `canonical:identity`).
///
/// Returns `None` when the sidecar carries no uploader information at all.
pub fn derive_uploader(
    descriptor: &SidecarDescriptor,
    canonical_key: &str,
) -> Option<PersonCredit> {
    let identity = descriptor
        .channel_id
        .as_ref()
        .or(descriptor.uploader_id.as_ref())
        .or(descriptor.uploader.as_ref())?;

    // Only a channel id: use it for display as well.
    let name = descriptor
        .uploader
        .as_ref()
        .or(descriptor.uploader_id.as_ref())
        .unwrap_or(identity);

    let provider_ids = ProviderIds::from([
        (canonical_key.to_string(), identity.clone()),
        (format!("{YTDL_KEY}:{canonical_key}"), identity.clone()),
        (YTDL_KEY.to_string(), format!("{canonical_key}:{identity}")),
    ]);

    Some(PersonCredit {
        name: name.clone(),
        person_type: PersonType::Director,
        provider_ids,
    })
}
