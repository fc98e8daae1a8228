//! Link templates for the external ids this provider writes.

use ytmeta_common::ItemKind;

/// An external id the host can render as a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalId {
    /// Display name.
    pub provider_name: &'static str,
    /// Canonical provider key, as stored in provider ids.
    pub key: &'static str,
    /// URL with `{id}` where the external id goes.
    pub url_template: &'static str,
}

impl ExternalId {
    /// Render the link for `id`.
    pub fn url(&self, id: &str) -> String {
        self.url_template.replace("{id}", id)
    }

    /// Item kinds the id is shown for.
    pub fn supports(&self, kind: ItemKind) -> bool {
        kind.supports_sidecar_metadata()
    }
}

pub const EXTERNAL_IDS: &[ExternalId] = &[
    ExternalId {
        provider_name: "YouTube",
        key: "Youtube",
        url_template: "https://www.youtube.com/watch?v={id}",
    },
    ExternalId {
        provider_name: "NRK",
        key: "NRK",
        url_template: "https://tv.nrk.no/program/{id}",
    },
];

/// Look up the external id registered for a canonical key.
pub fn external_id(key: &str) -> Option<&'static ExternalId> {
    EXTERNAL_IDS.iter().find(|e| e.key == key)
}
