//! ShortLink entity representing a persisted alias mapping.

/// A stored mapping from an alias to its target URL.
///
/// The `id` is assigned by storage on creation and never reused. Lookups are
/// always keyed by `alias`; the id is informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub alias: String,
    pub target_url: String,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: i64, alias: String, target_url: String) -> Self {
        Self {
            id,
            alias,
            target_url,
        }
    }
}
