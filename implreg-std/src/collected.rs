//! Link-time collection of implementor fragments via `inventory`.
//!
//! Generated code submits one [`SubmittedImplementors`] per fragment; the
//! program gathers them into a single payload with [`collect_submitted`]
//! and publishes that once.

use implreg_core::Implementors;

/// A static implementor fragment submitted to `inventory`.
#[derive(Debug)]
pub struct SubmittedImplementors {
    /// Namespace the entries belong to.
    pub namespace: &'static str,
    /// Description strings, in display order.
    pub entries: &'static [&'static str],
}

impl SubmittedImplementors {
    /// Create a fragment for `inventory::submit!`.
    pub const fn new(namespace: &'static str, entries: &'static [&'static str]) -> Self {
        Self { namespace, entries }
    }
}

inventory::collect!(SubmittedImplementors);

/// Gathers every submitted fragment into one payload.
///
/// Link order is unspecified, so fragments are sorted by namespace and then
/// by their entries before being concatenated.
pub fn collect_submitted() -> Implementors {
    let mut fragments: Vec<&SubmittedImplementors> =
        inventory::iter::<SubmittedImplementors>.into_iter().collect();

    fragments.sort_by_key(|fragment| (fragment.namespace, fragment.entries));

    fragments
        .into_iter()
        .map(|fragment| (fragment.namespace, fragment.entries.iter().copied()))
        .collect()
}
