//! Payload types.

use std::collections::{BTreeMap, btree_map};

/// A marker trait for values that can be published.
///
/// Payloads must be `Send + Sync + 'static` so they can sit in a shared
/// pending slot until a consumer picks them up.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct SearchIndex { entries: Vec<String> }
///
/// impl Payload for SearchIndex {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Payload",
    label = "must be `Send + Sync + 'static`",
    note = "Payloads may be buffered across threads and must be thread-safe and static."
)]
pub trait Payload: Send + Sync + 'static {}

// Common Payload implementations
impl Payload for () {}
impl Payload for String {}
impl Payload for &'static str {}
impl<T: Payload> Payload for Box<T> {}
impl<T: Payload> Payload for std::sync::Arc<T> {}
impl<T: Payload> Payload for Vec<T> {}

/// Implementor descriptions grouped by namespace.
///
/// Each namespace (usually a crate name) maps to an ordered list of opaque
/// description strings. Entry order is insertion order and duplicates are
/// kept; namespaces iterate in sorted order.
///
/// # Example
///
/// ```rust
/// use implreg_core::Implementors;
///
/// let payload = Implementors::new()
///     .with("cursive", ["impl Neg for XY<isize>", "impl Neg for Vec2"]);
///
/// assert_eq!(payload.get("cursive").map(<[String]>::len), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Implementors {
    namespaces: BTreeMap<String, Vec<String>>,
}

impl Implementors {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entries` under `namespace` and returns the payload.
    pub fn with<K, I, V>(mut self, namespace: K, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.extend_namespace(namespace, entries);
        self
    }

    /// Appends a single entry under `namespace`.
    pub fn push(&mut self, namespace: impl Into<String>, entry: impl Into<String>) {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .push(entry.into());
    }

    /// Appends `entries` under `namespace`, creating it if needed.
    ///
    /// An empty `entries` still creates the namespace.
    pub fn extend_namespace<K, I, V>(&mut self, namespace: K, entries: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .extend(entries.into_iter().map(Into::into));
    }

    /// Appends every namespace of `other` onto this payload.
    pub fn merge(&mut self, other: Implementors) {
        for (namespace, entries) in other.namespaces {
            self.namespaces.entry(namespace).or_default().extend(entries);
        }
    }

    /// Entries registered under `namespace`.
    pub fn get(&self, namespace: &str) -> Option<&[String]> {
        self.namespaces.get(namespace).map(Vec::as_slice)
    }

    /// Namespaces in sorted order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Iterates `(namespace, entries)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.namespaces
            .iter()
            .map(|(ns, entries)| (ns.as_str(), entries.as_slice()))
    }

    /// Number of namespaces.
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Total number of entries across all namespaces.
    pub fn entry_count(&self) -> usize {
        self.namespaces.values().map(Vec::len).sum()
    }

    /// Returns `true` when there are no namespaces.
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

impl Payload for Implementors {}

impl<K, I, V> FromIterator<(K, I)> for Implementors
where
    K: Into<String>,
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut payload = Implementors::new();
        for (namespace, entries) in iter {
            payload.extend_namespace(namespace, entries);
        }
        payload
    }
}

impl<K, V, const N: usize, const M: usize> From<[(K, [V; N]); M]> for Implementors
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, [V; N]); M]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for Implementors {
    type Item = (String, Vec<String>);
    type IntoIter = btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.namespaces.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keep_insertion_order_and_duplicates() {
        let mut payload = Implementors::new();
        payload.push("ns", "b");
        payload.push("ns", "a");
        payload.push("ns", "b");

        assert_eq!(payload.get("ns").unwrap(), ["b", "a", "b"]);
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.entry_count(), 3);
    }

    #[test]
    fn test_namespaces_are_sorted() {
        let payload = Implementors::new().with("zeta", ["z"]).with("alpha", ["a"]);
        let namespaces: Vec<_> = payload.namespaces().collect();
        assert_eq!(namespaces, ["alpha", "zeta"]);
    }

    #[test]
    fn test_empty_namespace_is_kept() {
        let payload = Implementors::new().with("ns", Vec::<String>::new());
        assert!(!payload.is_empty());
        assert_eq!(payload.get("ns"), Some(&[][..]));
        assert_eq!(payload.entry_count(), 0);
    }

    #[test]
    fn test_merge_appends_per_namespace() {
        let mut left = Implementors::from([("ns", ["a"])]);
        let right = Implementors::new().with("ns", ["b"]).with("other", ["c"]);
        left.merge(right);

        assert_eq!(left.get("ns").unwrap(), ["a", "b"]);
        assert_eq!(left.get("other").unwrap(), ["c"]);
    }

    #[test]
    fn test_into_iter_sorted_namespaces_ordered_entries() {
        let payload = Implementors::new()
            .with("zeta", ["z2", "z1"])
            .with("alpha", ["a"]);

        let pairs: Vec<(String, Vec<String>)> = payload.into_iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("alpha".to_string(), vec!["a".to_string()]),
                (
                    "zeta".to_string(),
                    vec!["z2".to_string(), "z1".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn test_from_array_matches_builder() {
        let from_array = Implementors::from([("ns", ["a", "b"])]);
        let built = Implementors::new().with("ns", ["a", "b"]);
        assert_eq!(from_array, built);
    }
}
