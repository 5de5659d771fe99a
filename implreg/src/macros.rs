/// Builds an [`Implementors`](crate::Implementors) payload.
///
/// Entries keep their written order; duplicates are kept.
///
/// # Example
///
/// ```rust
/// use implreg::implementors;
///
/// let payload = implementors! {
///     "cursive" => ["impl Neg for XY<isize>", "impl Neg for Vec2"],
///     "empty" => [],
/// };
///
/// assert_eq!(payload.len(), 2);
/// assert_eq!(payload.entry_count(), 2);
/// assert!(implementors!().is_empty());
/// ```
#[macro_export]
macro_rules! implementors {
    () => {
        $crate::Implementors::new()
    };
    ($($namespace:expr => [$($entry:expr),* $(,)?]),+ $(,)?) => {{
        let mut payload = $crate::Implementors::new();
        $(
            let entries: ::std::vec::Vec<::std::string::String> =
                ::std::vec![$(::std::convert::Into::into($entry)),*];
            payload.extend_namespace($namespace, entries);
        )+
        payload
    }};
}

/// Submits a static implementor fragment for [`collect_submitted`].
///
/// [`collect_submitted`]: crate::collected::collect_submitted
///
/// # Example
///
/// ```rust,ignore
/// implreg::submit_implementors!("cursive" => ["impl Neg for Vec2"]);
///
/// let payload = implreg::collected::collect_submitted();
/// implreg::global::publish(payload)?;
/// ```
#[cfg(feature = "inventory")]
#[macro_export]
macro_rules! submit_implementors {
    ($namespace:expr => [$($entry:expr),* $(,)?]) => {
        $crate::inventory::submit! {
            $crate::collected::SubmittedImplementors::new($namespace, &[$($entry),*])
        }
    };
}
