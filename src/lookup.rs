//! Case-insensitive key lookup.

/// Find the first key equal to `key` ignoring ASCII case.
///
/// Returns the stored key so callers can index their map with it.
pub fn find_key_ignore_case<'a, K, I>(key: &str, keys: I) -> Option<&'a K>
where
    K: AsRef<str> + ?Sized + 'a,
    I: IntoIterator<Item = &'a K>,
{
    keys.into_iter()
        .find(|k| k.as_ref().eq_ignore_ascii_case(key))
}
