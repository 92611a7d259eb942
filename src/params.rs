use std::collections::HashMap;
use std::{fmt, slice};

/// A list of parameters returned by a route match.
///
/// Keys borrow from the trie, values borrow from the searched path.
///
/// ```rust
/// # use pathtrie::PathTrie;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut trie = PathTrie::new();
/// trie.insert("/users/:id", true)?;
///
/// let matched = trie.search("/users/1");
///
/// // Iterate through the keys and values.
/// for (key, value) in matched.params.iter() {
///     println!("key: {}, value: {}", key, value);
/// }
///
/// // Get a specific value by name.
/// assert_eq!(matched.params.get("id"), Some("1"));
/// # Ok(())
/// # }
/// ```
#[derive(PartialEq, Eq, Clone, Default)]
pub struct Params<'k, 'v> {
    // Ordered by position in the path. Names along a single trie branch
    // are unique, so a key never appears twice.
    inner: Vec<(&'k str, &'v str)>,
}

impl<'k, 'v> Params<'k, 'v> {
    pub(crate) fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no parameters in the list.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the value bound to the given parameter name.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'v str> {
        let key = key.as_ref();
        self.inner
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, value)| value)
    }

    /// Returns an iterator over the parameters, in path order.
    pub fn iter(&self) -> ParamsIter<'_, 'k, 'v> {
        ParamsIter {
            inner: self.inner.iter(),
        }
    }

    /// Copies the parameters into an owned map.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    pub(crate) fn push(&mut self, key: &'k str, value: &'v str) {
        self.inner.push((key, value));
    }

    pub(crate) fn clear(&mut self) {
        self.inner.clear();
    }
}

impl fmt::Debug for Params<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl From<Params<'_, '_>> for HashMap<String, String> {
    fn from(params: Params<'_, '_>) -> Self {
        params.to_map()
    }
}

impl<'ps, 'k, 'v> IntoIterator for &'ps Params<'k, 'v> {
    type Item = (&'k str, &'v str);
    type IntoIter = ParamsIter<'ps, 'k, 'v>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the keys and values of a route's [parameters](crate::Params).
pub struct ParamsIter<'ps, 'k, 'v> {
    inner: slice::Iter<'ps, (&'k str, &'v str)>,
}

impl<'k, 'v> Iterator for ParamsIter<'_, 'k, 'v> {
    type Item = (&'k str, &'v str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ParamsIter<'_, '_, '_> {}
