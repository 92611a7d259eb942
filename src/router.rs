use crate::tree::{Match, Node};
use crate::InsertError;

use std::fmt;

/// A path trie mapping routes to values of type `T`.
///
/// See [the crate documentation](crate) for details.
pub struct PathTrie<T> {
    root: Node<T>,
    len: usize,
}

impl<T> Default for PathTrie<T> {
    fn default() -> Self {
        Self {
            root: Node::new(),
            len: 0,
        }
    }
}

impl<T> PathTrie<T> {
    /// Construct a new, empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route into the trie.
    ///
    /// Inserting a route that is already registered replaces its value.
    ///
    /// ```rust
    /// # use pathtrie::PathTrie;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie = PathTrie::new();
    /// trie.insert("/home", "Welcome!")?;
    /// trie.insert("/users/:id", "A User")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// On error, nodes created for the segments before the failing one are
    /// kept, but no value is stored.
    pub fn insert(&mut self, route: impl Into<String>, value: T) -> Result<(), InsertError> {
        let route = route.into();

        match self.root.insert(&route, value) {
            Ok(None) => {
                self.len += 1;
                tracing::debug!(route = %route, "route inserted");
                Ok(())
            }
            Ok(Some(_)) => {
                tracing::debug!(route = %route, "route value replaced");
                Ok(())
            }
            Err(err) => {
                tracing::debug!(route = %route, error = %err, "route rejected");
                Err(err)
            }
        }
    }

    /// Tries to match a path against the registered routes.
    ///
    /// A path that matches no route yields a [`Match`] without a value and
    /// without parameters.
    ///
    /// ```rust
    /// # use pathtrie::PathTrie;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie = PathTrie::new();
    /// trie.insert("/home", "Welcome!")?;
    ///
    /// let matched = trie.search("/home");
    /// assert_eq!(matched.value, Some(&"Welcome!"));
    ///
    /// assert!(trie.search("/away").value.is_none());
    /// # Ok(())
    /// # }
    /// ```
    pub fn search<'p>(&self, path: &'p str) -> Match<'_, 'p, T> {
        let matched = self.root.search(path);
        tracing::trace!(
            path,
            matched = matched.is_match(),
            params = matched.params.len(),
            "path searched"
        );
        matched
    }

    /// Returns the number of routes holding a value.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no route has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns every registered route.
    ///
    /// At each level, static segments come first in lexical order, followed
    /// by the parameter segment.
    ///
    /// ```rust
    /// # use pathtrie::PathTrie;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie = PathTrie::new();
    /// trie.insert("/users/:id", 2)?;
    /// trie.insert("/users", 1)?;
    ///
    /// assert_eq!(trie.routes(), ["/users", "/users/:id"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn routes(&self) -> Vec<String> {
        self.root.routes()
    }

    /// Merge a given trie into the current one.
    ///
    /// Routes of `other` replace the values of identical routes in `self`.
    /// Merging stops at the first route that fails to insert; the routes
    /// merged before it are kept.
    ///
    /// ```rust
    /// # use pathtrie::PathTrie;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut root = PathTrie::new();
    /// root.insert("/home", "Welcome!")?;
    ///
    /// let mut child = PathTrie::new();
    /// child.insert("/users/:id", "A User")?;
    ///
    /// root.merge(child)?;
    /// assert!(root.search("/users/1").is_match());
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge(&mut self, other: Self) -> Result<(), InsertError> {
        for (route, value) in other.root.into_routes() {
            self.insert(route, value)?;
        }

        Ok(())
    }
}

impl<T> fmt::Debug for PathTrie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathTrie")
            .field("routes", &self.routes())
            .finish()
    }
}
