//! A segment-based path trie.
//!
//! ```rust
//! use pathtrie::PathTrie;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut trie = PathTrie::new();
//! trie.insert("/home", "Welcome!")?;
//! trie.insert("/users/:id", "A User")?;
//!
//! let matched = trie.search("/users/978");
//! assert_eq!(matched.params.get("id"), Some("978"));
//! assert_eq!(matched.value, Some(&"A User"));
//! # Ok(())
//! # }
//! ```
//!
//! # Parameters
//!
//! Paths are split on `/` into segments. Along with static segments, a
//! route may contain named parameters, written as a segment starting with
//! `:`. A parameter matches exactly one segment of the searched path.
//!
//! ```rust
//! # use pathtrie::PathTrie;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut t = PathTrie::new();
//! t.insert("/users/:id", true)?;
//!
//! assert!(t.search("/users/1").is_match());
//! assert!(t.search("/users/23").is_match());
//! assert!(!t.search("/users").is_match());
//! assert!(!t.search("/users/1/posts").is_match());
//! # Ok(())
//! # }
//! ```
//!
//! The parameter name at any given position is fixed by the first route
//! registered there, and a route may not use the same name twice:
//!
//! ```rust
//! # use pathtrie::{InsertError, PathTrie};
//! let mut t = PathTrie::new();
//! t.insert("/users/:id", true).unwrap();
//!
//! assert!(matches!(
//!     t.insert("/users/:name", true),
//!     Err(InsertError::ConflictingParam { .. })
//! ));
//! assert!(matches!(
//!     t.insert("/a/:x/:x", true),
//!     Err(InsertError::DuplicateParam { .. })
//! ));
//! ```
//!
//! # Routing Priority
//!
//! Static segments take priority over the parameter at the same position:
//!
//! ```rust
//! # use pathtrie::PathTrie;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut t = PathTrie::new();
//! t.insert("/users/admin", "admin")?;
//! t.insert("/users/:id", "user")?;
//!
//! assert_eq!(t.search("/users/admin").value, Some(&"admin"));
//! assert_eq!(t.search("/users/1").value, Some(&"user"));
//! # Ok(())
//! # }
//! ```
//!
//! The choice is made one segment at a time and never revisited. With
//! `/a/b/c` and `/a/:x/d` registered, `/a/b/d` follows the static `b`
//! branch and misses, even though `/a/:x/d` would have matched.
//!
//! Paths are expected to start with `/`; `""` and `"/"` both address the
//! root. A trailing `/` produces a trailing empty segment, so `/users/` and
//! `/users` are distinct routes.
#![deny(rust_2018_idioms, clippy::all)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod params;
mod path;
mod router;
mod tree;

pub use error::InsertError;
pub use params::{Params, ParamsIter};
pub use router::PathTrie;
pub use tree::Match;
