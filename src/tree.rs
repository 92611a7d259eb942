use crate::path::{self, Segment};
use crate::{InsertError, Params};

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// A node in the segment trie.
///
/// Every node owns its children outright: literal segments map to static
/// children, and at most one parameter child matches any other segment at
/// this position.
#[derive(Debug)]
pub(crate) struct Node<T> {
    static_children: HashMap<String, Node<T>>,
    param_child: Option<Box<ParamChild<T>>>,
    value: Option<T>,
}

// The parameter child of a node, along with the name it binds.
//
// The name is fixed by the first route that creates the child.
#[derive(Debug)]
struct ParamChild<T> {
    name: String,
    node: Node<T>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Node {
            static_children: HashMap::new(),
            param_child: None,
            value: None,
        }
    }
}

impl<T> Node<T> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Inserts a route, returning the value previously stored at the exact
    /// same route, if any.
    pub(crate) fn insert(&mut self, route: &str, value: T) -> Result<Option<T>, InsertError> {
        let mut current = self;
        let mut seen = HashSet::new();

        for segment in path::segments(route) {
            current = match Segment::parse(segment) {
                Segment::Param(name) => {
                    if !seen.insert(name) {
                        return Err(InsertError::duplicate(name));
                    }

                    let child = current.param_child.get_or_insert_with(|| {
                        Box::new(ParamChild {
                            name: name.to_owned(),
                            node: Node::new(),
                        })
                    });

                    if child.name != name {
                        return Err(InsertError::conflict(route, &child.name, name));
                    }

                    &mut child.node
                }
                Segment::Static(literal) => current
                    .static_children
                    .entry(literal.to_owned())
                    .or_default(),
            };
        }

        Ok(current.value.replace(value))
    }

    /// Walks the trie along `path`, preferring static children over the
    /// parameter child at every level.
    ///
    /// A choice made at one level is never revisited: if the static branch
    /// dead-ends further down, the search misses even when the parameter
    /// branch would have matched.
    pub(crate) fn search<'k, 'v>(&'k self, path: &'v str) -> Match<'k, 'v, T> {
        let mut current = self;
        let mut params = Params::new();

        for segment in path::segments(path) {
            if let Some(child) = current.static_children.get(segment) {
                current = child;
                continue;
            }

            match &current.param_child {
                Some(param) => {
                    params.push(&param.name, segment);
                    current = &param.node;
                }
                None => {
                    params.clear();
                    return Match {
                        value: None,
                        params,
                    };
                }
            }
        }

        Match {
            value: current.value.as_ref(),
            params,
        }
    }

    /// Returns every registered route, rendered as `/`-joined segments.
    pub(crate) fn routes(&self) -> Vec<String> {
        let mut routes = Vec::new();
        self.collect_routes(&mut Vec::new(), &mut routes);
        routes
    }

    fn collect_routes<'a>(&'a self, prefix: &mut Vec<Cow<'a, str>>, routes: &mut Vec<String>) {
        if self.value.is_some() {
            routes.push(render(prefix.as_slice()));
        }

        let mut children = self.static_children.iter().collect::<Vec<_>>();
        children.sort_unstable_by(|a, b| a.0.cmp(b.0));

        for (segment, child) in children {
            prefix.push(Cow::Borrowed(segment.as_str()));
            child.collect_routes(prefix, routes);
            prefix.pop();
        }

        if let Some(param) = &self.param_child {
            prefix.push(Cow::Owned(format!("{}{}", path::PARAM_SIGIL, param.name)));
            param.node.collect_routes(prefix, routes);
            prefix.pop();
        }
    }

    /// Consumes the trie, returning every route along with its value, in
    /// the same order as [`Node::routes`].
    pub(crate) fn into_routes(self) -> Vec<(String, T)> {
        let mut routes = Vec::new();
        self.drain_routes(&mut Vec::new(), &mut routes);
        routes
    }

    fn drain_routes(self, prefix: &mut Vec<String>, routes: &mut Vec<(String, T)>) {
        let Node {
            static_children,
            param_child,
            value,
        } = self;

        if let Some(value) = value {
            routes.push((render(prefix.as_slice()), value));
        }

        let mut children = static_children.into_iter().collect::<Vec<_>>();
        children.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        for (segment, child) in children {
            prefix.push(segment);
            child.drain_routes(prefix, routes);
            prefix.pop();
        }

        if let Some(param) = param_child {
            let ParamChild { name, node } = *param;
            prefix.push(format!("{}{}", path::PARAM_SIGIL, name));
            node.drain_routes(prefix, routes);
            prefix.pop();
        }
    }
}

fn render<S: AsRef<str>>(segments: &[S]) -> String {
    let mut route = String::new();
    if segments.is_empty() {
        route.push(path::SEPARATOR);
    }

    for segment in segments {
        route.push(path::SEPARATOR);
        route.push_str(segment.as_ref());
    }

    route
}

/// The result of a search, consisting of the registered value
/// and URL parameters, returned by [`PathTrie::search`](crate::PathTrie::search).
#[derive(Debug)]
pub struct Match<'k, 'v, T> {
    /// The value stored under the matched node, if any.
    pub value: Option<&'k T>,

    /// The route parameters. See [parameters](crate::Params) for more details.
    pub params: Params<'k, 'v>,
}

impl<T> Match<'_, '_, T> {
    /// Returns `true` if a value is stored at the searched path.
    pub fn is_match(&self) -> bool {
        self.value.is_some()
    }
}
