/// Separates the segments of a path.
pub(crate) const SEPARATOR: char = '/';

/// Marks a segment as a named parameter.
pub(crate) const PARAM_SIGIL: char = ':';

/// A single segment of a registered route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// A literal segment, matched by exact string equality.
    Static(&'a str),
    /// A named parameter, matching any single segment.
    Param(&'a str),
}

impl<'a> Segment<'a> {
    pub(crate) fn parse(segment: &'a str) -> Segment<'a> {
        match segment.strip_prefix(PARAM_SIGIL) {
            Some(name) => Segment::Param(name),
            None => Segment::Static(segment),
        }
    }
}

// Splits a path into its segments, dropping the empty segment produced
// by a leading separator. A trailing separator still yields a trailing
// empty segment.
//
// Both "" and "/" yield no segments at all.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    let rest = path.strip_prefix(SEPARATOR).unwrap_or(path);
    (!rest.is_empty())
        .then(|| rest.split(SEPARATOR))
        .into_iter()
        .flatten()
}
