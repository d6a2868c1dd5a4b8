//! Route patterns and path parameter capture.

use std::collections::HashMap;
use std::fmt;

use regex::Regex;

/// Path parameters captured from template segments, keyed by parameter name.
pub type PathParams = HashMap<String, String>;

/// A single segment of a parameterized path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A literal segment that must match exactly.
    Literal(String),
    /// A `:name` segment that captures whatever the path contains there.
    Param(String),
}

/// The pattern of a route entry.
///
/// A closed set of pattern kinds, all evaluated through [`Pattern::matches`]:
///
/// - [`Exact`](Pattern::Exact): the request path must equal the registered
///   path. Used for method-specific registrations.
/// - [`Prefix`](Pattern::Prefix): the request path must start with the
///   registered string. Used for catch-all mounts; deliberately
///   order-sensitive, so an earlier `/` mount shadows a later `/test/1`.
/// - [`Template`](Pattern::Template): segment-wise match where `:name`
///   segments capture their path segment into [`PathParams`]. No type or
///   format validation is applied to captured values.
/// - [`Regex`](Pattern::Regex): the path must satisfy the expression under
///   standard unanchored regex semantics.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Exact string equality against the request path.
    Exact(String),
    /// The request path must start with this string.
    Prefix(String),
    /// Segment template parsed from `/user/:id` syntax.
    Template(Vec<Segment>),
    /// Regular expression matched against the request path.
    Regex(Regex),
}

impl Pattern {
    /// An exact-path pattern.
    pub fn exact(path: impl Into<String>) -> Self {
        Pattern::Exact(path.into())
    }

    /// A prefix (catch-all mount) pattern.
    pub fn prefix(path: impl Into<String>) -> Self {
        Pattern::Prefix(path.into())
    }

    /// A parameterized template pattern, e.g. `/user/:userId/:name`.
    ///
    /// Segments beginning with `:` capture their path segment; all other
    /// segments must match literally.
    pub fn template(template: impl AsRef<str>) -> Self {
        let segments = template
            .as_ref()
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Pattern::Template(segments)
    }

    /// A regex pattern.
    ///
    /// No validation beyond what the regex language itself requires.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Pattern::Regex(Regex::new(pattern)?))
    }

    /// Match this pattern against a request path.
    ///
    /// Returns the captured path parameters on a match (empty for every
    /// pattern kind except templates), or `None` if the path does not match.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        match self {
            Pattern::Exact(expected) => (path == expected).then(PathParams::new),
            Pattern::Prefix(prefix) => path.starts_with(prefix.as_str()).then(PathParams::new),
            Pattern::Template(segments) => {
                let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
                if parts.len() != segments.len() {
                    return None;
                }

                let mut params = PathParams::new();
                for (segment, part) in segments.iter().zip(parts) {
                    match segment {
                        Segment::Literal(lit) => {
                            if lit != part {
                                return None;
                            }
                        }
                        Segment::Param(name) => {
                            params.insert(name.clone(), part.to_string());
                        }
                    }
                }
                Some(params)
            }
            Pattern::Regex(re) => re.is_match(path).then(PathParams::new),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Exact(path) => write!(f, "{path}"),
            Pattern::Prefix(prefix) => write!(f, "{prefix}*"),
            Pattern::Template(segments) => {
                for segment in segments {
                    match segment {
                        Segment::Literal(lit) => write!(f, "/{lit}")?,
                        Segment::Param(name) => write!(f, "/:{name}")?,
                    }
                }
                Ok(())
            }
            Pattern::Regex(re) => write!(f, "~{}", re.as_str()),
        }
    }
}
