//! Hierarchical point addresses.

/// A hierarchical address identifying one addressable point.
///
/// Paths are built top-down by the gateway: a device root (node id), then a
/// folder per command class, then point names underneath. Command-class code
/// receives the class-level path and derives point paths from it with
/// [`PointPath::point`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointPath {
    segments: Vec<String>,
}

impl PointPath {
    /// Create a path from its segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PointPath {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The root path (no segments).
    pub fn root() -> Self {
        PointPath { segments: Vec::new() }
    }

    /// A child path with one more segment.
    pub fn point(&self, name: &str) -> PointPath {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        PointPath { segments }
    }

    /// Look up a segment by index from the start of the path.
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// The last segment, usually the point name.
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl std::fmt::Display for PointPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}
