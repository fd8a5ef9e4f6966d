//! Export options and configuration.

/// Options controlling sidebar parsing and container selection.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Include spaces explicitly marked unpinned
    pub include_unpinned: bool,

    /// Export every container instead of the default profile container
    pub all_containers: bool,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include spaces explicitly marked `isPinned: false`.
    ///
    /// Spaces whose pin status cannot be determined are always included.
    pub fn include_unpinned(mut self, include: bool) -> Self {
        self.include_unpinned = include;
        self
    }

    /// Export every container in the document, each wrapped in its own
    /// top-level folder, instead of picking the default profile container.
    pub fn all_containers(mut self, all: bool) -> Self {
        self.all_containers = all;
        self
    }
}
