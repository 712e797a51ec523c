use manidiff_core::Side;
use manidiff_core_types::BuildId;

/// Per-stream counts gathered during a build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Documents that were indexed
    pub indexed: usize,
    /// Empty documents skipped while decoding
    pub empty_ignored: usize,
    /// Documents dropped for failing validation
    pub invalid_dropped: usize,
}

/// Summary of one successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub build_id: BuildId,
    pub left: StreamStats,
    pub right: StreamStats,
    pub leaves: usize,
}

impl BuildReport {
    pub fn stats(&self, side: Side) -> &StreamStats {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}
