use crate::config::CsfConfig;
use crate::stats::CloudStats;
use cumulus::geometry::primitives::Rect;
use serde::{Deserialize, Serialize};

/// Full record of a generated cloud, written as JSON next to the SVG
#[derive(Serialize, Deserialize, Clone)]
pub struct CloudOutput {
    pub config: CsfConfig,
    /// Placed rectangles, in placement order
    pub rectangles: Vec<Rect>,
    pub stats: CloudStats,
}
