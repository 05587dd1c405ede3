use cumulus::geometry::geo_traits::DistanceTo;
use cumulus::layout::CloudLayouter;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Aggregate measurements of a finished cloud
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct CloudStats {
    pub n_placed: usize,
    /// Total number of spiral candidates probed over the session
    pub n_probes: usize,
    /// Fraction of the bounding box covered by rectangles
    pub density: f64,
    /// Bounding box width divided by height
    pub aspect_ratio: f64,
    /// Distance from the bounding-box center to the anchor, relative to the
    /// largest bounding-box dimension
    pub center_offset_ratio: f64,
    /// Largest distance from the anchor to the center of any rectangle
    pub radius: f64,
}

impl CloudStats {
    /// Returns `None` for a session without any placed rectangles.
    pub fn measure(layouter: &CloudLayouter) -> Option<Self> {
        let bbox = layouter.bounding_rect()?;
        let density = layouter.density()?;
        let anchor = layouter.anchor();

        let center_offset = bbox.center().distance_to(&anchor);
        let max_dimension = i32::max(bbox.width(), bbox.height()) as f64;
        let radius = layouter
            .placed()
            .iter()
            .map(|rect| rect.center().distance_to(&anchor))
            .max_by_key(|&d| OrderedFloat(d))?;

        Some(Self {
            n_placed: layouter.placed().len(),
            n_probes: layouter.probe_counter(),
            density,
            aspect_ratio: bbox.width() as f64 / bbox.height() as f64,
            center_offset_ratio: center_offset / max_dimension,
            radius,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cumulus::geometry::primitives::{Point, Size};
    use cumulus::util::LayoutConfig;
    use float_cmp::approx_eq;

    #[test]
    fn empty_session_has_no_stats() {
        let layouter = CloudLayouter::new(Point(0, 0), LayoutConfig::default());
        assert!(CloudStats::measure(&layouter).is_none());
    }

    #[test]
    fn single_rectangle_stats_are_exact() {
        let mut layouter = CloudLayouter::new(Point(7, -3), LayoutConfig::default());
        layouter.place_next(Size::new(30, 20)).unwrap();

        let stats = CloudStats::measure(&layouter).unwrap();
        assert_eq!(stats.n_placed, 1);
        assert_eq!(stats.n_probes, 0);
        assert!(approx_eq!(f64, stats.density, 1.0));
        assert!(approx_eq!(f64, stats.aspect_ratio, 1.5));
        assert!(approx_eq!(f64, stats.center_offset_ratio, 0.0));
        assert!(approx_eq!(f64, stats.radius, 0.0));
    }
}
