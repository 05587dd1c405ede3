use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Rect};
use itertools::Itertools;

//Various checks to verify the invariants of a growing cluster
//Used in debug_assert!() blocks and tests

pub fn rects_are_pairwise_disjoint(rects: &[Rect]) -> bool {
    rects
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.collides_with(b))
}

pub fn cloud_contains_anchor(rects: &[Rect], anchor: Point) -> bool {
    match rects.iter().copied().reduce(Rect::bounding_rect) {
        Some(bbox) => bbox.collides_with(&anchor),
        None => false,
    }
}
