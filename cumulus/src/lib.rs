//! `cumulus` packs axis-aligned rectangles of caller-chosen sizes into a
//! single dense, non-overlapping cluster around a fixed anchor point,
//! one rectangle at a time. The resulting arrangement is roughly circular
//! and centered on the anchor, suitable for rendering tag clouds.
//!
//! Placement is fully deterministic: replaying the same anchor and size
//! sequence on a fresh [`layout::CloudLayouter`] reproduces the exact same
//! positions.

/// Geometric primitives and base algorithms
pub mod geometry;

/// The placement engine and its spiral candidate generator
pub mod layout;

/// Helper functions which do not belong to any specific module
pub mod util;
