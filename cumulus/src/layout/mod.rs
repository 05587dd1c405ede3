mod layouter;
mod spiral;

#[doc(inline)]
pub use layouter::CloudLayouter;
#[doc(inline)]
pub use layouter::PlacementError;
#[doc(inline)]
pub use spiral::SpiralGenerator;
