//! Traversal engine
//!
//! Module map:
//! - [`frontier`]: ordered candidate queue (no dedup on enqueue)
//! - [`bands`]: rating bands and balanced frontier selection
//! - [`traversal`]: the per-mode walk loop
//! - [`coordinator`]: sequential multi-mode runs and the run report

pub mod bands;
pub mod coordinator;
pub mod frontier;
pub mod traversal;

pub use bands::{RatingBand, RatingTracker, NUM_BANDS};
pub use coordinator::{WalkCoordinator, WalkReport};
pub use frontier::Frontier;
pub use traversal::{ModeResult, ModeWalker, TraversalProgress, TraversalStats};
