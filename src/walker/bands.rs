//! Rating bands and balanced frontier selection
//!
//! Processed users are counted in six half-open 400-point bands covering
//! ratings 0 to 2400. Selection tries bands from least processed to most
//! processed (ties go to the lower band) and takes the first frontier entry
//! whose rating falls in the band; when nothing on the frontier is in any
//! band, the last entry is taken instead. Ratings outside the bands are
//! processed and budgeted like any other, they just are not counted here.

use std::fmt;

use crate::client::UserRating;
use crate::walker::frontier::Frontier;

/// Width of one rating band
pub const BAND_WIDTH: i32 = 400;

/// Number of tracked bands; together they cover ratings `[0, 2400)`
pub const NUM_BANDS: usize = 6;

/// One half-open rating band `[lower, upper)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RatingBand(usize);

impl RatingBand {
    /// Band containing `rating`, or `None` when the rating is out of range
    pub fn of(rating: i32) -> Option<RatingBand> {
        if rating < 0 {
            return None;
        }
        let index = (rating / BAND_WIDTH) as usize;
        (index < NUM_BANDS).then_some(RatingBand(index))
    }

    /// Zero-based band index, lowest ratings first
    pub fn index(&self) -> usize {
        self.0
    }

    /// Inclusive lower bound
    pub fn lower(&self) -> i32 {
        self.0 as i32 * BAND_WIDTH
    }

    /// Exclusive upper bound
    pub fn upper(&self) -> i32 {
        self.lower() + BAND_WIDTH
    }

    /// Whether `rating` falls inside this band
    pub fn contains(&self, rating: i32) -> bool {
        rating >= self.lower() && rating < self.upper()
    }

    /// All bands in ascending order
    pub fn all() -> impl Iterator<Item = RatingBand> {
        (0..NUM_BANDS).map(RatingBand)
    }
}

impl fmt::Display for RatingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lower(), self.upper())
    }
}

/// Per-mode processed-user counts, one per rating band
///
/// Every traversal owns its own tracker; counts never carry across modes.
#[derive(Debug, Clone, Default)]
pub struct RatingTracker {
    counts: [u64; NUM_BANDS],
}

impl RatingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a processed user's rating
    ///
    /// Returns the band the rating landed in, or `None` (counting nothing)
    /// when it is out of range.
    pub fn record(&mut self, rating: i32) -> Option<RatingBand> {
        let band = RatingBand::of(rating)?;
        self.counts[band.index()] += 1;
        Some(band)
    }

    /// Processed count for one band
    pub fn count(&self, band: RatingBand) -> u64 {
        self.counts[band.index()]
    }

    /// All band counts, indexed by band
    pub fn counts(&self) -> [u64; NUM_BANDS] {
        self.counts
    }

    /// Remove and return the next user to process
    ///
    /// Bands are tried from least processed to most processed, ties going to
    /// the lower band; within a band the first matching frontier entry wins.
    /// A frontier with no in-band entry at all yields its last entry.
    ///
    /// Panics if the frontier is empty. Callers check `is_empty` first; an
    /// unguarded call is a bug.
    pub fn select_next(&self, frontier: &mut Frontier) -> UserRating {
        assert!(
            !frontier.is_empty(),
            "select_next called on an empty frontier"
        );

        for band in self.bands_by_need() {
            let index = frontier.iter().position(|u| band.contains(u.rating));
            if let Some(index) = index {
                return frontier.remove(index);
            }
        }

        // Every queued rating is out of range; take the most recent entry.
        frontier.pop().expect("frontier checked non-empty above")
    }

    /// Bands ordered by ascending processed count, lower band first on ties
    fn bands_by_need(&self) -> [RatingBand; NUM_BANDS] {
        let mut order: [RatingBand; NUM_BANDS] = std::array::from_fn(RatingBand);
        // Stable sort: equal counts keep ascending band order
        order.sort_by_key(|band| self.count(*band));
        order
    }
}
