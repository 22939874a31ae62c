//! Strongly typed walker identifier.
//!
//! A `WalkerId` is the index of a walker in the ensemble's structure-of-arrays
//! position storage.  The inner integer is `pub` to allow direct indexing via
//! `id.0 as usize`, but callers should prefer the `.index()` helper for
//! clarity.

use std::fmt;

/// Index of a walker in SoA storage.  Max ~4.3 billion walkers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkerId(pub u32);

impl WalkerId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: WalkerId = WalkerId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for WalkerId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for WalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WalkerId({})", self.0)
    }
}

impl From<WalkerId> for usize {
    #[inline(always)]
    fn from(id: WalkerId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for WalkerId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<WalkerId, Self::Error> {
        u32::try_from(n).map(WalkerId)
    }
}
