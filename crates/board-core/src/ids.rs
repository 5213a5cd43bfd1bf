//! Strongly typed passenger identifier.
//!
//! Identifiers are 1-based: the value 0 is reserved by the cabin file formats
//! to mean "empty cell", so the wrapper stores a `NonZeroU32`.  That also lets
//! `Option<PassengerId>` (the in-memory "maybe occupied" cell) stay 4 bytes.

use std::fmt;
use std::num::NonZeroU32;

/// Identity of one passenger for the lifetime of a single run.
///
/// Passenger `n` sits at slot `n - 1` of the passenger list, which is also its
/// position in the boarding queue.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerId(NonZeroU32);

impl PassengerId {
    /// Build an id from its raw 1-based value.  Returns `None` for 0.
    #[inline]
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(PassengerId)
    }

    /// The id of the passenger stored at 0-based `slot` in the passenger list.
    #[inline]
    pub fn from_slot(slot: usize) -> Self {
        PassengerId(NonZeroU32::MIN.saturating_add(slot as u32))
    }

    /// The raw 1-based value, as written to cabin dumps.
    #[inline(always)]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// 0-based index into the passenger list.
    #[inline(always)]
    pub fn slot(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl From<PassengerId> for u32 {
    #[inline(always)]
    fn from(id: PassengerId) -> u32 {
        id.get()
    }
}
