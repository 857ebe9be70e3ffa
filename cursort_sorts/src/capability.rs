//! Classification of what a sequence's cursor is able to do.
//!
//! Every [`ForwardSequence`](crate::sequence::ForwardSequence) names one of the marker types
//! below as its `Category`. The markers form a strict refinement lattice:
//!
//! ```text
//! Forward < Bidirectional < RandomAccess < Contiguous
//! ```
//!
//! Algorithms state the weakest tier they need as a trait bound, so asking for a heap sort of a
//! singly linked list simply does not compile. Where several strategies exist for the same
//! operation (see [`navigation`](crate::navigation)), the `Category` marker is what selects the
//! implementation, again at compile time.
//!
//! Whether a range's length is known in constant time is tracked separately through
//! [`ForwardSequence::SIZED`](crate::sequence::ForwardSequence::SIZED) since a forward-only
//! sequence can still know its size.
//!
//! # Example
//!
//! ```
//! use cursort_sorts::capability::{Capabilities, Tier};
//! use cursort_sorts::sequence::ForwardList;
//!
//! let caps = Capabilities::of::<Vec<u8>>();
//! assert_eq!(caps.tier, Tier::Contiguous);
//! assert!(caps.sized);
//!
//! let caps = Capabilities::of::<ForwardList<u8>>();
//! assert_eq!(caps.tier, Tier::Forward);
//! assert!(!caps.tier.satisfies(Tier::Bidirectional));
//! ```

use std::fmt::{self, Display};

use crate::sequence::ForwardSequence;

/// The capability tiers, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Single step forward and comparison with the end.
    Forward,
    /// Forward plus a single step backward.
    Bidirectional,
    /// Bidirectional plus constant time jumps and distances.
    RandomAccess,
    /// Random access over one contiguous block of memory.
    Contiguous,
}

impl Tier {
    /// Returns `true` if a cursor of this tier can be used where `required` is asked for.
    pub fn satisfies(self, required: Tier) -> bool {
        self >= required
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Forward => "forward",
            Tier::Bidirectional => "bidirectional",
            Tier::RandomAccess => "random-access",
            Tier::Contiguous => "contiguous",
        };
        write!(f, "{name}")
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Forward {}
    impl Sealed for super::Bidirectional {}
    impl Sealed for super::RandomAccess {}
    impl Sealed for super::Contiguous {}
}

/// Implemented by the four capability markers and nothing else.
pub trait Category: sealed::Sealed {
    const TIER: Tier;

    /// The category of a strided view over a sequence of this category. Skipping elements
    /// keeps every cursor operation but gives up contiguity.
    type Strided: Category;
}

/// Marker for forward-only cursors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Forward;

/// Marker for cursors that can also step backward.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bidirectional;

/// Marker for cursors that jump and measure distances in constant time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAccess;

/// Marker for random access cursors over contiguous storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Contiguous;

impl Category for Forward {
    const TIER: Tier = Tier::Forward;
    type Strided = Forward;
}

impl Category for Bidirectional {
    const TIER: Tier = Tier::Bidirectional;
    type Strided = Bidirectional;
}

impl Category for RandomAccess {
    const TIER: Tier = Tier::RandomAccess;
    type Strided = RandomAccess;
}

impl Category for Contiguous {
    const TIER: Tier = Tier::Contiguous;
    type Strided = RandomAccess;
}

/// The full classification of a sequence type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub tier: Tier,
    /// The length of any `[first, last)` range is available in O(1).
    pub sized: bool,
}

impl Capabilities {
    pub fn of<S>() -> Self
    where
        S: ForwardSequence + ?Sized,
    {
        Self {
            tier: <S::Category as Category>::TIER,
            sized: S::SIZED,
        }
    }
}

impl Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sized {
            write!(f, "{} (sized)", self.tier)
        } else {
            write!(f, "{}", self.tier)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{ForwardList, List};
    use std::collections::VecDeque;

    #[test]
    fn tiers_are_ordered() {
        assert!(Tier::Contiguous.satisfies(Tier::Forward));
        assert!(Tier::RandomAccess.satisfies(Tier::Bidirectional));
        assert!(Tier::Bidirectional.satisfies(Tier::Bidirectional));
        assert!(!Tier::Forward.satisfies(Tier::Bidirectional));
        assert!(!Tier::RandomAccess.satisfies(Tier::Contiguous));
    }

    #[test]
    fn stock_sequences() {
        assert_eq!(
            Capabilities::of::<[i32]>(),
            Capabilities {
                tier: Tier::Contiguous,
                sized: true
            }
        );
        assert_eq!(
            Capabilities::of::<VecDeque<i32>>(),
            Capabilities {
                tier: Tier::RandomAccess,
                sized: true
            }
        );
        assert_eq!(
            Capabilities::of::<List<i32>>(),
            Capabilities {
                tier: Tier::Bidirectional,
                sized: false
            }
        );
        assert_eq!(
            Capabilities::of::<ForwardList<i32>>(),
            Capabilities {
                tier: Tier::Forward,
                sized: false
            }
        );
    }

    #[test]
    fn display() {
        assert_eq!(Capabilities::of::<Vec<u8>>().to_string(), "contiguous (sized)");
        assert_eq!(Capabilities::of::<List<u8>>().to_string(), "bidirectional");
    }
}
