//! Strongly typed, zero-cost identifier wrappers.
//!
//! Station *names* are free-form strings taken from the input file; the
//! simulator addresses stations internally by their position in load order
//! (`StationIdx`), which is also their routing priority.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Position of a station in the registry.  Lower index = higher routing
    /// priority.
    pub struct StationIdx(u32);
}

typed_id! {
    /// 1-based ordinal of a request in the input stream.
    pub struct RequestSeq(u32);
}

impl RequestSeq {
    /// The sequence number that follows `self`.
    #[inline]
    pub fn next(self) -> RequestSeq {
        RequestSeq(self.0 + 1)
    }
}
