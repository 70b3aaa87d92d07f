//! Splitting a count of seconds into hours, minutes and seconds.

use core::fmt;

use crate::{FixedTuple, Slots, Tuple};

pub const SECONDS_PER_MINUTE: u32 = 60;
pub const SECONDS_PER_HOUR: u32 = 60 * SECONDS_PER_MINUTE;

/// Split `seconds` into `(hours, minutes, seconds)`.
///
/// ```rust
/// use fixtuple::clock::time_decomposition;
///
/// let (h, m, s) = time_decomposition(8850).into_inner();
/// assert_eq!((h, m, s), (2, 27, 30));
/// ```
pub fn time_decomposition(seconds: u32) -> FixedTuple<(u32, u32, u32)> {
    let h = seconds / SECONDS_PER_HOUR;
    let m = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let s = seconds % SECONDS_PER_MINUTE;
    FixedTuple::new((h, m, s))
}

/// A duration as named hours, minutes and seconds, usable anywhere a 3-tuple
/// of `u32` is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Slots)]
pub struct Hms {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Hms {
    /// The duration in seconds. Widened to `u64`, since any field may hold a
    /// full `u32`.
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * u64::from(SECONDS_PER_HOUR)
            + u64::from(self.minutes) * u64::from(SECONDS_PER_MINUTE)
            + u64::from(self.seconds)
    }
}

impl From<u32> for Hms {
    fn from(seconds: u32) -> Self {
        Hms::from_native(time_decomposition(seconds).into_tuple())
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}
