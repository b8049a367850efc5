use core::fmt;

use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock timestamp with millisecond resolution.
///
/// The tick driver samples this once per sweep and passes it down, so every
/// timeout decision within one sweep sees the same instant and tests can
/// fabricate time freely.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct WallTime {
    millis: u64,
}

impl WallTime {
    pub fn now() -> WallTime {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        WallTime { millis }
    }

    pub fn from_millis(millis: u64) -> WallTime {
        WallTime { millis }
    }

    pub fn from_secs(secs: u64) -> WallTime {
        WallTime { millis: secs * 1000 }
    }

    pub fn as_millis(self) -> u64 {
        self.millis
    }

    pub fn add_millis(self, millis: u64) -> WallTime {
        WallTime { millis: self.millis + millis }
    }

    pub fn add_secs(self, secs: u64) -> WallTime {
        self.add_millis(secs * 1000)
    }

    /// Age of this timestamp compared to `now`, in milliseconds.
    /// Saturates at zero if `now` lies before this timestamp.
    #[inline(always)]
    pub fn age_millis(self, now: WallTime) -> u64 {
        now.millis.saturating_sub(self.millis)
    }

    /// Age of this timestamp compared to `now`, in whole seconds.
    #[inline(always)]
    pub fn age_secs(self, now: WallTime) -> u64 {
        self.age_millis(now) / 1000
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.millis / 1000, self.millis % 1000)
    }
}

impl fmt::Debug for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.millis / 1000, self.millis % 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_and_add() {
        let t0 = WallTime::from_secs(1000);
        let t1 = t0.add_millis(2500);
        assert_eq!(t0.age_millis(t1), 2500);
        assert_eq!(t0.age_secs(t1), 2);
        // age is saturating, never negative
        assert_eq!(t1.age_millis(t0), 0);
        assert_eq!(t0.add_secs(3), WallTime::from_millis(1_003_000));
    }

    #[test]
    fn test_ordering_and_display() {
        let a = WallTime::from_millis(999);
        let b = WallTime::from_millis(1000);
        assert!(a < b);
        assert_eq!(format!("{}", b.add_millis(42)), "1.042");
    }
}
