use std::fmt;

use binread::BinRead;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A FILETIME: a 64-bit unsigned tick count, 100-ns units, epoch
/// 1601-01-01 UTC (§6). The accessor surface exposes the raw tick count;
/// conversion to civil time is the caller's responsibility per §4.2, but a
/// `datetime()` convenience is kept here the way the teacher crate
/// provides one, built on `chrono`.
#[derive(Clone, Copy, PartialEq, Eq, BinRead)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FileTime {
    low_date_time: u32,
    high_date_time: u32,
}

impl fmt::Debug for FileTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileTime({:#018x})", self.ticks())
    }
}

impl FileTime {
    fn epoch() -> NaiveDateTime {
        let epoch_date = NaiveDate::from_ymd_opt(1601, 1, 1).unwrap();
        let epoch_time = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        NaiveDateTime::new(epoch_date, epoch_time)
    }

    /// The raw 100-ns tick count since 1601-01-01 UTC, as stored on disk.
    /// This is what the accessor surface's timestamp getters return.
    pub fn ticks(&self) -> u64 {
        u64::from(self.low_date_time) | (u64::from(self.high_date_time) << 32)
    }

    /// `true` if this FILETIME is the all-zero "not set" sentinel (§3).
    pub fn is_unset(&self) -> bool {
        self.ticks() == 0
    }

    /// Converts this FILETIME to a civil UTC date-time. Returns `None` for
    /// the zero sentinel.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        if self.is_unset() {
            return None;
        }
        let hundred_nanos = self.ticks();
        Some(Self::epoch() + Duration::microseconds((hundred_nanos / 10) as i64))
    }
}

impl From<u64> for FileTime {
    fn from(value: u64) -> Self {
        Self {
            low_date_time: (value & 0xFFFF_FFFF) as u32,
            high_date_time: ((value >> 32) & 0xFFFF_FFFF) as u32,
        }
    }
}

impl From<FileTime> for u64 {
    fn from(val: FileTime) -> Self {
        val.ticks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_unset() {
        let ft = FileTime::from(0u64);
        assert!(ft.is_unset());
        assert_eq!(ft.datetime(), None);
    }

    #[test]
    fn round_trips_through_ticks() {
        let ft = FileTime::from(0x01c9_1515_f2ee_e9d0u64);
        assert_eq!(ft.ticks(), 0x01c9_1515_f2ee_e9d0u64);
        assert!(ft.datetime().is_some());
    }
}
