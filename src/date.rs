//! Calendar-independant date.

use std::fmt;
use std::ops::{Add, Sub};

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use serde::{Serialize, Serializer};

/// Julian day number of 1970-01-01, the Unix epoch.
const UNIX_EPOCH_JDN: i64 = 2440588;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        let (y, m, d) = (year as i64, month as i64, day as i64);
        u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = self.jdn as i64;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the civil date at the instant `secs` seconds after the Unix
    /// epoch, in the timezone ahead (east) of UTC by `tz_offset_minutes`
    /// minutes.
    ///
    /// For Beijing time (UTC+8), `tz_offset_minutes` should be +480.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::Date;
    ///
    /// // 1999-12-31T16:00:00Z is already 2000-01-01 in Beijing
    /// let date = Date::from_unix_timestamp(946656000, 480).unwrap();
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// let date = Date::from_unix_timestamp(946656000, 0).unwrap();
    /// assert_eq!((1999, 12, 31), date.gregorian());
    /// ```
    pub fn from_unix_timestamp(secs: i64, tz_offset_minutes: i32) -> Option<Self> {
        let local = secs.checked_add(tz_offset_minutes as i64 * 60)?;
        let jdn = UNIX_EPOCH_JDN + local.div_euclid(86400);
        u32::try_from(jdn).map(Self::from_jdn).ok()
    }
    /// Returns the civil date of `datetime` in the timezone ahead of UTC by
    /// `tz_offset_minutes` minutes, regardless of the timezone `datetime`
    /// carries.
    pub fn from_datetime<Tz: TimeZone>(
        datetime: &DateTime<Tz>,
        tz_offset_minutes: i32,
    ) -> Option<Self> {
        Self::from_unix_timestamp(datetime.timestamp(), tz_offset_minutes)
    }
    /// Converts into [`chrono::NaiveDate`], `None` if chrono cannot represent
    /// the date.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        let (y, m, d) = self.gregorian();
        NaiveDate::from_ymd_opt(y, m as u32, d as u32)
    }

    /// Returns the Chinese sexagenary day number of the date, numbered from 1
    /// (甲子) to 60 (癸亥).
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(55, date.sexagenary()); // 戊午
    /// ```
    pub fn sexagenary(&self) -> i32 {
        ((self.jdn as u64 + 49) % 60 + 1) as i32
    }

    /// Adds `days` whole days, returning `None` if the result is out of
    /// supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(Some((2000, 3, 1)), date.checked_add_days(60).map(|d| d.gregorian()));
    /// assert_eq!(None, Date::from_jdn(0).checked_add_days(-1));
    /// ```
    pub fn checked_add_days(self, days: i32) -> Option<Self> {
        u32::try_from(self.jdn as i64 + days as i64)
            .ok()
            .map(Self::from_jdn)
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = crate::Error;
    /// Fails with [`crate::Error::DateOutOfRange`] for dates before JDN 0.
    fn try_from(date: NaiveDate) -> crate::Result<Self> {
        // chrono's day 1 (0001-01-01) is JDN 1721426
        u32::try_from(date.num_days_from_ce() as i64 + 1721425)
            .map(Date::from_jdn)
            .map_err(|_| crate::Error::DateOutOfRange)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// # Panics
///
/// Panics if the result is out of supported range. See
/// [`Date::checked_add_days`].
impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        match self.checked_add_days(rhs) {
            Some(date) => date,
            None => panic!("date out of range: JDN {} + {} days", self.jdn, rhs),
        }
    }
}
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i64 - rhs.jdn as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn to_sexagenary() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(18, date.sexagenary());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(56, date.sexagenary());
    }

    #[test]
    fn whole_day_arithmetic() {
        let anchor = Date::from_gregorian(2000, 1, 1).unwrap();
        let date = Date::from_gregorian(2024, 2, 10).unwrap();
        assert_eq!(8806, date - anchor);
        assert_eq!(-8806, anchor - date);
        assert_eq!(date, anchor + 8806);
        assert_eq!(anchor, date + -8806);
    }

    #[test]
    fn range_limits() {
        let far = Date::from_gregorian(2_000_000, 1, 1).unwrap();
        assert_eq!((2_000_000, 1, 1), far.gregorian());
        assert_eq!(None, Date::from_gregorian(20_000_000, 1, 1));
        assert_eq!(None, Date::from_gregorian(-2_000_000, 1, 1));
        assert_eq!(None, Date::from_gregorian(i32::MAX, 12, 31));
        assert_eq!(None, Date::from_gregorian(-4713, 11, 23));
        assert_eq!(Some(0), Date::from_gregorian(-4713, 11, 24).map(|d| d.jdn()));

        let first = Date::from_jdn(0);
        let last = Date::from_jdn(u32::MAX);
        assert_eq!(None, first.checked_add_days(-1));
        assert_eq!(None, last.checked_add_days(1));
        assert_eq!(Some(first), Date::from_jdn(i32::MAX as u32).checked_add_days(-i32::MAX));
        assert_eq!(u32::MAX as i64, last - first);
        assert_eq!(-(u32::MAX as i64), first - last);
        assert_eq!(1, last.sexagenary() - Date::from_jdn(u32::MAX - 1).sexagenary());
    }

    #[test]
    #[should_panic(expected = "date out of range")]
    fn add_past_first_day() {
        let _ = Date::from_jdn(0) + -1;
    }

    #[test]
    fn civil_date_in_timezone() {
        // 2024-02-09T16:00:00Z, midnight in Beijing
        let midnight = 1707494400;
        for (std, secs, tz) in [
            ((2024, 2, 10), midnight, 480),
            ((2024, 2, 9), midnight - 1, 480),
            ((2024, 2, 9), midnight, 0),
            ((2024, 2, 9), midnight + 8 * 3600 - 1, 0),
            ((2024, 2, 10), midnight + 8 * 3600, 0),
            ((1969, 12, 31), -1, 0),
        ] {
            let date = Date::from_unix_timestamp(secs, tz).unwrap();
            assert_eq!(std, date.gregorian(), "{secs} @ {tz}");
        }
    }

    #[test]
    fn chrono_interop() {
        use chrono::FixedOffset;

        let naive = NaiveDate::from_ymd_opt(2021, 9, 8).unwrap();
        let date = Date::try_from(naive).unwrap();
        assert_eq!(2459466, date.jdn());
        assert_eq!(Some(naive), date.to_naive());

        // JDN 0 is -4713-11-24 proleptic Gregorian
        let first = NaiveDate::from_ymd_opt(-4713, 11, 24).unwrap();
        assert_eq!(0, Date::try_from(first).unwrap().jdn());
        assert!(matches!(
            Date::try_from(first.pred_opt().unwrap()),
            Err(crate::Error::DateOutOfRange)
        ));
        assert!(matches!(
            Date::try_from(NaiveDate::from_ymd_opt(-5000, 1, 1).unwrap()),
            Err(crate::Error::DateOutOfRange)
        ));

        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
        let evening = pacific.with_ymd_and_hms(2024, 2, 9, 9, 0, 0).unwrap();
        assert_eq!(
            (2024, 2, 10),
            Date::from_datetime(&evening, 480).unwrap().gregorian()
        );
        assert_eq!(
            (2024, 2, 9),
            Date::from_datetime(&evening, -480).unwrap().gregorian()
        );
    }

    #[test]
    fn iso_format() {
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!("2021-09-08", date.iso_gregorian());
        assert_eq!("2021-09-08", date.to_string());
    }
}
