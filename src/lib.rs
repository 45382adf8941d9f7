//! Sexagenary pillars and almanac (黄历) indicators for Gregorian dates.
//!
//! The day pillar follows from the date alone. Year and month pillars, and
//! everything derived from them, need the lunar year label and month number
//! from a host calendar, supplied through [`chinese::LunarSource`].
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use huangli::Date;
//! use huangli::chinese::resolve_day_pillar;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(2451545, date.jdn());
//! assert_eq!("戊午", resolve_day_pillar(date).to_string());
//! ```
//!
//! Evaluating a day from its pillars:
//!
//! ```
//! use huangli::chinese::{Auspice, JianChu, lucky_directions};
//!
//! let auspice = Auspice::from_labels("丙寅", "庚申", Some("甲辰")).unwrap();
//! assert_eq!(JianChu::Po, auspice.officer);
//! assert_eq!(vec!["诸事不宜"], auspice.ji);
//!
//! let lucky = lucky_directions('庚').unwrap();
//! assert_eq!("西北", lucky.joy.label());
//! ```
//!
//! A full day annotation, with the lunar data coming from a host calendar:
//!
//! ```
//! use huangli::{Config, Date};
//! use huangli::chinese::{Almanac, LunarInfo, Month::*};
//!
//! let almanac = Almanac::new(
//!     |_: Date| Some(LunarInfo::new("乙巳", Common(11))),
//!     Config::default(),
//! );
//! let day = almanac.annotate(Date::from_gregorian(2025, 12, 26).unwrap()).unwrap();
//!
//! assert_eq!("己巳", day.day.to_string());
//! assert_eq!("戊子", day.month.unwrap().to_string());
//! ```

pub mod chinese;
pub mod config;
pub mod date;
pub mod error;

pub use config::Config;
pub use date::Date;
pub use error::{Error, Result};
