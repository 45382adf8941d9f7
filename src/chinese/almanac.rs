//! 逐日黃曆
//!
//! 農曆年月由宿主曆法提供（[`LunarSource`]），本模塊據以推算年、月、日三柱及當日吉凶方位。

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use tracing::debug;

use super::Month;
use super::auspice::{Auspice, evaluate_auspice};
use super::cycle::GanZhi;
use super::direction::LuckyDirections;
use super::ganzhi::{month_pillar, resolve_day_pillar, resolve_year_pillar};
use crate::config::Config;
use crate::date::Date;
use crate::error::{Error, Result};

/// 宿主曆法提供的農曆信息
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LunarInfo {
    /// 年柱文本，如「甲辰」或「甲辰年」
    pub year: String,
    /// 農曆月
    pub month: Month,
}

impl LunarInfo {
    pub fn new(year: impl Into<String>, month: Month) -> Self {
        Self {
            year: year.into(),
            month,
        }
    }
}

/// 宿主曆法。給定日期不在其支持範圍內則返回 `None`。
pub trait LunarSource {
    fn lunar_info(&self, date: Date) -> Option<LunarInfo>;
}

impl<F> LunarSource for F
where
    F: Fn(Date) -> Option<LunarInfo>,
{
    fn lunar_info(&self, date: Date) -> Option<LunarInfo> {
        self(date)
    }
}

/// 一日的黃曆信息。
///
/// 宿主曆法無該日資料時，僅有日柱與吉神方位，其餘為 `None`。
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DayAnnotation {
    pub date: Date,
    pub year: Option<GanZhi>,
    pub month: Option<GanZhi>,
    pub day: GanZhi,
    /// 生肖，依年支
    pub zodiac: Option<&'static str>,
    pub auspice: Option<Auspice>,
    pub lucky: LuckyDirections,
}

/// 黃曆，組合宿主曆法與本庫的推算。
///
/// # 用例
///
/// ```
/// use huangli::{Config, Date};
/// use huangli::chinese::{Almanac, LunarInfo, Month::*};
///
/// let almanac = Almanac::new(
///     |_: Date| Some(LunarInfo::new("甲辰", Common(1))),
///     Config::default(),
/// );
/// let day = almanac.annotate(Date::from_gregorian(2024, 2, 10).unwrap()).unwrap();
/// assert_eq!("丙寅", day.month.unwrap().to_string());
/// assert_eq!("甲辰", day.day.to_string());
/// assert_eq!(Some("龍"), day.zodiac);
/// ```
#[derive(Debug, Clone)]
pub struct Almanac<S> {
    source: S,
    config: Config,
}

impl<S: LunarSource> Almanac<S> {
    pub fn new(source: S, config: Config) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 取得給定日期的黃曆信息。
    ///
    /// 年柱文本只讀首二字（如「甲辰年」），無法識別則回報 [`Error::MalformedGanZhi`]，
    /// 月序不在 `1..=12` 則回報 [`Error::InvalidLunarMonth`]。
    pub fn annotate(&self, date: Date) -> Result<DayAnnotation> {
        let day = resolve_day_pillar(date);
        let lucky = LuckyDirections::for_stem(day.stem);

        let Some(lunar) = self.source.lunar_info(date) else {
            debug!(%date, %day, "no lunar data");
            return Ok(DayAnnotation {
                date,
                year: None,
                month: None,
                day,
                zodiac: None,
                auspice: None,
                lucky,
            });
        };

        let year = resolve_year_pillar(&lunar.year)?;
        let month = month_pillar(year.stem, lunar.month)?;
        let year_branch = self.config.year_rules.then_some(year.branch);
        let auspice = evaluate_auspice(month, day, year_branch);
        debug!(%date, %year, %month, %day, officer = %auspice.officer, "annotated");

        Ok(DayAnnotation {
            date,
            year: Some(year),
            month: Some(month),
            day,
            zodiac: Some(year.branch.zodiac()),
            auspice: Some(auspice),
            lucky,
        })
    }

    /// 取得給定時刻在設定時區下所在民用日的黃曆信息。
    pub fn annotate_at<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> Result<DayAnnotation> {
        let date = Date::from_datetime(datetime, self.config.tz_offset_minutes)
            .ok_or(Error::DateOutOfRange)?;
        self.annotate(date)
    }

    /// 自 `start` 起連續 `days` 日的黃曆信息。
    ///
    /// 範圍超出支持的日期則回報 [`Error::DateOutOfRange`]。
    pub fn annotate_range(&self, start: Date, days: u32) -> Result<Vec<DayAnnotation>> {
        (0..days)
            .map(|offset| {
                let date = i32::try_from(offset)
                    .ok()
                    .and_then(|offset| start.checked_add_days(offset))
                    .ok_or(Error::DateOutOfRange)?;
                self.annotate(date)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chinese::Month::*;
    use crate::chinese::{Direction, JianChu, ShenSha};

    fn ymd(y: i32, m: i32, d: i32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    /// 2024 年初數月的農曆，月首取自實際曆書。
    fn spring_2024(date: Date) -> Option<LunarInfo> {
        let months = [
            (ymd(2024, 1, 11), "癸卯", Common(12)),
            (ymd(2024, 2, 10), "甲辰", Common(1)),
            (ymd(2024, 3, 10), "甲辰", Common(2)),
            (ymd(2024, 4, 9), "甲辰", Common(3)),
        ];
        if date >= ymd(2024, 5, 8) {
            return None;
        }
        months
            .iter()
            .rev()
            .find(|(start, _, _)| *start <= date)
            .map(|&(_, year, month)| LunarInfo::new(year, month))
    }

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("huangli=trace"))
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn new_year_day() {
        init_logging();
        let almanac = Almanac::new(spring_2024, Config::default());
        let day = almanac.annotate(ymd(2024, 2, 10)).unwrap();
        assert_eq!("甲辰", day.year.unwrap().to_string());
        assert_eq!("丙寅", day.month.unwrap().to_string());
        assert_eq!("甲辰", day.day.to_string());
        assert_eq!(Some("龍"), day.zodiac);

        let auspice = day.auspice.unwrap();
        assert_eq!(JianChu::Man, auspice.officer);
        assert!(auspice.shen_sha.is_empty());
        assert_eq!(vec!["交易", "嫁娶", "开市", "祈福"], auspice.yi);
        assert_eq!(vec!["安葬", "求医"], auspice.ji);

        assert_eq!(Direction::Northeast, day.lucky.joy);
        assert_eq!(Direction::Northeast, day.lucky.wealth);
        assert_eq!(Direction::North, day.lucky.fortune);
    }

    #[test]
    fn previous_year_uses_host_label() {
        let almanac = Almanac::new(spring_2024, Config::default());
        let day = almanac.annotate(ymd(2024, 2, 9)).unwrap();
        assert_eq!("癸卯", day.year.unwrap().to_string());
        assert_eq!("乙丑", day.month.unwrap().to_string());
        assert_eq!(Some("兔"), day.zodiac);
    }

    #[test]
    fn missing_lunar_data() {
        init_logging();
        let almanac = Almanac::new(spring_2024, Config::default());
        let day = almanac.annotate(ymd(2024, 6, 1)).unwrap();
        assert_eq!(None, day.month);
        assert_eq!(None, day.auspice);
        assert_eq!(None, day.zodiac);
        assert_eq!(resolve_day_pillar(ymd(2024, 6, 1)), day.day);
        assert_eq!(LuckyDirections::for_stem(day.day.stem), day.lucky);
    }

    #[test]
    fn host_year_label_with_suffix() {
        let almanac = Almanac::new(|_: Date| Some(LunarInfo::new("甲辰年", Common(1))), Config::default());
        let day = almanac.annotate(ymd(2024, 2, 10)).unwrap();
        assert_eq!("甲辰", day.year.unwrap().to_string());
        assert_eq!("丙寅", day.month.unwrap().to_string());
        assert_eq!(Some("龍"), day.zodiac);
    }

    #[test]
    fn host_errors() {
        let almanac = Almanac::new(|_: Date| Some(LunarInfo::new("甲", Common(1))), Config::default());
        assert!(matches!(
            almanac.annotate(ymd(2024, 2, 10)),
            Err(Error::MalformedGanZhi(_))
        ));
        let almanac = Almanac::new(|_: Date| Some(LunarInfo::new("甲辰", Leap(13))), Config::default());
        assert!(matches!(
            almanac.annotate(ymd(2024, 2, 10)),
            Err(Error::InvalidLunarMonth(13))
        ));
    }

    #[test]
    fn year_rules_can_be_disabled() {
        // 甲辰年劫煞在巳
        let source = |_: Date| Some(LunarInfo::new("甲辰", Common(1)));
        let with_year = Almanac::new(source, Config::default());
        let without_year = Almanac::new(
            source,
            Config {
                year_rules: false,
                ..Config::default()
            },
        );
        let si_day = (0..12)
            .map(|i| ymd(2024, 2, 10) + i)
            .find(|&d| resolve_day_pillar(d).branch == crate::chinese::EarthlyBranch::Si)
            .unwrap();
        let shen_sha = |almanac: &Almanac<_>| almanac.annotate(si_day).unwrap().auspice.unwrap().shen_sha;
        assert!(shen_sha(&with_year).contains(&ShenSha::JieSha));
        assert!(!shen_sha(&without_year).contains(&ShenSha::JieSha));
    }

    #[test]
    fn range_is_consecutive() {
        let almanac = Almanac::new(spring_2024, Config::default());
        let days = almanac.annotate_range(ymd(2024, 3, 8), 5).unwrap();
        assert_eq!(5, days.len());
        for (i, day) in days.iter().enumerate() {
            assert_eq!(ymd(2024, 3, 8) + i as i32, day.date);
        }
        assert_eq!("丙寅", days[1].month.unwrap().to_string());
        assert_eq!("丁卯", days[2].month.unwrap().to_string());
        assert_eq!("癸酉", days[2].day.to_string());
    }

    #[test]
    fn range_past_last_day() {
        let almanac = Almanac::new(|_: Date| -> Option<LunarInfo> { None }, Config::default());
        let last = Date::from_jdn(u32::MAX);
        assert_eq!(1, almanac.annotate_range(last, 1).unwrap().len());
        assert!(matches!(
            almanac.annotate_range(last, 2),
            Err(Error::DateOutOfRange)
        ));
    }

    #[test]
    fn civil_date_of_instant() {
        use chrono::{FixedOffset, Utc};

        let almanac = Almanac::new(spring_2024, Config::default());
        // 2024-02-09T16:30:00Z，北京時間已是正月初一
        let instant = Utc.with_ymd_and_hms(2024, 2, 9, 16, 30, 0).unwrap();
        assert_eq!(ymd(2024, 2, 10), almanac.annotate_at(&instant).unwrap().date);
        let local = instant.with_timezone(&FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!(ymd(2024, 2, 10), almanac.annotate_at(&local).unwrap().date);

        let utc = Almanac::new(
            spring_2024,
            Config {
                tz_offset_minutes: 0,
                ..Config::default()
            },
        );
        assert_eq!(ymd(2024, 2, 9), utc.annotate_at(&instant).unwrap().date);
    }

    #[test]
    fn serializes_for_rendering() {
        let almanac = Almanac::new(spring_2024, Config::default());
        let day = almanac.annotate(ymd(2024, 2, 10)).unwrap();
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!("2024-02-10", json["date"]);
        assert_eq!("丙寅", json["month"]);
        assert_eq!("满", json["auspice"]["officer"]);
        assert_eq!("东北", json["lucky"]["joy"]);
    }
}
