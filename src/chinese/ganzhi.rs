//! 年、月、日柱推算
//!
//! 日柱以 2000-01-01（北京時間）為戊午日起算；月柱依「五虎遁」由年干推得。
//! 年柱及農曆月序由宿主曆法提供，見 [`super::LunarSource`]。

use super::Month;
use super::cycle::{EarthlyBranch, GanZhi, HeavenlyStem};
use crate::date::Date;
use crate::error::{Error, Result};

/// 日柱基準日 2000-01-01 的儒略日數。
const ANCHOR_JDN: u32 = 2451545;
/// 基準日為戊午日。
const ANCHOR: GanZhi = GanZhi::new(HeavenlyStem::Wu, EarthlyBranch::Wu);

/// 取得給定日期（北京時間民用日）的日柱。
///
/// 以與基準日相差的整日數推算，日期早於基準日時亦取非負餘數。
///
/// # 用例
///
/// ```
/// use huangli::Date;
/// use huangli::chinese::resolve_day_pillar;
///
/// let date = Date::from_gregorian(2024, 2, 10).unwrap();
/// assert_eq!("甲辰", resolve_day_pillar(date).to_string());
/// ```
pub fn resolve_day_pillar(date: Date) -> GanZhi {
    let days = date - Date::from_jdn(ANCHOR_JDN);
    let stem = (ANCHOR.stem.index() as i64 + days).rem_euclid(10);
    let branch = (ANCHOR.branch.index() as i64 + days).rem_euclid(12);
    GanZhi::new(
        HeavenlyStem::from_index(stem as usize),
        EarthlyBranch::from_index(branch as usize),
    )
}

/// 依年干推得月柱（五虎遁：甲己之年丙作首）。
///
/// 正月建寅，閏月與其所閏之月同柱。月序不在 `1..=12` 則回報 [`Error::InvalidLunarMonth`]。
///
/// # 用例
///
/// ```
/// use huangli::chinese::{HeavenlyStem, Month::*, month_pillar};
///
/// assert_eq!("丙寅", month_pillar(HeavenlyStem::Jia, Common(1)).unwrap().to_string());
/// assert_eq!("丁丑", month_pillar(HeavenlyStem::Jia, Common(12)).unwrap().to_string());
/// ```
pub fn month_pillar(year_stem: HeavenlyStem, month: Month) -> Result<GanZhi> {
    let n = month.num() as usize;
    if !(1..=12).contains(&n) {
        return Err(Error::InvalidLunarMonth(month.num()));
    }
    let base = (year_stem.index() % 5) * 2 + 2;
    Ok(GanZhi::new(
        HeavenlyStem::from_index(base + n - 1),
        EarthlyBranch::from_index(2 + n - 1),
    ))
}

/// 由年柱文本（如「甲辰」）與農曆月推得月柱。
///
/// 年柱文本無法識別則回報 [`Error::MalformedGanZhi`]。
///
/// # 用例
///
/// ```
/// use huangli::chinese::{Month::*, resolve_month_pillar};
///
/// assert_eq!("丙寅", resolve_month_pillar("甲辰", Common(1)).unwrap().to_string());
/// assert!(resolve_month_pillar("甲", Common(1)).is_err());
/// ```
pub fn resolve_month_pillar(year: &str, month: Month) -> Result<GanZhi> {
    let year = resolve_year_pillar(year)?;
    month_pillar(year.stem, month)
}

/// 解析宿主提供的年柱文本，只讀首二字，如「甲辰年」即甲辰。
pub fn resolve_year_pillar(year: &str) -> Result<GanZhi> {
    year.parse()
}
