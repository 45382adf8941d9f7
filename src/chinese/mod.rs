//! Chinese almanac (黃曆)
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本模塊不編算農曆：年柱文本與農曆月序由宿主曆法提供（見 [`LunarSource`]），
//! 本模塊據以推算干支、建除、神煞、宜忌與吉神方位。日柱僅依公曆日期推算，無需宿主。
//!
//! # 用例
//!
//! ```
//! use huangli::Date;
//! use huangli::chinese::{JianChu, Month::*, evaluate_auspice, resolve_day_pillar, resolve_month_pillar};
//!
//! let day = resolve_day_pillar(Date::from_gregorian(2024, 2, 10).unwrap());
//! let month = resolve_month_pillar("甲辰", Common(1)).unwrap();
//! let auspice = evaluate_auspice(month, day, None);
//!
//! assert_eq!(JianChu::Man, auspice.officer);
//! ```

pub mod almanac;
pub mod auspice;
pub mod cycle;
pub mod direction;
pub mod ganzhi;
pub mod officer;
pub mod shensha;
pub mod yiji;

pub use almanac::{Almanac, DayAnnotation, LunarInfo, LunarSource};
pub use auspice::{Auspice, evaluate_auspice};
pub use cycle::{BRANCHES, EarthlyBranch, Element, GanZhi, HeavenlyStem, STEMS, SanHe};
pub use direction::{Direction, LuckyDirections, lucky_directions};
pub use ganzhi::{month_pillar, resolve_day_pillar, resolve_month_pillar, resolve_year_pillar};
pub use officer::{JianChu, OFFICERS};
pub use shensha::{ShenSha, liu_he_partner, shen_sha};
pub use yiji::{ACTIONS, HuangliAction, YiJi, resolve_yi_ji};

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名（含「月」字），十一、十二月稱「冬月」「臘月」。
    ///
    /// 月序號不在 `1..=12` 間則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use huangli::chinese::Month::*;
    ///
    /// assert_eq!(Some("冬月".to_owned()), Common(11).name());
    /// assert_eq!(Some("閏正月".to_owned()), Leap(1).name());
    /// assert_eq!(None, Common(13).name());
    /// ```
    pub fn name(&self) -> Option<String> {
        const NUM_CHINESE: &[&str] = &["", "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "臘"];
        let num = self.num() as usize;
        if !(1..=12).contains(&num) {
            return None;
        }
        let prefix = if self.is_leap() { "閏" } else { "" };
        Some(format!("{prefix}{}月", NUM_CHINESE[num]))
    }
}
