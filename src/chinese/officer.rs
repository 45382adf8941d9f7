//! 建除十二神
//!
//! 日支與月建相同之日為「建」，此後依次為除、滿、平、定、執、破、危、成、收、開、閉，十二日一周。

use std::fmt;

use serde::Serialize;

use super::cycle::EarthlyBranch;
use super::yiji::HuangliAction::{self, *};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(into = "char")]
pub enum JianChu {
    Jian,
    Chu,
    Man,
    Ping,
    Ding,
    Zhi,
    Po,
    Wei,
    Cheng,
    Shou,
    Kai,
    Bi,
}

pub const OFFICERS: [JianChu; 12] = {
    use JianChu::*;
    [Jian, Chu, Man, Ping, Ding, Zhi, Po, Wei, Cheng, Shou, Kai, Bi]
};

const LABELS: [char; 12] = ['建', '除', '满', '平', '定', '执', '破', '危', '成', '收', '开', '闭'];

type Actions = &'static [HuangliAction];

impl JianChu {
    pub const fn index(self) -> usize {
        self as usize
    }
    /// 依序號取得，序號取模 12。
    pub const fn from_index(index: usize) -> Self {
        OFFICERS[index % 12]
    }
    pub const fn label(self) -> char {
        LABELS[self.index()]
    }

    /// 取得給定月建、日支所值之神。
    ///
    /// # 用例
    ///
    /// ```
    /// use huangli::chinese::{EarthlyBranch::*, JianChu};
    ///
    /// assert_eq!(JianChu::Jian, JianChu::of(Yin, Yin));
    /// assert_eq!(JianChu::Chu, JianChu::of(Yin, Mao));
    /// assert_eq!(JianChu::Bi, JianChu::of(Yin, Chou));
    /// ```
    pub const fn of(month: EarthlyBranch, day: EarthlyBranch) -> Self {
        Self::from_index(day.index() + 12 - month.index())
    }

    /// 該神所主宜忌，返回 `(宜, 忌)`。
    pub fn yi_ji(self) -> (Actions, Actions) {
        use JianChu::*;
        match self {
            Jian => (&[Travel, Trading, Opening], &[GroundBreaking, Funeral]),
            Chu => (&[Medical, Sacrifice, Renovation], &[Wedding, Travel]),
            Man => (&[Opening, Trading, Wedding, Prayer], &[Funeral, Medical]),
            Ping => (&[Wedding, Travel, Renovation], &[GroundBreaking, Funeral]),
            Ding => (
                &[Wedding, Sacrifice, Prayer, Opening, Trading],
                &[Lawsuit, Travel, Moving],
            ),
            Zhi => (&[Renovation, Planting, Wedding], &[Travel, Moving, Opening]),
            Po => (&[Medical, Renovation], &[Wedding, Opening, Trading, Travel]),
            Wei => (&[Incense, Sacrifice], &[Climbing, Travel, Wedding, Renovation]),
            Cheng => (
                &[Wedding, Opening, Trading, Travel, Moving, Renovation],
                &[Lawsuit],
            ),
            Shou => (&[Trading, Sacrifice, Renovation], &[Funeral, Medical, Travel]),
            Kai => (
                &[Wedding, Opening, Trading, Travel, Moving],
                &[Funeral, GroundBreaking],
            ),
            Bi => (
                &[Sacrifice, Renovation, Funeral],
                &[Opening, Trading, Travel, Medical],
            ),
        }
    }
}

impl From<JianChu> for char {
    fn from(officer: JianChu) -> char {
        officer.label()
    }
}

impl fmt::Display for JianChu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
