//! 宜忌
//!
//! 由建除十二神與神煞合成當日宜忌。先以建除定下底子，再併入各神煞所主事項；
//! 月破、日破當值則一概不論，只取固定的宜忌；否則忌「諸事」者清空所宜，
//! 其餘宜忌相衝之事從忌。

use std::collections::HashSet;
use std::str::FromStr;

use serde::Serialize;

use super::officer::JianChu;
use super::shensha::ShenSha;
use crate::error::{Error, Result};

/// 黃曆事項，以其文本為準。
///
/// # 用例
///
/// ```
/// use huangli::chinese::HuangliAction;
///
/// let action: HuangliAction = "嫁娶".parse().unwrap();
/// assert_eq!(HuangliAction::Wedding, action);
/// assert_eq!("嫁娶", action.to_string());
/// assert!("婚礼".parse::<HuangliAction>().is_err());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum HuangliAction {
    Wedding,
    Engagement,
    Travel,
    Opening,
    Trading,
    Renovation,
    GroundBreaking,
    MoveIn,
    Moving,
    Funeral,
    Sacrifice,
    Prayer,
    Medical,
    Haircut,
    Lawsuit,
    Planting,
    Incense,
    Climbing,
    Bathing,
    DemolishHouse,
    DemolishWall,
    /// 「諸事」，列入忌則所宜盡廢。
    Everything,
}

impl HuangliAction {
    pub const fn label(self) -> &'static str {
        use HuangliAction::*;
        match self {
            Wedding => "嫁娶",
            Engagement => "纳采",
            Travel => "出行",
            Opening => "开市",
            Trading => "交易",
            Renovation => "修造",
            GroundBreaking => "动土",
            MoveIn => "入宅",
            Moving => "移徙",
            Funeral => "安葬",
            Sacrifice => "祭祀",
            Prayer => "祈福",
            Medical => "求医",
            Haircut => "理发",
            Lawsuit => "诉讼",
            Planting => "栽种",
            Incense => "安香",
            Climbing => "登高",
            Bathing => "沐浴",
            DemolishHouse => "破屋",
            DemolishWall => "坏垣",
            Everything => "诸事",
        }
    }
}

/// 全部黃曆事項，「諸事」居末。
pub const ACTIONS: [HuangliAction; 22] = {
    use HuangliAction::*;
    [
        Wedding,
        Engagement,
        Travel,
        Opening,
        Trading,
        Renovation,
        GroundBreaking,
        MoveIn,
        Moving,
        Funeral,
        Sacrifice,
        Prayer,
        Medical,
        Haircut,
        Lawsuit,
        Planting,
        Incense,
        Climbing,
        Bathing,
        DemolishHouse,
        DemolishWall,
        Everything,
    ]
};

impl FromStr for HuangliAction {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        ACTIONS
            .into_iter()
            .find(|a| a.label() == s)
            .ok_or_else(|| Error::UnknownAction(s.to_owned()))
    }
}

impl From<HuangliAction> for &'static str {
    fn from(a: HuangliAction) -> &'static str {
        a.label()
    }
}

impl std::fmt::Display for HuangliAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 月破、日破當值時唯一所宜。
const BROKEN_DAY_YI: [HuangliAction; 4] = [
    HuangliAction::Sacrifice,
    HuangliAction::Bathing,
    HuangliAction::DemolishHouse,
    HuangliAction::DemolishWall,
];
/// 月破、日破當值時所忌。
pub const BROKEN_DAY_JI: &str = "诸事不宜";
/// 無所宜時的佔位文本。
pub const EMPTY_YI: &str = "平";
/// 無所忌時的佔位文本。
pub const EMPTY_JI: &str = "无";

/// 宜忌結果，均為文本形式。
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct YiJi {
    pub yi: Vec<&'static str>,
    pub ji: Vec<&'static str>,
}

impl YiJi {
    fn broken_day() -> Self {
        Self {
            yi: BROKEN_DAY_YI.iter().map(|a| a.label()).collect(),
            ji: vec![BROKEN_DAY_JI],
        }
    }
}

/// 由神煞及（可選的）建除推得宜忌。
///
/// 結果依文本排序；若無所宜或無所忌，則分別以「平」「无」佔位。
///
/// # 用例
///
/// ```
/// use huangli::chinese::{JianChu, ShenSha, resolve_yi_ji};
///
/// let yi_ji = resolve_yi_ji(&[ShenSha::TianDe, ShenSha::WuGui], None);
/// assert!(!yi_ji.yi.contains(&"祭祀"));
/// assert!(yi_ji.ji.contains(&"祭祀"));
///
/// let yi_ji = resolve_yi_ji(&[ShenSha::YuePo, ShenSha::TianDe], Some(JianChu::Cheng));
/// assert_eq!(vec!["祭祀", "沐浴", "破屋", "坏垣"], yi_ji.yi);
/// assert_eq!(vec!["诸事不宜"], yi_ji.ji);
/// ```
pub fn resolve_yi_ji(shen_sha: &[ShenSha], officer: Option<JianChu>) -> YiJi {
    let mut yi = HashSet::new();
    let mut ji = HashSet::new();

    if let Some(officer) = officer {
        let (officer_yi, officer_ji) = officer.yi_ji();
        yi.extend(officer_yi.iter().copied());
        ji.extend(officer_ji.iter().copied());
    }
    for s in shen_sha {
        let (s_yi, s_ji) = s.yi_ji();
        yi.extend(s_yi.iter().copied());
        ji.extend(s_ji.iter().copied());
    }

    if shen_sha.iter().any(|s| matches!(s, ShenSha::YuePo | ShenSha::RiPo)) {
        return YiJi::broken_day();
    }

    if ji.contains(&HuangliAction::Everything) {
        yi.clear();
    }
    yi.retain(|a| !ji.contains(a));

    YiJi {
        yi: sorted_labels(yi, EMPTY_YI),
        ji: sorted_labels(ji, EMPTY_JI),
    }
}

fn sorted_labels(actions: HashSet<HuangliAction>, placeholder: &'static str) -> Vec<&'static str> {
    if actions.is_empty() {
        return vec![placeholder];
    }
    let mut labels: Vec<_> = actions.into_iter().map(HuangliAction::label).collect();
    labels.sort_unstable();
    labels
}
