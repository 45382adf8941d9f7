//! 由月柱、日柱（及年支）合成建除、神煞與宜忌。

use serde::Serialize;
use tracing::{trace, warn};

use super::cycle::{EarthlyBranch, GanZhi};
use super::officer::JianChu;
use super::shensha::{ShenSha, shen_sha};
use super::yiji::{YiJi, resolve_yi_ji};
use crate::error::Result;

/// 一日之吉凶
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Auspice {
    /// 當值神煞，依檢查次序排列，可能重複
    pub shen_sha: Vec<ShenSha>,
    /// 建除
    pub officer: JianChu,
    /// 宜
    pub yi: Vec<&'static str>,
    /// 忌
    pub ji: Vec<&'static str>,
}

/// 取得給定月柱、日柱下的建除、神煞與宜忌。
///
/// 年支僅用於劫煞，未提供則不檢查。
///
/// # 用例
///
/// ```
/// use huangli::chinese::{JianChu, evaluate_auspice};
///
/// let auspice = evaluate_auspice("丙寅".parse().unwrap(), "庚申".parse().unwrap(), None);
/// assert_eq!(JianChu::Po, auspice.officer);
/// assert_eq!(vec!["诸事不宜"], auspice.ji);
/// ```
pub fn evaluate_auspice(month: GanZhi, day: GanZhi, year: Option<EarthlyBranch>) -> Auspice {
    let officer = JianChu::of(month.branch, day.branch);
    let shen_sha = shen_sha(month, day, year);
    trace!(%month, %day, %officer, ?shen_sha, "evaluated day");
    let YiJi { yi, ji } = resolve_yi_ji(&shen_sha, Some(officer));
    Auspice {
        shen_sha,
        officer,
        yi,
        ji,
    }
}

impl Auspice {
    /// 以干支文本計算，如 `("丙寅", "甲子", Some("甲辰"))`。
    ///
    /// 月柱、日柱文本無法識別則回報 [`crate::Error::MalformedGanZhi`]；
    /// 年柱文本無法識別則視同未提供。
    pub fn from_labels(month: &str, day: &str, year: Option<&str>) -> Result<Self> {
        let month: GanZhi = month.parse()?;
        let day: GanZhi = day.parse()?;
        let year = year.and_then(|label| match label.parse::<GanZhi>() {
            Ok(year) => Some(year.branch),
            Err(err) => {
                warn!(%err, "ignoring year pillar");
                None
            }
        });
        Ok(evaluate_auspice(month, day, year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::chinese::cycle::{BRANCHES, STEMS};

    #[test]
    fn yue_po_overrides_everything() {
        for month in BRANCHES {
            for stem in STEMS {
                let auspice = evaluate_auspice(
                    GanZhi::new(STEMS[0], month),
                    GanZhi::new(stem, month.opposite()),
                    Some(month),
                );
                assert!(auspice.shen_sha.contains(&ShenSha::YuePo));
                assert_eq!(vec!["祭祀", "沐浴", "破屋", "坏垣"], auspice.yi);
                assert_eq!(vec!["诸事不宜"], auspice.ji);
            }
        }
    }

    #[test]
    fn conflicting_rules() {
        // 丙寅月庚午日：天乙貴人宜出行，五鬼忌之；定日宜祭祀，五鬼亦忌之
        let auspice = Auspice::from_labels("丙寅", "庚午", None).unwrap();
        assert_eq!(JianChu::Ding, auspice.officer);
        assert_eq!(
            vec![ShenSha::TianYi, ShenSha::SanHe, ShenSha::WuGui],
            auspice.shen_sha
        );
        assert!(auspice.ji.contains(&"出行"));
        assert!(!auspice.yi.contains(&"出行"));
        assert!(!auspice.yi.contains(&"祭祀"));
        assert_eq!(vec!["交易", "嫁娶", "开市", "纳采"], auspice.yi);
        assert!(auspice.yi.iter().all(|a| !auspice.ji.contains(a)));
    }

    #[test]
    fn year_rules() {
        // 丙午年劫煞在亥
        let with_year = Auspice::from_labels("丙寅", "乙亥", Some("丙午")).unwrap();
        assert_eq!(vec![ShenSha::LiuHe, ShenSha::JieSha], with_year.shen_sha);
        assert!(!with_year.yi.contains(&"交易"));

        let without = Auspice::from_labels("丙寅", "乙亥", None).unwrap();
        assert_eq!(vec![ShenSha::LiuHe], without.shen_sha);
        assert!(without.yi.contains(&"交易"));

        let malformed = Auspice::from_labels("丙寅", "乙亥", Some("丙")).unwrap();
        assert_eq!(without, malformed);
    }

    #[test]
    fn malformed_labels() {
        assert!(matches!(
            Auspice::from_labels("丙", "乙亥", None),
            Err(Error::MalformedGanZhi(_))
        ));
        assert!(matches!(
            Auspice::from_labels("丙寅", "乙x", None),
            Err(Error::MalformedGanZhi(_))
        ));
    }

    #[test]
    fn serializes_labels() {
        let auspice = Auspice::from_labels("丙寅", "丁卯", None).unwrap();
        let json = serde_json::to_value(&auspice).unwrap();
        assert_eq!("除", json["officer"]);
        assert_eq!(serde_json::json!(["天德"]), json["shen_sha"]);
    }
}
