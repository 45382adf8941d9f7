//! 神煞
//!
//! 多數神煞以月建為綱：天德、五鬼依月建定某干或某支當值，三合、六合看日支與月建的關係，
//! 天乙貴人看日干，劫煞則看年支。各項判斷互不相干，依固定次序逐一檢查。

use std::fmt;

use serde::Serialize;

use super::cycle::{EarthlyBranch, GanZhi, HeavenlyStem};
use super::yiji::HuangliAction::{self, *};

/// 神煞
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum ShenSha {
    /// 天德
    TianDe,
    /// 月德
    YueDe,
    /// 天乙貴人
    TianYi,
    /// 月恩
    YueEn,
    /// 三合
    SanHe,
    /// 六合
    LiuHe,
    /// 月破
    YuePo,
    /// 大耗
    DaHao,
    /// 朱雀
    ZhuQue,
    /// 日破
    RiPo,
    /// 劫煞
    JieSha,
    /// 五鬼
    WuGui,
    /// 往亡
    WangWang,
    /// 重日
    ZhongRi,
}

type Actions = &'static [HuangliAction];

impl ShenSha {
    /// 吉神為 `true`，凶煞為 `false`。
    pub const fn is_auspicious(self) -> bool {
        use ShenSha::*;
        match self {
            TianDe | YueDe | TianYi | YueEn | SanHe | LiuHe => true,
            YuePo | DaHao | ZhuQue | RiPo | JieSha | WuGui | WangWang | ZhongRi => false,
        }
    }

    pub const fn name(self) -> &'static str {
        use ShenSha::*;
        match self {
            TianDe => "天德",
            YueDe => "月德",
            TianYi => "天乙贵人",
            YueEn => "月恩",
            SanHe => "三合",
            LiuHe => "六合",
            YuePo => "月破",
            DaHao => "大耗",
            ZhuQue => "朱雀",
            RiPo => "日破",
            JieSha => "劫煞",
            WuGui => "五鬼",
            WangWang => "往亡",
            ZhongRi => "重日",
        }
    }

    /// 該神煞所主宜忌，返回 `(宜, 忌)`。
    pub fn yi_ji(self) -> (Actions, Actions) {
        use ShenSha::*;
        match self {
            TianDe | YueDe => (
                &[Sacrifice, Prayer, Renovation, Wedding, Travel, Moving],
                &[],
            ),
            TianYi => (&[Travel, Trading, Wedding], &[]),
            SanHe | LiuHe => (&[Wedding, Trading, Engagement], &[]),
            YuePo | DaHao | RiPo => (&[], &[Everything, Wedding, Opening, Travel]),
            ZhuQue => (&[], &[Trading, Engagement]),
            JieSha => (&[], &[Travel, Moving, Trading]),
            WuGui => (&[], &[Travel, Sacrifice, Prayer]),
            WangWang => (&[], &[Travel, Wedding]),
            ZhongRi => (&[], &[Funeral]),
            YueEn => (&[], &[]),
        }
    }
}

impl From<ShenSha> for &'static str {
    fn from(s: ShenSha) -> &'static str {
        s.name()
    }
}

impl fmt::Display for ShenSha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 某神煞當值之日所需的日干或日支。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Mark {
    Stem(HeavenlyStem),
    Branch(EarthlyBranch),
}

impl Mark {
    fn hits(self, day: GanZhi) -> bool {
        match self {
            Mark::Stem(stem) => day.stem == stem,
            Mark::Branch(branch) => day.branch == branch,
        }
    }
}

/// 天德：正丁二坤中，三壬四辛同，五乾六甲上，七癸八艮逢，九丙十居乙，子巽丑庚中。
///
/// 坤、乾、艮、巽四維分別取申、亥、寅、巳。
fn tian_de(month: EarthlyBranch) -> Mark {
    use EarthlyBranch::*;
    use HeavenlyStem as S;
    match month {
        Yin => Mark::Stem(S::Ding),
        Mao => Mark::Branch(Shen),
        Chen => Mark::Stem(S::Ren),
        Si => Mark::Stem(S::Xin),
        Wu => Mark::Branch(Hai),
        Wei => Mark::Stem(S::Jia),
        Shen => Mark::Stem(S::Gui),
        You => Mark::Branch(Yin),
        Xu => Mark::Stem(S::Bing),
        Hai => Mark::Stem(S::Yi),
        Zi => Mark::Branch(Si),
        Chou => Mark::Stem(S::Geng),
    }
}

/// 五鬼：子壬丑乙寅午長，卯庚辰亥巳辛方，午戌未癸申丙上，酉丁戌巳亥甲當。
fn wu_gui(month: EarthlyBranch) -> Mark {
    use EarthlyBranch::*;
    use HeavenlyStem as S;
    match month {
        Zi => Mark::Stem(S::Ren),
        Chou => Mark::Stem(S::Yi),
        Yin => Mark::Branch(Wu),
        Mao => Mark::Stem(S::Geng),
        Chen => Mark::Branch(Hai),
        Si => Mark::Stem(S::Xin),
        Wu => Mark::Branch(Xu),
        Wei => Mark::Stem(S::Gui),
        Shen => Mark::Stem(S::Bing),
        You => Mark::Stem(S::Ding),
        Xu => Mark::Branch(Si),
        Hai => Mark::Stem(S::Jia),
    }
}

/// 天乙貴人：甲戊並牛羊，乙己鼠猴鄉，丙丁豬雞位，庚辛逢馬虎，壬癸兔蛇藏。
fn tian_yi(day: HeavenlyStem) -> [EarthlyBranch; 2] {
    use EarthlyBranch::*;
    use HeavenlyStem as S;
    match day {
        S::Jia | S::Wu => [Chou, Wei],
        S::Yi | S::Ji => [Zi, Shen],
        S::Bing | S::Ding => [Hai, You],
        S::Geng | S::Xin => [Wu, Yin],
        S::Ren | S::Gui => [Mao, Si],
    }
}

/// 六合：子丑、寅亥、卯戌、辰酉、巳申、午未。
pub const fn liu_he_partner(branch: EarthlyBranch) -> EarthlyBranch {
    use EarthlyBranch::*;
    match branch {
        Zi => Chou,
        Chou => Zi,
        Yin => Hai,
        Hai => Yin,
        Mao => Xu,
        Xu => Mao,
        Chen => You,
        You => Chen,
        Si => Shen,
        Shen => Si,
        Wu => Wei,
        Wei => Wu,
    }
}

/// 取得給定月柱、日柱（及可選年支）下當值的神煞，依檢查次序排列。
///
/// 月破必與大耗、日破同現。未提供年支則不檢查劫煞。
///
/// # 用例
///
/// ```
/// use huangli::chinese::{ShenSha, shen_sha};
///
/// let found = shen_sha("丙寅".parse().unwrap(), "庚申".parse().unwrap(), None);
/// assert_eq!(&[ShenSha::YuePo, ShenSha::DaHao, ShenSha::RiPo], &found[..3]);
///
/// let found = shen_sha("丙寅".parse().unwrap(), "丁卯".parse().unwrap(), None);
/// assert_eq!(vec![ShenSha::TianDe], found);
/// ```
pub fn shen_sha(month: GanZhi, day: GanZhi, year: Option<EarthlyBranch>) -> Vec<ShenSha> {
    let mut result = Vec::new();
    let (m, d) = (month.branch.index(), day.branch.index());

    if day.branch == month.branch.opposite() {
        result.extend([ShenSha::YuePo, ShenSha::DaHao, ShenSha::RiPo]);
    }
    if tian_de(month.branch).hits(day) {
        result.push(ShenSha::TianDe);
    }
    if day.stem == month.branch.san_he_group().stem {
        result.push(ShenSha::YueDe);
    }
    if tian_yi(day.stem).contains(&day.branch) {
        result.push(ShenSha::TianYi);
    }
    if d == (m + 4) % 12 || d == (m + 8) % 12 {
        result.push(ShenSha::SanHe);
    }
    if day.branch == liu_he_partner(month.branch) {
        result.push(ShenSha::LiuHe);
    }
    if let Some(year) = year {
        if day.branch == year.jie_sha_branch() {
            result.push(ShenSha::JieSha);
        }
    }
    if wu_gui(month.branch).hits(day) {
        result.push(ShenSha::WuGui);
    }

    result
}
