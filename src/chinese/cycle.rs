//! 天干、地支與干支
//!
//! 干支各以序號 0 起算：甲 = 0 … 癸 = 9，子 = 0 … 亥 = 11。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// 十天干
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// 十天干，依序號排列。
pub const STEMS: [HeavenlyStem; 10] = {
    use HeavenlyStem::*;
    [Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui]
};

const STEM_LABELS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

impl HeavenlyStem {
    /// 序號，`0..10`。
    pub const fn index(self) -> usize {
        self as usize
    }
    /// 依序號取得天干，序號取模 10。
    pub const fn from_index(index: usize) -> Self {
        STEMS[index % 10]
    }
    /// 文本形式，如「甲」。
    pub const fn label(self) -> char {
        STEM_LABELS[self.index()]
    }
    /// 由單字取得天干。
    ///
    /// # 用例
    ///
    /// ```
    /// use huangli::chinese::HeavenlyStem;
    ///
    /// assert_eq!(HeavenlyStem::Ji, HeavenlyStem::from_char('己').unwrap());
    /// assert!(HeavenlyStem::from_char('子').is_err());
    /// ```
    pub fn from_char(c: char) -> Result<Self> {
        STEM_LABELS
            .iter()
            .position(|&l| l == c)
            .map(Self::from_index)
            .ok_or(Error::UnknownSymbol(c))
    }
}

impl TryFrom<char> for HeavenlyStem {
    type Error = Error;
    fn try_from(c: char) -> Result<Self> {
        Self::from_char(c)
    }
}
impl From<HeavenlyStem> for char {
    fn from(stem: HeavenlyStem) -> char {
        stem.label()
    }
}
impl fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 十二地支
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// 十二地支，依序號排列。
pub const BRANCHES: [EarthlyBranch; 12] = {
    use EarthlyBranch::*;
    [Zi, Chou, Yin, Mao, Chen, Si, Wu, Wei, Shen, You, Xu, Hai]
};

const BRANCH_LABELS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const ZODIAC: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龍", "蛇", "馬", "羊", "猴", "雞", "狗", "豬",
];

impl EarthlyBranch {
    /// 序號，`0..12`。
    pub const fn index(self) -> usize {
        self as usize
    }
    /// 依序號取得地支，序號取模 12。
    pub const fn from_index(index: usize) -> Self {
        BRANCHES[index % 12]
    }
    /// 文本形式，如「子」。
    pub const fn label(self) -> char {
        BRANCH_LABELS[self.index()]
    }
    /// 由單字取得地支。
    pub fn from_char(c: char) -> Result<Self> {
        BRANCH_LABELS
            .iter()
            .position(|&l| l == c)
            .map(Self::from_index)
            .ok_or(Error::UnknownSymbol(c))
    }

    /// 六沖之支，即相隔六位者。
    ///
    /// # 用例
    ///
    /// ```
    /// use huangli::chinese::EarthlyBranch::*;
    ///
    /// assert_eq!(Shen, Yin.opposite());
    /// assert_eq!(Zi, Wu.opposite());
    /// ```
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 6)
    }

    /// 所屬三合局。
    pub const fn san_he_group(self) -> SanHe {
        use EarthlyBranch::*;
        match self {
            Yin | Wu | Xu => SanHe {
                stem: HeavenlyStem::Bing,
                element: Element::Fire,
            },
            Shen | Zi | Chen => SanHe {
                stem: HeavenlyStem::Ren,
                element: Element::Water,
            },
            Hai | Mao | Wei => SanHe {
                stem: HeavenlyStem::Jia,
                element: Element::Wood,
            },
            Si | You | Chou => SanHe {
                stem: HeavenlyStem::Geng,
                element: Element::Metal,
            },
        }
    }

    /// 劫煞所在之支，依三合局而定。
    pub const fn jie_sha_branch(self) -> Self {
        use EarthlyBranch::*;
        match self {
            Shen | Zi | Chen => Si,
            Hai | Mao | Wei => Shen,
            Yin | Wu | Xu => Hai,
            Si | You | Chou => Yin,
        }
    }

    /// 生肖
    pub const fn zodiac(self) -> &'static str {
        ZODIAC[self.index()]
    }
}

impl TryFrom<char> for EarthlyBranch {
    type Error = Error;
    fn try_from(c: char) -> Result<Self> {
        Self::from_char(c)
    }
}
impl From<EarthlyBranch> for char {
    fn from(branch: EarthlyBranch) -> char {
        branch.label()
    }
}
impl fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 五行
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const fn label(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }
}

impl From<Element> for &'static str {
    fn from(e: Element) -> &'static str {
        e.label()
    }
}
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 三合局：局中三支同歸一行，並以該行陽干為代表。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SanHe {
    pub stem: HeavenlyStem,
    pub element: Element,
}

/// 干支，即年、月、日之一柱。
///
/// 文本形式為二字，如「甲辰」。解析時只讀首二字，其後如「年」字者不論。
///
/// # 用例
///
/// ```
/// use huangli::chinese::{EarthlyBranch, GanZhi, HeavenlyStem};
///
/// let pillar: GanZhi = "甲辰".parse().unwrap();
/// assert_eq!(GanZhi::new(HeavenlyStem::Jia, EarthlyBranch::Chen), pillar);
/// assert_eq!(Some(41), pillar.sexagenary());
/// assert_eq!(pillar, "甲辰年".parse().unwrap());
/// assert!("甲".parse::<GanZhi>().is_err());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GanZhi {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl GanZhi {
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// 干支序號轉為干支，1 為甲子，60 為癸亥，其餘取模 60。
    ///
    /// # 用例
    ///
    /// ```
    /// use huangli::chinese::GanZhi;
    ///
    /// assert_eq!("乙巳", GanZhi::from_sexagenary(42).to_string());
    /// ```
    pub fn from_sexagenary(num: i32) -> Self {
        let n = (num - 1).rem_euclid(60) as usize;
        Self::new(HeavenlyStem::from_index(n), EarthlyBranch::from_index(n))
    }

    /// 干支序號，`1..=60`。干支陰陽不配（如「甲丑」）者不在六十甲子之內，返回 `None`。
    pub fn sexagenary(&self) -> Option<u32> {
        let (s, b) = (self.stem.index() as i32, self.branch.index() as i32);
        if s % 2 != b % 2 {
            return None;
        }
        Some((6 * s - 5 * b).rem_euclid(60) as u32 + 1)
    }

    /// 取得所給公元年的干支。不考慮歲首，僅以公元年數推算。
    ///
    /// 公元 4 年為甲子年。
    ///
    /// # 用例
    ///
    /// ```
    /// use huangli::chinese::GanZhi;
    ///
    /// assert_eq!("庚辰", GanZhi::of_year(2000).to_string());
    /// assert_eq!("甲子", GanZhi::of_year(-2696).to_string());
    /// ```
    pub fn of_year(year: i32) -> Self {
        Self::from_sexagenary(year.rem_euclid(60) - 3)
    }
}

impl FromStr for GanZhi {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedGanZhi(s.to_owned());
        let mut chars = s.chars();
        let (Some(stem), Some(branch)) = (chars.next(), chars.next()) else {
            return Err(malformed());
        };
        Ok(Self::new(
            HeavenlyStem::from_char(stem).map_err(|_| malformed())?,
            EarthlyBranch::from_char(branch).map_err(|_| malformed())?,
        ))
    }
}

impl fmt::Display for GanZhi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl Serialize for GanZhi {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GanZhi {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
