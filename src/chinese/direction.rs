//! 喜神、財神、福神方位，皆以日干定之。

use serde::Serialize;

use super::cycle::HeavenlyStem::{self, *};

/// 八方
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Direction {
    pub const fn label(self) -> &'static str {
        use Direction::*;
        match self {
            North => "正北",
            Northeast => "东北",
            East => "正东",
            Southeast => "东南",
            South => "正南",
            Southwest => "西南",
            West => "正西",
            Northwest => "西北",
        }
    }
}

impl From<Direction> for &'static str {
    fn from(d: Direction) -> &'static str {
        d.label()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 當日三神方位
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct LuckyDirections {
    /// 喜神
    pub joy: Direction,
    /// 財神
    pub wealth: Direction,
    /// 福神
    pub fortune: Direction,
}

impl LuckyDirections {
    pub const fn for_stem(stem: HeavenlyStem) -> Self {
        Self {
            joy: joy(stem),
            wealth: wealth(stem),
            fortune: fortune(stem),
        }
    }

    /// 以日柱文本首字為日干。首字不是天干則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use huangli::chinese::{Direction, LuckyDirections};
    ///
    /// let lucky = LuckyDirections::for_day_label("己巳").unwrap();
    /// assert_eq!(Direction::Northeast, lucky.joy);
    /// assert_eq!("正北", lucky.wealth.label());
    /// assert_eq!("正北", lucky.fortune.label());
    /// ```
    pub fn for_day_label(label: &str) -> Option<Self> {
        label.chars().next().and_then(lucky_directions)
    }
}

/// 由日干字取得三神方位，不是天干則返回 `None`。
pub fn lucky_directions(stem: char) -> Option<LuckyDirections> {
    HeavenlyStem::from_char(stem)
        .ok()
        .map(LuckyDirections::for_stem)
}

/// 甲己在艮乙庚乾，丙辛坤位喜神安。丁壬只向離宮坐，戊癸原來在巽間。
const fn joy(stem: HeavenlyStem) -> Direction {
    match stem {
        Jia | Ji => Direction::Northeast,
        Yi | Geng => Direction::Northwest,
        Bing | Xin => Direction::Southwest,
        Ding | Ren => Direction::South,
        Wu | Gui => Direction::Southeast,
    }
}

/// 甲乙艮方丙丁坤，戊己財神坐坎位。庚辛正東壬癸南，此是財神正方位。
const fn wealth(stem: HeavenlyStem) -> Direction {
    match stem {
        Jia | Yi => Direction::Northeast,
        Bing | Ding => Direction::Southwest,
        Wu | Ji => Direction::North,
        Geng | Xin => Direction::East,
        Ren | Gui => Direction::South,
    }
}

/// 甲己正北是福神，丙辛西北乾宮存。乙庚坤位戊癸艮，丁壬巽上好追尋。
const fn fortune(stem: HeavenlyStem) -> Direction {
    match stem {
        Jia | Ji => Direction::North,
        Yi | Geng => Direction::Southwest,
        Bing | Xin => Direction::Northwest,
        Ding | Ren => Direction::Southeast,
        Wu | Gui => Direction::Northeast,
    }
}
