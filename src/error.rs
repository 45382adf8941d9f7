//! Errors reported while resolving pillars or loading configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// 字符不是天干或地支。
    #[error("unknown stem or branch symbol `{0}`")]
    UnknownSymbol(char),

    /// 干支文本長度不為二，或含無法識別的字符。
    #[error("malformed gan-zhi label `{0}`")]
    MalformedGanZhi(String),

    /// 不是已知的黃曆事項。
    #[error("unknown almanac action `{0}`")]
    UnknownAction(String),

    #[error("lunar month {0} not in 1..=12")]
    InvalidLunarMonth(u32),

    #[error("date out of supported range")]
    DateOutOfRange,

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
