//! Officer (建除十二值星) and day-god (黄黑道十二神) vocabularies.
//!
//! Snapshots carry these as plain labels. Parsing is lenient: a label outside
//! the vocabulary yields `None`, which the rules treat as "no signal".

use serde::{Deserialize, Serialize};

/// One of the twelve day officers, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Officer {
    /// 建
    Establish,
    /// 除
    Remove,
    /// 满
    Full,
    /// 平
    Balance,
    /// 定
    Settle,
    /// 执
    Hold,
    /// 破
    Break,
    /// 危
    Danger,
    /// 成
    Success,
    /// 收
    Receive,
    /// 开
    Open,
    /// 闭
    Close,
}

impl Officer {
    /// Parse an officer from its single-character label.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|o| o.label() == s.trim())
    }

    /// All officers in cycle order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Establish,
            Self::Remove,
            Self::Full,
            Self::Balance,
            Self::Settle,
            Self::Hold,
            Self::Break,
            Self::Danger,
            Self::Success,
            Self::Receive,
            Self::Open,
            Self::Close,
        ]
    }

    /// The almanac label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Establish => "建",
            Self::Remove => "除",
            Self::Full => "满",
            Self::Balance => "平",
            Self::Settle => "定",
            Self::Hold => "执",
            Self::Break => "破",
            Self::Danger => "危",
            Self::Success => "成",
            Self::Receive => "收",
            Self::Open => "开",
            Self::Close => "闭",
        }
    }
}

impl std::fmt::Display for Officer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a day-god belongs to the yellow (黄道) or black (黑道) path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// 黄道吉神.
    Auspicious,
    /// 黑道凶神.
    Inauspicious,
}

/// One of the twelve day-gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayGod {
    /// 青龙
    AzureDragon,
    /// 明堂
    BrightHall,
    /// 天刑
    HeavenlyPunishment,
    /// 朱雀
    VermilionBird,
    /// 金匮
    GoldenCoffer,
    /// 天德
    HeavenlyVirtue,
    /// 白虎
    WhiteTiger,
    /// 玉堂
    JadeHall,
    /// 天牢
    HeavenlyPrison,
    /// 玄武
    BlackTortoise,
    /// 司命
    Destiny,
    /// 勾陈
    CurvedArray,
}

impl DayGod {
    /// Parse a day-god from its label. `金贵` is accepted for 金匮.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "金贵" => Some(Self::GoldenCoffer),
            other => Self::all().iter().copied().find(|g| g.label() == other),
        }
    }

    /// All day-gods in cycle order.
    pub fn all() -> &'static [Self] {
        &[
            Self::AzureDragon,
            Self::BrightHall,
            Self::HeavenlyPunishment,
            Self::VermilionBird,
            Self::GoldenCoffer,
            Self::HeavenlyVirtue,
            Self::WhiteTiger,
            Self::JadeHall,
            Self::HeavenlyPrison,
            Self::BlackTortoise,
            Self::Destiny,
            Self::CurvedArray,
        ]
    }

    /// The almanac label.
    pub fn label(self) -> &'static str {
        match self {
            Self::AzureDragon => "青龙",
            Self::BrightHall => "明堂",
            Self::HeavenlyPunishment => "天刑",
            Self::VermilionBird => "朱雀",
            Self::GoldenCoffer => "金匮",
            Self::HeavenlyVirtue => "天德",
            Self::WhiteTiger => "白虎",
            Self::JadeHall => "玉堂",
            Self::HeavenlyPrison => "天牢",
            Self::BlackTortoise => "玄武",
            Self::Destiny => "司命",
            Self::CurvedArray => "勾陈",
        }
    }

    /// Which path this spirit walks.
    pub fn polarity(self) -> Polarity {
        match self {
            Self::AzureDragon
            | Self::BrightHall
            | Self::GoldenCoffer
            | Self::HeavenlyVirtue
            | Self::JadeHall
            | Self::Destiny => Polarity::Auspicious,
            Self::HeavenlyPunishment
            | Self::VermilionBird
            | Self::WhiteTiger
            | Self::HeavenlyPrison
            | Self::BlackTortoise
            | Self::CurvedArray => Polarity::Inauspicious,
        }
    }
}

impl std::fmt::Display for DayGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
