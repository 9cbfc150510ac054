use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

/// Letter grade awarded to a play.
///
/// The discriminant is the byte written to the score container.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
    EnumString,
)]
#[repr(u8)]
pub enum Grade {
    #[strum(serialize = "SSH")]
    Ssh = 0,
    #[strum(serialize = "SS")]
    Ss = 1,
    #[strum(serialize = "SH")]
    Sh = 2,
    S = 3,
    A = 4,
    B = 5,
    C = 6,
    D = 7,
    #[default]
    F = 8,
}

impl Grade {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn symbol(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
