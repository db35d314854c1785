//! Configuration vocabulary: which language, country and register an
//! analyser works with.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedLanguage(String),
    UnsupportedCountry(String),
    UnsupportedForm(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnsupportedLanguage(v) => write!(f, "unsupported language {:?}, expected \"cs\" or \"sk\"", v),
            ConfigError::UnsupportedCountry(v) => write!(f, "unsupported country {:?}, expected \"CZ\" or \"SK\"", v),
            ConfigError::UnsupportedForm(v) => write!(f, "unsupported vocative form {:?}, expected informal (0) or formal (1)", v),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Language of the produced address form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Language {
    #[cfg_attr(feature = "serde", serde(rename = "cs"))]
    Czech,
    #[cfg_attr(feature = "serde", serde(rename = "sk"))]
    Slovak,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Czech => "cs",
            Language::Slovak => "sk",
        }
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cs" => Ok(Language::Czech),
            "sk" => Ok(Language::Slovak),
            other => Err(ConfigError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Country {
    #[cfg_attr(feature = "serde", serde(rename = "CZ"))]
    Czechia,
    #[cfg_attr(feature = "serde", serde(rename = "SK"))]
    Slovakia,
}

impl Country {
    pub fn code(self) -> &'static str {
        match self {
            Country::Czechia => "CZ",
            Country::Slovakia => "SK",
        }
    }
}

impl FromStr for Country {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CZ" => Ok(Country::Czechia),
            "SK" => Ok(Country::Slovakia),
            other => Err(ConfigError::UnsupportedCountry(other.to_string())),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Register of the address form.
///
/// `Informal` addresses the bearer by given name ("Tomáši"), `Formal` by
/// title or family name ("inženýre", "Kudělko").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum VocativeForm {
    Informal = 0,
    Formal = 1,
}

impl TryFrom<u8> for VocativeForm {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(VocativeForm::Informal),
            1 => Ok(VocativeForm::Formal),
            other => Err(ConfigError::UnsupportedForm(other.to_string())),
        }
    }
}

impl FromStr for VocativeForm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "informal" => Ok(VocativeForm::Informal),
            "formal" => Ok(VocativeForm::Formal),
            other => Err(ConfigError::UnsupportedForm(other.to_string())),
        }
    }
}

impl fmt::Display for VocativeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocativeForm::Informal => f.write_str("informal"),
            VocativeForm::Formal => f.write_str("formal"),
        }
    }
}
