use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Grammatical gender of the name bearer. There is no "unknown": every
/// analysis resolves to one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn is_female(self) -> bool {
        self == Gender::Female
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGender(pub String);

impl fmt::Display for UnknownGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gender {:?}, expected \"male\" or \"female\"", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownGender {}

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(UnknownGender(other.to_string())),
        }
    }
}

bitflags! {
    /// Genders a first name is registered for. Unisex names carry both.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NameFlags: u8 {
        const MALE = 1;
        const FEMALE = 2;
    }
}

impl From<Gender> for NameFlags {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => NameFlags::MALE,
            Gender::Female => NameFlags::FEMALE,
        }
    }
}
