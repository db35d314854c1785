use rkyv::{Archive, Deserialize, Serialize};
use crate::gender::NameFlags;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One registered first name.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct NameEntry {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub male: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub female: bool,
}

impl NameEntry {
    pub fn new(name: impl Into<String>, flags: NameFlags) -> Self {
        Self {
            name: name.into(),
            male: flags.contains(NameFlags::MALE),
            female: flags.contains(NameFlags::FEMALE),
        }
    }

    pub fn flags(&self) -> NameFlags {
        flags_of(self.male, self.female)
    }
}

impl ArchivedNameEntry {
    pub fn flags(&self) -> NameFlags {
        flags_of(self.male, self.female)
    }
}

fn flags_of(male: bool, female: bool) -> NameFlags {
    let mut flags = NameFlags::empty();
    flags.set(NameFlags::MALE, male);
    flags.set(NameFlags::FEMALE, female);
    flags
}

/// The compiled first-name list, as written by `vokativ-cli compile`.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct NameList {
    pub version: u32,
    pub entries: Vec<NameEntry>,
}
