//! Known first names, keyed by gender.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use rkyv::AlignedVec;
use thiserror::Error;
use tracing::debug;
use vokativ_protocol::{Gender, NameFlags, NameList};

use crate::builtin::{FEMALE_NAMES, MALE_NAMES};
use crate::normalize::{fold_ascii, Lookup};

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("name archive is corrupt: {0}")]
    Corrupt(String),
}

static BUILTIN: Lazy<Arc<NameDatabase>> = Lazy::new(|| {
    let mut db = NameDatabase::new();
    for name in MALE_NAMES {
        db.insert(name, NameFlags::MALE);
    }
    for name in FEMALE_NAMES {
        db.insert(name, NameFlags::FEMALE);
    }
    debug!(names = db.len(), "loaded built-in first-name database");
    Arc::new(db)
});

/// Two lookup tables over the same names: one diacritic-exact, one
/// ASCII-folded. Both are keyed by the lower-cased name and record which
/// genders the name is registered for.
///
/// Immutable once built; share it through an `Arc`.
#[derive(Debug, Default, Clone)]
pub struct NameDatabase {
    exact: HashMap<String, NameFlags>,
    folded: HashMap<String, NameFlags>,
}

impl NameDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Common Czech and Slovak first names, built on first use.
    pub fn builtin() -> Arc<NameDatabase> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_list(list: &NameList) -> Self {
        let mut db = Self::new();
        for entry in &list.entries {
            db.insert(&entry.name, entry.flags());
        }
        db
    }

    /// Loads a list compiled by `vokativ-cli compile`.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, DatabaseError> {
        // Archives must be read from aligned memory.
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let archived = rkyv::check_archived_root::<NameList>(&aligned[..])
            .map_err(|e| DatabaseError::Corrupt(format!("{:?}", e)))?;

        let mut db = Self::new();
        for entry in archived.entries.iter() {
            db.insert(entry.name.as_str(), entry.flags());
        }
        debug!(version = archived.version, names = db.len(), "loaded first-name archive");
        Ok(db)
    }

    /// Registers `name` for `flags`, merging with genders already known.
    pub fn insert(&mut self, name: &str, flags: NameFlags) {
        let lower = name.trim().to_lowercase();
        if lower.is_empty() {
            return;
        }

        *self.folded.entry(fold_ascii(&lower)).or_insert(NameFlags::empty()) |= flags;
        *self.exact.entry(lower).or_insert(NameFlags::empty()) |= flags;
    }

    /// Genders `name` is registered for; empty when unknown.
    pub fn classify(&self, name: &str, lookup: Lookup) -> NameFlags {
        let lower = name.to_lowercase();
        let found = match lookup {
            Lookup::Strict => self.exact.get(&lower),
            Lookup::Loose => self.folded.get(&fold_ascii(&lower)),
        };
        found.copied().unwrap_or(NameFlags::empty())
    }

    pub fn contains(&self, name: &str, gender: Gender, lookup: Lookup) -> bool {
        self.classify(name, lookup).contains(NameFlags::from(gender))
    }

    /// Known under either gender.
    pub fn is_first_name(&self, name: &str, lookup: Lookup) -> bool {
        !self.classify(name, lookup).is_empty()
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}
