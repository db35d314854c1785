//! Cleans a raw first-name list before it is archived.

use std::collections::BTreeMap;

use vokativ_parser::normalize::title_case;
use vokativ_protocol::{NameEntry, NameFlags, NameList};

/// Trims, drops registry counters ("Toma (1)"), title-cases and merges
/// duplicate names, OR-ing their genders. Entries without a name or a
/// gender are dropped.
pub fn clean(list: NameList) -> NameList {
    let mut merged: BTreeMap<String, NameFlags> = BTreeMap::new();

    for entry in list.entries {
        let flags = entry.flags();
        let name = strip_counter(entry.name.trim());
        if name.is_empty() || flags.is_empty() {
            continue;
        }
        *merged.entry(title_case(&name.to_lowercase())).or_insert(NameFlags::empty()) |= flags;
    }

    NameList {
        version: list.version,
        entries: merged.into_iter().map(|(name, flags)| NameEntry::new(name, flags)).collect(),
    }
}

fn strip_counter(name: &str) -> &str {
    let Some(rest) = name.strip_suffix(')') else {
        return name;
    };
    match rest.rfind('(') {
        Some(open) if !rest[open + 1..].is_empty() && rest[open + 1..].chars().all(|c| c.is_ascii_digit()) => {
            rest[..open].trim_end()
        }
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_counter() {
        assert_eq!(strip_counter("Toma  (1)"), "Toma");
        assert_eq!(strip_counter("Toma(12)"), "Toma");
        assert_eq!(strip_counter("Toma (x)"), "Toma (x)");
        assert_eq!(strip_counter("Toma ()"), "Toma ()");
        assert_eq!(strip_counter("Toma"), "Toma");
    }

    #[test]
    fn test_clean_merges_duplicates() {
        let list = NameList {
            version: 7,
            entries: vec![
                NameEntry::new("NIKOLA", NameFlags::MALE),
                NameEntry::new(" nikola (2)", NameFlags::FEMALE),
                NameEntry::new("Tomáš", NameFlags::MALE),
                NameEntry::new("   ", NameFlags::MALE),
                NameEntry::new("Nobody", NameFlags::empty()),
            ],
        };

        let cleaned = clean(list);
        assert_eq!(cleaned.version, 7);
        assert_eq!(
            cleaned.entries,
            vec![
                NameEntry::new("Nikola", NameFlags::MALE | NameFlags::FEMALE),
                NameEntry::new("Tomáš", NameFlags::MALE),
            ]
        );
    }
}
