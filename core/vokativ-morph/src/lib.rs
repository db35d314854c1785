#![no_std]

extern crate alloc;

// proptest needs std
#[cfg(test)]
extern crate std;

use alloc::string::{String, ToString};

/// Inflects a single name into the vocative case.
///
/// Implementations never fail: a name they cannot decline comes back
/// unchanged. `is_female` may be `None`, in which case the implementation
/// picks the gender itself.
pub trait Declension {
    fn vocative(&self, name: &str, is_female: Option<bool>, is_last_name: bool) -> String;
}

/// One inflectional rule: a name ending in `suffix` gets it replaced by
/// `with`.
struct Ending {
    suffix: &'static str,
    with: &'static str,
    /// Only applies when the letter before `suffix` is a consonant
    /// (fleeting e: Pavel -> Pavle, but Daniel -> Danieli).
    after_consonant: bool,
}

const fn ending(suffix: &'static str, with: &'static str) -> Ending {
    Ending { suffix, with, after_consonant: false }
}

const fn after_consonant(suffix: &'static str, with: &'static str) -> Ending {
    Ending { suffix, with, after_consonant: true }
}

/// What happens to a name no rule matched.
enum Fallback {
    Keep,
    Append(&'static str),
}

const MALE_GIVEN: &[Ending] = &[
    ending("něk", "ňku"),
    after_consonant("ek", "ku"),
    after_consonant("el", "le"),
    ending("el", "eli"),
    after_consonant("r", "ře"),
    ending("ch", "chu"),
    ending("a", "o"),
    ending("k", "ku"),
    ending("h", "hu"),
    ending("g", "gu"),
    ending("š", "ši"),
    ending("ž", "ži"),
    ending("č", "či"),
    ending("ř", "ři"),
    ending("c", "ci"),
    ending("j", "ji"),
    ending("s", "si"),
    ending("z", "zi"),
    ending("x", "xi"),
    ending("e", "e"),
    ending("ě", "ě"),
    ending("é", "é"),
    ending("i", "i"),
    ending("í", "í"),
    ending("y", "y"),
    ending("ý", "ý"),
    ending("o", "o"),
    ending("u", "u"),
    ending("ů", "ů"),
];

// Family names share the given-name endings, plus -ec (Němec -> Němče).
const MALE_FAMILY: &[Ending] = &[
    ending("něk", "ňku"),
    after_consonant("ek", "ku"),
    ending("ec", "če"),
    after_consonant("el", "le"),
    ending("el", "eli"),
    after_consonant("r", "ře"),
    ending("ch", "chu"),
    ending("a", "o"),
    ending("k", "ku"),
    ending("h", "hu"),
    ending("g", "gu"),
    ending("š", "ši"),
    ending("ž", "ži"),
    ending("č", "či"),
    ending("ř", "ři"),
    ending("c", "ci"),
    ending("j", "ji"),
    ending("s", "si"),
    ending("z", "zi"),
    ending("x", "xi"),
    ending("e", "e"),
    ending("ě", "ě"),
    ending("é", "é"),
    ending("i", "i"),
    ending("í", "í"),
    ending("y", "y"),
    ending("ý", "ý"),
    ending("o", "o"),
    ending("u", "u"),
    ending("ů", "ů"),
];

const FEMALE: &[Ending] = &[ending("a", "o")];

const VOWELS: &str = "aáeéěiíoóuúůyý";

/// Rule-table Czech vocative.
///
/// Covers the regular masculine and feminine patterns; irregular forms
/// fall through to the generic `+e` (masculine) or stay unchanged
/// (feminine).
#[derive(Debug, Default, Clone, Copy)]
pub struct CzechDeclension;

impl CzechDeclension {
    pub fn new() -> Self {
        Self
    }
}

impl Declension for CzechDeclension {
    fn vocative(&self, name: &str, is_female: Option<bool>, is_last_name: bool) -> String {
        if name.is_empty() {
            return String::new();
        }

        let is_female = is_female.unwrap_or_else(|| looks_feminine(name));

        if is_female {
            decline(name, FEMALE, Fallback::Keep)
        } else if is_last_name {
            decline(name, MALE_FAMILY, Fallback::Append("e"))
        } else {
            decline(name, MALE_GIVEN, Fallback::Append("e"))
        }
    }
}

fn looks_feminine(name: &str) -> bool {
    matches!(name.chars().last().map(lower), Some('a') | Some('á'))
}

fn decline(name: &str, endings: &[Ending], fallback: Fallback) -> String {
    for rule in endings {
        let Some(stem_end) = suffix_start(name, rule.suffix) else {
            continue;
        };
        let stem = &name[..stem_end];
        if rule.after_consonant && !ends_with_consonant(stem) {
            continue;
        }
        return join(stem, rule.with, name);
    }

    match fallback {
        Fallback::Keep => name.to_string(),
        Fallback::Append(tail) => join(name, tail, name),
    }
}

/// Byte offset where `suffix` starts in `name`, compared case-insensitively.
fn suffix_start(name: &str, suffix: &str) -> Option<usize> {
    let mut start = name.len();
    let mut chars = name.char_indices().rev();
    for expected in suffix.chars().rev() {
        let (idx, c) = chars.next()?;
        if lower(c) != expected {
            return None;
        }
        start = idx;
    }
    Some(start)
}

fn ends_with_consonant(stem: &str) -> bool {
    match stem.chars().last() {
        Some(c) => c.is_alphabetic() && !VOWELS.contains(lower(c)),
        None => false,
    }
}

fn join(stem: &str, tail: &str, original: &str) -> String {
    let mut out = String::with_capacity(stem.len() + tail.len());
    out.push_str(stem);
    if is_shouting(original) {
        out.push_str(&tail.to_uppercase());
    } else {
        out.push_str(tail);
    }
    out
}

// "NOVÁK" keeps its capitals in "NOVÁKU".
fn is_shouting(name: &str) -> bool {
    name.chars().count() > 1 && name.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase)
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
