//! Gender inference for analyses where the caller did not supply one.
//!
//! A heuristic: unisex or foreign names can come out wrong.

use tracing::trace;
use vokativ_parser::{Lookup, NameDatabase};
use vokativ_protocol::Gender;

/// What the inference rules get to look at.
pub struct Evidence<'a> {
    pub given_names: &'a [&'a str],
    /// Family-name tokens joined with spaces.
    pub family_name: &'a str,
    pub names: &'a NameDatabase,
    pub lookup: Lookup,
}

pub struct GenderRule {
    pub name: &'static str,
    pub apply: fn(&Evidence<'_>) -> Option<Gender>,
}

/// Evaluated top to bottom, first hit wins.
pub const GENDER_RULES: &[GenderRule] = &[
    GenderRule { name: "feminine family name", apply: feminine_family_name },
    GenderRule { name: "no given name", apply: no_given_name },
    GenderRule { name: "given name lookup", apply: given_name_lookup },
];

fn feminine_family_name(evidence: &Evidence<'_>) -> Option<Gender> {
    let family = evidence.family_name.to_lowercase();
    (family.ends_with('á') || family.ends_with("ova")).then_some(Gender::Female)
}

fn no_given_name(evidence: &Evidence<'_>) -> Option<Gender> {
    evidence.given_names.is_empty().then_some(Gender::Male)
}

fn given_name_lookup(evidence: &Evidence<'_>) -> Option<Gender> {
    let first = evidence.given_names.first()?;
    if evidence.names.contains(first, Gender::Male, evidence.lookup) {
        Some(Gender::Male)
    } else {
        Some(Gender::Female)
    }
}

pub fn infer_gender(evidence: &Evidence<'_>) -> Gender {
    for rule in GENDER_RULES {
        if let Some(gender) = (rule.apply)(evidence) {
            trace!(rule = rule.name, %gender, "gender inferred");
            return gender;
        }
    }
    // The last rule always answers when there is a given name, and the
    // one before it when there is none.
    Gender::Male
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(given: &[&str], family: &str, lookup: Lookup) -> Gender {
        let names = NameDatabase::builtin();
        infer_gender(&Evidence { given_names: given, family_name: family, names: &names, lookup })
    }

    #[test]
    fn test_feminine_suffix_wins() {
        assert_eq!(infer(&["Tomáš"], "Nováková", Lookup::Strict), Gender::Female);
        assert_eq!(infer(&["Tomas"], "Novakova", Lookup::Loose), Gender::Female);
        assert_eq!(infer(&[], "Holečková", Lookup::Strict), Gender::Female);
        assert_eq!(infer(&["Jan"], "NOVÁKOVÁ", Lookup::Strict), Gender::Female);
    }

    #[test]
    fn test_no_given_name_is_male() {
        assert_eq!(infer(&[], "Petrů", Lookup::Strict), Gender::Male);
    }

    #[test]
    fn test_first_given_name_decides() {
        assert_eq!(infer(&["Tomáš", "Jana"], "Kudělka", Lookup::Strict), Gender::Male);
        assert_eq!(infer(&["Petra"], "Novák", Lookup::Strict), Gender::Female);
        assert_eq!(infer(&["Vaclav"], "Novak", Lookup::Loose), Gender::Male);
        // Strict lookup does not fold the accents away.
        assert_eq!(infer(&["Vaclav"], "Novák", Lookup::Strict), Gender::Female);
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = GENDER_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, ["feminine family name", "no given name", "given name lookup"]);
    }
}
