//! Picks the address form: a title phrase in the formal register, otherwise
//! the declined given or family names.

use tracing::trace;
use vokativ_morph::Declension;
use vokativ_parser::ParsedName;
use vokativ_protocol::{Gender, Language, VocativeForm};

use crate::config::Config;

/// A title that is addressed by a fixed noun instead of the name.
pub struct TitlePhrase {
    /// Matched against the first leading title.
    pub before: &'static [&'static str],
    /// Matched against the first trailing title.
    pub after: &'static [&'static str],
    /// Male and female form, Czech.
    pub czech: [&'static str; 2],
    /// Male and female form, Slovak.
    pub slovak: [&'static str; 2],
}

impl TitlePhrase {
    fn matches(&self, before: Option<&str>, after: Option<&str>) -> bool {
        before.map_or(false, |t| self.before.iter().any(|title| *title == t))
            || after.map_or(false, |t| self.after.iter().any(|title| *title == t))
    }

    pub fn phrase(&self, language: Language, gender: Gender) -> &'static str {
        let forms = match language {
            Language::Czech => &self.czech,
            Language::Slovak => &self.slovak,
        };
        forms[gender.is_female() as usize]
    }
}

/// Evaluated top to bottom; a doctorate after the name outranks "Ing." in
/// front of it.
pub const TITLE_PHRASES: &[TitlePhrase] = &[
    TitlePhrase {
        before: &["prof."],
        after: &[],
        czech: ["profesore", "profesorko"],
        slovak: ["profesor", "profesorka"],
    },
    TitlePhrase {
        before: &["doc."],
        after: &[],
        czech: ["docente", "docentko"],
        slovak: ["docent", "docentka"],
    },
    TitlePhrase {
        before: &[
            "Dr.", "MUDr.", "MDDr.", "MVDr.", "JUDr.", "RNDr.", "PharmDr.", "PhDr.", "ThDr.",
            "ThLic.",
        ],
        after: &["Ph.D.", "DrSc.", "Th.D.", "DSc."],
        czech: ["doktore", "doktorko"],
        slovak: ["doktor", "doktorka"],
    },
    TitlePhrase {
        before: &["Ing."],
        after: &[],
        czech: ["inženýre", "inženýrko"],
        slovak: ["inžinier", "inžinierka"],
    },
    TitlePhrase {
        before: &["Mgr."],
        after: &[],
        czech: ["magistře", "magistro"],
        slovak: ["magister", "magisterka"],
    },
];

/// The fixed address noun for the first leading and first trailing title,
/// if any rule knows them.
pub fn title_phrase(
    titles_before: &[&str],
    titles_after: &[&str],
    language: Language,
    gender: Gender,
) -> Option<&'static str> {
    let before = titles_before.first().copied();
    let after = titles_after.first().copied();

    TITLE_PHRASES
        .iter()
        .find(|rule| rule.matches(before, after))
        .map(|rule| rule.phrase(language, gender))
}

/// Builds the vocative for `parsed`, or `None` when the register has
/// nothing to work with (informal without a given name, say).
pub fn resolve_vocative<D: Declension + ?Sized>(
    config: &Config,
    declension: &D,
    parsed: &ParsedName<'_>,
    gender: Gender,
) -> Option<String> {
    if config.vocative_form == VocativeForm::Formal {
        if let Some(phrase) = title_phrase(&parsed.titles_before, &parsed.titles_after, config.language, gender) {
            trace!(phrase, "vocative from title");
            return Some(phrase.to_string());
        }
    }

    let (names, is_last_name) = match config.vocative_form {
        VocativeForm::Informal => (&parsed.given_names, false),
        VocativeForm::Formal => (&parsed.family_names, true),
    };

    if names.is_empty() {
        return None;
    }

    let words: Vec<String> = match config.language {
        Language::Czech => names
            .iter()
            .map(|name| declension.vocative(name, Some(gender.is_female()), is_last_name))
            .collect(),
        // Slovak addresses people in the nominative.
        Language::Slovak => names.iter().map(|name| name.to_string()).collect(),
    };

    Some(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vokativ_morph::CzechDeclension;
    use vokativ_parser::Lookup;
    use vokativ_protocol::Country;

    fn parsed<'a>(before: &[&'a str], given: &[&'a str], family: &[&'a str], after: &[&'a str]) -> ParsedName<'a> {
        ParsedName {
            titles_before: before.to_vec(),
            given_names: given.to_vec(),
            family_names: family.to_vec(),
            titles_after: after.to_vec(),
            lookup: Lookup::Strict,
        }
    }

    fn resolve(language: Language, form: VocativeForm, name: &ParsedName<'_>, gender: Gender) -> Option<String> {
        let config = Config::new(language, Country::Czechia, form);
        resolve_vocative(&config, &CzechDeclension, name, gender)
    }

    #[test]
    fn test_title_phrase_precedence() {
        assert_eq!(title_phrase(&["prof.", "Ing."], &["Ph.D."], Language::Czech, Gender::Male), Some("profesore"));
        assert_eq!(title_phrase(&["Ing."], &["Ph.D."], Language::Czech, Gender::Female), Some("doktorko"));
        assert_eq!(title_phrase(&["MUDr."], &[], Language::Slovak, Gender::Male), Some("doktor"));
        assert_eq!(title_phrase(&["Mgr."], &[], Language::Slovak, Gender::Female), Some("magisterka"));
        assert_eq!(title_phrase(&["Bc."], &["MBA"], Language::Czech, Gender::Male), None);
    }

    #[test]
    fn test_only_first_title_is_inspected() {
        assert_eq!(title_phrase(&["Bc.", "Ing."], &[], Language::Czech, Gender::Male), None);
        assert_eq!(title_phrase(&[], &["MBA", "Ph.D."], Language::Czech, Gender::Male), None);
    }

    #[test]
    fn test_formal_prefers_title() {
        let name = parsed(&["Ing."], &["Tomáš"], &["Kudělka"], &[]);
        assert_eq!(resolve(Language::Czech, VocativeForm::Formal, &name, Gender::Male), Some("inženýre".to_string()));
        assert_eq!(resolve(Language::Czech, VocativeForm::Informal, &name, Gender::Male), Some("Tomáši".to_string()));
    }

    #[test]
    fn test_declines_every_name_token() {
        let name = parsed(&[], &["Václav"], &["Noid", "Bárta"], &[]);
        assert_eq!(resolve(Language::Czech, VocativeForm::Formal, &name, Gender::Male), Some("Noide Bárto".to_string()));
    }

    #[test]
    fn test_slovak_keeps_nominative() {
        let name = parsed(&[], &["Tomáš"], &["Kudělka"], &[]);
        assert_eq!(resolve(Language::Slovak, VocativeForm::Informal, &name, Gender::Male), Some("Tomáš".to_string()));
        assert_eq!(resolve(Language::Slovak, VocativeForm::Formal, &name, Gender::Male), Some("Kudělka".to_string()));
    }

    #[test]
    fn test_nothing_to_address() {
        let name = parsed(&["Ing."], &[], &["Petrů"], &[]);
        assert_eq!(resolve(Language::Czech, VocativeForm::Informal, &name, Gender::Male), None);

        let name = parsed(&["Bc."], &["Tomáš"], &[], &[]);
        assert_eq!(resolve(Language::Czech, VocativeForm::Formal, &name, Gender::Male), None);
    }
}
