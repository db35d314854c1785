use std::collections::VecDeque;

use tracing::trace;

use crate::names::NameDatabase;
use crate::normalize::{Lookup, NormalizedName};

/// A full name split into its four token groups, each in input order.
///
/// Every input token lands in exactly one group; the comma before the
/// trailing titles is the only thing dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName<'a> {
    pub titles_before: Vec<&'a str>,
    pub given_names: Vec<&'a str>,
    pub family_names: Vec<&'a str>,
    pub titles_after: Vec<&'a str>,
    pub lookup: Lookup,
}

impl<'a> ParsedName<'a> {
    /// All tokens in their original order.
    pub fn tokens(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.titles_before
            .iter()
            .chain(&self.given_names)
            .chain(&self.family_names)
            .chain(&self.titles_after)
            .copied()
    }
}

/// Splits normalized names into titles, given names and family names,
/// using the first-name database to tell the two kinds of name apart.
pub struct Segmenter<'a> {
    db: &'a NameDatabase,
}

impl<'a> Segmenter<'a> {
    pub fn new(db: &'a NameDatabase) -> Self {
        Self { db }
    }

    /// Returns `None` when no given name could be recognised, except for the
    /// "titles plus a single word" shape, which is always a family name.
    pub fn segment<'t>(&self, name: &'t NormalizedName) -> Option<ParsedName<'t>> {
        let lookup = name.lookup;
        let mut parsed = ParsedName {
            titles_before: Vec::new(),
            given_names: Vec::new(),
            family_names: Vec::new(),
            titles_after: Vec::new(),
            lookup,
        };

        // 1. Trailing titles sit after the comma.
        let names_part = match name.text.split_once(',') {
            Some((head, tail)) => {
                parsed.titles_after = split_words(tail).collect();
                head
            }
            None => name.text.as_str(),
        };

        let mut remaining: VecDeque<&str> = split_words(names_part).collect();

        // 2. Leading titles: every word with a period, up to the first without.
        while let Some(word) = remaining.front().copied() {
            if !word.contains('.') {
                break;
            }
            parsed.titles_before.push(word);
            remaining.pop_front();
        }

        // 3. A lone word after the titles is a family name ("Ing. Petrů").
        if !parsed.titles_before.is_empty() && remaining.len() == 1 {
            parsed.family_names.extend(remaining.drain(..));
            trace!(family = ?parsed.family_names, "single word after titles");
            return Some(parsed);
        }

        // 4. Left to right; the last word never becomes a given name unless
        //    a family name is already known.
        while let Some(word) = remaining.pop_front() {
            let is_given = self.db.is_first_name(word, lookup)
                && (!remaining.is_empty() || !parsed.family_names.is_empty());

            trace!(word, is_given, "classified");
            if is_given {
                parsed.given_names.push(word);
            } else {
                parsed.family_names.push(word);
            }
        }

        // 5. Without a given name this is not a recognisable person.
        if parsed.given_names.is_empty() {
            return None;
        }

        Some(parsed)
    }
}

fn split_words(s: &str) -> impl Iterator<Item = &str> {
    s.split(' ').filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn segment(input: &str) -> Option<(Vec<String>, Vec<String>, Vec<String>, Vec<String>)> {
        let db = NameDatabase::builtin();
        let name = normalize(input).unwrap();
        let parsed = Segmenter::new(&db).segment(&name)?;
        let own = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Some((
            own(&parsed.titles_before),
            own(&parsed.given_names),
            own(&parsed.family_names),
            own(&parsed.titles_after),
        ))
    }

    fn words(s: &str) -> Vec<String> {
        s.split(' ').filter(|w| !w.is_empty()).map(String::from).collect()
    }

    #[test]
    fn test_plain_name() {
        assert_eq!(
            segment("Tomáš Kudělka"),
            Some((vec![], words("Tomáš"), words("Kudělka"), vec![]))
        );
    }

    #[test]
    fn test_titles_on_both_sides() {
        assert_eq!(
            segment("prof. Ing. Tomáš Kudělka, Ph.D. DrSc."),
            Some((words("prof. Ing."), words("Tomáš"), words("Kudělka"), words("Ph.D. DrSc.")))
        );
    }

    #[test]
    fn test_two_given_names() {
        assert_eq!(
            segment("Tomáš Pavel Kudělka"),
            Some((vec![], words("Tomáš Pavel"), words("Kudělka"), vec![]))
        );
    }

    #[test]
    fn test_two_family_names() {
        assert_eq!(
            segment("Václav Noid Bárta"),
            Some((vec![], words("Václav"), words("Noid Bárta"), vec![]))
        );
    }

    #[test]
    fn test_last_word_stays_family_name() {
        assert_eq!(
            segment("Tomáš Pavel"),
            Some((vec![], words("Tomáš"), words("Pavel"), vec![]))
        );
    }

    #[test]
    fn test_single_word_after_titles_is_family_name() {
        assert_eq!(
            segment("Ing. Petrů"),
            Some((words("Ing."), vec![], words("Petrů"), vec![]))
        );
        // Even when that word is a known first name.
        assert_eq!(
            segment("Ing. Pavel"),
            Some((words("Ing."), vec![], words("Pavel"), vec![]))
        );
    }

    #[test]
    fn test_unknown_names_do_not_segment() {
        assert_eq!(segment("AAAAAA BBBBBBB"), None);
        assert_eq!(segment("Ing. Mgr."), None);
    }

    #[test]
    fn test_loose_lookup_for_plain_ascii() {
        assert_eq!(
            segment("vaclav novak"),
            Some((vec![], words("Vaclav"), words("Novak"), vec![]))
        );
    }

    #[test]
    fn test_tokens_reconstruct_input() {
        let db = NameDatabase::builtin();
        for input in [
            "prof. Ing. Tomáš Pavel Kudělka, Ph.D.",
            "Václav Noid Bárta",
            "Ing. Petrů",
            "Jana Holečková,CSc.",
        ] {
            let name = normalize(input).unwrap();
            let parsed = Segmenter::new(&db).segment(&name).unwrap();
            let rebuilt: Vec<&str> = parsed.tokens().collect();
            let expected: Vec<&str> = input.split([' ', ',']).filter(|w| !w.is_empty()).collect();
            assert_eq!(rebuilt, expected);
        }
    }
}
