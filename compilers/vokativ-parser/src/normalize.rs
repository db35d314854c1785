//! Structural validation and canonical casing of a raw full name.

use nom::{
    bytes::complete::take_while,
    character::complete::{char, satisfy},
    combinator::{all_consuming, opt, recognize},
    multi::separated_list1,
    sequence::{pair, preceded},
    IResult,
};
use thiserror::Error;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("full name is empty")]
    Empty,
    #[error("{input:?} does not look like a full name (unexpected input at byte {offset})")]
    Malformed { input: String, offset: usize },
    #[error("{0:?} does not look like a full name (needs at least two words before the comma)")]
    TooFewWords(String),
}

/// Dictionary lookup mode, decided once per input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// Diacritic-exact: the input carries accents, so it must match them.
    Strict,
    /// ASCII-folded: an accent-free input still matches accented entries.
    Loose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    pub text: String,
    pub lookup: Lookup,
}

/// Letters, optionally followed by more letters and periods ("Ing.", "Ph.D.").
fn word(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(char::is_alphabetic),
        take_while(|c: char| c.is_alphabetic() || c == '.'),
    ))(input)
}

fn words(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char(' '), word)(input)
}

type Groups<'a> = (Vec<&'a str>, Option<Vec<&'a str>>);

fn full_name(input: &str) -> IResult<&str, Groups<'_>> {
    all_consuming(pair(
        words,
        opt(preceded(pair(char(','), opt(char(' '))), words)),
    ))(input)
}

/// Checks that `input` is shaped like a full name: words separated by single
/// spaces, at most one comma before the trailing titles, and at least two
/// words ahead of it.
pub fn validate(input: &str) -> Result<(), InvalidInputError> {
    if input.is_empty() {
        return Err(InvalidInputError::Empty);
    }

    match full_name(input) {
        Ok((_, (names, _))) if names.len() < 2 => {
            Err(InvalidInputError::TooFewWords(input.to_string()))
        }
        Ok(_) => Ok(()),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(InvalidInputError::Malformed {
            input: input.to_string(),
            offset: input.len() - e.input.len(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(InvalidInputError::Malformed {
            input: input.to_string(),
            offset: input.len(),
        }),
    }
}

/// Validates, fixes casing of all-lower-case input and picks the lookup mode.
pub fn normalize(input: &str) -> Result<NormalizedName, InvalidInputError> {
    validate(input)?;

    let text = if input.to_lowercase() == input {
        title_case(input)
    } else {
        input.to_string()
    };

    let lookup = if fold_ascii(&text) != text {
        Lookup::Strict
    } else {
        Lookup::Loose
    };

    Ok(NormalizedName { text, lookup })
}

/// Upper-cases the first letter of every word, lower-cases the rest.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = c == ' ' || c == ',';
    }

    out
}

/// Strips diacritics: "Tomáš" -> "Tomas".
pub fn fold_ascii(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.nfd().filter(|c| !is_combining_mark(*c)) {
        // Letters without a canonical decomposition.
        match c {
            'ł' => out.push('l'),
            'Ł' => out.push('L'),
            'đ' => out.push('d'),
            'Đ' => out.push('D'),
            'ø' => out.push('o'),
            'Ø' => out.push('O'),
            'ß' => out.push_str("ss"),
            'æ' => out.push_str("ae"),
            'Æ' => out.push_str("AE"),
            'œ' => out.push_str("oe"),
            'Œ' => out.push_str("OE"),
            other => out.push(other),
        }
    }

    out
}
