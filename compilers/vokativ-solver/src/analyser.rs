use std::sync::Arc;

use thiserror::Error;
use tracing::debug;
use vokativ_morph::{CzechDeclension, Declension};
use vokativ_parser::{normalize, InvalidInputError, NameDatabase, Segmenter};
use vokativ_protocol::{ConfigError, Gender};

use crate::analysis::Analysis;
use crate::config::Config;
use crate::gender::{infer_gender, Evidence};
use crate::vocative::resolve_vocative;

/// Either failure an analyser can report, for callers that want one type.
#[derive(Debug, Error)]
pub enum AnalyserError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Splits full names into titles and names, settles the gender and
/// derives the vocative.
///
/// Holds no per-call state; one analyser can serve any number of threads.
pub struct FullNameAnalyser<D = CzechDeclension> {
    config: Config,
    names: Arc<NameDatabase>,
    declension: D,
}

impl FullNameAnalyser<CzechDeclension> {
    /// Uses the built-in first names and the rule-based Czech declension.
    pub fn new(config: Config) -> Self {
        Self::with_parts(config, NameDatabase::builtin(), CzechDeclension)
    }

    pub fn from_codes(language: &str, country: &str, vocative_form: u8) -> Result<Self, ConfigError> {
        Ok(Self::new(Config::from_codes(language, country, vocative_form)?))
    }
}

impl<D: Declension> FullNameAnalyser<D> {
    pub fn with_parts(config: Config, names: Arc<NameDatabase>, declension: D) -> Self {
        Self { config, names, declension }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyses `full_name`. A supplied `gender` replaces inference.
    ///
    /// `Ok(None)` means the string is well-formed but no given name could be
    /// recognised in it.
    pub fn analyse(&self, full_name: &str, gender: Option<Gender>) -> Result<Option<Analysis>, InvalidInputError> {
        let name = normalize(full_name)?;

        let Some(parsed) = Segmenter::new(&self.names).segment(&name) else {
            debug!(input = full_name, lookup = ?name.lookup, "no given name recognised");
            return Ok(None);
        };

        let family_name = parsed.family_names.join(" ");
        let gender = gender.unwrap_or_else(|| {
            infer_gender(&Evidence {
                given_names: &parsed.given_names,
                family_name: &family_name,
                names: &self.names,
                lookup: parsed.lookup,
            })
        });

        let vocative = resolve_vocative(&self.config, &self.declension, &parsed, gender);

        debug!(
            input = full_name,
            lookup = ?parsed.lookup,
            given = parsed.given_names.len(),
            family = parsed.family_names.len(),
            %gender,
            vocative = vocative.as_deref().unwrap_or(""),
            "analysed full name"
        );

        Ok(Some(Analysis::new(
            Some(parsed.titles_before.join(" ")),
            Some(parsed.given_names.join(" ")),
            family_name,
            Some(parsed.titles_after.join(" ")),
            gender,
            vocative,
        )))
    }
}
