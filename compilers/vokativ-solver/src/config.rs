use vokativ_protocol::{ConfigError, Country, Language, VocativeForm};

/// What an analyser produces: language and register of the vocative.
///
/// The country is validated and kept for callers but does not change the
/// analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub language: Language,
    pub country: Country,
    pub vocative_form: VocativeForm,
}

impl Config {
    pub fn new(language: Language, country: Country, vocative_form: VocativeForm) -> Self {
        Self { language, country, vocative_form }
    }

    /// Builds a configuration from its wire codes: `"cs"`/`"sk"`,
    /// `"CZ"`/`"SK"` and `0` (informal) / `1` (formal).
    pub fn from_codes(language: &str, country: &str, vocative_form: u8) -> Result<Self, ConfigError> {
        Ok(Self {
            language: language.parse()?,
            country: country.parse()?,
            vocative_form: VocativeForm::try_from(vocative_form)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_codes() {
        assert_eq!(
            Config::from_codes("sk", "CZ", 1),
            Ok(Config::new(Language::Slovak, Country::Czechia, VocativeForm::Formal))
        );
    }

    #[test]
    fn test_rejects_unsupported_values() {
        assert_eq!(
            Config::from_codes("en", "CZ", 0),
            Err(ConfigError::UnsupportedLanguage("en".to_string()))
        );
        assert_eq!(
            Config::from_codes("cs", "US", 0),
            Err(ConfigError::UnsupportedCountry("US".to_string()))
        );
        assert_eq!(
            Config::from_codes("cs", "CZ", 3),
            Err(ConfigError::UnsupportedForm("3".to_string()))
        );
    }
}
