//! The `analyse` subcommand, minus the I/O.

use anyhow::Context;
use vokativ_protocol::{Country, Gender, Language, VocativeForm};
use vokativ_solver::{Config, FullNameAnalyser};

/// Parses the `--language`, `--country` and `--form` arguments.
pub fn config(language: &str, country: &str, form: &str) -> anyhow::Result<Config> {
    Ok(Config::new(
        language.parse::<Language>()?,
        country.parse::<Country>()?,
        form.parse::<VocativeForm>()?,
    ))
}

pub fn gender(value: Option<&str>) -> anyhow::Result<Option<Gender>> {
    Ok(value.map(|g| g.parse::<Gender>()).transpose()?)
}

/// Pretty JSON of the analysis, or `null` when no given name was found.
/// Malformed input is an error, which `main` turns into exit code 1.
pub fn to_json(analyser: &FullNameAnalyser, full_name: &str, gender: Option<Gender>) -> anyhow::Result<String> {
    let analysis = analyser
        .analyse(full_name, gender)
        .with_context(|| format!("analysing {:?}", full_name))?;
    Ok(serde_json::to_string_pretty(&analysis)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use vokativ_parser::NameDatabase;
    use vokativ_protocol::{NameEntry, NameFlags, NameList};

    fn run(form: &str, full_name: &str, gender: Option<Gender>) -> anyhow::Result<serde_json::Value> {
        let analyser = FullNameAnalyser::new(config("cs", "CZ", form)?);
        Ok(serde_json::from_str(&to_json(&analyser, full_name, gender)?)?)
    }

    #[test]
    fn test_prints_analysis() {
        let json = run("formal", "Ing. Tomáš Kudělka, Ph.D.", None).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "titleBefore": "Ing.",
                "firstName": "Tomáš",
                "lastName": "Kudělka",
                "titleAfter": "Ph.D.",
                "gender": "male",
                "vocative": "doktore",
            })
        );
    }

    #[test]
    fn test_prints_null_without_given_name() {
        let analyser = FullNameAnalyser::new(config("cs", "CZ", "informal").unwrap());
        assert_eq!(to_json(&analyser, "AAAAAA BBBBBBB", None).unwrap(), "null");
    }

    #[test]
    fn test_supplied_gender() {
        let json = run("informal", "Ing. Petrů", gender(Some("female")).unwrap()).unwrap();
        assert_eq!(json["gender"], "female");
        assert_eq!(json["vocative"], serde_json::Value::Null);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(config("en", "CZ", "formal").is_err());
        assert!(config("cs", "US", "formal").is_err());
        assert!(config("cs", "CZ", "polite").is_err());
        assert!(gender(Some("other")).is_err());
        assert_eq!(gender(None).unwrap(), None);
    }

    #[test]
    fn test_rejects_malformed_name() {
        let err = run("informal", "Tomáš  Kudělka", None).unwrap_err();
        assert!(err.to_string().contains("Tomáš  Kudělka"));
        assert!(run("informal", "Tomáš", None).is_err());
    }

    #[test]
    fn test_custom_names() {
        let names = NameDatabase::from_list(&NameList {
            version: 1,
            entries: vec![NameEntry::new("Noid", NameFlags::MALE)],
        });
        let analyser = FullNameAnalyser::with_parts(
            config("cs", "CZ", "informal").unwrap(),
            Arc::new(names),
            Default::default(),
        );

        let json: serde_json::Value = serde_json::from_str(&to_json(&analyser, "Noid Bárta", None).unwrap()).unwrap();
        assert_eq!(json["firstName"], "Noid");
        assert_eq!(json["vocative"], "Noide");
        assert_eq!(to_json(&analyser, "Tomáš Kudělka", None).unwrap(), "null");
    }
}
