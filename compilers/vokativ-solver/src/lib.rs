pub mod analyser;
pub mod analysis;
pub mod config;
pub mod gender;
pub mod vocative;

pub use analyser::{AnalyserError, FullNameAnalyser};
pub use analysis::Analysis;
pub use config::Config;
pub use gender::{infer_gender, Evidence, GenderRule, GENDER_RULES};
pub use vocative::{resolve_vocative, title_phrase, TitlePhrase, TITLE_PHRASES};

pub use vokativ_protocol::{ConfigError, Country, Gender, Language, VocativeForm};
