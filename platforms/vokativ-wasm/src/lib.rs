use std::sync::Arc;

use serde::Serialize;
use vokativ_parser::NameDatabase;
use vokativ_protocol::Gender;
use vokativ_solver::{Analysis, Config, FullNameAnalyser};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The structured response sent back to JavaScript.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// `null` when no given name was recognised.
    pub result: Option<Analysis>,
    pub language: String,
    pub vocative_form: String,
}

/// The analyser instance running in the browser.
#[wasm_bindgen]
pub struct VokativEngine {
    analyser: FullNameAnalyser,
}

#[wasm_bindgen]
impl VokativEngine {
    /// `formal` selects the title/family-name register.
    #[wasm_bindgen(constructor)]
    pub fn new(language: &str, country: &str, formal: bool) -> Result<VokativEngine, JsValue> {
        Self::build(language, country, formal, None).map_err(to_js)
    }

    /// Same as `new`, with a first-name archive fetched by JS instead of the
    /// built-in list.
    #[wasm_bindgen(js_name = withNames)]
    pub fn with_names(language: &str, country: &str, formal: bool, names: &[u8]) -> Result<VokativEngine, JsValue> {
        Self::build(language, country, formal, Some(names)).map_err(to_js)
    }

    /// Text -> Analysis -> JS object.
    pub fn analyse(&self, full_name: &str, gender: Option<String>) -> Result<JsValue, JsValue> {
        let report = self.report(full_name, gender.as_deref()).map_err(to_js)?;
        serde_wasm_bindgen::to_value(&report).map_err(JsValue::from)
    }
}

// Kept free of JsValue so it runs on native targets too.
impl VokativEngine {
    fn build(language: &str, country: &str, formal: bool, names: Option<&[u8]>) -> Result<Self, String> {
        let config = Config::from_codes(language, country, formal as u8).map_err(|e| e.to_string())?;
        let analyser = match names {
            Some(bytes) => {
                let names = NameDatabase::from_archive(bytes).map_err(|e| e.to_string())?;
                FullNameAnalyser::with_parts(config, Arc::new(names), Default::default())
            }
            None => FullNameAnalyser::new(config),
        };
        Ok(Self { analyser })
    }

    fn report(&self, full_name: &str, gender: Option<&str>) -> Result<AnalysisReport, String> {
        let gender = parse_gender(gender)?;
        let result = self.analyser.analyse(full_name, gender).map_err(|e| e.to_string())?;

        let config = self.analyser.config();
        Ok(AnalysisReport {
            result,
            language: config.language.to_string(),
            vocative_form: config.vocative_form.to_string(),
        })
    }
}

fn parse_gender(gender: Option<&str>) -> Result<Option<Gender>, String> {
    match gender {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|e: vokativ_protocol::UnknownGender| e.to_string()),
    }
}

fn to_js(message: String) -> JsValue {
    JsValue::from_str(&message)
}
