use serde::Serialize;
use vokativ_protocol::Gender;

/// The outcome of analysing one full name.
///
/// Token groups are space-joined; an empty group is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    title_before: Option<String>,
    first_name: Option<String>,
    last_name: String,
    title_after: Option<String>,
    gender: Gender,
    vocative: Option<String>,
}

impl Analysis {
    pub fn new(
        title_before: Option<String>,
        first_name: Option<String>,
        last_name: String,
        title_after: Option<String>,
        gender: Gender,
        vocative: Option<String>,
    ) -> Self {
        Self {
            title_before: non_empty(title_before),
            first_name: non_empty(first_name),
            last_name,
            title_after: non_empty(title_after),
            gender,
            vocative: non_empty(vocative),
        }
    }

    pub fn title_before(&self) -> Option<&str> {
        self.title_before.as_deref()
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn title_after(&self) -> Option<&str> {
        self.title_after.as_deref()
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn vocative(&self) -> Option<&str> {
        self.vocative.as_deref()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
