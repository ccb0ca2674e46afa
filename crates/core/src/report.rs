use serde::{Deserialize, Serialize};

use crate::error::{ClipguardError, Result};

/// Value the service puts in a table's first row when the category was skipped.
pub const NOT_ANALYZED: &str = "Not analyzed";

/// Ordered `[label, value]` rows exactly as the service sent them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable(pub Vec<(String, String)>);

impl ResultTable {
    pub fn rows(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn is_not_analyzed(&self) -> bool {
        self.0
            .first()
            .is_some_and(|(_, value)| value == NOT_ANALYZED)
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for ResultTable {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(label, value)| (label.into(), value.into()))
                .collect(),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub transcript: String,
    pub abusive_table: ResultTable,
    pub violent_table: ResultTable,
    pub nsfw_audio_table: ResultTable,
    pub political_table: ResultTable,
    pub religious_table: ResultTable,
    #[serde(default)]
    pub video_nsfw_info: Option<String>,
    #[serde(default)]
    pub video_violence_info: Option<String>,
}

impl AnalysisResult {
    /// Decode a 2xx response body.
    ///
    /// The service answers its own internal failures with `{"error": "..."}`
    /// and a success status, so that shape is turned into an error here.
    pub fn from_service_json(body: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(body)?;

        if let Some(message) = value.get("error") {
            let message = match message {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(ClipguardError::Service { message });
        }

        Ok(serde_json::from_value(value)?)
    }
}
