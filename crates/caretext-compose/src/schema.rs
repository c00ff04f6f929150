// SPDX-License-Identifier: AGPL-3.0-or-later
//! JSON schemas for the call-site request/reply exchange
//!
//! Each display surface has its own reply shape; all of them carry one or
//! more free-text fields in the markdown-like convention, which the caller
//! hands to `caretext-core` for rendering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Malformed reply payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ComposeError>;

/// Decode a reply payload from a call site's JSON response body.
pub fn decode<T: serde::de::DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Caller-supplied conversation token, threaded through each chat request.
///
/// Generation is the networking layer's concern; this type only carries the
/// value, so no process-wide mutable identifier exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: SessionId,
}

/// Self-reported severity on the symptom-check surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }

    /// Moderate and severe reports get the consult-a-doctor tail.
    pub const fn needs_doctor(self) -> bool {
        matches!(self, Self::Moderate | Self::Severe)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomCheckRequest {
    pub symptoms: Vec<String>,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub medical_text: String,
}

/// One symptom the backend recognized in the user's message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundSymptom {
    /// snake_case identifier, e.g. `chest_pain`
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub common_causes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymptomAnalysis {
    #[serde(default)]
    pub found_symptoms: Vec<FoundSymptom>,
    #[serde(default)]
    pub self_care_tips: Vec<String>,
    #[serde(default)]
    pub doctor_recommendation: String,
    #[serde(default)]
    pub is_emergency: bool,
}

/// Reply to the chat surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub is_emergency: bool,
    #[serde(default)]
    pub emergencies: Vec<String>,
    #[serde(default)]
    pub symptoms_found: Vec<String>,
    #[serde(default)]
    pub session_id: Option<SessionId>,
}

/// Reply to the symptom-analysis surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomCheckReply {
    pub analysis: SymptomAnalysis,
    pub response: String,
    pub recommendation: String,
}

/// Structured fields extracted from a medical record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedData {
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub surgeries: Vec<String>,
    #[serde(default)]
    pub alerts: Vec<String>,
}

impl ExtractedData {
    /// True when no primary category holds anything. Alerts are derived
    /// from the other categories and do not count on their own.
    pub fn is_empty(&self) -> bool {
        self.allergies.is_empty()
            && self.medications.is_empty()
            && self.conditions.is_empty()
            && self.surgeries.is_empty()
    }
}

/// Reply to the record-summary surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSummaryReply {
    pub summary: String,
    pub extracted_data: ExtractedData,
}

/// Medication database entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrugRecord {
    #[serde(default)]
    pub generic_name: String,
    #[serde(default)]
    pub uses: Vec<String>,
    #[serde(default)]
    pub side_effects: Vec<String>,
    #[serde(default)]
    pub warnings: Option<String>,
}

/// Reply to the medication-info surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugInfoReply {
    pub drug_name: String,
    pub information: String,
    #[serde(default)]
    pub found_in_db: bool,
}
