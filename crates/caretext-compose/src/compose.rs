// SPDX-License-Identifier: AGPL-3.0-or-later
//! Free-text reply composition
//!
//! Builders here emit RawText in the convention the formatter consumes:
//! `**bold**` section headers, `•`-prefixed items with one item per line,
//! and blank lines between paragraphs. They are pure string functions; the
//! serving layer decides which builder to call and ships the result.

use std::collections::HashSet;

use crate::schema::{DrugRecord, ExtractedData, Severity, SymptomAnalysis};

/// Fixed disclaimer appended to every outbound reply.
pub const DISCLAIMER: &str = "⚠️ **IMPORTANT DISCLAIMER**: This information is for educational \
purposes only and is not a substitute for professional medical advice. Always consult with a \
healthcare provider for medical concerns. In case of emergency, call your local emergency \
number immediately.";

/// Append the standard disclaimer as its own paragraph.
pub fn with_disclaimer(text: &str) -> String {
    format!("{text}\n\n{DISCLAIMER}")
}

/// Compose the symptom-analysis reply text.
pub fn symptom_reply_text(analysis: &SymptomAnalysis) -> String {
    let mut out = String::new();

    if analysis.is_emergency {
        out.push_str("🚨 **EMERGENCY ALERT** 🚨\n");
        out.push_str("Based on your symptoms, this may be a medical emergency.\n");
        out.push_str("**Please call emergency services (911/112/108) immediately!**\n\n");
    }

    if !analysis.found_symptoms.is_empty() {
        out.push_str("**Symptoms mentioned:**\n");
        for symptom in &analysis.found_symptoms {
            out.push_str(&format!(
                "• {}: {}\n",
                humanize(&symptom.name),
                symptom.description
            ));
        }

        out.push_str("\n**Possible common causes (NOT diagnosis):**\n");
        for symptom in &analysis.found_symptoms {
            if symptom.common_causes.is_empty() {
                continue;
            }
            let causes: Vec<&str> = symptom
                .common_causes
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();
            out.push_str(&format!(
                "• {}: {}\n",
                humanize(&symptom.name),
                causes.join(", ")
            ));
        }
    }

    if !analysis.self_care_tips.is_empty() {
        out.push_str("\n**General self-care tips:**\n");
        for tip in dedup_first_seen(&analysis.self_care_tips).into_iter().take(5) {
            out.push_str(&format!("• {tip}\n"));
        }
    }

    out.push_str("\n**When to see a doctor:**\n");
    if analysis.is_emergency {
        out.push_str("• IMMEDIATELY - Call emergency services\n");
    } else {
        out.push_str("• If symptoms persist for more than 2-3 days\n");
        out.push_str("• If symptoms worsen\n");
        out.push_str("• If you develop new symptoms\n");
    }

    out
}

/// Compose the medical-record summary reply text.
pub fn summary_reply_text(extracted: &ExtractedData) -> String {
    let mut out = String::from("📋 **Medical Record Summary**\n\n");

    if !extracted.allergies.is_empty() {
        out.push_str(&format!(
            "⚠️ **Allergies:** {}\n\n",
            extracted.allergies.join(", ")
        ));
    }

    if !extracted.medications.is_empty() {
        out.push_str(&format!(
            "💊 **Medications:** {}\n\n",
            extracted.medications.join(", ")
        ));
    }

    if !extracted.conditions.is_empty() {
        out.push_str(&format!(
            "🏥 **Conditions:** {}\n\n",
            extracted.conditions.join(", ")
        ));
    }

    if !extracted.surgeries.is_empty() {
        out.push_str(&format!(
            "🔪 **Surgeries:** {}\n\n",
            extracted.surgeries.join(", ")
        ));
    }

    if extracted.is_empty() {
        out.push_str(
            "No specific medical information extracted. Please ensure records mention \
             allergies, medications, or conditions.\n",
        );
    }

    out.push_str("\n*Note: This is an automated summary. Always consult with healthcare providers.*");
    out
}

/// Compose the medication-info reply text.
pub fn drug_info_text(name: &str, record: Option<&DrugRecord>) -> String {
    match record {
        Some(info) => {
            let warnings = info.warnings.as_deref().unwrap_or("Consult doctor");
            format!(
                "**{} ({})**\n\n**Uses:** {}\n**Side Effects:** {}\n**Warnings:** {}\n",
                humanize(name),
                info.generic_name,
                info.uses.join(", "),
                info.side_effects.join(", "),
                warnings
            )
        }
        None => format!(
            "Information for {name} not found in database. Please consult a pharmacist or \
             doctor for medication information."
        ),
    }
}

/// Compose the chat reply used when emergency keywords were detected.
pub fn emergency_banner(emergencies: &[String]) -> String {
    format!(
        "🚨 EMERGENCY DETECTED: {}\n\nPlease call emergency services immediately!\n\
         Do not wait. This requires immediate medical attention.",
        emergencies.join(", ")
    )
}

/// Consult-soon tail appended for moderate and severe reports.
pub fn severity_note(severity: Severity) -> Option<String> {
    severity.needs_doctor().then(|| {
        format!(
            "\n\nGiven the {} severity, consider consulting a doctor soon.",
            severity.label()
        )
    })
}

/// One-word recommendation shipped alongside the symptom-check reply.
pub const fn recommendation(severity: Severity) -> &'static str {
    if severity.needs_doctor() {
        "See doctor"
    } else {
        "Monitor"
    }
}

/// `chest_pain` -> `Chest Pain`
fn humanize(name: &str) -> String {
    name.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deduplicate preserving first occurrence, so output is deterministic.
fn dedup_first_seen(items: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(String::as_str)
        .filter(|item| seen.insert(*item))
        .collect()
}
