// SPDX-License-Identifier: AGPL-3.0-or-later
//! Results-region fragments for the symptom, summary and medication surfaces

use caretext_compose::schema::{DrugInfoReply, RecordSummaryReply, SymptomCheckReply};
use caretext_core::{escape, format_html};
use tracing::debug;

/// Build the symptom-analysis results fragment.
pub fn symptom_results_html(reply: &SymptomCheckReply) -> String {
    debug!(
        symptoms = reply.analysis.found_symptoms.len(),
        emergency = reply.analysis.is_emergency,
        "rendering symptom results"
    );

    let mut html = String::from("<h3>Analysis Results</h3>");

    if reply.analysis.is_emergency {
        html.push_str(
            "<div class=\"emergency-alert-small\">\
             <strong>EMERGENCY DETECTED</strong> - Seek immediate medical attention!\
             </div>",
        );
    }

    html.push_str(&format!(
        "<div class=\"analysis-content\">{}</div>",
        format_html(&reply.response)
    ));

    html.push_str(&format!(
        "<div class=\"recommendation\"><h4>Recommendation:</h4><p>{}</p></div>",
        escape(&reply.recommendation)
    ));

    html
}

/// Build the record-summary fragment: formatted summary text followed by
/// the structured-extraction sections.
pub fn summary_html(reply: &RecordSummaryReply) -> String {
    let extracted = &reply.extracted_data;
    debug!(
        allergies = extracted.allergies.len(),
        medications = extracted.medications.len(),
        conditions = extracted.conditions.len(),
        "rendering record summary"
    );

    let mut html = String::from("<h3>Medical Summary</h3>");

    html.push_str(&format!(
        "<div class=\"summary-text\">{}</div>",
        format_html(&reply.summary)
    ));

    html.push_str("<div class=\"structured-data\">");

    if !extracted.allergies.is_empty() {
        let badges: Vec<String> = extracted
            .allergies
            .iter()
            .map(|a| format!("<span class=\"badge\">{}</span>", escape(a)))
            .collect();
        html.push_str(&format!(
            "<div class=\"summary-item\"><h4>Allergies</h4>\
             <div class=\"summary-content alert-highlight\">{}</div></div>",
            badges.join(" ")
        ));
    }

    if !extracted.medications.is_empty() {
        let items: String = extracted
            .medications
            .iter()
            .map(|m| format!("<li>{}</li>", escape(m)))
            .collect();
        html.push_str(&format!(
            "<div class=\"summary-item\"><h4>Medications</h4>\
             <div class=\"summary-content\"><ul>{items}</ul></div></div>"
        ));
    }

    if !extracted.conditions.is_empty() {
        let spans: Vec<String> = extracted
            .conditions
            .iter()
            .map(|c| format!("<span class=\"condition\">{}</span>", escape(c)))
            .collect();
        html.push_str(&format!(
            "<div class=\"summary-item\"><h4>Conditions</h4>\
             <div class=\"summary-content\">{}</div></div>",
            spans.join(", ")
        ));
    }

    if !extracted.surgeries.is_empty() {
        let joined: Vec<String> = extracted
            .surgeries
            .iter()
            .map(|s| escape(s).into_owned())
            .collect();
        html.push_str(&format!(
            "<div class=\"summary-item\"><h4>Surgeries</h4>\
             <div class=\"summary-content\">{}</div></div>",
            joined.join(", ")
        ));
    }

    if !extracted.alerts.is_empty() {
        let joined: Vec<String> = extracted
            .alerts
            .iter()
            .map(|a| escape(a).into_owned())
            .collect();
        html.push_str(&format!(
            "<div class=\"summary-item\"><h4>Medical Alerts</h4>\
             <div class=\"summary-content alert-highlight\">{}</div></div>",
            joined.join("<br>")
        ));
    }

    if extracted.is_empty() {
        html.push_str(
            "<div class=\"alert-highlight\">No specific medical information was extracted. \
             Try using terms like \"allergies to\", \"taking medication\", \"history of\".</div>",
        );
    }

    html.push_str("</div>");
    html
}

/// Build the medication-info fragment.
pub fn drug_info_html(reply: &DrugInfoReply) -> String {
    debug!(drug = %reply.drug_name, found = reply.found_in_db, "rendering drug info");

    let mut html = format!(
        "<h3>{} Information</h3>",
        escape(&reply.drug_name.to_uppercase())
    );

    if !reply.found_in_db {
        html.push_str(
            "<div class=\"warning\">This medication is not in our database.</div>",
        );
    }

    html.push_str(&format!(
        "<div class=\"drug-content\">{}</div>",
        format_html(&reply.information)
    ));

    html
}

/// Shared error notice for any results region.
pub fn error_box(message: &str) -> String {
    format!("<div class=\"error\">Error: {}</div>", escape(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use caretext_compose::schema::{ExtractedData, SymptomAnalysis};
    use pretty_assertions::assert_eq;

    fn check_reply(emergency: bool) -> SymptomCheckReply {
        SymptomCheckReply {
            analysis: SymptomAnalysis {
                is_emergency: emergency,
                ..SymptomAnalysis::default()
            },
            response: "**When to see a doctor:**\n• If symptoms worsen".to_string(),
            recommendation: "Monitor".to_string(),
        }
    }

    #[test]
    fn test_symptom_results_structure() {
        let html = symptom_results_html(&check_reply(false));
        assert!(html.starts_with("<h3>Analysis Results</h3>"));
        assert!(!html.contains("emergency-alert-small"));
        assert!(html.contains(
            "<div class=\"analysis-content\">\
             <p><strong>When to see a doctor:</strong><br>• If symptoms worsen</p></div>"
        ));
        assert!(html.ends_with(
            "<div class=\"recommendation\"><h4>Recommendation:</h4><p>Monitor</p></div>"
        ));
    }

    #[test]
    fn test_symptom_results_emergency_alert() {
        let html = symptom_results_html(&check_reply(true));
        assert!(html.contains("emergency-alert-small"));
    }

    #[test]
    fn test_summary_sections_render_only_when_populated() {
        let reply = RecordSummaryReply {
            summary: "📋 **Medical Record Summary**".to_string(),
            extracted_data: ExtractedData {
                allergies: vec!["penicillin".to_string()],
                medications: vec!["metformin".to_string(), "lisinopril".to_string()],
                ..ExtractedData::default()
            },
        };
        let html = summary_html(&reply);

        assert!(html.contains(
            "<div class=\"summary-text\">\
             <p class=\"bullet-list\">📋 <strong>Medical Record Summary</strong></p></div>"
        ));
        assert!(html.contains("<span class=\"badge\">penicillin</span>"));
        assert!(html.contains("<ul><li>metformin</li><li>lisinopril</li></ul>"));
        assert!(!html.contains("<h4>Conditions</h4>"));
        assert!(!html.contains("<h4>Surgeries</h4>"));
        assert!(!html.contains("No specific medical information"));
    }

    #[test]
    fn test_summary_alerts_join_with_breaks() {
        let reply = RecordSummaryReply {
            summary: String::new(),
            extracted_data: ExtractedData {
                conditions: vec!["asthma".to_string()],
                alerts: vec!["Allergies: dust".to_string(), "Check inhaler".to_string()],
                ..ExtractedData::default()
            },
        };
        let html = summary_html(&reply);
        assert!(html.contains("Allergies: dust<br>Check inhaler"));
    }

    #[test]
    fn test_summary_empty_extraction_notice() {
        let reply = RecordSummaryReply {
            summary: "nothing".to_string(),
            extracted_data: ExtractedData::default(),
        };
        let html = summary_html(&reply);
        assert!(html.contains("No specific medical information was extracted."));
    }

    #[test]
    fn test_summary_values_are_escaped() {
        let reply = RecordSummaryReply {
            summary: String::new(),
            extracted_data: ExtractedData {
                allergies: vec!["<b>peanuts".to_string()],
                ..ExtractedData::default()
            },
        };
        let html = summary_html(&reply);
        assert!(html.contains("<span class=\"badge\">&lt;b&gt;peanuts</span>"));
    }

    #[test]
    fn test_drug_info_not_found_warning() {
        let reply = DrugInfoReply {
            drug_name: "obscurol".to_string(),
            information: "Information for obscurol not found in database.".to_string(),
            found_in_db: false,
        };
        let html = drug_info_html(&reply);
        assert!(html.starts_with("<h3>OBSCUROL Information</h3>"));
        assert!(html.contains("not in our database"));
    }

    #[test]
    fn test_drug_info_found_skips_warning() {
        let reply = DrugInfoReply {
            drug_name: "tylenol".to_string(),
            information: "**Tylenol (acetaminophen)**".to_string(),
            found_in_db: true,
        };
        let html = drug_info_html(&reply);
        assert!(!html.contains("not in our database"));
        assert!(html.contains("<strong>Tylenol (acetaminophen)</strong>"));
    }

    #[test]
    fn test_error_box_escapes_message() {
        assert_eq!(
            error_box("boom & <crash>"),
            "<div class=\"error\">Error: boom &amp; &lt;crash&gt;</div>"
        );
    }
}
