// SPDX-License-Identifier: AGPL-3.0-or-later
//! CareText Views - HTML fragment builders for the display surfaces
//!
//! One builder per surface: the chat panel, the symptom-analysis results
//! region, the record-summary region and the medication-info region. Every
//! free-text field flows through the `caretext-core` formatter; every other
//! interpolated scalar is entity-escaped with the same primitive.
//!
//! Builders return fragments only. Event wiring, fetch plumbing and
//! injection into the live document belong to the host layer.

pub mod chat;
pub mod panels;

pub use chat::{message_html, typing_indicator_html, Sender};
pub use panels::{drug_info_html, error_box, summary_html, symptom_results_html};
