// SPDX-License-Identifier: AGPL-3.0-or-later
//! CareText Compose - reply schemas and free-text composition
//!
//! This crate provides:
//! - The JSON request/reply types the call sites exchange with the backend
//! - Pure builders that compose reply free text in the markdown-like
//!   convention the formatter consumes (bold section headers, bullet-dot
//!   items, blank-line paragraph separation)
//!
//! Nothing here performs I/O; HTTP transport and session-id generation
//! belong to the surrounding networking layer.

pub mod compose;
pub mod schema;

pub use compose::{
    drug_info_text, emergency_banner, recommendation, severity_note, summary_reply_text,
    symptom_reply_text, with_disclaimer, DISCLAIMER,
};
pub use schema::{
    decode, ChatReply, ChatRequest, ComposeError, DrugInfoReply, DrugRecord, ExtractedData,
    FoundSymptom, RecordSummaryReply, Result, SessionId, Severity, SummarizeRequest,
    SymptomAnalysis, SymptomCheckReply, SymptomCheckRequest,
};
