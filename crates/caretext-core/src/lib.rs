// SPDX-License-Identifier: AGPL-3.0-or-later
//! CareText Core - markdown-subset response formatter
//!
//! This crate provides:
//! - `FormattedBlock`, the classified, markup-ready output unit
//! - `format`, which turns backend free text into an ordered block sequence
//! - `format_html`, the concatenated rendition the display surfaces inject

pub mod blocks;
pub mod formatter;

pub use blocks::{BlockKind, FormattedBlock};
pub use formatter::{escape, format, format_html, BULLET_MARKERS};
