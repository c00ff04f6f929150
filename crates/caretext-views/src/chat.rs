// SPDX-License-Identifier: AGPL-3.0-or-later
//! Chat panel fragments

use caretext_core::{escape, format_html};

/// Which side of the conversation a message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Assistant => "assistant-message",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Health Assistant",
        }
    }
}

/// Build one chat message fragment.
///
/// `timestamp` is a preformatted HH:MM string; clock access stays in the
/// host layer. Emergency replies get an extra class on the message wrapper.
pub fn message_html(text: &str, sender: Sender, timestamp: &str, is_emergency: bool) -> String {
    let emergency_class = if is_emergency { " emergency-message" } else { "" };
    format!(
        "<div class=\"message {}{}\">\
         <div class=\"message-header\"><span>{}</span><span>{}</span></div>\
         <div>{}</div>\
         </div>",
        sender.css_class(),
        emergency_class,
        sender.display_name(),
        escape(timestamp),
        format_html(text)
    )
}

/// The three-dot placeholder shown while a reply is pending.
pub fn typing_indicator_html() -> String {
    String::from(
        "<div class=\"message assistant-message\" id=\"typingIndicator\">\
         <div class=\"message-header\"><span>Health Assistant</span><span>typing...</span></div>\
         <div class=\"typing-indicator\">\
         <div class=\"typing-dot\"></div>\
         <div class=\"typing-dot\"></div>\
         <div class=\"typing-dot\"></div>\
         </div>\
         </div>",
    )
}
