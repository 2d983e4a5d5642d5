//! Conversation pretty-printing

use crate::types::ChatMessage;

/// Longest content prefix shown per message before truncation.
const PREVIEW_CHARS: usize = 100;

/// Render a conversation as numbered `N. ROLE: content` lines.
///
/// Content longer than 100 characters is truncated with an ellipsis. Pure
/// function, no side effects.
///
/// # Examples
///
/// ```rust
/// use openrouter_client::types::ChatMessage;
/// use openrouter_client::utils::format_messages;
///
/// let rendered = format_messages(&[
///     ChatMessage::system("Be brief."),
///     ChatMessage::user("Why is the sky blue?"),
/// ]);
/// assert_eq!(rendered, "1. SYSTEM: Be brief.\n2. USER: Why is the sky blue?");
/// ```
pub fn format_messages(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .enumerate()
        .map(|(index, message)| {
            let role = message.role.as_str().to_uppercase();
            let mut preview: String = message.content.chars().take(PREVIEW_CHARS).collect();
            if message.content.chars().count() > PREVIEW_CHARS {
                preview.push_str("...");
            }
            format!("{}. {}: {}", index + 1, role, preview)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
