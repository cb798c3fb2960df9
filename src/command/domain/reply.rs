//! Replies produced for chat invocations and the context they run in.

use serde::{Deserialize, Serialize};

use crate::exam::domain::Embed;

/// Who can see a reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible only to the invoking user.
    #[default]
    Ephemeral,
    /// Posted to the channel.
    Public,
}

impl Visibility {
    /// Maps the `post` command flag to a visibility.
    #[must_use]
    pub const fn from_post_flag(post: bool) -> Self {
        if post { Self::Public } else { Self::Ephemeral }
    }
}

/// Reply to a single command invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandReply {
    /// Reply visibility.
    pub visibility: Visibility,
    /// Plain text content, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Rich embed, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed: Option<Embed>,
}

impl CommandReply {
    /// Creates a plain text reply.
    #[must_use]
    pub fn text(visibility: Visibility, content: impl Into<String>) -> Self {
        Self {
            visibility,
            content: Some(content.into()),
            embed: None,
        }
    }

    /// Creates an embed reply.
    #[must_use]
    pub const fn embed(visibility: Visibility, embed: Embed) -> Self {
        Self {
            visibility,
            content: None,
            embed: Some(embed),
        }
    }

    /// Returns whether the reply is posted to the channel.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// Details about the user and channel an invocation came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    user_mention: String,
}

impl InvocationContext {
    /// Creates a context for the given user mention (for example `<@1234>`).
    #[must_use]
    pub fn new(user_mention: impl Into<String>) -> Self {
        Self {
            user_mention: user_mention.into(),
        }
    }

    /// Returns the invoking user's mention text.
    #[must_use]
    pub fn user_mention(&self) -> &str {
        &self.user_mention
    }
}
