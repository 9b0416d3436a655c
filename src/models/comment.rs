//! Product comments.

use serde::{Deserialize, Serialize};

use crate::config::comments::MAX_LEN;

/// Comment as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub product_id: String,
    pub author_id: String,
    pub author_nickname: String,
    pub content: String,
    /// Unix timestamp in seconds.
    pub created_at: u64,
}

/// Payload for posting a comment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommentDraft {
    pub content: String,
}

/// Why a comment cannot be posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentDraftError {
    Empty,
    TooLong { len: usize },
}

impl std::fmt::Display for CommentDraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "comment cannot be empty"),
            Self::TooLong { len } => {
                write!(f, "comment is {} characters (max {})", len, MAX_LEN)
            }
        }
    }
}

impl CommentDraft {
    /// Build a draft from raw form input.
    ///
    /// Content is trimmed; length is counted in characters, not bytes.
    pub fn new(input: &str) -> Result<Self, CommentDraftError> {
        let content = input.trim();
        let len = content.chars().count();
        if len == 0 {
            return Err(CommentDraftError::Empty);
        }
        if len > MAX_LEN {
            return Err(CommentDraftError::TooLong { len });
        }
        Ok(Self {
            content: content.to_string(),
        })
    }
}

/// Characters left before hitting the limit (negative when over).
pub fn remaining_chars(input: &str) -> i64 {
    MAX_LEN as i64 - input.trim().chars().count() as i64
}
