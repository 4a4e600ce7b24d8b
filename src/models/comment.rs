use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Username;

/// A comment left on a post. Shared between the post it is attached to and
/// its author's comment history, never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    content: String,
    author: Username,
    created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: Username, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            author,
            created_at,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &Username {
        &self.author
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
