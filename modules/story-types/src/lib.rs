//! Shared types for the story service and its HTTP clients.

use record_store::Record;
use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl Story {
    pub fn from_draft(id: String, draft: StoryDraft) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
        }
    }

    /// Overwrites only the fields present in `patch`.
    pub fn apply(&mut self, patch: StoryPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

impl Record for Story {
    type Key = String;
    const KIND: &'static str = "story";

    fn key(&self) -> &String {
        &self.id
    }

    fn set_key(&mut self, key: String) {
        self.id = key;
    }
}

// =====================================================
// Request Types
// =====================================================

/// Body of create and replace requests. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDraft {
    pub title: String,
    pub content: String,
}

/// Body of a patch request. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl StoryPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

// =====================================================
// Response Types
// =====================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
