//! Question/answer exchange shapes
//!
//! The question-answering service itself lives outside this crate; these are
//! the JSON bodies of `POST /ask-mediguide`.

use serde::{Deserialize, Serialize};

use crate::classify::{classify_response, Fragment};
use crate::error::AskError;

/// Request body sent to the question-answering service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

impl AskRequest {
    /// Trimmed, non-empty question
    pub fn new(question: &str) -> Result<Self, AskError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AskError::EmptyQuestion);
        }
        Ok(Self {
            question: question.to_string(),
        })
    }
}

/// Reply of the question-answering service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub question: String,
    pub response: String,
}

impl AskResponse {
    /// Classified fragments of the answer text
    pub fn fragments(&self) -> Vec<Fragment> {
        classify_response(&self.response)
    }
}
