//! Request DTOs for the book API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::models::NewBook;

/// Request body for POST /books and PUT /books/:id
///
/// Fields are captured loosely so that missing, null or mistyped values can
/// be reported as a 400 naming the offending field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookRequest {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(default)]
    pub published_date: Option<Value>,
}

impl BookRequest {
    /// Validates the payload into the fields to persist.
    pub fn validate(self) -> Result<NewBook> {
        Ok(NewBook {
            title: required_text("title", self.title)?,
            author: required_text("author", self.author)?,
            published_date: required_text("published_date", self.published_date)?,
        })
    }
}

fn required_text(field: &str, value: Option<Value>) -> Result<String> {
    match value {
        None | Some(Value::Null) => Err(ApiError::InvalidRequest(format!(
            "Missing required field: {}",
            field
        ))),
        Some(Value::String(text)) if text.trim().is_empty() => Err(ApiError::InvalidRequest(
            format!("Field '{}' must not be empty", field),
        )),
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(ApiError::InvalidRequest(format!(
            "Field '{}' must be a string",
            field
        ))),
    }
}
