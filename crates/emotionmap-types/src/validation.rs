//! Payload checks for marker and contact submissions.
//!
//! Pure functions: a payload goes in, a storage-ready value or a
//! [`ValidationError`] comes out.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::api::{ContactRequest, CreateMarkerRequest};
use crate::models::{Emotion, NewMarker, NewMessage};

/// Longest accepted contact message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// `local@domain.tld`, no whitespace and a single `@` per part.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing or invalid field: {0}")]
    InvalidInput(&'static str),

    #[error("invalid email format")]
    InvalidEmail,

    #[error("message is too long (max 1000 characters)")]
    MessageTooLong,
}

pub fn validate_marker(req: &CreateMarkerRequest) -> Result<NewMarker, ValidationError> {
    let lat = coordinate(req.lat.as_ref(), "lat")?;
    let lng = coordinate(req.lng.as_ref(), "lng")?;

    let emotion = match &req.emotion {
        Some(Value::String(label)) => Emotion::parse(label),
        _ => None,
    }
    .ok_or(ValidationError::InvalidInput("emotion"))?;

    let comment = match &req.comment {
        None => String::new(),
        Some(Value::String(comment)) => comment.clone(),
        Some(_) => return Err(ValidationError::InvalidInput("comment")),
    };

    Ok(NewMarker {
        lat,
        lng,
        emotion,
        comment,
    })
}

pub fn validate_contact(req: &ContactRequest) -> Result<NewMessage, ValidationError> {
    let name = required_text(req.name.as_ref(), "name")?;
    let email = required_text(req.email.as_ref(), "email")?;
    let message = required_text(req.message.as_ref(), "message")?;

    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooLong);
    }

    Ok(NewMessage {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        message: message.trim().to_string(),
    })
}

/// A finite number, given either as a JSON number or a numeric string.
/// Zero is a real coordinate and is accepted.
fn coordinate(value: Option<&Value>, field: &'static str) -> Result<f64, ValidationError> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::InvalidInput(field))
}

fn required_text<'a>(
    value: Option<&'a Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
        _ => Err(ValidationError::InvalidInput(field)),
    }
}
