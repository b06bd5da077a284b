use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// -- Markers --

/// Body of `POST /api/markers`.
///
/// Fields are kept as raw JSON so a wrong-typed value is reported by
/// validation as invalid input instead of failing deserialization. The body
/// itself must be a JSON object; arrays are not matched by position.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct CreateMarkerRequest {
    pub lat: Option<Value>,
    pub lng: Option<Value>,
    pub emotion: Option<Value>,
    pub comment: Option<Value>,
}

impl From<Map<String, Value>> for CreateMarkerRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            lat: take_field(&mut body, "lat"),
            lng: take_field(&mut body, "lng"),
            emotion: take_field(&mut body, "emotion"),
            comment: take_field(&mut body, "comment"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateMarkerResponse {
    pub id: i64,
}

// -- Contact --

/// Body of `POST /api/contact`. Must be a JSON object.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct ContactRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub message: Option<Value>,
}

impl From<Map<String, Value>> for ContactRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            name: take_field(&mut body, "name"),
            email: take_field(&mut body, "email"),
            message: take_field(&mut body, "message"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

// -- Errors --

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// An explicit `null` counts as absent.
fn take_field(body: &mut Map<String, Value>, key: &str) -> Option<Value> {
    body.remove(key).filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn positional_arrays_are_not_bodies() {
        assert!(serde_json::from_value::<ContactRequest>(json!(["Ann", "a@b.c", "hi"])).is_err());
        assert!(serde_json::from_value::<CreateMarkerRequest>(json!([55.7, 37.6, "happy"])).is_err());
        assert!(serde_json::from_value::<ContactRequest>(json!("hello")).is_err());
    }

    #[test]
    fn null_fields_read_as_absent() {
        let req: CreateMarkerRequest =
            serde_json::from_value(json!({ "lat": 1.0, "comment": null })).unwrap();
        assert_eq!(req.lat, Some(json!(1.0)));
        assert!(req.comment.is_none());
        assert!(req.emotion.is_none());
    }
}
