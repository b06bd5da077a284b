//! Database row types. These map directly to SQLite rows and are kept apart
//! from the emotionmap-types wire models.

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRow {
    pub id: i64,
    pub lat: f64,
    pub lng: f64,
    pub emotion: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: String,
}
