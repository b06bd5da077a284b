use anyhow::Result;
use emotionmap_types::models::{NewMarker, NewMessage, Stats};

use crate::models::{MarkerRow, MessageRow};

/// Storage operations the HTTP layer depends on.
///
/// Both relations are append-only. Every method is a single round trip to
/// the backing store and may block, so async callers should run it on a
/// blocking thread.
pub trait EmotionStore: Send + Sync {
    /// Append a marker and return its store-assigned id.
    fn insert_marker(&self, marker: &NewMarker) -> Result<i64>;

    /// Every marker, in whatever order the store yields them.
    fn list_markers(&self) -> Result<Vec<MarkerRow>>;

    /// Marker totals. `total` and `positive` come from one snapshot.
    fn compute_stats(&self) -> Result<Stats>;

    fn insert_message(&self, message: &NewMessage) -> Result<()>;

    /// Every message, newest first.
    fn list_messages(&self) -> Result<Vec<MessageRow>>;
}
