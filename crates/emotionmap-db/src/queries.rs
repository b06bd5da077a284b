use anyhow::Result;
use emotionmap_types::models::{Emotion, NewMarker, NewMessage, Stats};
use rusqlite::Connection;
use tracing::debug;

use crate::Database;
use crate::models::{MarkerRow, MessageRow};
use crate::store::EmotionStore;

impl EmotionStore for Database {
    // -- Markers --

    fn insert_marker(&self, marker: &NewMarker) -> Result<i64> {
        let id = self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO markers (lat, lng, emotion, comment) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![marker.lat, marker.lng, marker.emotion.as_str(), marker.comment],
            )?;
            Ok(conn.last_insert_rowid())
        })?;

        debug!("Stored marker {} ({})", id, marker.emotion);
        Ok(id)
    }

    fn list_markers(&self) -> Result<Vec<MarkerRow>> {
        self.with_conn(query_markers)
    }

    fn compute_stats(&self) -> Result<Stats> {
        let (total, positive) = self.with_conn(query_marker_counts)?;
        Ok(Stats::from_counts(total, positive))
    }

    // -- Messages --

    fn insert_message(&self, message: &NewMessage) -> Result<()> {
        let id = self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO messages (name, email, message) VALUES (?1, ?2, ?3)",
                (&message.name, &message.email, &message.message),
            )?;
            Ok(conn.last_insert_rowid())
        })?;

        debug!("Stored contact message {}", id);
        Ok(())
    }

    fn list_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(query_messages)
    }
}

fn query_markers(conn: &Connection) -> Result<Vec<MarkerRow>> {
    let mut stmt = conn.prepare("SELECT id, lat, lng, emotion, comment FROM markers")?;

    let rows = stmt
        .query_map([], |row| {
            Ok(MarkerRow {
                id: row.get(0)?,
                lat: row.get(1)?,
                lng: row.get(2)?,
                emotion: row.get(3)?,
                comment: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// `(total, positive)` from a single aggregate statement, so both counts
/// see the same snapshot.
fn query_marker_counts(conn: &Connection) -> Result<(i64, i64)> {
    let [first, second] = Emotion::POSITIVE;

    let counts = conn.query_row(
        "SELECT COUNT(*),
                COALESCE(SUM(CASE WHEN emotion IN (?1, ?2) THEN 1 ELSE 0 END), 0)
         FROM markers",
        (first.as_str(), second.as_str()),
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    Ok(counts)
}

fn query_messages(conn: &Connection) -> Result<Vec<MessageRow>> {
    // created_at has one-second resolution; id breaks ties within a second
    let mut stmt = conn.prepare(
        "SELECT id, name, email, message, created_at
         FROM messages
         ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                message: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}
