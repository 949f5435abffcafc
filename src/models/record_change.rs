use super::bookmark::Bookmark;
use super::change_event::ChangeEvent;
use super::change_type::ChangeType;

/// A single insert or delete delivered to a change handler.
///
/// Carries the operation type and the affected records, enough for the
/// consumer to identify the record by id and apply the change idempotently
/// to local state.
#[derive(Debug, Clone)]
pub struct RecordChange {
    /// Kind of change
    pub change_type: ChangeType,

    /// Affected records: the inserted rows for an insert, the deleted rows
    /// for a delete
    pub rows: Vec<Bookmark>,
}

impl RecordChange {
    /// Convert a raw subscription event into a handler payload.
    ///
    /// Returns `None` for non-change events (acks, errors); those are
    /// handled by the subscription machinery, not the record handler.
    pub fn from_event(event: ChangeEvent) -> Option<Self> {
        match event {
            ChangeEvent::Insert { rows, .. } => Some(Self {
                change_type: ChangeType::Insert,
                rows,
            }),
            ChangeEvent::Delete { old_rows, .. } => Some(Self {
                change_type: ChangeType::Delete,
                rows: old_rows,
            }),
            ChangeEvent::Ack { .. } | ChangeEvent::Error { .. } => None,
        }
    }

    /// Ids of the affected records.
    pub fn record_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.id.as_str()).collect()
    }
}
