use serde::{Deserialize, Serialize};

/// A training session slot on the schedules screen. Purely local state:
/// entries are never written to the row store.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Schedule {
    pub id: i64,
    pub member_id: i64,
    pub trainer_id: i64,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub dow: String,
}
