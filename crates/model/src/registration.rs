use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::date;

/// A member's enrollment in a plan + package combination for a date range,
/// optionally assigned a trainer.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Registration {
    pub id: i64,
    pub member_id: i64,
    pub plan_id: i64,
    pub package_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub trainer_id: i64,
    pub status: RegistrationStatus,
    pub date_created: String,
}

impl Registration {
    pub fn trainer(&self) -> Option<i64> {
        (self.trainer_id != 0).then_some(self.trainer_id)
    }

    pub fn is_active(&self) -> bool {
        self.status == RegistrationStatus::Active
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        date::parse_created(&self.date_created)
    }
}

/// Wire format is the legacy int column: 1 = active, anything else reads
/// as inactive.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display)]
#[serde(into = "i32", from = "i32")]
pub enum RegistrationStatus {
    Inactive,
    Active,
}

impl From<i32> for RegistrationStatus {
    fn from(value: i32) -> Self {
        if value == 1 {
            RegistrationStatus::Active
        } else {
            RegistrationStatus::Inactive
        }
    }
}

impl From<RegistrationStatus> for i32 {
    fn from(value: RegistrationStatus) -> i32 {
        match value {
            RegistrationStatus::Inactive => 0,
            RegistrationStatus::Active => 1,
        }
    }
}
