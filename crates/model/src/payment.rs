use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{date, decimal::Decimal};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Payment {
    pub id: i64,
    pub registration_id: i64,
    pub amount: Decimal,
    pub remarks: String,
    #[serde(rename = "type")]
    pub kind: PaymentKind,
    pub date_created: String,
}

impl Payment {
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        date::parse_created(&self.date_created)
    }
}

/// Wire format is the legacy int column: 1 = registration payment,
/// anything else reads as monthly.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display)]
#[serde(into = "i32", from = "i32")]
pub enum PaymentKind {
    Registration,
    Monthly,
}

impl From<i32> for PaymentKind {
    fn from(value: i32) -> Self {
        if value == 1 {
            PaymentKind::Registration
        } else {
            PaymentKind::Monthly
        }
    }
}

impl From<PaymentKind> for i32 {
    fn from(value: PaymentKind) -> i32 {
        match value {
            PaymentKind::Registration => 1,
            PaymentKind::Monthly => 2,
        }
    }
}
