use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;

/// Id 0 is reserved for "no trainer assigned" and never appears as a row.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Trainer {
    pub id: i64,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub rate: Decimal,
}
