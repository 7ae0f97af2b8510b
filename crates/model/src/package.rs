use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;

/// Flat-priced service bundle. The legacy column for the name is named
/// `package`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Package {
    pub id: i64,
    #[serde(rename = "package")]
    pub name: String,
    pub description: String,
    pub amount: Decimal,
}
