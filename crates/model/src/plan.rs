use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;

/// Duration-priced membership plan. The legacy column for the duration is
/// named `plan`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Plan {
    pub id: i64,
    #[serde(rename = "plan")]
    pub months: u32,
    pub amount: Decimal,
}

impl Plan {
    /// Total cost over the whole duration. Derived, never stored.
    pub fn total_cost(&self) -> Decimal {
        self.amount * self.months
    }

    pub fn label(&self) -> String {
        format!("{} months", self.months)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_total_cost() {
        let plan = Plan {
            id: 1,
            months: 12,
            amount: Decimal::int(1000),
        };
        assert_eq!(plan.total_cost(), Decimal::int(12000));
        assert_eq!(plan.label(), "12 months");
    }
}
