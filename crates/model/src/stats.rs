use serde::Serialize;

use crate::decimal::Decimal;

/// Percentage change between two period aggregates: unsigned magnitude
/// rounded to the nearest integer plus a direction flag (no change counts
/// as positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trend {
    pub value: u32,
    pub is_positive: bool,
}

impl Trend {
    pub fn flat() -> Trend {
        Trend {
            value: 0,
            is_positive: true,
        }
    }

    /// A zero previous aggregate yields a flat trend rather than a
    /// division by zero.
    pub fn between(current: f64, previous: f64) -> Trend {
        if previous == 0.0 {
            return Trend::flat();
        }
        let percent = (current - previous) / previous * 100.0;
        Trend {
            value: percent.round().abs() as u32,
            is_positive: percent >= 0.0,
        }
    }
}

impl Default for Trend {
    fn default() -> Self {
        Trend::flat()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_members: u64,
    pub active_members: u64,
    pub active_registrations: u64,
    pub total_trainers: u64,
    pub revenue_this_month: Decimal,
    pub revenue_trend: Trend,
    pub member_trend: Trend,
}

impl Default for DashboardStats {
    fn default() -> Self {
        DashboardStats {
            total_members: 0,
            active_members: 0,
            active_registrations: 0,
            total_trainers: 0,
            revenue_this_month: Decimal::zero(),
            revenue_trend: Trend::flat(),
            member_trend: Trend::flat(),
        }
    }
}

/// A payment row joined with its member and kind label, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentView {
    pub id: i64,
    pub member: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub remarks: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_trend_increase() {
        let trend = Trend::between(4000.0, 2000.0);
        assert_eq!(
            trend,
            Trend {
                value: 100,
                is_positive: true
            }
        );
    }

    #[test]
    fn test_trend_decrease() {
        let trend = Trend::between(2000.0, 4000.0);
        assert_eq!(
            trend,
            Trend {
                value: 50,
                is_positive: false
            }
        );
    }

    #[test]
    fn test_trend_zero_previous() {
        assert_eq!(Trend::between(4000.0, 0.0), Trend::flat());
        assert_eq!(Trend::between(0.0, 0.0), Trend::flat());
    }

    #[test]
    fn test_trend_no_change_is_positive() {
        let trend = Trend::between(2000.0, 2000.0);
        assert_eq!(
            trend,
            Trend {
                value: 0,
                is_positive: true
            }
        );
    }

    #[test]
    fn test_trend_rounds_to_nearest() {
        // (10150 - 4350) / 4350 = 133.33%
        let trend = Trend::between(10150.0, 4350.0);
        assert_eq!(trend.value, 133);
        assert!(trend.is_positive);
    }
}
