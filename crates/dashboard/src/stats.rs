//! Aggregation engine: dashboard statistics and recent-activity
//! projections over one snapshot. The caller supplies "now" so trend
//! windows are testable.

use std::cmp::Reverse;

use chrono::{DateTime, Datelike as _, Local};
use model::{
    date,
    decimal::Decimal,
    member::Member,
    payment::Payment,
    stats::{DashboardStats, PaymentView, Trend},
};

use crate::{lookup, store::Snapshot};

pub const RECENT_LIMIT: usize = 5;

pub fn compute_stats(snapshot: &Snapshot, now: DateTime<Local>) -> DashboardStats {
    let now = now.naive_local();
    let (year, month) = (now.year(), now.month());
    let (prev_year, prev_month) = date::prev_month(year, month);

    let revenue_this_month = month_revenue(&snapshot.payments, year, month);
    let revenue_last_month = month_revenue(&snapshot.payments, prev_year, prev_month);

    let total_members = snapshot.members.len() as u64;
    // Members that already existed when the current month started.
    let members_last_month = snapshot
        .members
        .iter()
        .filter(|member| {
            member
                .created_at()
                .is_some_and(|at| (at.year(), at.month()) < (year, month))
        })
        .count();

    let active_registrations = snapshot
        .registrations
        .iter()
        .filter(|registration| registration.is_active())
        .count() as u64;

    DashboardStats {
        total_members,
        active_members: active_registrations,
        active_registrations,
        total_trainers: snapshot.trainers.len() as u64,
        revenue_this_month,
        revenue_trend: Trend::between(revenue_this_month.to_f64(), revenue_last_month.to_f64()),
        member_trend: Trend::between(total_members as f64, members_last_month as f64),
    }
}

fn month_revenue(payments: &[Payment], year: i32, month: u32) -> Decimal {
    payments
        .iter()
        .filter(|payment| {
            payment
                .created_at()
                .is_some_and(|at| at.year() == year && at.month() == month)
        })
        .map(|payment| payment.amount)
        .sum()
}

/// The `limit` most recent payments, newest first, each joined with its
/// member through the registration chain. A broken link resolves to the
/// `Unknown` sentinel.
pub fn recent_payments(snapshot: &Snapshot, limit: usize) -> Vec<PaymentView> {
    let mut payments: Vec<&Payment> = snapshot.payments.iter().collect();
    payments.sort_by_key(|payment| Reverse(date::sort_key(&payment.date_created)));

    payments
        .into_iter()
        .take(limit)
        .map(|payment| {
            let member = snapshot
                .registrations
                .iter()
                .find(|registration| registration.id == payment.registration_id)
                .map(|registration| lookup::member_name(&snapshot.members, registration.member_id))
                .unwrap_or_else(|| lookup::UNKNOWN.to_string());
            PaymentView {
                id: payment.id,
                member,
                amount: payment.amount,
                kind: payment.kind.to_string(),
                date: payment.date_created.clone(),
                remarks: payment.remarks.clone(),
            }
        })
        .collect()
}

/// The `limit` most recently created members, newest first.
pub fn recent_members(members: &[Member], limit: usize) -> Vec<Member> {
    let mut members = members.to_vec();
    members.sort_by_key(|member| Reverse(date::sort_key(&member.date_created)));
    members.truncate(limit);
    members
}
