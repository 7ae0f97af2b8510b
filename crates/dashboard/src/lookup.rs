//! Id-to-label resolution for the table screens. Total functions: a
//! missing row yields the `Unknown` sentinel instead of an error.

use model::{member::Member, package::Package, plan::Plan, trainer::Trainer};

pub const UNKNOWN: &str = "Unknown";
pub const NONE: &str = "None";

pub fn member_name(members: &[Member], id: i64) -> String {
    members
        .iter()
        .find(|member| member.id == id)
        .map(Member::full_name)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Id 0 means "no trainer assigned" and resolves to `None` rather than
/// `Unknown`.
pub fn trainer_name(trainers: &[Trainer], id: i64) -> String {
    if id == 0 {
        return NONE.to_string();
    }
    trainers
        .iter()
        .find(|trainer| trainer.id == id)
        .map(|trainer| trainer.name.clone())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn plan_name(plans: &[Plan], id: i64) -> String {
    plans
        .iter()
        .find(|plan| plan.id == id)
        .map(Plan::label)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn package_name(packages: &[Package], id: i64) -> String {
    packages
        .iter()
        .find(|package| package.id == id)
        .map(|package| package.name.clone())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
