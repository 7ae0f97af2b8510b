pub mod date;
pub mod decimal;
pub mod member;
pub mod package;
pub mod payment;
pub mod plan;
pub mod registration;
pub mod schedule;
pub mod stats;
pub mod trainer;
