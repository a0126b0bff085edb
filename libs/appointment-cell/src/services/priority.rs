// libs/appointment-cell/src/services/priority.rs
use crate::models::{Appointment, Priority};

const HIGH_PRIORITY_KEYWORDS: [&str; 7] = [
    "emergency",
    "severe",
    "acute",
    "urgent",
    "critical",
    "bleeding",
    "chest pain",
];

const MEDIUM_PRIORITY_KEYWORDS: [&str; 4] = ["pain", "fever", "infection", "injury"];

/// Triage a free-text issue description.
///
/// Plain case-insensitive substring search: "painless" counts as "pain".
/// The high tier is checked first and wins outright.
pub fn classify_priority(issues: &str) -> Priority {
    let issues = issues.to_lowercase();

    if HIGH_PRIORITY_KEYWORDS.iter().any(|k| issues.contains(k)) {
        Priority::High
    } else if MEDIUM_PRIORITY_KEYWORDS.iter().any(|k| issues.contains(k)) {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Reorders newest-first appointments into review order.
///
/// The sort is stable, so within a tier the incoming order is kept.
pub fn sort_for_review(mut appointments: Vec<Appointment>) -> Vec<Appointment> {
    appointments.sort_by_key(|a| a.priority.rank());
    appointments
}
