use crate::analyzers::types::Averages;
use crate::roster::Roster;

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Averages each student's scores at full precision, in roster order.
///
/// A student without scores averages 0.0.
pub fn calculate_student_averages(roster: &Roster) -> Averages {
    roster
        .iter()
        .map(|student| (student.name.clone(), mean(&student.scores)))
        .collect()
}
