pub mod triplet_recall;

pub use self::triplet_recall::{ TripletEvaluation, RecallReport, TupleScore };

/// Arithmetic mean, 0 for an empty sequence
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
