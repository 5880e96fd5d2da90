use crate::eval::Outcome;
use crate::math::stats::Summary;

pub fn format_summary(outcomes: &[Outcome], stats: &Summary) -> String {
    let version = env!("CARGO_PKG_VERSION");

    let rendered: Vec<String> = outcomes.iter().map(|o| format_outcome(*o)).collect();

    let mut out = String::new();
    out.push_str(&format!("triad-eval v{}\n", version));
    out.push_str(&format!("Input: {} elements\n", stats.total_count));
    out.push_str(&format!("Results: [{}]\n", rendered.join(", ")));
    out.push_str(&format!(
        "Matches: {}/{}\n",
        stats.successful_count, stats.total_count
    ));
    out.push_str(&format!(
        "Valid: {}/{}\n",
        stats.valid_count, stats.total_count
    ));
    out.push_str(&format!(
        "Mean: {:.4}  Min: {:.4}  Max: {:.4}\n",
        stats.mean, stats.min, stats.max
    ));
    out.push_str(&format!(
        "Errors: {}\n",
        if stats.has_errors { "yes" } else { "none" }
    ));
    out
}

fn format_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Value(v) => format!("{}", v),
        Outcome::NoMatch => "0".to_string(),
        Outcome::Failed => "nan".to_string(),
    }
}
