//! Compare command implementation

use tracing::info;

use crate::{
    analyzer::{PlayerAnalyzer, SessionOutcome},
    compare::ComparisonResult,
    Result,
};

use super::render::render_comparison;

/// Run both steps of a fresh comparison session.
///
/// Any comparison already pending on `analyzer` is dropped first. Returns
/// `None` if the session did not complete.
pub async fn run_comparison(
    analyzer: &mut PlayerAnalyzer,
    first: &str,
    second: &str,
) -> Result<Option<ComparisonResult>> {
    analyzer.cancel_comparison();

    let mut completed = None;
    for name in [first, second] {
        match analyzer.start_or_complete(name).await? {
            SessionOutcome::AwaitingSecond { first } => {
                info!(first = first.as_str(), "waiting for second player");
            }
            SessionOutcome::Completed(result) => completed = Some(result),
        }
    }

    Ok(completed)
}

/// Handle the compare command
pub async fn handle_compare(
    analyzer: &mut PlayerAnalyzer,
    first: &str,
    second: &str,
    as_json: bool,
) -> Result<()> {
    // tarpaulin::skip - HTTP calls, tested via integration tests
    let Some(result) = run_comparison(analyzer, first, second).await? else {
        println!("Comparison did not complete.");
        return Ok(());
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_comparison(&result));
    }

    Ok(())
}
