//! Player card command implementation

use crate::{analyzer::PlayerAnalyzer, Result};

use super::render::render_report;

/// Handle the player command
pub async fn handle_player(analyzer: &mut PlayerAnalyzer, name: &str, as_json: bool) -> Result<()> {
    // tarpaulin::skip - HTTP call, tested via integration tests
    let report = analyzer.report(name).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}
