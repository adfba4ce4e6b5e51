//! Interactive command: one player name per line, like a search box.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::{
    analyzer::{Analysis, PlayerAnalyzer, PlayerReport},
    Result,
};

use super::render::{render_comparison, render_report};

const QUIT: &str = ":quit";
const COMPARE: &str = ":compare";
const CANCEL: &str = ":cancel";

/// Handle the interactive command against stdin/stdout.
pub async fn handle_interactive(analyzer: &mut PlayerAnalyzer) -> Result<()> {
    // tarpaulin::skip - terminal I/O
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = std::io::stdout();
    run_interactive(analyzer, stdin, &mut stdout.lock()).await
}

/// Process `input` line by line until EOF or `:quit`.
///
/// Lookup errors are printed and the loop continues; only I/O errors end it.
pub async fn run_interactive<R, W>(
    analyzer: &mut PlayerAnalyzer,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut last_report: Option<PlayerReport> = None;

    writeln!(out, "Enter a player name ({COMPARE}, {CANCEL}, {QUIT}):")?;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => continue,
            QUIT => break,
            COMPARE => match &last_report {
                Some(report) => {
                    analyzer.stage(report);
                    writeln!(
                        out,
                        "Comparing {}. Enter player to compare...",
                        report.display_name()
                    )?;
                }
                None => writeln!(out, "Look up a player before comparing.")?,
            },
            CANCEL => {
                if analyzer.cancel_comparison().is_some() {
                    writeln!(out, "Comparison cancelled.")?;
                }
            }
            name => {
                debug!(name, "interactive lookup");
                match analyzer.analyze(name).await {
                    Ok(Analysis::Report(report)) => {
                        write!(out, "{}", render_report(&report))?;
                        last_report = Some(report);
                    }
                    Ok(Analysis::Comparison(result)) => {
                        write!(out, "{}", render_comparison(&result))?;
                    }
                    Err(e) => writeln!(out, "⚠ {}", e)?,
                }
            }
        }
    }

    Ok(())
}
