//! Plain-text rendering of reports and comparisons.

use crate::{
    analyzer::PlayerReport,
    compare::{ComparisonResult, Leader},
    nhl::Trend,
};

/// Format an optional metric, `N/A` when absent.
pub fn metric_or_na(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "N/A".to_string())
}

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Hot => "🔥",
        Trend::Cold => "❄️",
        Trend::Neutral => "🟡",
    }
}

/// Render a player card.
pub fn render_report(report: &PlayerReport) -> String {
    let stats = &report.data.current_stats;
    let details = &report.data.details;
    let mut out = String::new();

    out.push_str(report.display_name());
    if let Some(pos) = details.position_abbreviation() {
        out.push_str(&format!(" ({})", pos));
    }
    out.push('\n');
    out.push_str(details.team_name().unwrap_or("No team data"));
    out.push('\n');

    out.push_str(&format!(
        "{} {} streak ({} pts in last {} GP)\n",
        trend_marker(report.trend.classification),
        report.trend.classification,
        report.trend.points_in_window,
        report.data.last_five_games.len()
    ));

    out.push_str(&format!(
        "GP: {}  G: {}  A: {}  PTS: {}  FP: {:.1}  +/-: {}\n",
        stats.value_or_zero("games"),
        stats.value_or_zero("goals"),
        stats.value_or_zero("assists"),
        stats.value_or_zero("points"),
        report.fantasy_points,
        stats.value_or_zero("plusMinus"),
    ));
    out.push_str(&format!(
        "PDO: {}  xGF: {}\n",
        metric_or_na(report.advanced.pdo),
        metric_or_na(report.advanced.xgf)
    ));

    if !report.data.last_five_games.is_empty() {
        out.push_str("Last games:\n");
        for game in &report.data.last_five_games {
            out.push_str(&format!(
                "  {}  {} {}  {} pts\n",
                game.date.as_deref().unwrap_or("----------"),
                if game.is_home == Some(false) { "@" } else { "vs" },
                game.opponent.as_deref().unwrap_or("?"),
                game.points()
            ));
        }
    }

    out
}

/// Render a side-by-side table; the leading value in each row gets a `*`.
pub fn render_comparison(result: &ComparisonResult) -> String {
    let first_width = result.first_name.chars().count().max(6);
    let second_width = result.second_name.chars().count().max(6);
    let mut out = String::new();

    out.push_str(&format!("{} vs {}\n", result.first_name, result.second_name));
    out.push_str(&format!(
        "{:<12} {:<first_width$}  {:<second_width$}\n",
        "Stat", result.first_name, result.second_name
    ));

    for row in &result.rows {
        let first = match row.leader {
            Leader::First => format!("{} *", row.first),
            _ => row.first.to_string(),
        };
        let second = match row.leader {
            Leader::Second => format!("{} *", row.second),
            _ => row.second.to_string(),
        };
        out.push_str(&format!(
            "{:<12} {:<first_width$}  {:<second_width$}\n",
            row.stat, first, second
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        compare::ComparisonRow,
        nhl::{types::PositionRef, types::TeamRef, GameLogEntry, PlayerData, PlayerDetails},
    };

    fn sample_report() -> PlayerReport {
        let data = PlayerData {
            current_stats: [
                ("games", 82.0),
                ("goals", 42.0),
                ("assists", 69.0),
                ("points", 111.0),
                ("shots", 405.0),
                ("plusMinus", 35.0),
            ]
            .into_iter()
            .collect(),
            last_five_games: vec![
                GameLogEntry {
                    date: Some("2023-04-13".to_string()),
                    opponent: Some("Nashville Predators".to_string()),
                    is_home: Some(false),
                    ..GameLogEntry::with_points(3.0)
                },
                GameLogEntry::with_points(2.0),
            ],
            details: PlayerDetails {
                full_name: Some("Nathan MacKinnon".to_string()),
                primary_position: Some(PositionRef {
                    abbreviation: Some("C".to_string()),
                }),
                current_team: Some(TeamRef {
                    name: Some("Colorado Avalanche".to_string()),
                }),
                ..PlayerDetails::default()
            },
        };
        PlayerReport::new("mackinnon", data)
    }

    #[test]
    fn test_metric_or_na() {
        assert_eq!(metric_or_na(Some(101.26)), "101.3");
        assert_eq!(metric_or_na(None), "N/A");
    }

    #[test]
    fn test_render_report() {
        let text = render_report(&sample_report());

        assert!(text.starts_with("Nathan MacKinnon (C)\nColorado Avalanche\n"));
        assert!(text.contains("Neutral streak (5 pts in last 2 GP)"));
        assert!(text.contains("GP: 82  G: 42  A: 69  PTS: 111  FP: 193.5  +/-: 35"));
        assert!(text.contains("PDO: N/A  xGF: N/A"));
        assert!(text.contains("2023-04-13  @ Nashville Predators  3 pts"));
    }

    #[test]
    fn test_render_report_without_details() {
        let report = PlayerReport::new("Unknown Guy", PlayerData::default());
        let text = render_report(&report);

        assert!(text.starts_with("Unknown Guy\nNo team data\n"));
        assert!(text.contains("Cold streak (0 pts in last 0 GP)"));
        assert!(!text.contains("Last games:"));
    }

    #[test]
    fn test_render_comparison_marks_leader() {
        let result = ComparisonResult {
            first_name: "Auston Matthews".to_string(),
            second_name: "Mitch Marner".to_string(),
            rows: vec![
                ComparisonRow {
                    stat: "goals".to_string(),
                    first: 40.0,
                    second: 30.0,
                    leader: Leader::First,
                },
                ComparisonRow {
                    stat: "assists".to_string(),
                    first: 45.0,
                    second: 69.0,
                    leader: Leader::Second,
                },
                ComparisonRow {
                    stat: "plusMinus".to_string(),
                    first: 5.0,
                    second: 5.0,
                    leader: Leader::Tie,
                },
            ],
        };

        let text = render_comparison(&result);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Auston Matthews vs Mitch Marner");
        assert!(lines[2].starts_with("goals"));
        assert!(lines[2].contains("40 *"));
        assert!(!lines[2].contains("30 *"));
        assert!(lines[3].contains("69 *"));
        assert!(!lines[4].contains('*'));
    }
}
