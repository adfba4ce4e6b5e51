//! Unit tests for NHL response types

use super::*;
use serde_json::json;

#[cfg(test)]
mod stat_record_tests {
    use super::*;

    #[test]
    fn test_stat_record_skips_non_numeric_values() {
        let json = json!({
            "timeOnIce": "1634:20",
            "goals": 41,
            "assists": 64,
            "shootingPercentage": 13.6,
            "faceOffPct": null
        });

        let record: PlayerStatRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("goals"), Some(41.0));
        assert_eq!(record.get("shootingPercentage"), Some(13.6));
        assert_eq!(record.get("timeOnIce"), None);
        assert_eq!(record.get("faceOffPct"), None);
    }

    #[test]
    fn test_stat_record_null_is_empty() {
        let record: PlayerStatRecord = serde_json::from_value(json!(null)).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_value_or_zero() {
        let record: PlayerStatRecord = [("goals", 3.0)].into_iter().collect();
        assert_eq!(record.value_or_zero("goals"), 3.0);
        assert_eq!(record.value_or_zero("assists"), 0.0);
    }

    #[test]
    fn test_keys_are_sorted() {
        let mut record = PlayerStatRecord::new();
        record.insert("points", 10.0);
        record.insert("assists", 6.0);
        record.insert("goals", 4.0);

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["assists", "goals", "points"]);
    }

    #[test]
    fn test_stat_record_serializes_as_flat_map() {
        let record: PlayerStatRecord = [("goals", 2.0), ("plusMinus", -1.0)].into_iter().collect();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, json!({ "goals": 2.0, "plusMinus": -1.0 }));
    }
}

#[cfg(test)]
mod envelope_tests {
    use super::*;

    #[test]
    fn test_people_envelope_search_results() {
        let json = json!({
            "copyright": "NHL and the NHL Shield are registered trademarks",
            "people": [
                { "id": 8478402, "fullName": "Connor McDavid", "link": "/api/v1/people/8478402" },
                { "id": 8470000, "fullName": "Someone Else" }
            ]
        });

        let envelope: PeopleEnvelope<PersonSummary> = serde_json::from_value(json).unwrap();
        assert_eq!(envelope.people.len(), 2);
        assert_eq!(envelope.people[0].id, PlayerId::new(8478402));
        assert_eq!(envelope.people[0].full_name.as_deref(), Some("Connor McDavid"));
    }

    #[test]
    fn test_people_envelope_missing_or_null_people() {
        let missing: PeopleEnvelope<PersonSummary> = serde_json::from_value(json!({})).unwrap();
        assert!(missing.people.is_empty());

        let null: PeopleEnvelope<PersonSummary> =
            serde_json::from_value(json!({ "people": null })).unwrap();
        assert!(null.people.is_empty());
    }

    #[test]
    fn test_player_details_full() {
        let json = json!({
            "id": 8477492,
            "fullName": "Nathan MacKinnon",
            "primaryNumber": "29",
            "currentAge": 28,
            "currentTeam": { "id": 21, "name": "Colorado Avalanche" },
            "primaryPosition": { "code": "C", "name": "Center", "abbreviation": "C" }
        });

        let details: PlayerDetails = serde_json::from_value(json).unwrap();
        assert_eq!(details.id, Some(PlayerId::new(8477492)));
        assert_eq!(details.full_name.as_deref(), Some("Nathan MacKinnon"));
        assert_eq!(details.primary_number.as_deref(), Some("29"));
        assert_eq!(details.current_age, Some(28));
        assert_eq!(details.position_abbreviation(), Some("C"));
        assert_eq!(details.team_name(), Some("Colorado Avalanche"));
    }

    #[test]
    fn test_player_details_without_team() {
        let details: PlayerDetails =
            serde_json::from_value(json!({ "id": 8471214, "fullName": "Free Agent" })).unwrap();
        assert_eq!(details.team_name(), None);
        assert_eq!(details.position_abbreviation(), None);
    }

    #[test]
    fn test_stats_envelope_first_splits() {
        let json = json!({
            "stats": [{
                "type": { "displayName": "gameLog" },
                "splits": [
                    { "date": "2023-04-13", "isHome": true, "opponent": { "name": "Seattle Kraken" }, "stat": { "points": 2 } },
                    { "date": "2023-04-11", "isHome": false, "stat": { "points": 0 } }
                ]
            }]
        });

        let envelope: StatsEnvelope = serde_json::from_value(json).unwrap();
        let splits = envelope.first_splits();
        assert_eq!(splits.len(), 2);
        assert_eq!(splits[0].date.as_deref(), Some("2023-04-13"));
        assert_eq!(splits[0].stat.get("points"), Some(2.0));
    }

    #[test]
    fn test_stats_envelope_tolerates_missing_structure() {
        let empty: StatsEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(empty.first_splits().is_empty());

        let no_splits: StatsEnvelope = serde_json::from_value(json!({ "stats": [{}] })).unwrap();
        assert!(no_splits.first_splits().is_empty());

        let null_splits: StatsEnvelope =
            serde_json::from_value(json!({ "stats": [{ "splits": null }] })).unwrap();
        assert!(null_splits.first_splits().is_empty());
    }
}

#[cfg(test)]
mod game_log_tests {
    use super::*;

    #[test]
    fn test_game_log_entry_from_split() {
        let split: StatSplit = serde_json::from_value(json!({
            "date": "2023-04-13",
            "isHome": false,
            "opponent": { "id": 55, "name": "Seattle Kraken" },
            "stat": { "goals": 1, "assists": 2, "points": 3 }
        }))
        .unwrap();

        let entry = GameLogEntry::from(split);
        assert_eq!(entry.date.as_deref(), Some("2023-04-13"));
        assert_eq!(entry.opponent.as_deref(), Some("Seattle Kraken"));
        assert_eq!(entry.is_home, Some(false));
        assert_eq!(entry.points(), 3.0);
    }

    #[test]
    fn test_game_log_entry_missing_points_is_zero() {
        let split: StatSplit = serde_json::from_value(json!({ "stat": { "goals": 1 } })).unwrap();
        assert_eq!(GameLogEntry::from(split).points(), 0.0);
    }

    #[test]
    fn test_with_points() {
        let entry = GameLogEntry::with_points(4.0);
        assert_eq!(entry.points(), 4.0);
        assert!(entry.date.is_none());
    }
}
