//! ESPN public scoreboard adapter
//!
//! Turns the scoreboard JSON into live snapshots (state `in`) and final
//! scores (state `post`). Every numeric field is parsed defensively: a
//! missing or garbled value reads as zero rather than failing the poll.

use super::{
    FeedError, FinalScore, GameSnapshot, Scoreboard, ScoreboardFeed, ScoringLeader, ShotSplit,
    TeamLine,
};
use crate::league::LeagueConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct EspnResponse {
    #[serde(default)]
    events: Vec<EspnEvent>,
}

#[derive(Debug, Deserialize)]
struct EspnEvent {
    #[serde(default)]
    id: String,
    #[serde(default)]
    status: EspnStatus,
    #[serde(default)]
    competitions: Vec<EspnCompetition>,
}

#[derive(Debug, Default, Deserialize)]
struct EspnStatus {
    #[serde(default)]
    period: u32,
    #[serde(default, rename = "displayClock")]
    display_clock: String,
    #[serde(default, rename = "type")]
    status_type: EspnStatusType,
}

#[derive(Debug, Default, Deserialize)]
struct EspnStatusType {
    #[serde(default)]
    state: String,
}

#[derive(Debug, Deserialize)]
struct EspnCompetition {
    #[serde(default)]
    competitors: Vec<EspnCompetitor>,
}

#[derive(Debug, Deserialize)]
struct EspnCompetitor {
    #[serde(default, rename = "homeAway")]
    home_away: String,
    #[serde(default)]
    score: Value,
    #[serde(default)]
    team: EspnTeam,
    #[serde(default)]
    statistics: Vec<EspnStat>,
    #[serde(default)]
    leaders: Vec<EspnLeaderCategory>,
}

#[derive(Debug, Default, Deserialize)]
struct EspnTeam {
    #[serde(default)]
    abbreviation: String,
    #[serde(default, rename = "displayName")]
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct EspnStat {
    #[serde(default)]
    name: String,
    #[serde(default, rename = "displayValue")]
    display_value: Value,
}

#[derive(Debug, Deserialize)]
struct EspnLeaderCategory {
    #[serde(default)]
    name: String,
    #[serde(default, rename = "displayName")]
    display_name: String,
    #[serde(default)]
    leaders: Vec<EspnLeader>,
}

#[derive(Debug, Deserialize)]
struct EspnLeader {
    #[serde(default)]
    value: Value,
    #[serde(default)]
    athlete: EspnAthlete,
}

#[derive(Debug, Default, Deserialize)]
struct EspnAthlete {
    #[serde(default, rename = "shortName")]
    short_name: Option<String>,
    #[serde(default, rename = "displayName")]
    display_name: Option<String>,
}

/// Coerce a JSON number or numeric string to an integer, zero otherwise
fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.round() as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Live scoreboard client
pub struct EspnScoreboard {
    client: Client,
}

impl EspnScoreboard {
    /// Create a client with an explicit request timeout
    pub fn new(timeout: Duration) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Parse a scoreboard body
    pub fn parse(body: &str) -> Result<Scoreboard, FeedError> {
        let response: EspnResponse = serde_json::from_str(body)?;
        let mut board = Scoreboard::default();

        for event in &response.events {
            match event.status.status_type.state.as_str() {
                "in" => {
                    if let Some(snapshot) = Self::parse_live(event) {
                        board.live.push(snapshot);
                    }
                }
                "post" => {
                    if let Some(final_score) = Self::parse_final(event) {
                        board.completed.push(final_score);
                    }
                }
                _ => {}
            }
        }

        Ok(board)
    }

    fn split(event: &EspnEvent) -> Option<(&EspnCompetitor, &EspnCompetitor)> {
        let comp = event.competitions.first()?;
        let away = comp.competitors.iter().find(|c| c.home_away == "away")?;
        let home = comp.competitors.iter().find(|c| c.home_away == "home")?;
        Some((away, home))
    }

    fn parse_live(event: &EspnEvent) -> Option<GameSnapshot> {
        let (away, home) = Self::split(event)?;
        Some(GameSnapshot {
            event_id: event.id.clone(),
            away: Self::team_line(away),
            home: Self::team_line(home),
            period: event.status.period,
            clock: event.status.display_clock.clone(),
        })
    }

    fn parse_final(event: &EspnEvent) -> Option<FinalScore> {
        let (away, home) = Self::split(event)?;
        Some(FinalScore {
            event_id: event.id.clone(),
            away_abbr: away.team.abbreviation.clone(),
            home_abbr: home.team.abbreviation.clone(),
            away_score: coerce_int(&away.score) as i32,
            home_score: coerce_int(&home.score) as i32,
        })
    }

    fn team_line(competitor: &EspnCompetitor) -> TeamLine {
        let stat = |name: &str| -> u32 {
            competitor
                .statistics
                .iter()
                .find(|s| s.name == name)
                .map(|s| coerce_int(&s.display_value).max(0) as u32)
                .unwrap_or(0)
        };
        let abbr = competitor.team.abbreviation.clone();

        let leaders = competitor
            .leaders
            .iter()
            .filter(|cat| cat.name == "points" || cat.display_name == "Points")
            .flat_map(|cat| cat.leaders.iter())
            .map(|leader| ScoringLeader {
                name: leader
                    .athlete
                    .short_name
                    .clone()
                    .or_else(|| leader.athlete.display_name.clone())
                    .unwrap_or_else(|| "?".to_string()),
                points: coerce_int(&leader.value) as i32,
                team: abbr.clone(),
            })
            .collect();

        TeamLine {
            abbr: abbr.clone(),
            name: competitor.team.display_name.clone(),
            score: coerce_int(&competitor.score) as i32,
            field_goals: ShotSplit::new(stat("fieldGoalsMade"), stat("fieldGoalsAttempted")),
            three_pointers: ShotSplit::new(
                stat("threePointFieldGoalsMade"),
                stat("threePointFieldGoalsAttempted"),
            ),
            free_throws: ShotSplit::new(stat("freeThrowsMade"), stat("freeThrowsAttempted")),
            leaders,
        }
    }
}

#[async_trait]
impl ScoreboardFeed for EspnScoreboard {
    async fn fetch(&self, league: &LeagueConfig) -> Result<Scoreboard, FeedError> {
        tracing::debug!(league = %league.mode, url = %league.scoreboard_url, "Fetching scoreboard");

        let response = self.client.get(&league.scoreboard_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let board = Self::parse(&body)?;

        tracing::debug!(
            league = %league.mode,
            live = board.live.len(),
            completed = board.completed.len(),
            "Scoreboard parsed"
        );
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCOREBOARD: &str = r#"{
        "events": [
            {
                "id": "401585001",
                "status": { "period": 2, "displayClock": "4:12", "type": { "state": "in" } },
                "competitions": [{
                    "competitors": [
                        {
                            "homeAway": "home",
                            "score": "51",
                            "team": { "abbreviation": "LAL", "displayName": "Los Angeles Lakers" },
                            "statistics": [
                                { "name": "fieldGoalsMade", "displayValue": "20" },
                                { "name": "fieldGoalsAttempted", "displayValue": "41" },
                                { "name": "threePointFieldGoalsMade", "displayValue": "4" },
                                { "name": "threePointFieldGoalsAttempted", "displayValue": "15" }
                            ],
                            "leaders": [{
                                "name": "points",
                                "displayName": "Points",
                                "leaders": [{ "value": 9.0, "athlete": { "shortName": "L. Doncic" } }]
                            }]
                        },
                        {
                            "homeAway": "away",
                            "score": "58",
                            "team": { "abbreviation": "BOS", "displayName": "Boston Celtics" },
                            "statistics": [
                                { "name": "threePointFieldGoalsMade", "displayValue": "9" },
                                { "name": "threePointFieldGoalsAttempted", "displayValue": "16" },
                                { "name": "freeThrowsMade", "displayValue": "n/a" }
                            ]
                        }
                    ]
                }]
            },
            {
                "id": "401585002",
                "status": { "period": 4, "displayClock": "0:00", "type": { "state": "post" } },
                "competitions": [{
                    "competitors": [
                        { "homeAway": "home", "score": "99", "team": { "abbreviation": "NY" } },
                        { "homeAway": "away", "score": "104", "team": { "abbreviation": "MIA" } }
                    ]
                }]
            },
            {
                "id": "401585003",
                "status": { "type": { "state": "pre" } },
                "competitions": []
            }
        ]
    }"#;

    #[test]
    fn test_parse_live_and_completed() {
        let board = EspnScoreboard::parse(SCOREBOARD).unwrap();
        assert_eq!(board.live.len(), 1);
        assert_eq!(board.completed.len(), 1);

        let game = &board.live[0];
        assert_eq!(game.event_id, "401585001");
        assert_eq!(game.period, 2);
        assert_eq!(game.clock, "4:12");
        assert_eq!(game.away.abbr, "BOS");
        assert_eq!(game.away.score, 58);
        assert_eq!(game.away.three_pointers, ShotSplit::new(9, 16));
        assert_eq!(game.home.field_goals, ShotSplit::new(20, 41));
        assert_eq!(game.home.name, "Los Angeles Lakers");

        let final_score = &board.completed[0];
        assert_eq!(final_score.away_abbr, "MIA");
        assert_eq!(final_score.away_score, 104);
        assert_eq!(final_score.home_score, 99);
    }

    #[test]
    fn test_parse_leaders() {
        let board = EspnScoreboard::parse(SCOREBOARD).unwrap();
        let home = &board.live[0].home;
        assert_eq!(home.leaders.len(), 1);
        assert_eq!(home.leaders[0].name, "L. Doncic");
        assert_eq!(home.leaders[0].points, 9);
        assert_eq!(home.leaders[0].team, "LAL");
        assert!(board.live[0].away.leaders.is_empty());
    }

    #[test]
    fn test_garbled_values_read_as_zero() {
        let board = EspnScoreboard::parse(SCOREBOARD).unwrap();
        assert_eq!(board.live[0].away.free_throws, ShotSplit::default());
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let result = EspnScoreboard::parse("<html>rate limited</html>");
        assert!(matches!(result, Err(FeedError::Decode(_))));
    }

    #[test]
    fn test_empty_body_object() {
        let board = EspnScoreboard::parse("{}").unwrap();
        assert!(board.live.is_empty());
        assert!(board.completed.is_empty());
    }

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce_int(&json!("42")), 42);
        assert_eq!(coerce_int(&json!(" 7 ")), 7);
        assert_eq!(coerce_int(&json!(12.6)), 13);
        assert_eq!(coerce_int(&json!("45.4")), 45);
        assert_eq!(coerce_int(&json!(null)), 0);
        assert_eq!(coerce_int(&json!("--")), 0);
    }

    #[test]
    fn test_client_builds() {
        assert!(EspnScoreboard::new(Duration::from_secs(5)).is_ok());
    }
}
