//! In-memory collaborators for driving the engine

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use courtside::feed::{EspnScoreboard, FeedError, Scoreboard, ScoreboardFeed};
use courtside::league::LeagueConfig;
use courtside::odds::{OddsQuote, QuoteFeed};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Serves ESPN-shaped bodies, one per fetch; the last body repeats
pub struct ScriptedScoreboard {
    bodies: Mutex<VecDeque<String>>,
}

impl ScriptedScoreboard {
    pub fn new(bodies: Vec<String>) -> Self {
        Self {
            bodies: Mutex::new(bodies.into()),
        }
    }
}

#[async_trait]
impl ScoreboardFeed for ScriptedScoreboard {
    async fn fetch(&self, _league: &LeagueConfig) -> Result<Scoreboard, FeedError> {
        let body = {
            let mut bodies = self.bodies.lock().unwrap();
            if bodies.len() > 1 {
                bodies.pop_front()
            } else {
                bodies.front().cloned()
            }
        };
        EspnScoreboard::parse(&body.unwrap_or_else(|| "{}".to_string()))
    }
}

/// Serves one quote batch per fetch; the last batch repeats
pub struct ScriptedQuotes {
    batches: Mutex<VecDeque<Vec<OddsQuote>>>,
}

impl ScriptedQuotes {
    pub fn new(batches: Vec<Vec<OddsQuote>>) -> Self {
        Self {
            batches: Mutex::new(batches.into()),
        }
    }
}

#[async_trait]
impl QuoteFeed for ScriptedQuotes {
    async fn fetch(
        &self,
        _league: &LeagueConfig,
        _now: DateTime<Utc>,
    ) -> Result<Vec<OddsQuote>, FeedError> {
        let mut batches = self.batches.lock().unwrap();
        let batch = if batches.len() > 1 {
            batches.pop_front()
        } else {
            batches.front().cloned()
        };
        Ok(batch.unwrap_or_default())
    }
}

fn competitor(home_away: &str, abbr: &str, name: &str, score: i32, threes: (u32, u32)) -> String {
    format!(
        r#"{{
            "homeAway": "{home_away}",
            "score": "{score}",
            "team": {{ "abbreviation": "{abbr}", "displayName": "{name}" }},
            "statistics": [
                {{ "name": "threePointFieldGoalsMade", "displayValue": "{made}" }},
                {{ "name": "threePointFieldGoalsAttempted", "displayValue": "{attempted}" }}
            ]
        }}"#,
        made = threes.0,
        attempted = threes.1,
    )
}

/// Boston leads the Lakers 60-50 early in the third on 10/18 from three
pub fn live_fragile_body() -> String {
    format!(
        r#"{{ "events": [{{
            "id": "401",
            "status": {{ "period": 3, "displayClock": "12:00", "type": {{ "state": "in" }} }},
            "competitions": [{{ "competitors": [{}, {}] }}]
        }}] }}"#,
        competitor("away", "BOS", "Boston Celtics", 60, (10, 18)),
        competitor("home", "LAL", "Los Angeles Lakers", 50, (10, 30)),
    )
}

/// The same game after the final horn
pub fn final_body(away: i32, home: i32) -> String {
    format!(
        r#"{{ "events": [{{
            "id": "401",
            "status": {{ "period": 4, "displayClock": "0:00", "type": {{ "state": "post" }} }},
            "competitions": [{{ "competitors": [{}, {}] }}]
        }}] }}"#,
        competitor("away", "BOS", "Boston Celtics", away, (14, 35)),
        competitor("home", "LAL", "Los Angeles Lakers", home, (12, 38)),
    )
}
