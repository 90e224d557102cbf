//! End-to-end poll pipeline tests

use crate::fakes::{final_body, live_fragile_body, ScriptedQuotes, ScriptedScoreboard};
use chrono::{DateTime, Duration, TimeZone, Utc};
use courtside::config::{Config, KellyConfig, OddsConfig};
use courtside::engine::{Collaborators, Engine};
use courtside::league::{LeagueConfig, LeagueMode};
use courtside::lifecycle::{BetResult, SignalState};
use courtside::odds::{OddsQuote, QuoteFeed};
use courtside::roster::StarTable;
use courtside::store::{JsonFileStore, StateStore};
use rust_decimal_macros::dec;
use std::path::Path;
use tempfile::TempDir;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 1, 10, 0).unwrap()
}

fn quote(away_price: i32, home_price: i32) -> OddsQuote {
    OddsQuote {
        away: "Boston Celtics".to_string(),
        home: "Los Angeles Lakers".to_string(),
        away_price,
        home_price,
        observed_at: t0(),
    }
}

async fn open_engine(
    dir: &Path,
    bodies: Vec<String>,
    quotes: Option<Vec<Vec<OddsQuote>>>,
) -> Engine {
    Engine::open(
        vec![LeagueConfig::nba()],
        KellyConfig::default(),
        &OddsConfig::default(),
        StarTable::builtin(),
        Collaborators {
            scoreboard: Box::new(ScriptedScoreboard::new(bodies)),
            quotes: quotes.map(|q| Box::new(ScriptedQuotes::new(q)) as Box<dyn QuoteFeed>),
            store: Box::new(JsonFileStore::new(dir)),
        },
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_issue_persist_restart_resolve() {
    let dir = TempDir::new().unwrap();

    let mut engine = open_engine(dir.path(), vec![live_fragile_body()], None).await;
    let report = engine.poll_league(LeagueMode::Nba, t0()).await.unwrap();
    assert_eq!(report.issued, 1);
    assert!(report.saved);
    drop(engine);

    let store = JsonFileStore::new(dir.path());
    assert!(store.state_path().exists());
    let stored = store.load_signals().await.unwrap();
    assert_eq!(stored.len(), 1);
    let signal = &stored.signals()[0];
    assert_eq!(signal.key, "401_LAL_nba_2025-01-15T01");
    assert_eq!(signal.bet_team, "LAL");
    assert_eq!(signal.fade_team, "BOS");
    assert_eq!(signal.period_label, "Q3");
    assert_eq!(signal.market_price, -110);
    assert_eq!(signal.state(), SignalState::Open);

    // Restart, then see the game finish
    let mut engine = open_engine(dir.path(), vec![final_body(101, 108)], None).await;
    assert_eq!(engine.signals().len(), 1);
    assert!(
        engine
            .state()
            .league(LeagueMode::Nba)
            .unwrap()
            .score_history
            .samples("401")
            .is_some()
    );

    let later = t0() + Duration::hours(2);
    let report = engine.poll_league(LeagueMode::Nba, later).await.unwrap();
    assert_eq!(report.resolved, 1);
    assert_eq!(report.issued, 0);

    let resolved = &engine.signals().signals()[0];
    assert_eq!(resolved.result, Some(BetResult::Win));
    assert_eq!(resolved.final_home_score, Some(108));
    assert_eq!(resolved.resolved_at, Some(later));
    let stake = resolved.stake.amount;
    assert_eq!(resolved.pnl, Some((stake * dec!(100) / dec!(110)).round_dp(2)));

    // A repeat final report is a no-op
    let report = engine
        .poll_league(LeagueMode::Nba, later + Duration::minutes(1))
        .await
        .unwrap();
    assert_eq!(report.resolved, 0);

    let summary = engine.signals().summary();
    let nba = summary.league(LeagueMode::Nba).unwrap();
    assert_eq!(nba.wins, 1);
    assert_eq!(nba.open, 0);
}

#[tokio::test]
async fn test_live_odds_and_line_movement() {
    let dir = TempDir::new().unwrap();
    let mut engine = open_engine(
        dir.path(),
        vec![live_fragile_body()],
        Some(vec![vec![quote(-170, 150)], vec![quote(-160, 135)]]),
    )
    .await;

    let report = engine.poll_league(LeagueMode::Nba, t0()).await.unwrap();
    assert!(report.odds_refreshed);
    assert_eq!(report.issued, 1);
    let signal = &engine.signals().signals()[0];
    assert_eq!(signal.market_price, 150);
    assert!(signal.has_live_odds);

    // Quotes are still fresh a minute later
    let report = engine
        .poll_league(LeagueMode::Nba, t0() + Duration::minutes(1))
        .await
        .unwrap();
    assert!(!report.odds_refreshed);
    assert_eq!(report.issued, 0);

    // Five minutes in, the refreshed price lands in the 4-7 minute window
    let report = engine
        .poll_league(LeagueMode::Nba, t0() + Duration::minutes(5))
        .await
        .unwrap();
    assert!(report.odds_refreshed);
    assert_eq!(report.lines_captured, 1);

    let signal = &engine.signals().signals()[0];
    assert_eq!(signal.lec_5, Some(15));
    assert!(signal.lec_10.is_none());
}

#[test]
fn test_status_reads_empty_data_dir() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.engine.data_dir = dir.path().join("never-written");

    let store = JsonFileStore::new(&config.engine.data_dir);
    let signals = tokio_test::block_on(store.load_signals()).unwrap();
    assert!(signals.is_empty());
    assert!(signals.summary().format_table().contains("No signals"));
}
