//! Integration tests for quote matching and the quote book

use chrono::{Duration, TimeZone, Utc};
use courtside::feed::{EspnScoreboard, Side};
use courtside::odds::{Matchup, OddsApiClient, OddsBook, DEFAULT_PRICE};

const ODDS_BODY: &str = r#"[
    {
        "home_team": "Los Angeles Lakers",
        "away_team": "Boston Celtics",
        "bookmakers": [{
            "key": "fanduel",
            "markets": [{ "key": "h2h", "outcomes": [
                { "name": "Boston Celtics", "price": -220 },
                { "name": "Los Angeles Lakers", "price": 180 }
            ] }]
        }]
    },
    {
        "home_team": "Los Angeles Clippers",
        "away_team": "Boston College Eagles",
        "bookmakers": [{
            "key": "fanduel",
            "markets": [{ "key": "h2h", "outcomes": [
                { "name": "Boston College Eagles", "price": 300 },
                { "name": "Los Angeles Clippers", "price": -400 }
            ] }]
        }]
    }
]"#;

#[test]
fn test_live_snapshot_prices_through_book() {
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 1, 0, 0).unwrap();
    let quotes = OddsApiClient::parse(ODDS_BODY, now).unwrap();
    assert_eq!(quotes.len(), 2);
    assert!(quotes.iter().all(|q| q.observed_at == now));

    let mut book = OddsBook::new();
    book.apply(quotes, now);

    let board = EspnScoreboard::parse(&crate::fakes::live_fragile_body()).unwrap();
    let matchup = Matchup::from_snapshot(&board.live[0]);

    let home = book.price_for(&matchup, Side::Home);
    assert_eq!(home.price, 180);
    assert!(home.has_live_odds);
    assert_eq!(home.quote_key.as_deref(), Some("boston celtics vs los angeles lakers"));
    assert_eq!(book.price_for(&matchup, Side::Away).price, -220);
}

#[test]
fn test_unmatched_game_uses_default_price() {
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 1, 0, 0).unwrap();
    let mut book = OddsBook::new();
    book.apply(OddsApiClient::parse(ODDS_BODY, now).unwrap(), now);

    let matchup = Matchup {
        away_abbr: "DEN".to_string(),
        home_abbr: "UTA".to_string(),
        away_name: "Denver Nuggets".to_string(),
        home_name: "Utah Jazz".to_string(),
    };
    let quote = book.price_for(&matchup, Side::Home);
    assert_eq!(quote.price, DEFAULT_PRICE);
    assert!(!quote.has_live_odds);
    assert!(quote.quote_key.is_none());

    assert!(!book.needs_refresh(now + Duration::seconds(60), 120));
    assert!(book.needs_refresh(now + Duration::seconds(120), 120));
}
