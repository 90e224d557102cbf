//! Per-league quote book with short price history

use super::matcher::{find_quote, MatchKind};
use super::types::{Matchup, OddsQuote, PriceQuote, QuotePoint};
use crate::feed::Side;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// Price assumed when no quote matches
pub const DEFAULT_PRICE: i32 = -110;
/// Price points kept per matchup
pub const HISTORY_CAP: usize = 50;
/// Matchups not quoted for this long are dropped from history
const HISTORY_TTL_HOURS: i64 = 12;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OddsBook {
    quotes: BTreeMap<String, OddsQuote>,
    refreshed_at: Option<DateTime<Utc>>,
    history: BTreeMap<String, VecDeque<QuotePoint>>,
}

impl OddsBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when empty or older than `refresh_secs`
    pub fn needs_refresh(&self, now: DateTime<Utc>, refresh_secs: u64) -> bool {
        match self.refreshed_at {
            Some(at) if !self.quotes.is_empty() => {
                now - at >= Duration::seconds(refresh_secs as i64)
            }
            _ => true,
        }
    }

    /// Replace current quotes and extend each matchup's history
    pub fn apply(&mut self, quotes: Vec<OddsQuote>, now: DateTime<Utc>) {
        self.quotes.clear();
        for quote in quotes {
            let key = quote.key();
            let points = self.history.entry(key.clone()).or_default();
            points.push_back(QuotePoint {
                at: now,
                away_price: quote.away_price,
                home_price: quote.home_price,
            });
            while points.len() > HISTORY_CAP {
                points.pop_front();
            }
            self.quotes.insert(key, quote);
        }
        let ttl = Duration::hours(HISTORY_TTL_HOURS);
        self.history
            .retain(|_, points| points.back().is_some_and(|p| now - p.at < ttl));
        self.refreshed_at = Some(now);
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Price history for a book key, oldest first
    pub fn history(&self, key: &str) -> Option<&VecDeque<QuotePoint>> {
        self.history.get(key)
    }

    /// Quote for a matchup via the ordered matcher
    pub fn find(&self, matchup: &Matchup) -> Option<(MatchKind, &OddsQuote)> {
        find_quote(matchup, self.quotes.values())
    }

    /// Price for backing `side`, or the default price when nothing matches
    pub fn price_for(&self, matchup: &Matchup, side: Side) -> PriceQuote {
        match self.find(matchup) {
            Some((kind, quote)) => {
                tracing::trace!(key = %quote.key(), ?kind, "Quote matched");
                PriceQuote {
                    price: quote.price(side),
                    has_live_odds: true,
                    quote_key: Some(quote.key()),
                }
            }
            None => PriceQuote {
                price: DEFAULT_PRICE,
                has_live_odds: false,
                quote_key: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(mins: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 1, 0, 0).unwrap() + Duration::minutes(mins)
    }

    fn quote(away_price: i32, home_price: i32) -> OddsQuote {
        OddsQuote {
            away: "Boston Celtics".to_string(),
            home: "Los Angeles Lakers".to_string(),
            away_price,
            home_price,
            observed_at: t(0),
        }
    }

    fn matchup() -> Matchup {
        Matchup {
            away_abbr: "BOS".to_string(),
            home_abbr: "LAL".to_string(),
            away_name: "Boston Celtics".to_string(),
            home_name: "Los Angeles Lakers".to_string(),
        }
    }

    #[test]
    fn test_needs_refresh() {
        let mut book = OddsBook::new();
        assert!(book.needs_refresh(t(0), 120));

        book.apply(vec![quote(120, -140)], t(0));
        assert!(!book.needs_refresh(t(1), 120));
        assert!(book.needs_refresh(t(2), 120));

        // An empty refresh never counts as fresh
        book.apply(vec![], t(3));
        assert!(book.needs_refresh(t(3), 120));
    }

    #[test]
    fn test_key_and_history() {
        let mut book = OddsBook::new();
        book.apply(vec![quote(120, -140)], t(0));
        book.apply(vec![quote(130, -150)], t(2));

        let history = book.history("boston celtics vs los angeles lakers").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].away_price, 130);
        assert_eq!(history[1].at, t(2));
    }

    #[test]
    fn test_history_capped() {
        let mut book = OddsBook::new();
        for i in 0..60 {
            book.apply(vec![quote(100 + i, -120)], t(i as i64 * 2));
        }
        let history = book.history(&quote(0, 0).key()).unwrap();
        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(history[0].away_price, 110);
    }

    #[test]
    fn test_price_for_matched_and_default() {
        let mut book = OddsBook::new();
        let price = book.price_for(&matchup(), Side::Home);
        assert_eq!(price.price, DEFAULT_PRICE);
        assert!(!price.has_live_odds);
        assert!(price.quote_key.is_none());

        book.apply(vec![quote(120, -140)], t(0));
        let price = book.price_for(&matchup(), Side::Home);
        assert_eq!(price.price, -140);
        assert!(price.has_live_odds);
        assert_eq!(
            price.quote_key.as_deref(),
            Some("boston celtics vs los angeles lakers")
        );
        assert_eq!(book.price_for(&matchup(), Side::Away).price, 120);
    }

    #[test]
    fn test_stale_history_pruned() {
        let mut book = OddsBook::new();
        book.apply(vec![quote(120, -140)], t(0));
        book.apply(vec![], t(13 * 60));
        assert!(book.history(&quote(0, 0).key()).is_none());
    }

    #[test]
    fn test_history_survives_quote_dropping_off() {
        let mut book = OddsBook::new();
        book.apply(vec![quote(120, -140)], t(0));
        book.apply(vec![], t(2));
        assert!(book.is_empty());
        assert!(book.history(&quote(0, 0).key()).is_some());
    }
}
