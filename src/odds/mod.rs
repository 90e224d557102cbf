//! Moneyline quotes
//!
//! A per-league quote book with short price history, the ordered name
//! matcher that maps a live event onto a quote, and the provider adapter.

mod book;
mod client;
mod matcher;
mod types;

pub use book::{OddsBook, DEFAULT_PRICE, HISTORY_CAP};
pub use client::OddsApiClient;
pub use matcher::{find_quote, MatchKind, STRATEGIES};
pub use types::{Matchup, OddsQuote, PriceQuote, QuotePoint};

use crate::feed::FeedError;
use crate::league::LeagueConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Source of current moneyline quotes for a league
///
/// `now` stamps every returned quote's `observed_at`.
#[async_trait]
pub trait QuoteFeed: Send + Sync {
    async fn fetch(
        &self,
        league: &LeagueConfig,
        now: DateTime<Utc>,
    ) -> Result<Vec<OddsQuote>, FeedError>;
}
