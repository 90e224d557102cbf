//! The Odds API v4 adapter

use super::{OddsQuote, QuoteFeed};
use crate::config::OddsConfig;
use crate::feed::FeedError;
use crate::league::LeagueConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ApiEvent {
    #[serde(default)]
    home_team: String,
    #[serde(default)]
    away_team: String,
    #[serde(default)]
    bookmakers: Vec<ApiBookmaker>,
}

#[derive(Debug, Deserialize)]
struct ApiBookmaker {
    #[serde(default)]
    key: String,
    #[serde(default)]
    markets: Vec<ApiMarket>,
}

#[derive(Debug, Deserialize)]
struct ApiMarket {
    key: String,
    #[serde(default)]
    outcomes: Vec<ApiOutcome>,
}

#[derive(Debug, Deserialize)]
struct ApiOutcome {
    name: String,
    price: Decimal,
}

impl ApiMarket {
    fn price_of(&self, team: &str) -> Option<i32> {
        self.outcomes
            .iter()
            .find(|o| o.name == team)
            .and_then(|o| o.price.round().to_i32())
    }
}

/// Moneyline client for The Odds API
pub struct OddsApiClient {
    client: Client,
    base_url: String,
    api_key: String,
    bookmakers: String,
}

impl OddsApiClient {
    pub fn new(config: &OddsConfig, api_key: impl Into<String>) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            bookmakers: config.bookmakers.clone(),
        })
    }

    /// Build a client when an API key is configured
    pub fn from_config(config: &OddsConfig) -> Result<Option<Self>, FeedError> {
        match config.api_key.as_deref().filter(|k| !k.is_empty()) {
            Some(key) => Self::new(config, key).map(Some),
            None => Ok(None),
        }
    }

    /// Parse an odds response body into quotes
    ///
    /// Each event takes its prices from the first bookmaker that quotes both
    /// sides of the head-to-head market. Quotes are stamped with `now`.
    pub fn parse(body: &str, now: DateTime<Utc>) -> Result<Vec<OddsQuote>, FeedError> {
        let events: Vec<ApiEvent> = serde_json::from_str(body)?;

        let quotes = events
            .into_iter()
            .filter_map(|event| {
                let (away_price, home_price) = event.bookmakers.iter().find_map(|book| {
                    let h2h = book.markets.iter().find(|m| m.key == "h2h")?;
                    let prices = (h2h.price_of(&event.away_team)?, h2h.price_of(&event.home_team)?);
                    tracing::trace!(bookmaker = %book.key, away = %event.away_team, "Using bookmaker");
                    Some(prices)
                })?;
                Some(OddsQuote {
                    away: event.away_team,
                    home: event.home_team,
                    away_price,
                    home_price,
                    observed_at: now,
                })
            })
            .collect();

        Ok(quotes)
    }
}

#[async_trait]
impl QuoteFeed for OddsApiClient {
    async fn fetch(
        &self,
        league: &LeagueConfig,
        now: DateTime<Utc>,
    ) -> Result<Vec<OddsQuote>, FeedError> {
        let url = format!("{}/sports/{}/odds/", self.base_url, league.odds_sport);
        tracing::debug!(league = %league.mode, url = %url, "Fetching odds");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("regions", "us"),
                ("markets", "h2h"),
                ("oddsFormat", "american"),
                ("bookmakers", self.bookmakers.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let quotes = Self::parse(&body, now)?;
        tracing::debug!(league = %league.mode, quotes = quotes.len(), "Odds parsed");
        Ok(quotes)
    }
}
