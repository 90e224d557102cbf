//! Engine context and the per-league poll pipeline

use crate::config::{KellyConfig, OddsConfig};
use crate::feed::ScoreboardFeed;
use crate::league::{LeagueConfig, LeagueMode};
use crate::lifecycle::{Signal, SignalDraft, SignalLog};
use crate::odds::{Matchup, QuoteFeed};
use crate::risk::{implied_probability, KellySizer, Urgency};
use crate::roster::StarTable;
use crate::signal::{recommend, SignalAggregator};
use crate::store::{EngineState, StateStore, StoreError};
use crate::telemetry::{self, PollStage};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// External collaborators the engine talks to
pub struct Collaborators {
    pub scoreboard: Box<dyn ScoreboardFeed>,
    /// None when no odds provider is configured
    pub quotes: Option<Box<dyn QuoteFeed>>,
    pub store: Box<dyn StateStore>,
}

/// What one league poll did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollReport {
    pub live: usize,
    pub completed: usize,
    pub issued: usize,
    pub resolved: usize,
    pub lines_captured: usize,
    pub odds_refreshed: bool,
    pub scoreboard_failed: bool,
    pub saved: bool,
}

pub struct Engine {
    leagues: Vec<LeagueConfig>,
    odds_refresh_secs: u64,
    stars: StarTable,
    sizer: KellySizer,
    scoreboard: Box<dyn ScoreboardFeed>,
    quotes: Option<Box<dyn QuoteFeed>>,
    store: Box<dyn StateStore>,
    state: EngineState,
    signals: SignalLog,
}

impl Engine {
    /// Build an engine, restoring state and signals from the store
    pub async fn open(
        leagues: Vec<LeagueConfig>,
        kelly: KellyConfig,
        odds: &OddsConfig,
        stars: StarTable,
        io: Collaborators,
    ) -> Result<Self, StoreError> {
        let state = io.store.load_state().await?;
        let signals = io.store.load_signals().await?;

        info!(
            leagues = ?leagues.iter().map(|l| l.mode).collect::<Vec<_>>(),
            signals = signals.len(),
            open = signals.open_count(),
            live_odds = io.quotes.is_some(),
            "Engine state restored"
        );

        Ok(Self {
            leagues,
            odds_refresh_secs: odds.refresh_secs,
            stars,
            sizer: KellySizer::new(kelly),
            scoreboard: io.scoreboard,
            quotes: io.quotes,
            store: io.store,
            state,
            signals,
        })
    }

    /// Monitored leagues, in configured order
    pub fn modes(&self) -> Vec<LeagueMode> {
        self.leagues.iter().map(|l| l.mode).collect()
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn signals(&self) -> &SignalLog {
        &self.signals
    }

    /// Run one poll of one league
    ///
    /// Upstream failures are logged and counted; only store failures are
    /// returned.
    pub async fn poll_league(
        &mut self,
        mode: LeagueMode,
        now: DateTime<Utc>,
    ) -> Result<PollReport, StoreError> {
        let mut report = PollReport::default();
        let Some(league) = self.leagues.iter().find(|l| l.mode == mode) else {
            warn!(league = %mode, "Poll requested for unmonitored league");
            return Ok(report);
        };
        let league_state = self.state.league_mut(mode);
        let mut dirty = false;

        if let Some(quotes) = &self.quotes {
            if league_state.odds.needs_refresh(now, self.odds_refresh_secs) {
                match quotes.fetch(league, now).await {
                    Ok(fresh) => {
                        debug!(league = %mode, quotes = fresh.len(), "Odds refreshed");
                        league_state.odds.apply(fresh, now);
                        report.odds_refreshed = true;
                        dirty = true;
                    }
                    Err(e) => {
                        warn!(league = %mode, error = %e, "Odds refresh failed, keeping cached quotes");
                        telemetry::record_poll_failure(mode, PollStage::Odds);
                    }
                }
            }
        }

        report.lines_captured = self
            .signals
            .capture_line_movement(mode, &league_state.odds, now);
        dirty |= report.lines_captured > 0;

        let board = match self.scoreboard.fetch(league).await {
            Ok(board) => board,
            Err(e) => {
                warn!(league = %mode, error = %e, "Scoreboard fetch failed, skipping cycle");
                telemetry::record_poll_failure(mode, PollStage::Scoreboard);
                report.scoreboard_failed = true;
                if dirty {
                    self.store.save_state(&self.state).await?;
                    self.store.save_signals(&self.signals).await?;
                    report.saved = true;
                }
                return Ok(report);
            }
        };
        report.live = board.live.len();
        report.completed = board.completed.len();
        telemetry::set_live_events(mode, board.live.len());

        for snap in &board.live {
            dirty |= league_state.score_history.record(
                &snap.event_id,
                snap.away.score,
                snap.home.score,
                now,
            );
        }

        let aggregator = SignalAggregator::new(league, &self.stars);
        for snap in &board.live {
            let Some(pick) = aggregator.evaluate(snap, &league_state.score_history) else {
                continue;
            };

            let urgency = Urgency::classify(league.game_fraction(snap.period, &snap.clock));
            let price = league_state
                .odds
                .price_for(&Matchup::from_snapshot(snap), pick.bet_side);
            let implied_prob = implied_probability(price.price);
            let stake = self.sizer.size(
                implied_prob,
                price.price,
                pick.signal_count,
                urgency.multiplier,
            );

            let draft = SignalDraft {
                league,
                snapshot: snap,
                recommendation: recommend(league, snap),
                pick,
                urgency,
                price,
                implied_prob,
                stake,
                issued_at: now,
            };
            if self.signals.contains_key(&draft.key()) {
                debug!(league = %mode, event = %snap.event_id, "Signal already issued this hour");
                continue;
            }
            if self.signals.issue(Signal::open(draft)) {
                report.issued += 1;
            }
        }

        report.resolved = self.signals.resolve(mode, &board.completed, now);

        telemetry::record_issued(mode, report.issued as u64);
        telemetry::record_resolved(mode, report.resolved as u64);
        telemetry::set_open_signals(mode, self.signals.open_count_in(mode));

        if dirty || report.issued > 0 || report.resolved > 0 {
            self.store.save_state(&self.state).await?;
            self.store.save_signals(&self.signals).await?;
            report.saved = true;
        }

        if report.issued > 0 || report.resolved > 0 {
            info!(
                league = %mode,
                live = report.live,
                issued = report.issued,
                resolved = report.resolved,
                total = self.signals.len(),
                "Poll complete"
            );
        } else {
            debug!(league = %mode, live = report.live, "Poll complete");
        }

        Ok(report)
    }
}
