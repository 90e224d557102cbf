//! Game clock arithmetic

use super::{LeagueConfig, PeriodStyle};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Parse a display clock into fractional minutes remaining in the period
///
/// Accepts "5:42" and the sub-minute forms "45.2" / ":45". Anything
/// unparsable reads as zero.
pub fn parse_clock(clock: &str) -> Decimal {
    let clock = clock.trim();
    let parse = |s: &str| s.trim().parse::<Decimal>().unwrap_or_default();

    match clock.split_once(':') {
        Some((mins, secs)) => parse(mins) + parse(secs) / dec!(60),
        None => parse(clock) / dec!(60),
    }
}

impl LeagueConfig {
    /// Minutes of game time elapsed at (period, clock)
    pub fn elapsed_minutes(&self, period: u32, clock: &str) -> Decimal {
        let completed = Decimal::from(period.saturating_sub(1)) * self.period_minutes;
        let in_period = self.period_minutes - parse_clock(clock);
        (completed + in_period).max(Decimal::ZERO)
    }

    /// Elapsed share of regulation time, capped at 1
    pub fn game_fraction(&self, period: u32, clock: &str) -> Decimal {
        if self.total_minutes.is_zero() {
            return Decimal::ONE;
        }
        (self.elapsed_minutes(period, clock) / self.total_minutes).min(Decimal::ONE)
    }

    /// Regulation minutes left, floored at zero
    pub fn minutes_remaining(&self, period: u32, clock: &str) -> Decimal {
        (self.total_minutes - self.elapsed_minutes(period, clock)).max(Decimal::ZERO)
    }

    /// Expected points from a season rate after `minutes` of play
    pub fn expected_by_time(&self, ppg: Decimal, minutes: Decimal) -> Decimal {
        if self.total_minutes.is_zero() {
            return Decimal::ZERO;
        }
        ppg * minutes / self.total_minutes
    }

    /// Short period label (Q3, H2, OT1)
    pub fn period_label(&self, period: u32) -> String {
        match self.period_style {
            PeriodStyle::Quarter => format!("Q{}", period),
            PeriodStyle::Half if period <= self.regulation_periods => format!("H{}", period),
            PeriodStyle::Half => format!("OT{}", period - self.regulation_periods),
        }
    }
}
