//! Status and config commands

use crate::config::Config;
use crate::store::{JsonFileStore, StateStore};
use anyhow::Context;
use rust_decimal_macros::dec;

/// Print the per-league summary of the stored signal log
pub async fn print_status(config: &Config) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&config.engine.data_dir);
    let signals = store
        .load_signals()
        .await
        .with_context(|| format!("Failed to read {}", store.signals_path().display()))?;

    println!("courtside status");
    println!("  Data dir: {}", config.engine.data_dir.display());
    println!("  Signals: {} ({} open)", signals.len(), signals.open_count());

    let summary = signals.summary();
    let total = summary.total();
    println!(
        "  Total: {}-{} ({:.1}% win), net P&L {:+.2} on {:.2} staked",
        total.wins,
        total.losses,
        total.win_rate() * dec!(100),
        total.net_pnl,
        total.staked
    );
    print!("{}", summary.format_table());
    Ok(())
}

/// Print the effective configuration
pub fn print_config(config: &Config) {
    println!("Current configuration:");
    println!(
        "  Engine: poll every {}s, data in {}",
        config.engine.poll_secs,
        config.engine.data_dir.display()
    );
    println!(
        "  Kelly: fraction={}, edge={}+{}/signal (max {}), MaxStake={}%, Bankroll={}",
        config.kelly.kelly_fraction,
        config.kelly.base_edge,
        config.kelly.edge_per_signal,
        config.kelly.max_edge,
        config.kelly.max_stake_pct * dec!(100),
        config.kelly.bankroll
    );
    println!(
        "  Odds: {} (refresh {}s, books {})",
        if config.odds.api_key.is_some() {
            "live"
        } else {
            "default price only"
        },
        config.odds.refresh_secs,
        config.odds.bookmakers
    );
    for league in &config.leagues {
        println!(
            "  League {}: {} min, fragile >= {}%, star ppg >= {}, home court {}",
            league.label,
            league.total_minutes,
            league.fragile_threshold_pct,
            league.star_ppg_min,
            league.home_court_boost
        );
    }
}
