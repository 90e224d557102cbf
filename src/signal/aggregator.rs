//! Combine per-team evidence into one directional pick
//!
//! Runs the strict three-point and star-coil checks for both teams, fills a
//! missing category from the soft profile, weighs fades, and picks a side.

use super::types::{CoilTier, Evidence, HomeCourt, Pick, SignalType};
use crate::analysis::{analyze_cast, analyze_durability, CastStrength};
use crate::feed::{GameSnapshot, ScoringLeader, Side};
use crate::league::{CoilWindow, LeagueConfig, ShotGate};
use crate::momentum::MomentumTracker;
use crate::roster::StarTable;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::{BTreeSet, HashMap};

/// Fade totals closer than this cancel each other out
const CONFLICT_BAND: Decimal = dec!(0.5);
/// Minutes played before the opposing engine can be judged
const ENGINE_MIN_MINUTES: Decimal = dec!(10);

/// Strict three-point hit on one team
#[derive(Debug, Clone, Copy)]
struct FragileHit {
    lead: i32,
    pct: Decimal,
    attempts: u32,
    pct3: Decimal,
    /// Opponent is scoring too little inside the arc to answer
    weak_engine: bool,
}

/// Thresholds for one star-coil pass
struct CoilRule {
    pace_max: Decimal,
    window: CoilWindow,
    max_margin: i32,
}

/// A star below pace
struct CoilHit<'l> {
    side: Side,
    leader: &'l ScoringLeader,
    expected: Decimal,
    pace: Decimal,
    cast_gap: i32,
    regression_flips: bool,
    tier: CoilTier,
}

/// Per-league aggregator over a shared star table
pub struct SignalAggregator<'a> {
    league: &'a LeagueConfig,
    stars: &'a StarTable,
}

impl<'a> SignalAggregator<'a> {
    pub fn new(league: &'a LeagueConfig, stars: &'a StarTable) -> Self {
        Self { league, stars }
    }

    /// Evaluate one snapshot; `None` when no category fired
    pub fn evaluate(&self, snap: &GameSnapshot, momentum: &MomentumTracker) -> Option<Pick> {
        let league = self.league;
        let elapsed = league.elapsed_minutes(snap.period, &snap.clock);
        let mut evidence = Vec::new();

        // Strict 3PT fragile
        let mut fragile: HashMap<Side, FragileHit> = HashMap::new();
        for side in [Side::Away, Side::Home] {
            if let Some(hit) = self.strict_fragile(snap, side, elapsed) {
                let team = snap.team(side);
                evidence.push(Evidence {
                    kind: SignalType::ThreePointFragile,
                    team: team.abbr.clone(),
                    text: format!(
                        "{} 3PT FRAGILE: {}% on {} att, {}% 3PT-dependent, lead {}pts. {}",
                        team.abbr,
                        hit.pct.round_dp(0),
                        hit.attempts,
                        hit.pct3.round_dp(0),
                        hit.lead,
                        if hit.weak_engine {
                            "Weak opp engine."
                        } else {
                            "Opp has engine."
                        }
                    ),
                    strong: hit.weak_engine,
                    soft: false,
                });
                fragile.insert(side, hit);
            }
        }
        let has_fragile = !fragile.is_empty();

        // Strict star coil
        let strict_rule = CoilRule {
            pace_max: league.coil_pace_max,
            window: league.coil_window,
            max_margin: league.coil_max_margin,
        };
        let mut coils: HashMap<Side, CoilTier> = HashMap::new();
        let mut has_star = false;
        for hit in self.coil_hits(snap, momentum, elapsed, &strict_rule) {
            match hit.tier {
                CoilTier::Elite | CoilTier::Standard => {
                    has_star = true;
                    coils.insert(hit.side, hit.tier);
                    evidence.push(Evidence {
                        kind: SignalType::StarCoil,
                        team: hit.leader.team.clone(),
                        text: format!(
                            "{} {}pts (exp ~{}, {}% pace). Cast gap: {}. {}.{}",
                            hit.leader.name,
                            hit.leader.points,
                            hit.expected.round_dp(0),
                            (hit.pace * dec!(100)).round_dp(0),
                            hit.cast_gap,
                            hit.tier,
                            if hit.regression_flips {
                                " Regression flips!"
                            } else {
                                ""
                            }
                        ),
                        strong: true,
                        soft: false,
                    });
                }
                CoilTier::Locked => {
                    coils.insert(hit.side, hit.tier);
                    evidence.push(Evidence {
                        kind: SignalType::StarCoil,
                        team: hit.leader.team.clone(),
                        text: format!("{} LOCKED: deficit baked in", hit.leader.name),
                        strong: false,
                        soft: false,
                    });
                }
                CoilTier::Weak => {}
            }
        }

        // Soft fill for whichever category the strict pass missed
        let mut soft_fragile = false;
        if !has_fragile {
            for side in [Side::Away, Side::Home] {
                if let Some(pct3) = self.soft_fragile(snap, side) {
                    soft_fragile = true;
                    let team = snap.team(side);
                    evidence.push(Evidence {
                        kind: SignalType::ThreePointFragile,
                        team: team.abbr.clone(),
                        text: format!(
                            "{} soft 3PT: {}% 3PT-dependent, lead {}pts",
                            team.abbr,
                            pct3.round_dp(0),
                            snap.lead(side)
                        ),
                        strong: false,
                        soft: true,
                    });
                }
            }
        }

        let mut soft_star = false;
        if !has_star {
            let soft_rule = CoilRule {
                pace_max: league.soft.star_pace,
                window: league.soft.star_window,
                max_margin: league.soft.star_margin,
            };
            for hit in self.coil_hits(snap, momentum, elapsed, &soft_rule) {
                let accepted = match hit.tier {
                    CoilTier::Locked => false,
                    CoilTier::Weak => league.soft.accept_weak_cast,
                    CoilTier::Elite | CoilTier::Standard => true,
                };
                if !accepted {
                    continue;
                }
                soft_star = true;
                coils.entry(hit.side).or_insert(hit.tier);
                evidence.push(Evidence {
                    kind: SignalType::StarCoil,
                    team: hit.leader.team.clone(),
                    text: format!(
                        "{} soft coil: {}pts, {}% pace, {}",
                        hit.leader.name,
                        hit.leader.points,
                        (hit.pace * dec!(100)).round_dp(0),
                        hit.tier
                    ),
                    strong: false,
                    soft: true,
                });
            }
        }

        let mut signal_types = BTreeSet::new();
        if has_fragile || soft_fragile {
            signal_types.insert(SignalType::ThreePointFragile);
        }
        if has_star || soft_star {
            signal_types.insert(SignalType::StarCoil);
        }
        if signal_types.is_empty() {
            return None;
        }
        let mut combined = signal_types.len() == 2;
        let mut signal_count = signal_types.len() as u32;

        // Fade weighting
        let mut away_fade = Decimal::ZERO;
        let mut home_fade = Decimal::ZERO;
        let mut add_fade = |side: Side, units: Decimal| match side {
            Side::Away => away_fade += units,
            Side::Home => home_fade += units,
        };
        for (side, hit) in &fragile {
            if hit.weak_engine {
                add_fade(*side, Decimal::ONE);
            }
        }
        for (side, tier) in &coils {
            if let Some((units, own_side)) = tier.fade_weight() {
                let target = if own_side { *side } else { side.opposite() };
                add_fade(target, units);
            }
        }

        if away_fade > Decimal::ZERO
            && home_fade > Decimal::ZERO
            && (away_fade - home_fade).abs() < CONFLICT_BAND
        {
            tracing::debug!(
                event = %snap.event_id,
                away_fade = %away_fade,
                home_fade = %home_fade,
                "Conflicting fades, downgrading to single"
            );
            combined = false;
            signal_count = 1;
        }

        let boosted = league.home_court_enabled()
            && (away_fade > Decimal::ZERO || home_fade > Decimal::ZERO);
        if boosted {
            away_fade += league.home_court_boost;
        }

        let bet_side = if away_fade > home_fade {
            Side::Home
        } else if home_fade > away_fade {
            Side::Away
        } else if away_fade > Decimal::ZERO {
            Side::Home
        } else if snap.away.score < snap.home.score {
            Side::Away
        } else {
            Side::Home
        };

        let home_court = match (boosted, bet_side) {
            (false, _) => HomeCourt::None,
            (true, Side::Home) => HomeCourt::Tailwind,
            (true, Side::Away) => HomeCourt::Headwind,
        };

        Some(Pick {
            bet_side,
            fade_side: bet_side.opposite(),
            evidence,
            signal_types,
            combined,
            signal_count,
            away_fade,
            home_fade,
            home_court,
        })
    }

    fn strict_fragile(&self, snap: &GameSnapshot, side: Side, elapsed: Decimal) -> Option<FragileHit> {
        let league = self.league;
        let team = snap.team(side);
        let opp = snap.team(side.opposite());
        let threes = team.three_pointers;

        if !ShotGate::any(&league.hot_shooting, threes.pct(), threes.attempted) {
            return None;
        }
        let durability = analyze_durability(league, team.score, threes.made, opp.score);
        if !durability.fragile {
            return None;
        }
        let lead = snap.lead(side);
        if !league.fragile_margin.contains(lead) {
            return None;
        }

        let minutes = elapsed.max(Decimal::ONE);
        let opp_inside = opp.score - opp.three_pointers.made as i32 * 3;
        let opp_ppm = Decimal::from(opp_inside) / minutes;
        let weak_engine = opp_ppm < league.engine_threshold_ppm && minutes >= ENGINE_MIN_MINUTES;

        Some(FragileHit {
            lead,
            pct: threes.pct(),
            attempts: threes.attempted,
            pct3: durability.pct3,
            weak_engine,
        })
    }

    /// Soft three-point check; returns the three-point share on a hit
    fn soft_fragile(&self, snap: &GameSnapshot, side: Side) -> Option<Decimal> {
        let soft = &self.league.soft;
        let team = snap.team(side);
        let opp = snap.team(side.opposite());
        let threes = team.three_pointers;

        if !ShotGate::any(&soft.hot_shooting, threes.pct(), threes.attempted) {
            return None;
        }
        if !soft.lead.contains(snap.lead(side)) || team.score < soft.min_score {
            return None;
        }
        let durability = analyze_durability(self.league, team.score, threes.made, opp.score);
        (durability.pct3 >= soft.fragile_pct).then_some(durability.pct3)
    }

    fn coil_hits<'s>(
        &self,
        snap: &'s GameSnapshot,
        momentum: &MomentumTracker,
        elapsed: Decimal,
        rule: &CoilRule,
    ) -> Vec<CoilHit<'s>> {
        let league = self.league;
        let margin = snap.margin();
        if margin > rule.max_margin || !rule.window.contains(snap.period, elapsed) {
            return Vec::new();
        }

        snap.away
            .leaders
            .iter()
            .chain(snap.home.leaders.iter())
            .filter_map(|leader| {
                let side = snap.side_of(&leader.team)?;
                let star = self.stars.lookup(league, &leader.name, &leader.team)?;

                let expected = league.expected_by_time(star.ppg, elapsed);
                let pace = if expected > Decimal::ZERO {
                    Decimal::from(leader.points) / expected
                } else {
                    Decimal::ONE
                };
                if pace >= rule.pace_max {
                    return None;
                }

                let team = snap.team(side);
                let opp = snap.team(side.opposite());
                let cast = analyze_cast(
                    league,
                    leader.points,
                    team.score,
                    opp.score,
                    star.ppg,
                    elapsed,
                );
                let locked = snap.is_trailing(side)
                    && momentum.is_locked(&snap.event_id, side, elapsed);
                let tier = if locked {
                    CoilTier::Locked
                } else {
                    match cast.strength {
                        CastStrength::Strong => CoilTier::Elite,
                        CastStrength::Moderate => CoilTier::Standard,
                        CastStrength::Weak => CoilTier::Weak,
                    }
                };

                Some(CoilHit {
                    side,
                    leader,
                    expected,
                    pace,
                    cast_gap: cast.cast_gap,
                    regression_flips: cast.regression_flips,
                    tier,
                })
            })
            .collect()
    }
}
