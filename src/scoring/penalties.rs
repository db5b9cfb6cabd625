use crate::config::GameConfig;
use crate::models::{Doneness, Verdict};
use crate::scoring::constants::{DONENESS_PENALTY_TO_POINTS, DONENESS_POINTS_MAX};

/// Map elapsed fry time to a doneness category.
///
/// The first cutoff whose bound exceeds `seconds` wins; past the last
/// cutoff the corn dog is burnt. Total for all `seconds >= 0` and monotonic
/// in `seconds`.
pub fn doneness_for_time(seconds: f64, config: &GameConfig) -> Doneness {
    for (i, bound) in config.fry_cutoffs.iter().enumerate() {
        if seconds < *bound {
            return Doneness::ALL[i];
        }
    }
    Doneness::Burnt
}

/// Look up the live-quality penalty for a doneness category.
///
/// The flag marks the two extremes, which also count as a kitchen mistake;
/// the external mood system consumes it.
pub fn doneness_penalty(doneness: Doneness, config: &GameConfig) -> (f64, bool) {
    let penalty = config.doneness_penalties[doneness as usize];
    let mistake = matches!(doneness, Doneness::Raw | Doneness::Burnt);
    (penalty, mistake)
}

/// Doneness points for the cooking sub-score, derived from the configured
/// penalty schedule and floored at zero.
pub fn doneness_points(doneness: Doneness, config: &GameConfig) -> f64 {
    let (penalty, _) = doneness_penalty(doneness, config);
    (DONENESS_POINTS_MAX - penalty / DONENESS_PENALTY_TO_POINTS).clamp(0.0, DONENESS_POINTS_MAX)
}

/// Flat penalty for under-battering. A binary step: at or above the
/// configured optimal percent there is no penalty at all.
pub fn batter_penalty(percent: f64, config: &GameConfig) -> f64 {
    if percent >= config.batter_optimal_percent {
        0.0
    } else {
        config.low_batter_penalty
    }
}

/// Payout for a judged corn dog.
pub fn reward_for(verdict: &Verdict, config: &GameConfig) -> f64 {
    if verdict.overall_match {
        config.base_reward * config.order_match_multiplier
    } else {
        config.base_reward
    }
}
