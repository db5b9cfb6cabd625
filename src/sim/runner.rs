use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::models::{CustomerOrder, Doneness, Filling, ItemRecord, SauceKind};
use crate::scoring::{doneness_penalty, evaluate, reward_for};
use crate::session::PrepSession;
use crate::steps::{DISPENSER_STOPS, StepInput};

/// Error-rate knobs for the simulated line cook.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of preparation cycles to run.
    pub trials: usize,

    /// RNG seed; identical seeds reproduce identical batches.
    pub seed: u64,

    /// Chance any individual decision goes wrong.
    pub fumble_rate: f64,

    /// Spread of fry time in seconds around the middle of the perfect
    /// window.
    pub fry_jitter: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 500,
            seed: 123,
            fumble_rate: 0.15,
            fry_jitter: 40.0,
        }
    }
}

/// One simulated cook judged against one random order.
#[derive(Debug, Clone)]
pub struct TrialResult {
    pub trial: usize,
    pub overall_match: bool,
    pub quality: f64,
    pub doneness: Option<Doneness>,
    pub reward: f64,
    pub mistake: bool,
    pub meter: f64,
}

/// Aggregate statistics over a batch.
#[derive(Debug, Clone)]
pub struct SimSummary {
    pub trials: usize,
    pub matches: usize,
    pub mistakes: usize,
    pub avg_quality: f64,
    pub avg_reward: f64,
    pub doneness_counts: [usize; 5],
}

impl SimSummary {
    pub fn match_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.matches as f64 / self.trials as f64
        }
    }
}

/// Run a batch of simulated preparation cycles through the real stage
/// sequence and scoring engine.
pub fn run_batch(sim: &SimConfig, config: &GameConfig) -> (Vec<TrialResult>, SimSummary) {
    let mut rng = StdRng::seed_from_u64(sim.seed);
    let mut results = Vec::with_capacity(sim.trials);

    for trial in 0..sim.trials {
        let order = CustomerOrder::random(&mut rng);
        let (item, meter) = cook_one(&mut rng, &order, config, sim);

        let verdict = evaluate(Some(&item), Some(&order), config);
        let reward = reward_for(&verdict, config);
        let mistake = item
            .doneness
            .map(|d| doneness_penalty(d, config).1)
            .unwrap_or(false);

        results.push(TrialResult {
            trial,
            overall_match: verdict.overall_match,
            quality: verdict.quality,
            doneness: item.doneness,
            reward,
            mistake,
            meter,
        });
    }

    let summary = summarize(&results);
    (results, summary)
}

/// Drive one full session the way an imperfect cook would.
fn cook_one(
    rng: &mut StdRng,
    order: &CustomerOrder,
    config: &GameConfig,
    sim: &SimConfig,
) -> (ItemRecord, f64) {
    let mut session = PrepSession::new(order, config);

    let pick_a = fumbled_pick(rng, order.slot_a, sim.fumble_rate);
    let pick_b = fumbled_pick(rng, order.slot_b, sim.fumble_rate);
    session.deliver(&StepInput::FillingPicks(pick_a, pick_b));

    let percent = if rng.gen_bool(sim.fumble_rate) {
        DISPENSER_STOPS[rng.gen_range(0..DISPENSER_STOPS.len())]
    } else {
        DISPENSER_STOPS[2]
    };
    session.deliver(&StepInput::BatterFill { percent });

    let target = (config.fry_cutoffs[1] + config.fry_cutoffs[2]) / 2.0;
    let seconds = (target + rng.gen_range(-sim.fry_jitter..=sim.fry_jitter)).max(0.0);
    session.deliver(&StepInput::FryTime { seconds });

    let sugar = if rng.gen_bool(sim.fumble_rate) {
        !order.wants_sugar
    } else {
        order.wants_sugar
    };
    let sauces: Vec<SauceKind> = order
        .sauces
        .iter()
        .copied()
        .filter(|_| !rng.gen_bool(sim.fumble_rate))
        .collect();
    session.deliver(&StepInput::Finishing { sugar, sauces });

    session.finish()
}

fn fumbled_pick(rng: &mut StdRng, wanted: Filling, fumble_rate: f64) -> Filling {
    if !rng.gen_bool(fumble_rate) {
        return wanted;
    }
    match wanted {
        Filling::Sausage => Filling::Cheese,
        Filling::Cheese => Filling::Sausage,
    }
}

fn summarize(results: &[TrialResult]) -> SimSummary {
    let trials = results.len();
    let matches = results.iter().filter(|r| r.overall_match).count();
    let mistakes = results.iter().filter(|r| r.mistake).count();
    let total_quality: f64 = results.iter().map(|r| r.quality).sum();
    let total_reward: f64 = results.iter().map(|r| r.reward).sum();

    let mut doneness_counts = [0usize; 5];
    for result in results {
        if let Some(d) = result.doneness {
            doneness_counts[d as usize] += 1;
        }
    }

    let denom = trials.max(1) as f64;
    SimSummary {
        trials,
        matches,
        mistakes,
        avg_quality: total_quality / denom,
        avg_reward: total_reward / denom,
        doneness_counts,
    }
}
