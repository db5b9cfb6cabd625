use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KitchenError, Result};

/// Tunable rules for one kitchen, loaded once at startup.
///
/// The JSON asset is edited by designers, so `validate` runs on every load
/// and a bad edit fails with an explicit error instead of producing
/// nonsense scores mid-game. After load the config is read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Live-quality penalty for a filling that differs from the order.
    #[serde(rename = "WrongFillingPenalty")]
    pub wrong_filling_penalty: f64,

    /// Live-quality penalty per sauce that differs from the order.
    #[serde(rename = "WrongSaucePenalty")]
    pub wrong_sauce_penalty: f64,

    /// Live-quality penalty for getting the sugar coating wrong.
    #[serde(rename = "WrongToppingPenalty")]
    pub wrong_topping_penalty: f64,

    /// Live-quality penalty for under-battering.
    #[serde(rename = "LowBatterPenalty")]
    pub low_batter_penalty: f64,

    /// Upper fry-time bounds in seconds for Raw, Undercooked, Perfect and
    /// Overcooked, strictly increasing. Anything past the last bound is
    /// Burnt.
    #[serde(rename = "FryCutoffs")]
    pub fry_cutoffs: [f64; 4],

    /// Penalty per doneness category, Raw through Burnt.
    #[serde(rename = "DonenessPenalties")]
    pub doneness_penalties: [f64; 5],

    /// Batter percent at or above which no batter penalty applies.
    #[serde(rename = "BatterOptimalPercent")]
    pub batter_optimal_percent: f64,

    /// Largest batter percent the dispenser can deliver.
    #[serde(rename = "BatterMaxPercent")]
    pub batter_max_percent: f64,

    /// Payout for any completed corn dog.
    #[serde(rename = "BaseReward")]
    pub base_reward: f64,

    /// Payout multiplier when the order is fully matched.
    #[serde(rename = "OrderMatchMultiplier")]
    pub order_match_multiplier: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wrong_filling_penalty: 25.0,
            wrong_sauce_penalty: 10.0,
            wrong_topping_penalty: 10.0,
            low_batter_penalty: 15.0,
            fry_cutoffs: [20.0, 45.0, 75.0, 100.0],
            doneness_penalties: [20.0, 8.0, 0.0, 10.0, 30.0],
            batter_optimal_percent: 70.0,
            batter_max_percent: 100.0,
            base_reward: 50.0,
            order_match_multiplier: 2.0,
        }
    }
}

impl GameConfig {
    /// Load and validate a config asset from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Check the invariants every consumer of the config relies on.
    pub fn validate(&self) -> Result<()> {
        let penalties = [
            self.wrong_filling_penalty,
            self.wrong_sauce_penalty,
            self.wrong_topping_penalty,
            self.low_batter_penalty,
        ];
        if penalties.iter().chain(&self.doneness_penalties).any(|p| *p < 0.0) {
            return Err(KitchenError::InvalidConfig(
                "penalties must be non-negative".to_string(),
            ));
        }

        if !self.fry_cutoffs.windows(2).all(|w| w[0] < w[1]) {
            return Err(KitchenError::InvalidConfig(format!(
                "fry cutoffs must be strictly increasing, got {:?}",
                self.fry_cutoffs
            )));
        }
        if self.fry_cutoffs[0] <= 0.0 {
            return Err(KitchenError::InvalidConfig(
                "first fry cutoff must be positive".to_string(),
            ));
        }

        if !(0.0..=100.0).contains(&self.batter_optimal_percent)
            || !(0.0..=100.0).contains(&self.batter_max_percent)
        {
            return Err(KitchenError::InvalidConfig(
                "batter percents must be within 0..=100".to_string(),
            ));
        }
        if self.batter_optimal_percent > self.batter_max_percent {
            return Err(KitchenError::InvalidConfig(format!(
                "batter optimal ({}) must not exceed max ({})",
                self.batter_optimal_percent, self.batter_max_percent
            )));
        }

        if self.base_reward < 0.0 || self.order_match_multiplier < 1.0 {
            return Err(KitchenError::InvalidConfig(
                "reward must be non-negative and multiplier at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
