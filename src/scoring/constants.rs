/// Score weight for each binary order category.
pub const INGREDIENT_WEIGHT: f64 = 40.0;
pub const TOPPING_WEIGHT: f64 = 20.0;
pub const SAUCE_WEIGHT: f64 = 20.0;

/// Cooking sub-score split: batter half plus doneness half.
pub const BATTER_POINTS_MAX: f64 = 10.0;
pub const DONENESS_POINTS_MAX: f64 = 10.0;

/// Batter bands for the sub-score. The dispenser's two top stops land above
/// the adequate line; the 55% stop lands in the low band.
pub const BATTER_ADEQUATE_MIN: f64 = 70.0;
pub const BATTER_LOW_MIN: f64 = 40.0;
pub const BATTER_LOW_POINTS: f64 = 3.0;

/// Scale from config doneness penalties to sub-score points: points are
/// `DONENESS_POINTS_MAX - penalty / DONENESS_PENALTY_TO_POINTS`, floored at
/// zero.
pub const DONENESS_PENALTY_TO_POINTS: f64 = 2.0;

/// Cooking sub-score below which the feedback calls out the cooking.
pub const COOKING_FEEDBACK_MIN: f64 = 10.0;

pub const FEEDBACK_WRONG_FILLING: &str = "The filling is not what was ordered.";
pub const FEEDBACK_WRONG_TOPPING: &str = "The sugar coating is wrong.";
pub const FEEDBACK_MISSING_SAUCE: &str = "A requested sauce is missing.";
pub const FEEDBACK_COOKING: &str = "The cooking is not quite right.";
pub const FEEDBACK_PERFECT: &str = "A perfect corn dog, just as ordered!";

/// Batter band points for the cooking sub-score.
///
/// Engine-owned policy: the bands are fixed here, while the pass/fail
/// batter penalty elsewhere reads the configured optimal percent.
pub fn batter_points(percent: f64) -> f64 {
    if percent >= BATTER_ADEQUATE_MIN {
        BATTER_POINTS_MAX
    } else if percent >= BATTER_LOW_MIN {
        BATTER_LOW_POINTS
    } else {
        0.0
    }
}
