use crate::config::GameConfig;
use crate::models::{CustomerOrder, Filling, ItemRecord, Verdict};
use crate::scoring::constants::*;
use crate::scoring::penalties::doneness_points;

/// Judge a finished corn dog against an order.
///
/// Pure and deterministic: no input is mutated and identical inputs always
/// produce an identical verdict. A missing item or order short-circuits to
/// the fixed invalid verdict instead of a partial computation.
pub fn evaluate(
    item: Option<&ItemRecord>,
    order: Option<&CustomerOrder>,
    config: &GameConfig,
) -> Verdict {
    let (Some(item), Some(order)) = (item, order) else {
        return Verdict::invalid();
    };

    let ingredient_match = match item.picks {
        Some((a, b)) => picks_match_order(a, b, order),
        None => false,
    };
    let topping_match = item.sugar_coated == order.wants_sugar;
    let sauce_match = order.sauces.iter().all(|s| item.has_sauce(*s));

    let cooking = cooking_sub_score(item, config);

    let mut quality = cooking;
    if ingredient_match {
        quality += INGREDIENT_WEIGHT;
    }
    if topping_match {
        quality += TOPPING_WEIGHT;
    }
    if sauce_match {
        quality += SAUCE_WEIGHT;
    }
    let quality = quality.clamp(0.0, 100.0);

    let overall_match = ingredient_match && topping_match && sauce_match;
    let feedback = build_feedback(ingredient_match, topping_match, sauce_match, cooking);

    Verdict {
        overall_match,
        quality,
        ingredient_match,
        topping_match,
        sauce_match,
        feedback,
    }
}

/// Unordered two-pick equality: either assignment of the picks to the
/// order's slots counts as a match.
pub fn picks_match_order(a: Filling, b: Filling, order: &CustomerOrder) -> bool {
    (a == order.slot_a && b == order.slot_b) || (a == order.slot_b && b == order.slot_a)
}

/// Cooking sub-score in 0..=20: batter band points plus doneness points.
///
/// An item that never left the fryer earns nothing for doneness.
pub fn cooking_sub_score(item: &ItemRecord, config: &GameConfig) -> f64 {
    let batter = batter_points(item.batter_percent);
    let doneness = item
        .doneness
        .map(|d| doneness_points(d, config))
        .unwrap_or(0.0);
    batter + doneness
}

fn build_feedback(
    ingredient_match: bool,
    topping_match: bool,
    sauce_match: bool,
    cooking: f64,
) -> String {
    let mut sentences: Vec<&str> = Vec::new();
    if !ingredient_match {
        sentences.push(FEEDBACK_WRONG_FILLING);
    }
    if !topping_match {
        sentences.push(FEEDBACK_WRONG_TOPPING);
    }
    if !sauce_match {
        sentences.push(FEEDBACK_MISSING_SAUCE);
    }
    if cooking < COOKING_FEEDBACK_MIN {
        sentences.push(FEEDBACK_COOKING);
    }

    if sentences.is_empty() {
        FEEDBACK_PERFECT.to_string()
    } else {
        sentences.join(" ")
    }
}
