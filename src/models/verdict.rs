use serde::Serialize;

/// Feedback attached to the invalid sentinel verdict.
pub const INVALID_FEEDBACK: &str = "Nothing to judge: the corn dog or the order is missing.";

/// The outcome of judging one finished corn dog against one order.
///
/// Produced fresh per evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    /// True only when every order category matched.
    pub overall_match: bool,

    /// Quality score in 0..=100.
    pub quality: f64,

    pub ingredient_match: bool,
    pub topping_match: bool,
    pub sauce_match: bool,

    /// Fixed-wording feedback for the customer popup.
    pub feedback: String,
}

impl Verdict {
    /// Sentinel for a missing item or order. The engine returns this whole
    /// rather than computing over partial data.
    pub fn invalid() -> Self {
        Self {
            overall_match: false,
            quality: 0.0,
            ingredient_match: false,
            topping_match: false,
            sauce_match: false,
            feedback: INVALID_FEEDBACK.to_string(),
        }
    }
}
