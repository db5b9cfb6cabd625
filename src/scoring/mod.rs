pub mod constants;
pub mod evaluate;
pub mod penalties;

pub use constants::batter_points;
pub use evaluate::{cooking_sub_score, evaluate, picks_match_order};
pub use penalties::{batter_penalty, doneness_for_time, doneness_penalty, doneness_points, reward_for};
