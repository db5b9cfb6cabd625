mod item;
mod order;
mod verdict;

pub use item::{Doneness, Filling, FillingStyle, ItemRecord, SauceKind};
pub use order::CustomerOrder;
pub use verdict::{INVALID_FEEDBACK, Verdict};
