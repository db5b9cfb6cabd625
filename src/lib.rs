pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod scoring;
pub mod session;
pub mod sim;
pub mod steps;

pub use config::GameConfig;
pub use error::{KitchenError, Result};
pub use models::{CustomerOrder, ItemRecord, Verdict};
