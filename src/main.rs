use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

use corndog_kitchen_rs::cli::{Cli, Command};
use corndog_kitchen_rs::config::GameConfig;
use corndog_kitchen_rs::error::Result;
use corndog_kitchen_rs::interface::{
    display_item, display_order, display_reward, display_verdict, prompt_for,
};
use corndog_kitchen_rs::models::{CustomerOrder, ItemRecord};
use corndog_kitchen_rs::scoring::{doneness_penalty, evaluate, reward_for};
use corndog_kitchen_rs::session::PrepSession;
use corndog_kitchen_rs::steps::ProcessOutcome;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let config = load_config(&cli.config)?;

    match command {
        Command::Cook { seed } => cmd_cook(&config, seed),
        Command::Validate { item, order } => cmd_validate(&config, &item, &order),
        Command::InitConfig { force } => cmd_init_config(&cli.config, force),
    }
}

/// Load the config asset, falling back to the shipped defaults when the
/// file is not there yet.
fn load_config(path: &str) -> Result<GameConfig> {
    if Path::new(path).exists() {
        GameConfig::load(path)
    } else {
        Ok(GameConfig::default())
    }
}

/// Run one interactive preparation cycle and judge the result.
fn cmd_cook(config: &GameConfig, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let order = CustomerOrder::random(&mut rng);

    println!("A customer walks up to the stand.");
    display_order(&order);

    let mut session = PrepSession::new(&order, config);
    while !session.is_finished() {
        session.tick();

        let Some(request) = session.requested_input() else {
            // No stage holds the input channel: the cycle cannot progress.
            eprintln!("The kitchen stalled; abandoning this corn dog.");
            session.abort();
            break;
        };

        let input = prompt_for(request)?;
        match session.deliver(&input) {
            ProcessOutcome::Accepted => {
                println!("(quality meter: {:.0})", session.quality_meter());
            }
            ProcessOutcome::Rejected => {
                println!("The kitchen didn't understand that; try again.");
            }
            ProcessOutcome::AlreadyComplete => {}
        }
    }

    if session.was_aborted() {
        println!("Cycle abandoned; nothing to serve.");
        return Ok(());
    }

    let (item, meter) = session.finish();
    display_item(&item);

    let verdict = evaluate(Some(&item), Some(&order), config);
    display_verdict(&verdict);

    let reward = reward_for(&verdict, config);
    let mistake = item
        .doneness
        .map(|d| doneness_penalty(d, config).1)
        .unwrap_or(false);
    display_reward(reward, mistake);
    println!("Line quality meter ended at {:.0}.", meter);

    Ok(())
}

/// Judge an item and order from JSON files. A JSON `null` in either file
/// exercises the invalid-verdict path instead of erroring out.
fn cmd_validate(config: &GameConfig, item_path: &str, order_path: &str) -> Result<()> {
    let item_json = std::fs::read_to_string(item_path)?;
    let order_json = std::fs::read_to_string(order_path)?;

    let item: Option<ItemRecord> = serde_json::from_str(&item_json)?;
    let order: Option<CustomerOrder> = serde_json::from_str(&order_json)?;

    let verdict = evaluate(item.as_ref(), order.as_ref(), config);
    display_verdict(&verdict);
    println!();
    println!("{}", serde_json::to_string_pretty(&verdict)?);

    Ok(())
}

/// Write the default config asset for designers to edit.
fn cmd_init_config(path: &str, force: bool) -> Result<()> {
    if Path::new(path).exists() && !force {
        println!("{} already exists; pass --force to overwrite.", path);
        return Ok(());
    }

    GameConfig::default().save(path)?;
    println!("Wrote default config to {}.", path);
    Ok(())
}
