use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{KitchenError, Result};
use crate::models::{Filling, SauceKind};
use crate::steps::{DISPENSER_STOPS, InputRequest, StepInput};

/// Prompt for whatever the active stage is waiting on.
pub fn prompt_for(request: InputRequest) -> Result<StepInput> {
    match request {
        InputRequest::FillingPicks => prompt_filling_picks(),
        InputRequest::BatterFill => prompt_batter_fill(),
        InputRequest::FryTimer => prompt_fry_time(),
        InputRequest::Finishing => prompt_finishing(),
    }
}

/// Prompt for the two skewer halves.
pub fn prompt_filling_picks() -> Result<StepInput> {
    let first = prompt_one_filling("First skewer half")?;
    let second = prompt_one_filling("Second skewer half")?;
    Ok(StepInput::FillingPicks(first, second))
}

fn prompt_one_filling(prompt: &str) -> Result<Filling> {
    let options: Vec<&str> = Filling::ALL.iter().map(|f| f.label()).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;
    Ok(Filling::ALL[selection])
}

/// Prompt for a batter dispenser stop.
pub fn prompt_batter_fill() -> Result<StepInput> {
    let options: Vec<String> = DISPENSER_STOPS.iter().map(|p| format!("{:.0}%", p)).collect();
    let selection = Select::new()
        .with_prompt("Fill the batter cup to")
        .items(&options)
        .default(2)
        .interact()?;
    Ok(StepInput::BatterFill {
        percent: DISPENSER_STOPS[selection],
    })
}

/// Prompt for how long the corn dog stayed in the fryer.
pub fn prompt_fry_time() -> Result<StepInput> {
    let input: String = Input::new()
        .with_prompt("Seconds in the fryer before pulling it out")
        .default("60".to_string())
        .interact_text()?;

    let seconds: f64 = input
        .parse()
        .map_err(|_| KitchenError::InvalidInput("Invalid number".to_string()))?;
    if seconds < 0.0 {
        return Err(KitchenError::InvalidInput(
            "Fry time cannot be negative".to_string(),
        ));
    }

    Ok(StepInput::FryTime { seconds })
}

/// Prompt for the sugar coating and the sauce line-up.
pub fn prompt_finishing() -> Result<StepInput> {
    let sugar = Confirm::new()
        .with_prompt("Roll it in sugar?")
        .default(false)
        .interact()?;
    let sauces = prompt_sauces()?;
    Ok(StepInput::Finishing { sugar, sauces })
}

/// Collect sauces by free-text entry with fuzzy matching.
pub fn prompt_sauces() -> Result<Vec<SauceKind>> {
    let mut sauces: Vec<SauceKind> = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Add a sauce (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Try exact match first (case-insensitive)
        let exact_match = SauceKind::ALL
            .iter()
            .find(|s| s.label() == input.to_lowercase());

        if let Some(sauce) = exact_match {
            if !sauces.contains(sauce) {
                sauces.push(*sauce);
            }
            println!("Added: {}", sauce.label());
            continue;
        }

        // Try fuzzy matching
        let mut candidates: Vec<(SauceKind, f64)> = SauceKind::ALL
            .iter()
            .map(|s| (*s, jaro_winkler(s.label(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No sauce on the stand matches '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let sauce = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", sauce.label()))
                .default(true)
                .interact()?;

            if confirm && !sauces.contains(&sauce) {
                sauces.push(sauce);
                println!("Added: {}", sauce.label());
            }
        } else {
            let mut options: Vec<String> =
                candidates.iter().map(|(s, _)| s.label().to_string()).collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            if selection < candidates.len() {
                let sauce = candidates[selection].0;
                if !sauces.contains(&sauce) {
                    sauces.push(sauce);
                    println!("Added: {}", sauce.label());
                }
            }
        }
    }

    Ok(sauces)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
