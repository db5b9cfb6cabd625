use crate::models::{CustomerOrder, ItemRecord, Verdict};

fn mark(matched: bool) -> &'static str {
    if matched { "[ok]" } else { "[miss]" }
}

/// Print the order card the customer hands over.
pub fn display_order(order: &CustomerOrder) {
    println!();
    println!("=== Order ===");
    println!(
        "Filling: {} + {}",
        order.slot_a.label(),
        order.slot_b.label()
    );
    println!("Sugar coating: {}", if order.wants_sugar { "yes" } else { "no" });

    if order.sauces.is_empty() {
        println!("Sauces: none");
    } else {
        let names: Vec<&str> = order.sauces.iter().map(|s| s.label()).collect();
        println!("Sauces: {}", names.join(", "));
    }
    println!();
}

/// Print what actually got made.
pub fn display_item(item: &ItemRecord) {
    println!();
    println!("=== The corn dog ===");
    match item.picks {
        Some((a, b)) => println!("Filling: {} + {}", a.label(), b.label()),
        None => println!("Filling: never chosen"),
    }
    println!("Batter: {:.0}%", item.batter_percent);
    match item.doneness {
        Some(d) => println!("Doneness: {}", d.label()),
        None => println!("Doneness: never fried"),
    }
    println!("Sugar coating: {}", if item.sugar_coated { "yes" } else { "no" });
    if item.sauces.is_empty() {
        println!("Sauces: none");
    } else {
        let names: Vec<&str> = item.sauces.iter().map(|s| s.label()).collect();
        println!("Sauces: {}", names.join(", "));
    }
}

/// Print the verdict breakdown.
pub fn display_verdict(verdict: &Verdict) {
    println!();
    println!("=== Verdict ===");
    println!("{:<12} {}", "filling", mark(verdict.ingredient_match));
    println!("{:<12} {}", "topping", mark(verdict.topping_match));
    println!("{:<12} {}", "sauces", mark(verdict.sauce_match));
    println!("Quality: {:.0}/100", verdict.quality);
    println!(
        "Order match: {}",
        if verdict.overall_match { "YES" } else { "no" }
    );
    println!("\"{}\"", verdict.feedback);
}

/// Print the payout line, with the mood hit when the cook counts as a
/// kitchen mistake.
pub fn display_reward(reward: f64, mistake: bool) {
    println!();
    println!("Payout: {:.0} coins", reward);
    if mistake {
        println!("The cook winces. That one counts as a mistake.");
    }
}
