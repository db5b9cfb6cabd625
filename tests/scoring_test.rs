use assert_float_eq::assert_float_absolute_eq;

use corndog_kitchen_rs::config::GameConfig;
use corndog_kitchen_rs::models::{CustomerOrder, Doneness, Filling, ItemRecord, SauceKind, Verdict};
use corndog_kitchen_rs::scoring::{doneness_for_time, evaluate, reward_for};

fn make_item(
    picks: Option<(Filling, Filling)>,
    batter: f64,
    doneness: Option<Doneness>,
    sugar: bool,
    sauces: &[SauceKind],
) -> ItemRecord {
    let mut item = ItemRecord::new();
    if let Some((a, b)) = picks {
        item.set_picks(a, b);
    }
    item.batter_percent = batter;
    item.doneness = doneness;
    item.sugar_coated = sugar;
    for sauce in sauces {
        item.add_sauce(*sauce);
    }
    item
}

#[test]
fn test_swapped_picks_still_earn_a_perfect_score() {
    let config = GameConfig::default();
    let order = CustomerOrder::new(
        Filling::Sausage,
        Filling::Cheese,
        true,
        vec![SauceKind::Ketchup],
    );
    let item = make_item(
        Some((Filling::Cheese, Filling::Sausage)),
        85.0,
        Some(Doneness::Perfect),
        true,
        &[SauceKind::Ketchup],
    );

    let verdict = evaluate(Some(&item), Some(&order), &config);
    assert!(verdict.overall_match);
    assert_float_absolute_eq!(verdict.quality, 100.0, 1e-9);
}

#[test]
fn test_botched_cook_keeps_the_category_points_it_earned() {
    let config = GameConfig::default();
    let order = CustomerOrder::new(Filling::Sausage, Filling::Sausage, false, vec![]);
    // Mixed filling against a sausage-only order, half-filled batter cup,
    // pulled out raw.
    let item = make_item(
        Some((Filling::Sausage, Filling::Cheese)),
        50.0,
        Some(Doneness::Raw),
        false,
        &[],
    );

    let verdict = evaluate(Some(&item), Some(&order), &config);
    assert!(!verdict.ingredient_match);
    assert!(verdict.topping_match);
    assert!(verdict.sauce_match);
    assert!(!verdict.overall_match);
    // 0 (filling) + 20 (topping) + 20 (sauce) + 3 (low batter) + 0 (raw).
    assert_float_absolute_eq!(verdict.quality, 43.0, 1e-9);
}

#[test]
fn test_pick_order_never_changes_the_ingredient_verdict() {
    let config = GameConfig::default();
    let order = CustomerOrder::new(Filling::Sausage, Filling::Cheese, false, vec![]);

    for (a, b) in [
        (Filling::Sausage, Filling::Cheese),
        (Filling::Cheese, Filling::Sausage),
    ] {
        let item = make_item(Some((a, b)), 85.0, Some(Doneness::Perfect), false, &[]);
        let verdict = evaluate(Some(&item), Some(&order), &config);
        assert!(verdict.ingredient_match, "picks ({:?}, {:?})", a, b);
    }
}

#[test]
fn test_zero_required_sauces_match_whatever_is_on_the_item() {
    let config = GameConfig::default();
    let order = CustomerOrder::new(Filling::Cheese, Filling::Cheese, false, vec![]);

    for sauces in [&[][..], &[SauceKind::Ketchup][..], &SauceKind::ALL[..]] {
        let item = make_item(
            Some((Filling::Cheese, Filling::Cheese)),
            85.0,
            Some(Doneness::Perfect),
            false,
            sauces,
        );
        let verdict = evaluate(Some(&item), Some(&order), &config);
        assert!(verdict.sauce_match);
    }
}

#[test]
fn test_quality_is_bounded_for_every_combination() {
    let config = GameConfig::default();
    let order = CustomerOrder::new(
        Filling::Sausage,
        Filling::Cheese,
        true,
        vec![SauceKind::Ketchup, SauceKind::Mustard],
    );

    let pick_options = [
        None,
        Some((Filling::Sausage, Filling::Cheese)),
        Some((Filling::Cheese, Filling::Cheese)),
    ];
    let doneness_options = [
        None,
        Some(Doneness::Raw),
        Some(Doneness::Undercooked),
        Some(Doneness::Perfect),
        Some(Doneness::Overcooked),
        Some(Doneness::Burnt),
    ];

    for picks in pick_options {
        for batter in [0.0, 25.0, 55.0, 85.0, 100.0] {
            for doneness in doneness_options {
                for sugar in [false, true] {
                    let item = make_item(picks, batter, doneness, sugar, &[SauceKind::Ketchup]);
                    let verdict = evaluate(Some(&item), Some(&order), &config);
                    assert!(
                        (0.0..=100.0).contains(&verdict.quality),
                        "quality {} out of bounds",
                        verdict.quality
                    );
                }
            }
        }
    }
}

#[test]
fn test_evaluate_is_idempotent() {
    let config = GameConfig::default();
    let order = CustomerOrder::new(
        Filling::Cheese,
        Filling::Sausage,
        true,
        vec![SauceKind::Mayo],
    );
    let item = make_item(
        Some((Filling::Sausage, Filling::Sausage)),
        55.0,
        Some(Doneness::Overcooked),
        false,
        &[SauceKind::Ketchup],
    );

    let first = evaluate(Some(&item), Some(&order), &config);
    let second = evaluate(Some(&item), Some(&order), &config);
    assert_eq!(first, second);
}

#[test]
fn test_absent_records_return_the_invalid_sentinel() {
    let config = GameConfig::default();
    let order = CustomerOrder::new(Filling::Sausage, Filling::Sausage, false, vec![]);

    let verdict = evaluate(None, Some(&order), &config);
    assert_eq!(verdict, Verdict::invalid());
    assert!(!verdict.overall_match);
    assert_float_absolute_eq!(verdict.quality, 0.0, 1e-9);
}

#[test]
fn test_reward_doubles_only_on_a_full_match() {
    let config = GameConfig::default();
    let order = CustomerOrder::new(Filling::Sausage, Filling::Cheese, false, vec![]);

    let matched = make_item(
        Some((Filling::Sausage, Filling::Cheese)),
        85.0,
        Some(Doneness::Perfect),
        false,
        &[],
    );
    let missed = make_item(
        Some((Filling::Cheese, Filling::Cheese)),
        85.0,
        Some(Doneness::Perfect),
        false,
        &[],
    );

    let matched_verdict = evaluate(Some(&matched), Some(&order), &config);
    let missed_verdict = evaluate(Some(&missed), Some(&order), &config);

    assert_float_absolute_eq!(
        reward_for(&matched_verdict, &config),
        config.base_reward * config.order_match_multiplier,
        1e-9
    );
    assert_float_absolute_eq!(reward_for(&missed_verdict, &config), config.base_reward, 1e-9);
}

#[test]
fn test_fry_category_boundaries_against_custom_cutoffs() {
    let mut config = GameConfig::default();
    config.fry_cutoffs = [10.0, 20.0, 30.0, 40.0];
    config.validate().unwrap();

    assert_eq!(doneness_for_time(0.0, &config), Doneness::Raw);
    assert_eq!(doneness_for_time(9.9, &config), Doneness::Raw);
    assert_eq!(doneness_for_time(10.0, &config), Doneness::Undercooked);
    assert_eq!(doneness_for_time(25.0, &config), Doneness::Perfect);
    assert_eq!(doneness_for_time(35.0, &config), Doneness::Overcooked);
    assert_eq!(doneness_for_time(40.0, &config), Doneness::Burnt);
    assert_eq!(doneness_for_time(4000.0, &config), Doneness::Burnt);
}
