use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::item::{Filling, SauceKind};

/// What a customer asked for. Immutable once issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerOrder {
    /// First filling slot.
    pub slot_a: Filling,

    /// Second filling slot.
    pub slot_b: Filling,

    /// Whether the customer wants the sugar coating.
    pub wants_sugar: bool,

    /// Required sauces, deduplicated and unordered.
    pub sauces: Vec<SauceKind>,
}

impl CustomerOrder {
    pub fn new(slot_a: Filling, slot_b: Filling, wants_sugar: bool, sauces: Vec<SauceKind>) -> Self {
        let mut deduped: Vec<SauceKind> = Vec::new();
        for sauce in sauces {
            if !deduped.contains(&sauce) {
                deduped.push(sauce);
            }
        }
        Self {
            slot_a,
            slot_b,
            wants_sugar,
            sauces: deduped,
        }
    }

    /// Draw a random order, as when a customer walks up to the stand.
    pub fn random(rng: &mut impl Rng) -> Self {
        let slot_a = Self::random_filling(rng);
        let slot_b = Self::random_filling(rng);
        let wants_sugar = rng.gen_bool(0.5);
        let sauces = SauceKind::ALL
            .into_iter()
            .filter(|_| rng.gen_bool(0.4))
            .collect();
        Self::new(slot_a, slot_b, wants_sugar, sauces)
    }

    fn random_filling(rng: &mut impl Rng) -> Filling {
        if rng.gen_bool(0.5) {
            Filling::Sausage
        } else {
            Filling::Cheese
        }
    }

    pub fn requires_sauce(&self, sauce: SauceKind) -> bool {
        self.sauces.contains(&sauce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_deduplicates_sauces() {
        let order = CustomerOrder::new(
            Filling::Sausage,
            Filling::Cheese,
            true,
            vec![SauceKind::Ketchup, SauceKind::Ketchup, SauceKind::Mayo],
        );
        assert_eq!(order.sauces.len(), 2);
        assert!(order.requires_sauce(SauceKind::Ketchup));
        assert!(order.requires_sauce(SauceKind::Mayo));
        assert!(!order.requires_sauce(SauceKind::Mustard));
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let order_a = CustomerOrder::random(&mut rng_a);
        let order_b = CustomerOrder::random(&mut rng_b);
        assert_eq!(order_a.slot_a, order_b.slot_a);
        assert_eq!(order_a.slot_b, order_b.slot_b);
        assert_eq!(order_a.wants_sugar, order_b.wants_sugar);
        assert_eq!(order_a.sauces, order_b.sauces);
    }
}
