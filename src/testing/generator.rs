use crate::data::PurchaseRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CATEGORIES: [&str; 5] = [
    "Smartphones",
    "Laptops",
    "Tablets",
    "Smart Watches",
    "Headphones",
];
pub const BRANDS: [&str; 5] = ["Other Brands", "Samsung", "Sony", "HP", "Apple"];

/// Seeded source of synthetic purchase records.
///
/// The label follows a fixed rule (satisfied customers buying below 1500
/// purchase), optionally flipped with `noise_percentage` probability.
#[derive(Debug)]
pub struct PurchaseRecordGenerator {
    rng: StdRng,
    noise_percentage: u32,
    max_instances: usize,
    produced: usize,
}

impl PurchaseRecordGenerator {
    pub fn new(noise_percentage: u32, max_instances: usize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            noise_percentage: noise_percentage.min(100),
            max_instances,
            produced: 0,
        }
    }

    #[inline]
    pub fn rule(price: f64, satisfaction: i64) -> bool {
        satisfaction >= 3 && price < 1500.0
    }

    #[inline]
    fn maybe_flip_with_noise(&mut self, label: bool) -> bool {
        let roll: u32 = self.rng.random_range(1..=100);
        if roll <= self.noise_percentage {
            !label
        } else {
            label
        }
    }
}

impl Iterator for PurchaseRecordGenerator {
    type Item = PurchaseRecord;

    fn next(&mut self) -> Option<PurchaseRecord> {
        if self.produced >= self.max_instances {
            return None;
        }
        self.produced += 1;

        let category = CATEGORIES[self.rng.random_range(0..CATEGORIES.len())];
        let brand = BRANDS[self.rng.random_range(0..BRANDS.len())];
        let price = (self.rng.random_range(100.0..3000.0_f64) * 100.0).round() / 100.0;
        let satisfaction = self.rng.random_range(1..=5);
        let label = Self::rule(price, satisfaction);
        let label = self.maybe_flip_with_noise(label);

        Some(PurchaseRecord {
            product_id: Some(format!("{}", 4000 + self.produced)),
            product_category: category.to_string(),
            product_brand: brand.to_string(),
            product_price: price,
            customer_age: self.rng.random_range(18..=69),
            customer_gender: self.rng.random_range(0..=1),
            purchase_frequency: self.rng.random_range(1..=19),
            customer_satisfaction: satisfaction,
            purchase_intent: Some(label),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_exactly_max_instances() {
        assert_eq!(PurchaseRecordGenerator::new(0, 37, 1).count(), 37);
    }

    #[test]
    fn same_seed_same_records() {
        let a: Vec<_> = PurchaseRecordGenerator::new(10, 50, 9).collect();
        let b: Vec<_> = PurchaseRecordGenerator::new(10, 50, 9).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn noise_free_records_follow_the_rule() {
        for r in PurchaseRecordGenerator::new(0, 200, 3) {
            assert_eq!(
                r.purchase_intent,
                Some(PurchaseRecordGenerator::rule(
                    r.product_price,
                    r.customer_satisfaction
                ))
            );
            assert!((100.0..=3000.0).contains(&r.product_price));
            assert!((0..=1).contains(&r.customer_gender));
        }
    }

    #[test]
    fn full_noise_inverts_every_label() {
        for r in PurchaseRecordGenerator::new(100, 50, 3) {
            assert_eq!(
                r.purchase_intent,
                Some(!PurchaseRecordGenerator::rule(
                    r.product_price,
                    r.customer_satisfaction
                ))
            );
        }
    }
}
