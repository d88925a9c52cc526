use crate::util::{jitter_seed, stable_seed};

/// Linear congruential generator behind every node position.
///
/// The constants are load-bearing: seeds stored alongside submissions must
/// keep producing the same coordinates across sessions, so changing the
/// recurrence would scramble the whole board for existing records.
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in [0, 1).
    pub fn next_unit(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        f64::from(self.state) / 4_294_967_296.0
    }
}

/// Where a record with no stored position seed gets its coordinates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedFallback {
    /// Hash the record id with fixed keys; the record keeps one stable
    /// position across loads.
    StableHash,
    /// Hash the record id with per-process random state; the record may
    /// land somewhere new on every load.
    Jitter,
}

impl SeedFallback {
    pub fn seed_for(self, id: &str) -> u32 {
        match self {
            Self::StableHash => stable_seed(id),
            Self::Jitter => jitter_seed(id),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LayoutOptions {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub seed_fallback: SeedFallback,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            canvas_width: 1000.0,
            canvas_height: 700.0,
            seed_fallback: SeedFallback::StableHash,
        }
    }
}

/// Exactly two draws per record: first x, then y.
pub fn position(seed: u32, canvas_width: f64, canvas_height: f64) -> (f64, f64) {
    let mut lcg = Lcg::new(seed);
    let x = lcg.next_unit() * canvas_width;
    let y = lcg.next_unit() * canvas_height;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::{Lcg, SeedFallback, position};

    #[test]
    fn same_seed_produces_identical_sequences() {
        let mut a = Lcg::new(42);
        let mut b = Lcg::new(42);
        for _ in 0..1000 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn recurrence_matches_the_stored_seed_contract() {
        let mut lcg = Lcg::new(1);
        let first = 1u32.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        assert_eq!(lcg.next_unit(), f64::from(first) / 4_294_967_296.0);
        let second = first.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        assert_eq!(lcg.next_unit(), f64::from(second) / 4_294_967_296.0);
    }

    #[test]
    fn zero_is_a_valid_seed() {
        let mut lcg = Lcg::new(0);
        let value = lcg.next_unit();
        assert!((0.0..1.0).contains(&value));
        assert_eq!(value, f64::from(1_013_904_223u32) / 4_294_967_296.0);
    }

    #[test]
    fn draws_stay_in_the_half_open_unit_interval() {
        for seed in [0u32, 1, 7, 1000, u32::MAX] {
            let mut lcg = Lcg::new(seed);
            for _ in 0..500 {
                let value = lcg.next_unit();
                assert!((0.0..1.0).contains(&value), "seed {seed} escaped: {value}");
            }
        }
    }

    #[test]
    fn positioning_is_reproducible_and_bounded() {
        for seed in [0u32, 17, 987_654_321] {
            let (x1, y1) = position(seed, 1000.0, 700.0);
            let (x2, y2) = position(seed, 1000.0, 700.0);
            assert_eq!((x1, y1), (x2, y2));
            assert!((0.0..1000.0).contains(&x1));
            assert!((0.0..700.0).contains(&y1));
        }
    }

    #[test]
    fn stable_fallback_is_deterministic_per_id() {
        let seed = SeedFallback::StableHash.seed_for("rec-0001");
        assert_eq!(seed, SeedFallback::StableHash.seed_for("rec-0001"));
        assert_ne!(seed, SeedFallback::StableHash.seed_for("rec-0002"));
    }
}
