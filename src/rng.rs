use getrandom::getrandom;
use oorandom::Rand64;

/// Source of uniformly distributed floats in `[0, 1)`.
pub trait RandomSource {
    fn rand_float(&mut self) -> f64;
}

impl RandomSource for Rand64 {
    fn rand_float(&mut self) -> f64 {
        Rand64::rand_float(self)
    }
}

pub fn preseeded_rng64() -> Rand64 {
    Rand64::new(os_random_seed())
}

pub fn rng64(seed: u128) -> Rand64 {
    Rand64::new(seed)
}

pub fn os_random_seed() -> u128 {
    let mut buf = [0; 16];
    if let Err(error) = getrandom(&mut buf) {
        log::warn!("rng: os entropy unavailable ({}), seeding with zero", error);
    }
    u128::from_le_bytes(buf)
}
