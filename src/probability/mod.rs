// src/probability/mod.rs
pub mod prng;
pub mod seed;

pub use prng::Mulberry32;
pub use seed::SeedSource;
