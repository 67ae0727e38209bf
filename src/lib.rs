//! # shiftmix
//!
//! A small deterministic pseudorandom number generator: splitmix64 seed
//! expansion feeding a 128-bit xorshift128+ state.
//!
//! This is NOT cryptographically secure. It is meant for simulation,
//! sampling, and reproducible tests.
//!
//! ## Quick Start
//!
//! ```
//! use shiftmix::prelude::*;
//!
//! let mut rng = Generator::new(123456789);
//! let raw = rng.next_int64();
//! let die = rng.next_bounded_int32(6).unwrap() + 1;
//! let p = rng.next_float64();
//!
//! assert!((1..=6).contains(&die));
//! assert!((0.0..1.0).contains(&p));
//! # let _ = raw;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support, including time-derived seeding
//! - `serde` (default): Serialization of [`GeneratorState`] and [`GeneratorConfig`]
//! - `rand_core`: `RngCore` / `SeedableRng` implementations
//!
//! ## no_std Support
//!
//! Disable default features for `no_std` environments:
//! ```toml
//! shiftmix = { version = "0.1", default-features = false }
//! ```
//! Everything except [`Generator::new_default`] and [`default_seed`] is available.
//!
//! ## Modules
//!
//! - [`generator`]: The generator and its derived-value operations
//! - [`splitmix`]: Seed expansion
//! - [`config`]: Seed configuration
//! - [`entropy`]: Time-derived default seed (`std` only)

// no_std support
#![cfg_attr(not(feature = "std"), no_std)]

#[path = "core/error.rs"]
pub mod error;

#[path = "core/splitmix.rs"]
pub mod splitmix;

#[path = "core/generator.rs"]
pub mod generator;

#[path = "core/config.rs"]
pub mod config;

#[cfg(feature = "std")]
#[path = "core/entropy.rs"]
pub mod entropy;

#[cfg(feature = "rand_core")]
#[path = "core/rand_compat.rs"]
mod rand_compat;

pub use config::GeneratorConfig;
#[cfg(feature = "std")]
pub use entropy::default_seed;
pub use error::{Error, Result};
pub use generator::{Generator, GeneratorState};

/// Prelude module for convenient imports.
///
/// ```
/// use shiftmix::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::GeneratorConfig;
    #[cfg(feature = "std")]
    pub use crate::entropy::default_seed;
    pub use crate::error::Error;
    pub use crate::generator::{Generator, GeneratorState};
}
