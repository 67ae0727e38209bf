//! Time-derived default seed.
//!
//! Mixes a clock reading with the calling thread's identity and a fresh heap
//! address so that runs, and threads within a run, start from different
//! seeds. This is a convenience, not a security mechanism: the result is
//! easy to guess.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

static CLOCK_ANCHOR: OnceLock<Instant> = OnceLock::new();

/// Wall-clock nanoseconds plus monotonic nanoseconds since the first call.
fn clock_nanos() -> u64 {
    let anchor = *CLOCK_ANCHOR.get_or_init(Instant::now);
    let wall = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    wall.wrapping_add(anchor.elapsed().as_nanos() as u64)
}

fn thread_token() -> u64 {
    let mut hasher = DefaultHasher::new();
    std::thread::current().id().hash(&mut hasher);
    hasher.finish()
}

fn address_token() -> u64 {
    let probe = Box::new(0u8);
    &*probe as *const u8 as usize as u64
}

/// Seed for [`crate::Generator::new_default`].
pub fn default_seed() -> i64 {
    let seed = clock_nanos() ^ (thread_token() << 7) ^ (address_token() << 13);
    seed as i64
}
