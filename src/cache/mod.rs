//! In-memory response cache
//!
//! Each repository owns its own [`BoundedTtlCache`]; nothing here is a
//! process-wide singleton.

pub mod clock;
pub mod entry;
pub mod memory;

use std::num::NonZeroUsize;
use std::time::Duration;

/// Cache TTL defaults per data type
pub struct CacheTtl;

impl CacheTtl {
    // Profiles change rarely
    pub const USERS: Duration = Duration::from_secs(5 * 60); // 5 min

    // Feed page 0 goes stale quickly
    pub const FEED: Duration = Duration::from_secs(2 * 60); // 2 min
}

/// Cache capacity defaults per data type
pub struct CacheCapacity;

impl CacheCapacity {
    pub const USERS: NonZeroUsize = NonZeroUsize::new(100).unwrap();
    pub const FEED: NonZeroUsize = NonZeroUsize::new(10).unwrap();
}

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::TimedEntry;
pub use memory::BoundedTtlCache;
