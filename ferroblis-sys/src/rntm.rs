use std::num::NonZeroUsize;

use crate::dim_t;

/// Environment variable holding the library default thread count.
pub const NUM_THREADS_ENV: &str = "FERROBLIS_NUM_THREADS";

/// Runtime configuration for a single call.
///
/// Built fresh for every call and never stored.
/// `None` asks for the library default, see [`default_num_threads`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rntm {
    num_threads: Option<NonZeroUsize>,
}

impl Rntm {
    /// Zero or negative `nthreads` keeps the library default,
    /// anything positive overrides it for this call.
    pub fn new(nthreads: dim_t) -> Self {
        let num_threads = usize::try_from(nthreads).ok().and_then(NonZeroUsize::new);
        Self { num_threads }
    }

    /// The requested thread count, if one was set.
    pub fn num_threads(&self) -> Option<usize> {
        self.num_threads.map(NonZeroUsize::get)
    }

    /// Whether this call defers to the library default.
    pub fn is_default(&self) -> bool {
        self.num_threads.is_none()
    }

    /// The thread count the backend should use.
    pub fn resolve(&self) -> usize {
        match self.num_threads {
            Some(n) => n.get(),
            None => default_num_threads(),
        }
    }
}

/// Reads [`NUM_THREADS_ENV`]. Unset, unparsable or zero means a single thread.
pub fn default_num_threads() -> usize {
    std::env::var(NUM_THREADS_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}
