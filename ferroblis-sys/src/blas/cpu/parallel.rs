use crate::rntm::Rntm;

/// A raw pointer that may cross into the scoped worker threads.
///
/// Workers only ever write through it to disjoint elements.
pub(super) struct SendPtr<T>(*mut T);

unsafe impl<T> Send for SendPtr<T> {}
unsafe impl<T> Sync for SendPtr<T> {}

impl<T> Clone for SendPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SendPtr<T> {}

impl<T> SendPtr<T> {
    pub(super) fn new(ptr: *mut T) -> Self {
        Self(ptr)
    }

    // a method, so closures capture the whole wrapper and not the raw field
    pub(super) fn get(self) -> *mut T {
        self.0
    }
}

/// Splits `[0, n)` into contiguous panels, one per thread, and runs `f(start, end)` on each.
///
/// The thread count comes from `rntm`, capped at `n`. With a single thread
/// `f` runs inline on the caller.
pub(super) fn for_each_panel<F>(rntm: Rntm, n: usize, f: F)
where
    F: Fn(usize, usize) + Sync,
{
    if n == 0 {
        return;
    }

    let threads = rntm.resolve().min(n);
    if threads <= 1 {
        f(0, n);
        return;
    }

    let panel = n.div_ceil(threads);
    log::trace!("splitting {n} columns into panels of {panel} over {threads} threads");

    let f = &f;
    std::thread::scope(|s| {
        for start in (0..n).step_by(panel) {
            let end = (start + panel).min(n);
            s.spawn(move || f(start, end));
        }
    });
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    use super::for_each_panel;
    use crate::rntm::Rntm;

    #[test]
    fn covers_range() {
        let counter = AtomicUsize::new(0);
        for_each_panel(Rntm::new(3), 1000, |start, end| {
            counter.fetch_add(end - start, Ordering::Relaxed);
        });
        assert_eq!(counter.load(Ordering::Relaxed), 1000);
    }

    #[test]
    fn panels() {
        let panels = Mutex::new(Vec::new());
        for_each_panel(Rntm::new(3), 10, |start, end| {
            panels.lock().unwrap().push((start, end));
        });

        let mut panels = panels.into_inner().unwrap();
        panels.sort_unstable();
        assert_eq!(panels, [(0, 4), (4, 8), (8, 10)]);
    }

    #[test]
    fn single_thread_inline() {
        let caller = std::thread::current().id();
        for_each_panel(Rntm::new(1), 5, |start, end| {
            assert_eq!((start, end), (0, 5));
            assert_eq!(std::thread::current().id(), caller);
        });
    }

    #[test]
    fn empty_range() {
        let counter = AtomicUsize::new(0);
        for_each_panel(Rntm::new(4), 0, |_, _| {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(counter.load(Ordering::Relaxed), 0);
    }
}
