use std::cell::Cell;

/// Deepest chain of notifications a single thread may nest before further ones are dropped.
/// Nesting happens when a callback assigns a property, which notifies again from inside the callback.
pub const MAX_NOTIFY_DEPTH: usize = 32;

// Thread-local depth counter: notifications run synchronously on the caller's thread
thread_local! {
    static NOTIFY_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Tracks how deeply notifications are nested on the current thread.
/// Held for the duration of a single `notify` call.
pub(crate) struct NotifyDepth {
    _private: (),
}

impl NotifyDepth {
    /// Enter a notification, or `None` if the thread is already at [`MAX_NOTIFY_DEPTH`]
    pub(crate) fn enter() -> Option<Self> {
        NOTIFY_DEPTH.with(|depth| {
            let current = depth.get();
            if current >= MAX_NOTIFY_DEPTH {
                return None;
            }
            depth.set(current + 1);
            Some(NotifyDepth { _private: () })
        })
    }

    /// Current nesting depth on this thread
    pub(crate) fn current() -> usize { NOTIFY_DEPTH.with(|depth| depth.get()) }
}

impl Drop for NotifyDepth {
    fn drop(&mut self) { NOTIFY_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1))); }
}
