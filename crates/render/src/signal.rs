//! One-shot data-availability signal.
//!
//! Deployment variants hand the renderer its "data loaded" notification in
//! two shapes: something to await, or something that takes a completion
//! callback. [`DataSignal`] models both over one primitive: a one-shot
//! notification carrying the payload. The first resolution wins; later
//! resolutions are silently ignored.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll, Waker};

type Callback<T> = Box<dyn FnOnce(T) + Send>;

enum State<T> {
    Pending {
        callbacks: Vec<Callback<T>>,
        wakers: Vec<Waker>,
    },
    Resolved(T),
}

/// A one-shot notification that can be awaited or subscribed.
///
/// Clones share the same underlying state, so the host keeps one end to
/// resolve and hands the other to the renderer.
pub struct DataSignal<T> {
    inner: Arc<Mutex<State<T>>>,
}

impl<T> Clone for DataSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for DataSignal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DataSignal<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(State::Pending {
                callbacks: Vec::new(),
                wakers: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(*self.lock(), State::Resolved(_))
    }
}

impl<T: Clone + Send + 'static> DataSignal<T> {
    /// Resolve the signal.
    ///
    /// Registered callbacks run synchronously on the resolving call stack
    /// (outside the internal lock) and pending awaiters are woken. A second
    /// resolution is a no-op.
    pub fn resolve(&self, value: T) {
        let (callbacks, wakers) = {
            let mut state = self.lock();
            match std::mem::replace(&mut *state, State::Resolved(value.clone())) {
                State::Resolved(first) => {
                    // One-shot: the first resolution stays.
                    *state = State::Resolved(first);
                    return;
                }
                State::Pending { callbacks, wakers } => (callbacks, wakers),
            }
        };

        for callback in callbacks {
            callback(value.clone());
        }
        for waker in wakers {
            waker.wake();
        }
    }

    /// Register a completion callback.
    ///
    /// Fires immediately (on this call stack) if the signal already
    /// resolved.
    pub fn on_resolve(&self, callback: impl FnOnce(T) + Send + 'static) {
        let mut callback = Some(Box::new(callback) as Callback<T>);
        let resolved = {
            let mut state = self.lock();
            match &mut *state {
                State::Resolved(value) => Some(value.clone()),
                State::Pending { callbacks, .. } => {
                    callbacks.extend(callback.take());
                    None
                }
            }
        };

        if let (Some(value), Some(callback)) = (resolved, callback) {
            callback(value);
        }
    }

    /// Await resolution, yielding a clone of the payload.
    pub fn wait(&self) -> WaitForData<T> {
        WaitForData {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Future returned by [`DataSignal::wait`].
pub struct WaitForData<T> {
    inner: Arc<Mutex<State<T>>>,
}

impl<T: Clone> Future for WaitForData<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match &mut *state {
            State::Resolved(value) => Poll::Ready(value.clone()),
            State::Pending { wakers, .. } => {
                let waker = cx.waker();
                if !wakers.iter().any(|w| w.will_wake(waker)) {
                    wakers.push(waker.clone());
                }
                Poll::Pending
            }
        }
    }
}

impl<T> core::fmt::Debug for DataSignal<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DataSignal")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn wait_yields_the_payload() {
        let signal = DataSignal::new();
        let waiter = signal.clone();

        let task = tokio::spawn(async move { waiter.wait().await });
        signal.resolve(7u32);

        assert_eq!(task.await.unwrap(), 7);
    }

    #[tokio::test]
    async fn wait_after_resolution_is_immediate() {
        let signal = DataSignal::new();
        signal.resolve("ready".to_string());
        assert_eq!(signal.wait().await, "ready");
    }

    #[test]
    fn callback_fires_on_resolution() {
        let signal = DataSignal::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        signal.on_resolve(move |value: u32| {
            assert_eq!(value, 42);
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        signal.resolve(42);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn late_subscription_fires_immediately() {
        let signal = DataSignal::new();
        signal.resolve(1u32);

        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        signal.on_resolve(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn second_resolution_is_ignored() {
        let signal = DataSignal::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        signal.on_resolve(move |value: u32| {
            sink.lock().unwrap().push(value);
        });

        signal.resolve(1);
        signal.resolve(2);

        assert_eq!(*seen.lock().unwrap(), vec![1]);
        assert!(signal.is_resolved());
    }
}
