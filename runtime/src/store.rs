//! The Store - runtime coordinator for a reducer.

use crate::{HealthCheck, StoreError};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use todo_api_core::reducer::Reducer;
use tokio::sync::RwLock;

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. Reducer (business logic)
/// 3. A shutdown flag that stops new actions from being accepted
///
/// Every action is reduced while holding the write lock, so concurrent
/// senders are applied one at a time in lock acquisition order.
///
/// # Example
///
/// ```ignore
/// let store = Store::new(TodoState::new(), TodoReducer::new());
///
/// store.send(TodoAction::Add { item: "buy milk".into() }).await?;
///
/// let count = store.state(|s| s.count()).await;
/// ```
pub struct Store<R>
where
    R: Reducer,
{
    name: String,
    state: Arc<RwLock<R::State>>,
    reducer: R,
    shutdown: Arc<AtomicBool>,
    accepted: Arc<AtomicU64>,
    rejected: Arc<AtomicU64>,
}

impl<R> Store<R>
where
    R: Reducer + Send + Sync + 'static,
    R::State: Send + Sync + 'static,
    R::Action: Send + std::fmt::Debug + 'static,
    R::Error: std::fmt::Display,
{
    /// Create a new store with initial state and reducer
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R) -> Self {
        Self {
            name: "store".to_string(),
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            shutdown: Arc::new(AtomicBool::new(false)),
            accepted: Arc::new(AtomicU64::new(0)),
            rejected: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Name the store; used as the component in health reports
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Send an action to the store
    ///
    /// # Errors
    ///
    /// - [`StoreError::ShutdownInProgress`] if the store is shutting down
    /// - [`StoreError::Rejected`] if the reducer refused the action
    pub async fn send(&self, action: R::Action) -> Result<(), StoreError<R::Error>> {
        self.send_and_read(action, |_| ()).await
    }

    /// Send an action and read state under the same write lock
    ///
    /// `f` observes exactly the state produced by `action`; no other action
    /// can interleave between the two.
    ///
    /// ```ignore
    /// let items = store
    ///     .send_and_read(TodoAction::Add { item }, |s| s.clone())
    ///     .await?;
    /// ```
    ///
    /// # Errors
    ///
    /// - [`StoreError::ShutdownInProgress`] if the store is shutting down
    /// - [`StoreError::Rejected`] if the reducer refused the action; `f` is
    ///   not called
    #[tracing::instrument(skip(self, action, f), name = "store_send", fields(store = %self.name))]
    pub async fn send_and_read<F, T>(
        &self,
        action: R::Action,
        f: F,
    ) -> Result<T, StoreError<R::Error>>
    where
        F: FnOnce(&R::State) -> T,
    {
        if self.is_shutting_down() {
            tracing::warn!("Rejected action: store is shutting down");
            metrics::counter!("store.shutdown.rejected_actions").increment(1);
            return Err(StoreError::ShutdownInProgress);
        }

        tracing::debug!(?action, "Processing action");
        metrics::counter!("store.commands.total").increment(1);

        let mut state = self.state.write().await;
        tracing::trace!("Acquired write lock on state");

        let start = std::time::Instant::now();
        let result = self.reducer.reduce(&mut *state, action);
        metrics::histogram!("store.reducer.duration_seconds")
            .record(start.elapsed().as_secs_f64());

        match result {
            Ok(()) => {
                self.accepted.fetch_add(1, Ordering::Relaxed);
                Ok(f(&*state))
            }
            Err(error) => {
                self.rejected.fetch_add(1, Ordering::Relaxed);
                metrics::counter!("store.commands.rejected").increment(1);
                tracing::debug!(%error, "Action rejected by reducer");
                Err(StoreError::Rejected(error))
            }
        }
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure to ensure the lock is released promptly:
    ///
    /// ```ignore
    /// let count = store.state(|s| s.count()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        let state = self.state.read().await;
        f(&*state)
    }

    /// Stop accepting new actions
    ///
    /// Actions already holding the lock finish normally; later calls to
    /// [`send`](Self::send) fail with [`StoreError::ShutdownInProgress`].
    pub fn shutdown(&self) {
        if !self.shutdown.swap(true, Ordering::AcqRel) {
            tracing::info!(store = %self.name, "Store shutdown initiated");
            metrics::counter!("store.shutdown.initiated").increment(1);
        }
    }

    /// Whether [`shutdown`](Self::shutdown) has been called
    #[must_use]
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }

    /// Perform a health check on the Store
    ///
    /// Unhealthy once shutdown has begun, healthy otherwise. Metadata carries
    /// the accepted and rejected action counts.
    #[must_use]
    pub fn health(&self) -> HealthCheck {
        let check = if self.is_shutting_down() {
            HealthCheck::unhealthy(self.name.clone(), "Store is shutting down")
        } else {
            HealthCheck::healthy(self.name.clone())
        };

        check
            .with_metadata("actions_accepted", self.accepted.load(Ordering::Relaxed).to_string())
            .with_metadata("actions_rejected", self.rejected.load(Ordering::Relaxed).to_string())
    }
}
