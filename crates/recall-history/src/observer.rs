/// Listener for history state transitions.
///
/// Receives the full current sequence (most recent first) after every
/// successful mutation — an `add` whose save committed, or a completed
/// initial load — and after a failed save, with the sequence reset to
/// empty. Invoked without the manager's sequence lock held, so an
/// observer may call back into the manager.
pub trait HistoryObserver<T>: Send + Sync {
    /// The history changed; `history` is the full current sequence.
    fn on_history_updated(&self, history: &[T]);
}

impl<T, F> HistoryObserver<T> for F
where
    F: Fn(&[T]) + Send + Sync,
{
    fn on_history_updated(&self, history: &[T]) {
        self(history)
    }
}
