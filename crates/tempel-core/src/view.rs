use std::sync::Arc;

use tempel_types::ViewState;
use tokio::sync::watch;

/// Shared handle to the observable page state
///
/// Cloning is cheap; every clone publishes to the same subscribers.
#[derive(Clone)]
pub struct View {
    tx: Arc<watch::Sender<ViewState>>,
}

impl View {
    pub fn new(initial: ViewState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn update(&self, modify: impl FnOnce(&mut ViewState)) {
        self.tx.send_modify(modify);
    }

    pub fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.tx.borrow())
    }

    pub fn snapshot(&self) -> ViewState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.tx.subscribe()
    }
}
