use crate::types::{Activity, MutationKind, Target};
use std::sync::Arc;
use tokio::sync::watch;

/// Publishes a controller's `Activity` to any number of observers
#[derive(Debug, Clone)]
pub(crate) struct ActivityTracker {
    tx: Arc<watch::Sender<Activity>>,
}

impl ActivityTracker {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Activity::Idle);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> Activity {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Activity> {
        self.tx.subscribe()
    }

    /// Enter `activity` until the returned guard is dropped.
    ///
    /// Dropping the guard also covers early `?` returns and futures that are
    /// dropped mid-request, so the controller never stays busy.
    pub fn begin(&self, activity: Activity) -> BusyGuard {
        self.tx.send_replace(activity);
        BusyGuard {
            tx: Arc::clone(&self.tx),
        }
    }

    pub fn mutating(&self, target: Target, kind: MutationKind) -> BusyGuard {
        self.begin(Activity::Mutating { target, kind })
    }
}

pub(crate) struct BusyGuard {
    tx: Arc<watch::Sender<Activity>>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.tx.send_replace(Activity::Idle);
    }
}
