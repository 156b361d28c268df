use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::service::grouping::GroupFilter;
use crate::service::loader::{LoadOutcome, ScheduleLoader};
use crate::service::view::ViewState;

/// Ticket handed out when a load starts; only the latest one may touch the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

struct Applied {
    view: ViewState,
    generation: u64,
}

pub struct ScheduleStore {
    loader: ScheduleLoader,
    issued: AtomicU64,
    state: Mutex<Applied>,
}

impl ScheduleStore {
    pub fn new(loader: ScheduleLoader, initial: ViewState) -> Self {
        Self {
            loader,
            issued: AtomicU64::new(0),
            state: Mutex::new(Applied {
                view: initial,
                generation: 0,
            }),
        }
    }

    pub fn begin(&self) -> RequestToken {
        RequestToken(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns false when a newer request was issued after `token`; the outcome is dropped.
    pub async fn apply(&self, token: RequestToken, outcome: LoadOutcome) -> bool {
        let mut applied = self.state.lock().await;
        if token.0 != self.issued.load(Ordering::SeqCst) {
            log::debug!(
                "Discarding superseded response for sheet '{}' (request {})",
                outcome.sheet,
                token.0
            );
            return false;
        }
        applied.view = applied.view.clone().with_outcome(outcome);
        applied.generation = token.0;
        true
    }

    pub async fn refresh(&self, sheet: &str) -> bool {
        let token = self.begin();
        let outcome = self.loader.load(sheet).await;
        self.apply(token, outcome).await
    }

    /// Reloads whichever sheet is currently selected.
    pub async fn reload(&self) -> bool {
        let sheet = self.state.lock().await.view.sheet.clone();
        self.refresh(&sheet).await
    }

    pub async fn select_group(&self, group: GroupFilter) {
        let mut applied = self.state.lock().await;
        applied.view = applied.view.clone().with_group(group);
    }

    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.view.clone()
    }

    pub async fn is_loading(&self) -> bool {
        let applied = self.state.lock().await;
        applied.generation < self.issued.load(Ordering::SeqCst)
    }
}
