use std::sync::Arc;

use crate::clients::schedule_client::{HttpScheduleSource, ScheduleSource, UnconfiguredSource};
use crate::config::Settings;
use crate::service::loader::ScheduleLoader;
use crate::service::view::ViewState;
use crate::tasks::refresh::ScheduleStore;

pub fn build_source(settings: &Settings) -> Arc<dyn ScheduleSource> {
    let Some(endpoint) = settings.endpoint.clone() else {
        log::warn!("SCHEDULE_ENDPOINT is not set, only the fallback schedule is available");
        return Arc::new(UnconfiguredSource);
    };
    match HttpScheduleSource::new(endpoint, settings.timeout) {
        Ok(source) => Arc::new(source),
        Err(e) => {
            log::error!("{}", e);
            Arc::new(UnconfiguredSource)
        }
    }
}

/// Store with the configured sheet already loaded (live or fallback).
pub async fn start_store(settings: &Settings) -> Arc<ScheduleStore> {
    let store = Arc::new(ScheduleStore::new(
        ScheduleLoader::new(build_source(settings)),
        ViewState::empty(&settings.sheet),
    ));
    store.refresh(&settings.sheet).await;
    store
}
