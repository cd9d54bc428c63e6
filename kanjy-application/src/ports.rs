use crate::error::StoreError;
use fxhash::FxHashMap;
use kanjy_domain::{EventId, RsvpResponse};

/// Source of form responses for an event, usually the hosted backend.
pub trait ResponseStore: Send + Sync {
    fn responses(&self, event_id: &EventId) -> Result<Vec<RsvpResponse>, StoreError>;
}

impl ResponseStore for FxHashMap<EventId, Vec<RsvpResponse>> {
    fn responses(&self, event_id: &EventId) -> Result<Vec<RsvpResponse>, StoreError> {
        self.get(event_id)
            .cloned()
            .ok_or_else(|| StoreError::EventNotFound(event_id.clone()))
    }
}
