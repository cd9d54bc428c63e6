use kanjy_domain::{DomainError, EventId, ParticipantId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("KANJY_UTC_OFFSET must look like +09:00 (found '{0}')")]
    InvalidOffset(String),
    #[error("role multiplier entry '{0}' must be written as role=multiplier")]
    MalformedRoleEntry(String),
    #[error("invalid role multiplier entry '{entry}': {source}")]
    InvalidRoleEntry {
        entry: String,
        #[source]
        source: DomainError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("event {0} was not found")]
    EventNotFound(EventId),
    #[error("failed to fetch responses: {0}")]
    Request(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("participant {0} is not on the roster")]
    UnknownParticipant(ParticipantId),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
