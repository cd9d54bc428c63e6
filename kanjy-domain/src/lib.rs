#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    CandidateSchedule, DomainError, EventId, Money, Multiplier, Participant, ParticipantId,
    ParticipantSource, RoleAssignment, RoleTable, RsvpResponse, RsvpStatus, StandardRole,
};
pub use services::{
    AttendanceMatcher, DateTally, ResponseReconciler, Share, SplitCalculator, SplitSummary,
};
