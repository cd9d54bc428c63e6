#![warn(clippy::uninlined_format_args)]

pub mod collection_presenter;
pub mod format;
pub mod invitation_presenter;
pub mod payment_request_presenter;

pub use collection_presenter::CollectionPresenter;
pub use invitation_presenter::InvitationPresenter;
pub use payment_request_presenter::PaymentRequestPresenter;
