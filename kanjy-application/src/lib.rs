#![warn(clippy::uninlined_format_args)]

pub mod config;
pub mod error;
pub mod ports;
pub mod session;

pub use config::KanjyConfig;
pub use error::{ConfigError, SessionError, StoreError};
pub use ports::ResponseStore;
pub use session::{CollectionStatus, EventSession};
