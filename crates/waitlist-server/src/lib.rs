pub mod config;
pub mod error;
pub mod routes;
pub mod sheets;

pub use config::{ConfigError, RawConfig, WaitlistConfig};
pub use error::WaitlistError;
pub use routes::{format_timestamp, parse_request, router, Waitlist};
pub use sheets::{GoogleSheets, SheetRow, SheetStore, StoreError};
