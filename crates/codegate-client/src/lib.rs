pub mod api;
pub mod config;
pub mod error;
pub mod ops;
pub mod session;

pub use api::{ActivationApi, HttpApi};
pub use config::{Config, resolve_data_dir};
pub use error::{Error, Result};
pub use ops::{CodeOps, MAX_ACCOUNTS, MIN_ACCOUNTS};
pub use session::{SessionStore, TokenSlot};
