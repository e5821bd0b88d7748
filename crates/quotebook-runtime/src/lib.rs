pub mod config;
pub mod controller;
pub mod error;
pub mod notification;
pub mod workspace;

pub use config::{Config, StorageConfig, UiConfig, resolve_data_dir};
pub use controller::{Mode, PageController};
pub use error::{Error, Result};
pub use notification::{Notification, NotificationKind};
pub use workspace::Quotebook;
