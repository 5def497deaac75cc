pub mod config;
pub mod scanner;
pub mod permissions;
pub mod inspect;
pub mod commands;
pub mod error;

pub use error::EnvFilesError;
pub use inspect::{inspect, FileMetadataSnapshot, Inspector};
pub use permissions::{permissions_to_string, PermissionMode};
pub use scanner::{scan, ScanRequest};
pub type Result<T> = std::result::Result<T, EnvFilesError>;
