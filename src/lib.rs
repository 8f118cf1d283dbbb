pub mod actors;
pub mod animation;
pub mod cli;
pub mod error;
pub mod format;
pub mod github;
pub mod models;
pub mod preview;
pub mod render;
pub mod types;

pub use actors::{StarButton, StarButtonArgs, StarButtonHandle, StarButtonRef};
pub use error::{Result, StarButtonError};
pub use format::format_count;
pub use models::{AnimationConfig, ButtonSnapshot, StarButtonProps, Variant};
pub use types::RepositoryIdentity;
