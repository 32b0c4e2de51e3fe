pub mod artwork;
pub mod batch;
pub mod config;
pub mod error;
pub mod rename;
pub mod scanner;
pub mod settings;

pub use artwork::{ArtworkSummary, copy_artwork, select_artwork};
pub use batch::{BatchProgress, BatchSummary, run_batch};
pub use config::{ArtworkDirs, RunConfig};
pub use error::{ConfigError, ErrorKind, ProcessError};
pub use rename::{RenameAction, RenameOutcome, apply_rename, plan_rename};
pub use scanner::{find_disc_images, is_disc_image};
pub use settings::{Settings, load_settings, load_settings_from, resolve_path, settings_path};
