//! Domain logic for the Footprint user directory console.
//!
//! Everything in this crate is UI-agnostic: the Dioxus views in `ui` own a
//! [`ListController`] or a [`FieldEditor`] and call into it from event handlers,
//! while the remote directory is reached through the [`UserDirectory`] trait.

pub mod config;
pub mod controller;
pub mod debounce;
pub mod directory;
pub mod editor;
pub mod error;
pub mod format;
pub mod models;
pub mod profile;
pub mod projector;
pub mod query;
pub mod validate;

mod memory;
pub use memory::MemoryDirectory;

pub use config::AppConfig;
pub use controller::{FetchRequest, ListController, SearchCommit};
pub use debounce::{Debouncer, Ticket};
pub use directory::UserDirectory;
pub use editor::FieldEditor;
pub use error::{ConfigError, DirectoryError};
pub use models::{Status, UserRecord};
pub use profile::{load_profile, ProfileState};
pub use projector::constrain;
pub use query::{ListQueryState, SortMode};
pub use validate::FieldKind;
