//! This crate contains all shared UI for the workspace.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod context;
pub use context::{use_app_config, use_directory};

mod timer;
pub use timer::sleep;

mod user_table;
pub use user_table::{StatusPill, UserTable};

mod profile_field;
pub use profile_field::{EditableProfileField, ReadOnlyProfileField};

pub mod views;
