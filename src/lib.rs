pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{
    LogNotifier, MemoryCheckbox, MemoryField, MemoryHint, RecordingNotifier, ViaCepClient,
};
pub use crate::config::FormConfig;
pub use crate::core::form::{FormHandles, RegistrationForm};
pub use crate::core::masking::{FieldFormatter, FieldKind, Formatter, MaskTemplate, PhoneFormatter};
pub use crate::utils::error::{FormError, Result};
