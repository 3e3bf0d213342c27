// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod memory;

pub use http::ViaCepClient;
pub use memory::{LogNotifier, MemoryCheckbox, MemoryField, MemoryHint, RecordingNotifier};
