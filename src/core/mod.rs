pub mod form;
pub mod guard;
pub mod masking;
pub mod resolver;

pub use crate::domain::model::{
    AddressRecord, LookupResponse, PostalCode, ResolveOutcome, SubmitDecision,
};
pub use crate::domain::ports::{Checkbox, HintElement, Notifier, PostalLookup, TextField};
pub use crate::utils::error::Result;
