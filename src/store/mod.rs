//! Record storage for employers and logged shifts.
//!
//! The store keeps every record under the ID of the user who owns it and
//! reports uniqueness violations as [`crate::error::EngineError::Conflict`].

mod memory;
mod records;

pub use memory::MemoryStore;
pub use records::{EmployerDraft, ShiftDraft};
