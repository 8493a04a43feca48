//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`activities`, `form`, `status`) so the
//! page and its components depend on small focused models. Each model is
//! plain data wrapped in an `RwSignal` provided via context; the
//! mutation logic lives on the models themselves so it tests natively.

pub mod activities;
pub mod form;
pub mod status;
