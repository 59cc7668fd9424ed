//! Core of an online examination portal: exam records and their builder,
//! a timed exam session engine with auto-grading, AI-assisted question
//! drafting, and an injected key-value record store. Dashboards, forms and
//! routing live outside this crate and drive the public API.

pub mod core;
pub mod errors;
pub mod repositories;
pub mod schemas;
pub mod services;
pub mod session;
pub mod store;

#[cfg(test)]
mod test_support;

pub use errors::PortalError;
pub use session::{ExamSession, GradeSummary, SessionPhase};
pub use store::{FileStore, MemoryStore, RecordStore};
