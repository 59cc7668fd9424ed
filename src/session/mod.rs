pub mod clock;
pub mod engine;
pub mod grading;
pub mod runner;

pub use engine::{ExamSession, SessionPhase};
pub use grading::GradeSummary;
