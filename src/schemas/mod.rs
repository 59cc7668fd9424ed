pub mod catalog;
pub mod exam;
pub mod result;
pub mod user;
