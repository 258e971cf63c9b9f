//! Core library for the taskman CLI.
//!
//! The in-memory [`entities::TaskStore`] owns the task collection and the
//! id counter; [`storage`] persists it to a JSON file; [`domain`] ties the
//! two together and persists after every mutation. All presentation lives
//! in [`ui`] and the binary, so the core is testable without capturing
//! console output.

pub mod domain;
pub mod entities;
pub mod errors;
pub mod storage;
pub mod ui;
