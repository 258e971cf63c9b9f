//! Domain facades built on top of entities and storage.

mod tasks;

pub use tasks::TasksDomain;
