//! Scanner subsystem — log file discovery.

pub mod discovery;

pub use discovery::discover;
