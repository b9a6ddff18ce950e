//! Shared test support for the converter generator workspace.

pub mod golden;

pub use golden::GoldenTest;
