//! Child-process execution

pub mod runner;

pub use runner::TokioProcessRunner;
