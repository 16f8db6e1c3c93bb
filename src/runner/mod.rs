//! Running the development server.

pub mod supervisor;

pub use supervisor::{start_application, RunOutcome};
