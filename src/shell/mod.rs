//! External process execution.

pub mod command;
pub mod interrupt;
pub mod mock;
pub mod platform;

pub use command::{display_command, CommandResult, ForegroundResult, ProcessRunner, SystemRunner};
pub use interrupt::InterruptGuard;
pub use mock::{Invocation, MockOutcome, MockRunner};
pub use platform::is_ci;
