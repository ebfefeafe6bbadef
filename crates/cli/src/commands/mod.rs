pub mod detect;
pub mod generate;
pub mod util;

pub use detect::*;
pub use generate::*;
pub use util::*;

/// Process exit codes shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Nothing left to do.
    Success = 0,
    /// Public functions without tests were found.
    UntestedFound = 1,
    /// Invalid project root, unreadable config, or a write failure.
    Error = 2,
}
