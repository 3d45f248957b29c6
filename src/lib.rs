pub mod cli;
pub mod diff;
pub mod scanner;

// Re-export the pieces the binary and most callers need directly.
pub use cli::Cli;
pub use diff::{diff, write_report, DiffLine, Side};
pub use scanner::scan_executables;
