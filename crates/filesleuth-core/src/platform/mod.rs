/// Platform-specific functionality — Unix permission-bit inspection.

pub mod permissions;

pub use permissions::{check_metadata, check_mode};
