//! Command implementations.

pub mod devices;
pub mod read;
pub mod watch;

pub use devices::cmd_devices;
pub use read::cmd_read;
pub use watch::{WatchArgs, cmd_watch};
