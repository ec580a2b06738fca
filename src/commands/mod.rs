//! CLI commands implementation

pub mod chapter;
pub mod debug;
pub mod init;
pub mod inspect;
pub mod list;
pub mod seed;

pub use chapter::*;
pub use debug::*;
pub use init::*;
pub use inspect::*;
pub use list::*;
pub use seed::*;
