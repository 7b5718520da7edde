//! Shared building blocks: terminal enums, constants, credentials, parsing
//! helpers, bridge routes, log setup and test fixtures.

pub mod consts;
pub mod credential;
pub mod enums;
pub mod logging;
pub mod parse;
#[cfg(test)]
pub mod testing;
pub mod urls;

pub use consts::*;
pub use credential::*;
pub use enums::*;
pub use parse::*;
pub use urls::*;
