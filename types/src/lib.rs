pub mod cell;
pub mod color;
pub mod error;
pub mod gamemove;
pub mod point;

pub use cell::*;
pub use color::*;
pub use error::*;
pub use gamemove::*;
pub use point::*;
