mod control;
mod error;
mod health;
mod weather;

pub use control::*;
pub use error::*;
pub use health::*;
pub use weather::*;
