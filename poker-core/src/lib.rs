pub mod poker;
pub mod prelude;

pub use poker::error::{Error, Result};
