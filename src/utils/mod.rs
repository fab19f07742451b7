mod orm;
pub mod panic;
mod signal;

pub use orm::*;
pub use signal::*;
