pub mod macros;
pub mod prelude;
mod request;
mod response;
mod setup;
mod user;

pub use request::*;
pub use response::*;
pub use setup::*;
pub use user::*;
