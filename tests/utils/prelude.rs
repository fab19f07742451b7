#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{App, League, User, UserLike};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use http::StatusCode;
pub use prediction_league::error;
pub use serde_json::{json, Value};
pub use uuid::Uuid;
