pub use config::*;
pub use error::*;
pub use json::Json;

use crate::model::FriendList;
use crate::source::Payload;

mod config;
mod error;
mod json;

/// Turns the raw [Payload] of a [crate::source::Source] into a [FriendList].
pub trait Parser {
    fn parse(&self, config: &Config, payload: &Payload) -> Result<FriendList, DecodeError>;
}
