use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::model::{FriendList, FriendRecord};
use crate::parser::{Config, DecodeError, Parser, ShapePolicy};
use crate::source::Payload;

/// Key of the friends array, both at the top level and one level down.
const LIST_KEY: &str = "friends";

/// Decodes JSON payloads in either of the two shapes served for the friends query:
///
/// - nested: `{ "friends": [ { "friends": [ ...records ] } ] }`
/// - flat: `{ "friends": [ ...records ] }`
///
/// The nested shape wins whenever the first element of the outer array has a non-null
/// `friends` entry.
#[derive(Debug, Default, Copy, Clone)]
pub struct Json {}

impl Parser for Json {
    fn parse(&self, config: &Config, payload: &Payload) -> Result<FriendList, DecodeError> {
        let value: Value = serde_json::from_str(&payload.data)
            .map_err(|err| DecodeError::syntax(&payload.origin, &err))?;

        let entries = match unwrap_list(&value) {
            Some(entries) => entries,
            None => {
                let err = DecodeError::UnknownShape {
                    origin: payload.origin.clone(),
                    found: describe(&value),
                };
                return match config.shape {
                    ShapePolicy::Strict => Err(err),
                    ShapePolicy::Lenient => {
                        warn!("{}; showing no friends", err);
                        Ok(FriendList::default())
                    }
                };
            }
        };
        debug!("{}: {} friend entries", payload.origin, entries.len());

        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match FriendRecord::deserialize(entry) {
                Ok(record) => records.push(record),
                Err(err) => {
                    let err = DecodeError::InvalidRecord {
                        origin: payload.origin.clone(),
                        index,
                        message: err.to_string(),
                    };
                    match config.shape {
                        ShapePolicy::Strict => return Err(err),
                        ShapePolicy::Lenient => warn!("{}; skipping it", err),
                    }
                }
            }
        }
        Ok(FriendList::new(records))
    }
}

fn unwrap_list(value: &Value) -> Option<&Vec<Value>> {
    let outer = value.get(LIST_KEY)?.as_array()?;
    match outer.first().and_then(|first| first.get(LIST_KEY)) {
        None | Some(Value::Null) => Some(outer),
        Some(inner) => inner.as_array(),
    }
}

fn describe(value: &Value) -> String {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(object) => {
            return match object.get(LIST_KEY) {
                None => format!("an object without '{}'", LIST_KEY),
                Some(_) => format!("an object whose '{}' is not a list of friends", LIST_KEY),
            }
        }
    };
    kind.to_string()
}
