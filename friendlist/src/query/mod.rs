use std::borrow::Cow;
use std::fmt::{Display, Formatter};

pub use client::*;

use crate::source::{FetchError, Payload};

mod client;

/// Identity of a cached query.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct QueryKey(Cow<'static, str>);

impl QueryKey {
    /// The current user's friends.
    pub const FRIENDS: QueryKey = QueryKey(Cow::Borrowed("friends"));

    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for QueryKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a consumer of a query can observe.
#[derive(Debug, Default)]
pub enum QueryState {
    /// Nothing has been fetched yet.
    #[default]
    Pending,

    Ready(Payload),

    /// The latest fetch failed, including all retries.
    Error(FetchError),
}

impl QueryState {
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    pub fn payload(&self) -> Option<&Payload> {
        match self {
            QueryState::Ready(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            QueryState::Error(err) => Some(err),
            _ => None,
        }
    }
}
