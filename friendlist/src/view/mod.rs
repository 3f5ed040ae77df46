use itertools::Itertools;
use log::debug;

pub use avatar::*;
pub use image::*;

use crate::model::{self, FriendList, FriendRecord};
use crate::parser::{self, DecodeError, Parser};
use crate::query::QueryState;

mod avatar;
mod image;

/// Placeholder rows shown while the friends query is pending.
pub const SKELETON_ROWS: usize = 4;

/// Joins job title and company name.
pub const SUBTITLE_SEPARATOR: &str = " @ ";

/// One friend, ready to render.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DisplayItem {
    /// Position in the presented order. Stable for the lifetime of a [Panel].
    pub key: usize,
    pub display_name: String,
    pub avatar: Avatar,
    pub favorite: bool,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
}

impl DisplayItem {
    pub fn new(key: usize, record: &FriendRecord) -> Self {
        Self {
            key,
            display_name: record.name().unwrap_or_default().to_string(),
            avatar: Avatar::new(record.image(), record.initials()),
            favorite: record.top_friend,
            job_title: record.job_title.clone(),
            company_name: record.company_name.clone(),
        }
    }

    pub fn initials(&self) -> &str {
        self.avatar.initials()
    }

    /// `"<job title> @ <company name>"`, with a missing part left empty. `None` only when both
    /// are missing.
    pub fn subtitle(&self) -> Option<String> {
        if self.job_title.is_none() && self.company_name.is_none() {
            return None;
        }
        Some(
            [
                self.job_title.as_deref().unwrap_or_default(),
                self.company_name.as_deref().unwrap_or_default(),
            ]
            .join(SUBTITLE_SEPARATOR),
        )
    }

    pub fn image_alt(&self) -> String {
        format!("Profile picture for {}", self.display_name)
    }
}

/// Orders `list` for display and derives a [DisplayItem] per friend. `list` itself is not
/// modified.
pub fn present(list: &FriendList) -> Vec<DisplayItem> {
    model::sorted(list.records())
        .into_iter()
        .enumerate()
        .map(|(key, record)| DisplayItem::new(key, record))
        .collect_vec()
}

/// The friends panel in one of its three observable states.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Panel {
    /// Waiting for data. Rendered as `rows` skeleton placeholders.
    Loading { rows: usize },

    /// The friends could not be loaded. `cause` is a human readable reason.
    Failed { cause: String },

    Ready { items: Vec<DisplayItem> },
}

impl Panel {
    pub fn loading() -> Self {
        Panel::Loading {
            rows: SKELETON_ROWS,
        }
    }

    pub fn failed(cause: impl ToString) -> Self {
        Panel::Failed {
            cause: cause.to_string(),
        }
    }

    pub fn ready(list: &FriendList) -> Self {
        Panel::Ready {
            items: present(list),
        }
    }

    /// Maps an observed [QueryState] to a panel, decoding the payload with `parser` once it is
    /// ready.
    pub fn from_state<P: Parser + ?Sized>(
        state: &QueryState,
        parser: &P,
        config: &parser::Config,
    ) -> Result<Self, DecodeError> {
        match state {
            QueryState::Pending => Ok(Panel::loading()),
            QueryState::Error(err) => Ok(Panel::failed(err)),
            QueryState::Ready(payload) => Ok(Panel::ready(&parser.parse(config, payload)?)),
        }
    }

    /// Displayed items. Empty unless [Panel::Ready].
    pub fn items(&self) -> &[DisplayItem] {
        match self {
            Panel::Ready { items } => items,
            _ => &[],
        }
    }

    /// Signals that the image of the item with `key` failed to load.
    ///
    /// Returns `true` if the item switched to initials, `false` if there is no such item or it
    /// already shows initials.
    pub fn on_image_load_failed(&mut self, key: usize) -> bool {
        match self {
            Panel::Ready { items } => items
                .iter_mut()
                .find(|item| item.key == key)
                .map(|item| item.avatar.on_image_load_failed())
                .unwrap_or(false),
            _ => false,
        }
    }

    /// Runs `check` over every image still shown and switches failing ones to initials.
    /// Returns the number of items that switched.
    pub fn check_images(&mut self, check: &dyn ImageCheck) -> usize {
        let Panel::Ready { items } = self else {
            return 0;
        };
        let mut switched = 0;
        for item in items.iter_mut() {
            let loads = match item.avatar.image() {
                Some(uri) => check.loads(uri),
                None => continue,
            };
            if !loads && item.avatar.on_image_load_failed() {
                debug!(
                    "image for '{}' failed to load, showing initials '{}'",
                    item.display_name,
                    item.initials()
                );
                switched += 1;
            }
        }
        switched
    }
}
