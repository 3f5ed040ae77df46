use std::fmt::Debug;

use anyhow::Result;

pub use dbg::Dbg;
pub use html::Html;
pub use markdown::Markdown;

use crate::output::Output;
use crate::view::Panel;

mod dbg;
mod html;
mod markdown;
mod util;

/// Renders a [Panel] in some output format.
pub trait Generator: Debug {
    fn generate(&mut self, panel: &Panel, output: &mut dyn Output) -> Result<()>;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&mut self, panel: &Panel, output: &mut dyn Output) -> Result<()> {
        (**self).generate(panel, output)
    }
}

/// Heading of the panel in every format.
pub const TITLE: &str = "Friends";

/// Shown instead of the list when the friends could not be loaded.
pub const FAILED_MESSAGE: &str = "Unable to load friends.";

/// Label next to favorites.
pub const TOP_FRIEND_LABEL: &str = "⭐ Top Friend";
