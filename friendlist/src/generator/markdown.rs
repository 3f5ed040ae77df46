use anyhow::Result;

use crate::generator::util::{escape_link, escape_markdown};
use crate::generator::{Generator, FAILED_MESSAGE, TITLE, TOP_FRIEND_LABEL};
use crate::output::{Indented, Output};
use crate::view::{Avatar, DisplayItem, Panel};

/// Renders the panel as a Markdown section, one list entry per friend.
#[derive(Debug, Default)]
pub struct Markdown {}

const INDENT: &str = "  ";
const EMPTY_MESSAGE: &str = "_No friends to show._";
const SKELETON_NAME: &str = "░░░░░░░░░░░░";
const SKELETON_SUBTITLE: &str = "░░░░░░";

impl Generator for Markdown {
    fn generate(&mut self, panel: &Panel, output: &mut dyn Output) -> Result<()> {
        let mut o = Indented::new(output, INDENT);
        o.write("## ")?;
        o.line(TITLE)?;
        o.newline()?;
        match panel {
            Panel::Loading { rows } => write_skeleton(*rows, &mut o),
            Panel::Failed { cause } => write_failed(cause, &mut o),
            Panel::Ready { items } if items.is_empty() => o.line(EMPTY_MESSAGE),
            Panel::Ready { items } => {
                for item in items {
                    write_item(item, &mut o)?;
                }
                Ok(())
            }
        }
    }
}

fn write_skeleton(rows: usize, o: &mut Indented) -> Result<()> {
    for _ in 0..rows {
        o.write("- ░░ ")?;
        o.line(SKELETON_NAME)?;
        o.indent(1);
        o.line(SKELETON_SUBTITLE)?;
        o.indent(-1);
    }
    Ok(())
}

fn write_failed(cause: &str, o: &mut Indented) -> Result<()> {
    o.write("> **")?;
    o.write(FAILED_MESSAGE)?;
    o.line("**")?;
    o.write("> ")?;
    o.line(&escape_markdown(cause))
}

fn write_item(item: &DisplayItem, o: &mut Indented) -> Result<()> {
    o.write("- ")?;
    match &item.avatar {
        Avatar::Image { uri, .. } => {
            o.write("![")?;
            o.write(&escape_markdown(&item.image_alt()))?;
            o.write("](")?;
            o.write(&escape_link(uri))?;
            o.write_char(')')?;
        }
        Avatar::Initials(initials) => {
            o.write("**")?;
            o.write(&escape_markdown(initials))?;
            o.write("**")?;
        }
    }
    o.write_char(' ')?;
    o.write(&escape_markdown(&item.display_name))?;
    if item.favorite {
        o.write(" · ")?;
        o.write(TOP_FRIEND_LABEL)?;
    }
    o.newline()?;

    if let Some(subtitle) = item.subtitle() {
        o.indent(1);
        o.write_char('_')?;
        o.write(&escape_markdown(&subtitle))?;
        o.line("_")?;
        o.indent(-1);
    }
    Ok(())
}
