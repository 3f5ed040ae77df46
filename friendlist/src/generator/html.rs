use anyhow::Result;

use crate::generator::util::{escape_html, write_joined};
use crate::generator::{Generator, FAILED_MESSAGE, TITLE, TOP_FRIEND_LABEL};
use crate::output::{Indented, Output};
use crate::view::{Avatar, DisplayItem, Panel};

/// Renders the panel as an HTML fragment for the profile page.
///
/// Avatars that are still images carry an inline `onerror` handler so a browser performs the
/// same image-to-initials switch as [Avatar::on_image_load_failed].
#[derive(Debug, Default)]
pub struct Html {}

const INDENT: &str = "  ";

const STAR_ICON_PATH: &str = "M10.788 3.21c.448-1.077 1.976-1.077 2.424 0l2.082 5.006 5.404.434c1.164.093 1.636 1.545.749 2.305l-4.117 3.527 1.257 5.273c.271 1.136-.964 2.033-1.96 1.425L12 18.354 7.373 21.18c-.996.608-2.231-.29-1.96-1.425l1.257-5.273-4.117-3.527c-.887-.76-.415-2.212.749-2.305l5.404-.434 2.082-5.005Z";

// Runs at most once: the handler removes itself.
const IMAGE_FALLBACK: &str = "this.onerror=null;this.style.display='none';var next=this.nextElementSibling;if(next&&next.classList.contains('avatar-initials')){next.style.display='flex';}";

impl Generator for Html {
    fn generate(&mut self, panel: &Panel, output: &mut dyn Output) -> Result<()> {
        let mut o = Indented::new(output, INDENT);
        o.line(r#"<section id="profile-friends">"#)?;
        o.indent(1);
        o.line(r#"<div class="content-card fade-in">"#)?;
        o.indent(1);

        o.write(r#"<h2 class="page-heading-2">"#)?;
        o.write(TITLE)?;
        o.line("</h2>")?;

        match panel {
            Panel::Loading { rows } => write_skeleton(*rows, &mut o)?,
            Panel::Failed { cause } => write_failed(cause, &mut o)?,
            Panel::Ready { items } => write_list(items, &mut o)?,
        }

        o.indent(-1);
        o.line("</div>")?;
        o.indent(-1);
        o.line("</section>")
    }
}

fn write_skeleton(rows: usize, o: &mut Indented) -> Result<()> {
    o.line(r#"<ul class="profile-friends-list">"#)?;
    o.indent(1);
    for _ in 0..rows {
        o.line(r#"<li class="profile-list-item">"#)?;
        o.indent(1);
        o.line(r#"<div class="profile-list-item-avatar loading"></div>"#)?;
        o.line(r#"<div class="profile-list-item-info">"#)?;
        o.indent(1);
        o.line(r#"<div class="skeleton-block skeleton-block--half loading"></div>"#)?;
        o.line(r#"<div class="skeleton-block--quarter loading"></div>"#)?;
        o.indent(-1);
        o.line("</div>")?;
        o.indent(-1);
        o.line("</li>")?;
    }
    o.indent(-1);
    o.line("</ul>")
}

fn write_failed(cause: &str, o: &mut Indented) -> Result<()> {
    o.write(r#"<p class="page-paragraph profile-friends-error">"#)?;
    o.write(FAILED_MESSAGE)?;
    o.line("</p>")?;
    o.write(r#"<p class="page-micro">"#)?;
    o.write(&escape_html(cause))?;
    o.line("</p>")
}

fn write_list(items: &[DisplayItem], o: &mut Indented) -> Result<()> {
    o.line(r#"<ul class="profile-friends-list">"#)?;
    o.indent(1);
    for item in items {
        write_item(item, o)?;
    }
    o.indent(-1);
    o.line("</ul>")
}

fn write_item(item: &DisplayItem, o: &mut Indented) -> Result<()> {
    let mut classes = vec!["profile-list-item", "fade-in"];
    if item.favorite {
        classes.push("top-friend");
    }
    o.write(r#"<li class=""#)?;
    write_joined(&classes, " ", o)?;
    o.write(r#"" data-key=""#)?;
    o.write(&item.key.to_string())?;
    o.line(r#"">"#)?;
    o.indent(1);

    write_avatar(item, o)?;

    o.line(r#"<div class="profile-list-item-info">"#)?;
    o.indent(1);
    if item.favorite {
        o.write(r#"<p class="top-friend-flag">"#)?;
        o.write(TOP_FRIEND_LABEL)?;
        o.line("</p>")?;
    }
    o.write(r#"<p class="page-paragraph">"#)?;
    o.write(&escape_html(&item.display_name))?;
    o.line("</p>")?;
    o.write(r#"<p class="page-micro">"#)?;
    if let Some(subtitle) = item.subtitle() {
        o.write(&escape_html(&subtitle))?;
    }
    o.line("</p>")?;
    o.indent(-1);
    o.line("</div>")?;

    o.indent(-1);
    o.line("</li>")
}

fn write_avatar(item: &DisplayItem, o: &mut Indented) -> Result<()> {
    o.line(r#"<div class="profile-list-item-avatar">"#)?;
    o.indent(1);

    if let Avatar::Image { uri, .. } = &item.avatar {
        o.write(r#"<img src=""#)?;
        o.write(&escape_html(uri))?;
        o.write(r#"" alt=""#)?;
        o.write(&escape_html(&item.image_alt()))?;
        o.write(r#"" onerror=""#)?;
        o.write(IMAGE_FALLBACK)?;
        o.line(r#"">"#)?;
    }

    let display = if item.avatar.shows_initials() {
        "flex"
    } else {
        "none"
    };
    o.write(r#"<div class="avatar-initials" style="display: "#)?;
    o.write(display)?;
    o.write(r#"">"#)?;
    o.write(&escape_html(item.initials()))?;
    o.line("</div>")?;

    if item.favorite {
        write_star_indicator(o)?;
    }

    o.indent(-1);
    o.line("</div>")
}

fn write_star_indicator(o: &mut Indented) -> Result<()> {
    o.line(r#"<div class="top-friend-indicator">"#)?;
    o.indent(1);
    o.line(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="top-friend-icon">"#)?;
    o.indent(1);
    o.write(r#"<path fill-rule="evenodd" d=""#)?;
    o.write(STAR_ICON_PATH)?;
    o.line(r#"" clip-rule="evenodd"/>"#)?;
    o.indent(-1);
    o.line("</svg>")?;
    o.indent(-1);
    o.line("</div>")
}
