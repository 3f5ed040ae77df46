use std::borrow::Cow;

use crate::output::Output;

/// Writes the `components` joined with `separator` without unnecessary allocations.
pub fn write_joined(
    components: &[&str],
    separator: &str,
    o: &mut dyn Output,
) -> anyhow::Result<()> {
    let mut first = true;
    for component in components {
        if !first {
            o.write(separator)?;
        }
        first = false;
        o.write(component)?;
    }
    Ok(())
}

/// Escapes `text` for use in HTML text and double-quoted attribute values.
pub fn escape_html(text: &str) -> Cow<str> {
    escape(text, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    })
}

/// Backslash-escapes characters that would otherwise start Markdown formatting.
pub fn escape_markdown(text: &str) -> Cow<str> {
    escape(text, |c| match c {
        '\\' => Some("\\\\"),
        '*' => Some("\\*"),
        '_' => Some("\\_"),
        '`' => Some("\\`"),
        '[' => Some("\\["),
        ']' => Some("\\]"),
        '<' => Some("\\<"),
        '>' => Some("\\>"),
        _ => None,
    })
}

/// Percent-encodes the characters that would end or break a Markdown link destination.
pub fn escape_link(uri: &str) -> Cow<str> {
    escape(uri, |c| match c {
        ' ' => Some("%20"),
        '(' => Some("%28"),
        ')' => Some("%29"),
        '<' => Some("%3C"),
        '>' => Some("%3E"),
        _ => None,
    })
}

fn escape<F: Fn(char) -> Option<&'static str>>(text: &str, replacement: F) -> Cow<str> {
    if !text.chars().any(|c| replacement(c).is_some()) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match replacement(c) {
            Some(replacement) => escaped.push_str(replacement),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
pub mod tests {
    use std::borrow::Cow;

    use crate::generator::util::{escape_html, escape_link, escape_markdown, write_joined};
    use crate::output;

    pub fn assert_output<F: FnOnce(&mut output::Buffer) -> anyhow::Result<()>>(
        write: F,
        expected: &str,
    ) -> anyhow::Result<()> {
        let mut output = output::Buffer::default();
        write(&mut output)?;
        assert_eq!(&output.to_string(), expected);
        Ok(())
    }

    pub fn assert_output_slice<F: FnOnce(&mut output::Buffer) -> anyhow::Result<()>>(
        write: F,
        expected: &[&str],
    ) -> anyhow::Result<()> {
        assert_output(write, &expected.join("\n"))
    }

    #[test]
    fn joined() -> anyhow::Result<()> {
        assert_output(|o| write_joined(&["a", "b", "c"], " ", o), "a b c")?;
        assert_output(|o| write_joined(&["a"], " ", o), "a")?;
        assert_output(|o| write_joined(&[], " ", o), "")
    }

    #[test]
    fn html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn html_borrows_when_clean() {
        assert!(matches!(escape_html("Jamie Cowhan"), Cow::Borrowed(_)));
    }

    #[test]
    fn markdown() {
        assert_eq!(escape_markdown("*a_b* [c]"), "\\*a\\_b\\* \\[c\\]");
        assert!(matches!(escape_markdown("Jamie Cowhan"), Cow::Borrowed(_)));
    }

    #[test]
    fn link() {
        assert_eq!(escape_link("/a b/c(1).png"), "/a%20b/c%281%29.png");
        assert_eq!(escape_link("/x)<y>"), "/x%29%3Cy%3E");
        assert!(matches!(escape_link("/images/jamie.png"), Cow::Borrowed(_)));
    }
}
