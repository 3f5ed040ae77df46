use std::fmt::{Debug, Formatter};

use anyhow::Result;
use log::error;

use crate::output::Output;

/// Wraps an [Output] and prefixes every line with the current indentation.
///
/// Indentation is applied lazily before the first write of each line, so calling
/// [Indented::indent] before or after [Output::newline] has the same effect.
pub struct Indented<'a> {
    depth: u32,
    has_pending_indent: bool,
    indent: &'a str,
    output: &'a mut dyn Output,
}

impl<'a> Indented<'a> {
    pub fn new(output: &'a mut dyn Output, indent: &'a str) -> Self {
        Self {
            depth: 0,
            // An indent set before the first write applies to that write.
            has_pending_indent: true,
            indent,
            output,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Adds `amount` to the indent depth. Negative amounts dedent, never below 0.
    pub fn indent(&mut self, amount: i32) {
        if amount >= 0 {
            self.add(amount.unsigned_abs());
        } else {
            self.sub(amount.unsigned_abs());
        }
    }

    /// Writes `data` followed by a newline.
    pub fn line(&mut self, data: &str) -> Result<()> {
        self.write(data)?;
        self.newline()
    }

    fn add(&mut self, rhs: u32) {
        if self.depth.checked_add(rhs).is_none() {
            error!("reached maximum indent level! ({})", u32::MAX);
        }
        self.depth = self.depth.saturating_add(rhs);
    }

    fn sub(&mut self, rhs: u32) {
        if self.depth.checked_sub(rhs).is_none() {
            error!("cannot decrement indent below 0! mismatched inc/dec?");
        }
        self.depth = self.depth.saturating_sub(rhs);
    }

    fn write_pending_indent(&mut self) -> Result<()> {
        if !self.has_pending_indent {
            return Ok(());
        }
        self.has_pending_indent = false;
        for _ in 0..self.depth {
            self.output.write(self.indent)?;
        }
        Ok(())
    }
}

impl Debug for Indented<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.output.fmt(f)
    }
}

impl Output for Indented<'_> {
    fn write(&mut self, data: &str) -> Result<()> {
        self.write_pending_indent()?;
        self.output.write(data)
    }

    fn write_char(&mut self, data: char) -> Result<()> {
        self.write_pending_indent()?;
        self.output.write_char(data)
    }

    fn newline(&mut self) -> Result<()> {
        self.output.newline()?;
        self.has_pending_indent = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::output::{Buffer, Indented, Output};

    #[test]
    fn add_sub_depth() {
        let mut output = Buffer::default();
        let mut indent = Indented::new(&mut output, "  ");
        indent.indent(1);
        assert_eq!(indent.depth(), 1);
        indent.indent(2);
        assert_eq!(indent.depth(), 3);
        indent.indent(-1);
        assert_eq!(indent.depth(), 2);
        indent.indent(-2);
        assert_eq!(indent.depth(), 0);
    }

    #[test]
    fn sub_does_not_go_below_0() {
        let mut output = Buffer::default();
        let mut indent = Indented::new(&mut output, "  ");
        indent.indent(2);
        indent.indent(-99);
        assert_eq!(indent.depth(), 0);
    }

    #[test]
    fn applies_pending_indent_once() -> Result<()> {
        let mut output = Buffer::default();
        let mut indent = Indented::new(&mut output, "  ");
        indent.indent(2);
        indent.write("x")?;
        indent.write_char('x')?;
        assert_eq!(output.to_string(), "    xx");
        Ok(())
    }

    #[test]
    fn indent_before_or_after_newline() -> Result<()> {
        let mut before = Buffer::default();
        {
            let mut indent = Indented::new(&mut before, "  ");
            indent.indent(1);
            indent.newline()?;
            indent.write("x")?;
        }
        let mut after = Buffer::default();
        {
            let mut indent = Indented::new(&mut after, "  ");
            indent.newline()?;
            indent.indent(1);
            indent.write("x")?;
        }
        assert_eq!(before.to_string(), "\n  x");
        assert_eq!(after.to_string(), "\n  x");
        Ok(())
    }

    #[test]
    fn line() -> Result<()> {
        let mut output = Buffer::default();
        let mut indent = Indented::new(&mut output, "\t");
        indent.indent(1);
        indent.line("a")?;
        indent.line("b")?;
        assert_eq!(output.to_string(), "\ta\n\tb\n");
        Ok(())
    }
}
