use std::fmt::{Display, Formatter};

use anyhow::Result;

use crate::output::Output;

/// Collects everything written in memory.
#[derive(Debug, Default)]
pub struct Buffer {
    data: String,
}

impl Buffer {
    pub fn data(&self) -> &str {
        &self.data
    }
}

impl Display for Buffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data)
    }
}

impl Output for Buffer {
    fn write(&mut self, data: &str) -> Result<()> {
        self.data.push_str(data);
        Ok(())
    }

    fn write_char(&mut self, data: char) -> Result<()> {
        self.data.push(data);
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        self.data.push('\n');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::output::{Buffer, Output};

    #[test]
    fn write() -> Result<()> {
        let mut output = Buffer::default();
        output.write("asdf")?;
        assert_eq!(output.to_string(), "asdf");
        Ok(())
    }

    #[test]
    fn write_char() -> Result<()> {
        let mut output = Buffer::default();
        output.write_char(':')?;
        assert_eq!(output.data(), ":");
        Ok(())
    }

    #[test]
    fn write_appends() -> Result<()> {
        let mut output = Buffer::default();
        output.write("abc")?;
        output.write_char('d')?;
        output.newline()?;
        output.write("efg")?;
        assert_eq!(output.to_string(), "abcd\nefg");
        Ok(())
    }
}
