use std::io::{stdout, Write};

use anyhow::Result;

use crate::output::Output;

#[derive(Debug, Default)]
pub struct StdOut {}

impl Output for StdOut {
    fn write(&mut self, data: &str) -> Result<()> {
        stdout().lock().write_all(data.as_bytes())?;
        Ok(())
    }

    fn write_char(&mut self, data: char) -> Result<()> {
        self.write(data.encode_utf8(&mut [0; 4]))
    }

    fn newline(&mut self) -> Result<()> {
        let mut stdout = stdout().lock();
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }
}
