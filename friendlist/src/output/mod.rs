use std::fmt::Debug;

use anyhow::Result;

pub use buffer::Buffer;
pub use file::File;
pub use indent::Indented;
pub use stdout::StdOut;

mod buffer;
mod file;
mod indent;
mod stdout;

/// Destination of a rendered panel.
pub trait Output: Debug {
    fn write(&mut self, data: &str) -> Result<()>;
    fn write_char(&mut self, data: char) -> Result<()>;
    fn newline(&mut self) -> Result<()>;
}
