use anyhow::Result;

use crate::generator::Generator;
use crate::output::Output;
use crate::view::Panel;

/// Writes the panel in the rust [std::fmt::Debug] format. Verbose, but complete.
#[derive(Debug, Default)]
pub struct Dbg {}

impl Generator for Dbg {
    fn generate(&mut self, panel: &Panel, output: &mut dyn Output) -> Result<()> {
        output.write(&format!("{:#?}", panel))?;
        output.newline()
    }
}
