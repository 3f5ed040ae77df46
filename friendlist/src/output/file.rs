use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::output::Output;

/// Writes to a single file, replacing any previous contents. Missing parent directories are
/// created.
#[derive(Debug)]
pub struct File {
    path: PathBuf,
    writer: BufWriter<fs::File>,
}

impl File {
    pub fn create<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
        let file = fs::File::create(&path)
            .with_context(|| format!("Failed to open output file for write: {}", path.display()))?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Output for File {
    fn write(&mut self, data: &str) -> Result<()> {
        self.writer.write_all(data.as_bytes())?;
        Ok(())
    }

    fn write_char(&mut self, data: char) -> Result<()> {
        self.write(data.encode_utf8(&mut [0; 4]))
    }

    /// Also flushes, so a complete line is on disk once this returns.
    fn newline(&mut self) -> Result<()> {
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use anyhow::Result;
    use tempfile::tempdir;

    use crate::output::{File, Output};

    #[test]
    fn writes_file() -> Result<()> {
        let root = tempdir()?;
        let path = root.path().join("friends.html");
        {
            let mut output = File::create(&path)?;
            output.write("content")?;
            output.write_char('é')?;
            output.newline()?;
        } // close file
        assert_eq!(fs::read_to_string(&path)?, "contenté\n");
        Ok(())
    }

    #[test]
    fn creates_parent_directories() -> Result<()> {
        let root = tempdir()?;
        let path = root.path().join("a/b/c/friends.md");
        File::create(&path)?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn truncates_existing() -> Result<()> {
        let root = tempdir()?;
        let path = root.path().join("friends.md");
        fs::write(&path, "old contents")?;
        {
            let mut output = File::create(&path)?;
            output.write("new")?;
        }
        assert_eq!(fs::read_to_string(&path)?, "new");
        Ok(())
    }

    #[test]
    fn path_is_directory_errors() -> Result<()> {
        let root = tempdir()?;
        assert!(File::create(root.path()).is_err());
        Ok(())
    }
}
