use std::path::{Path, PathBuf};

/// Decides whether an avatar image would load. Stands in for the load-failure event a browser
/// would raise.
pub trait ImageCheck {
    fn loads(&self, uri: &str) -> bool;
}

impl<F: Fn(&str) -> bool> ImageCheck for F {
    fn loads(&self, uri: &str) -> bool {
        self(uri)
    }
}

const REMOTE_PREFIXES: &[&str] = &["http://", "https://", "data:"];

/// Checks images that live on the local file system.
///
/// Remote and inline (`data:`) URIs are assumed to load. `file://` URIs are used as-is; any
/// other URI is a path relative to `root`, so a site-absolute `/images/a.png` resolves to
/// `<root>/images/a.png`.
#[derive(Debug, Clone)]
pub struct LocalImages {
    root: PathBuf,
}

impl LocalImages {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, uri: &str) -> PathBuf {
        match uri.strip_prefix("file://") {
            Some(path) => PathBuf::from(path),
            None => self.root.join(Path::new(uri.trim_start_matches('/'))),
        }
    }
}

impl ImageCheck for LocalImages {
    fn loads(&self, uri: &str) -> bool {
        if REMOTE_PREFIXES.iter().any(|prefix| uri.starts_with(prefix)) {
            return true;
        }
        self.resolve(uri).is_file()
    }
}
