use log::{debug, trace};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::LobbyistsResult;

pub const DEFAULT_ROOT: &str = "lobbyists";

/// Where fixture files and SQL scripts live.
///
/// Scripts sit directly under `root`; fixtures under `root/tests/data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("tests").join("data")
    }

    /// Path of a fixture file. No filesystem access.
    pub fn testpath(&self, basename: &str) -> PathBuf {
        let path = self.data_dir().join(basename);
        trace!("fixture path for '{}': {}", basename, path.display());
        path
    }

    pub fn script_path(&self, basename: &str) -> PathBuf {
        self.root.join(basename)
    }

    /// Reads a script's full text. The file handle is closed before returning,
    /// on success and on error.
    pub fn sqlscript(&self, basename: &str) -> LobbyistsResult<String> {
        let path = self.script_path(basename);
        debug!("reading sql script {}", path.display());

        let mut file = File::open(&path)?;
        let mut script = String::new();
        file.read_to_string(&mut script)?;

        Ok(script)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

/// `lobbyists/tests/data/<basename>`
pub fn testpath(basename: &str) -> PathBuf {
    Layout::default().testpath(basename)
}

/// Full text of `lobbyists/<basename>`.
pub fn sqlscript(basename: &str) -> LobbyistsResult<String> {
    Layout::default().sqlscript(basename)
}
