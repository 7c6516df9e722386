use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fixtures::Layout;
use crate::utils::expand_tilde;
use crate::LobbyistsResult;

/// On-disk form, e.g.
///
/// ```toml
/// root = "~/src/lobbyists/lobbyists"
/// ```
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub root: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> LobbyistsResult<Layout> {
        debug!("loading config {}", path.display());
        let config_string = fs::read_to_string(path)?;
        Self::parse(&config_string)
    }

    pub fn parse(s: &str) -> LobbyistsResult<Layout> {
        let config: Config = toml::from_str(s)?;
        config.resolve()
    }

    pub fn resolve(self) -> LobbyistsResult<Layout> {
        match self.root {
            Some(root) => Ok(Layout::new(expand_tilde(PathBuf::from(root))?)),
            None => Ok(Layout::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LobbyistsError;

    #[test]
    fn empty_config_is_default_layout() {
        assert_eq!(Config::parse("").unwrap(), Layout::default());
    }

    #[test]
    fn explicit_root() {
        let layout = Config::parse(r#"root = "fixtures/lobbyists""#).unwrap();
        assert_eq!(layout.root(), Path::new("fixtures/lobbyists"));
    }

    #[test]
    fn unknown_key_is_toml_error() {
        let err = Config::parse(r#"rooot = "x""#).unwrap_err();
        assert!(matches!(err, LobbyistsError::Toml(_)));
    }

    #[test]
    fn wrong_type_is_toml_error() {
        assert!(matches!(
            Config::parse("root = 3").unwrap_err(),
            LobbyistsError::Toml(_)
        ));
    }
}
