use dirs::home_dir;
use std::path::PathBuf;

use crate::{LobbyistsError, LobbyistsResult};

pub fn expand_tilde(path: PathBuf) -> LobbyistsResult<PathBuf> {
    if let Ok(stripped) = path.strip_prefix("~") {
        return match home_dir() {
            Some(home) => Ok(home.join(stripped)),
            None => Err(LobbyistsError::Config(
                "Could not determine home directory".to_string(),
            )),
        };
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path_untouched() {
        let path = PathBuf::from("lobbyists");
        assert_eq!(expand_tilde(path.clone()).unwrap(), path);
    }

    #[test]
    fn tilde_inside_path_untouched() {
        let path = PathBuf::from("data/~backup");
        assert_eq!(expand_tilde(path.clone()).unwrap(), path);
    }

    #[test]
    fn leading_tilde_expands() {
        if let Some(home) = home_dir() {
            let expanded = expand_tilde(PathBuf::from("~/src/lobbyists")).unwrap();
            assert_eq!(expanded, home.join("src").join("lobbyists"));
        }
    }
}
