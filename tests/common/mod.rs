use lobbyists::Layout;
use std::path::PathBuf;

pub fn crate_layout() -> Layout {
    Layout::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("lobbyists"))
}

pub fn schema_path() -> PathBuf {
    crate_layout().script_path("lobbyists.sql")
}
