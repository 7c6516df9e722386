use log::debug;
use rusqlite::Connection;
use std::path::PathBuf;

use crate::fixtures::Layout;
use crate::{LobbyistsError, LobbyistsResult};

type Result<T> = LobbyistsResult<T>;

/// Scratch SQLite database for tests that need a schema applied.
pub struct Db {
    path: PathBuf,
}

impl Db {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn open(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Runs every statement of `script` in one transaction. Nothing is kept if
    /// any statement fails.
    pub fn execute_script(&self, script: &str) -> Result<()> {
        let mut conn = self.open()?;
        let transaction = conn.transaction()?;

        transaction.execute_batch(script)?;

        transaction.commit()?;

        Ok(())
    }

    pub fn load_script(&self, layout: &Layout, basename: &str) -> Result<()> {
        let script = layout.sqlscript(basename)?;
        debug!(
            "applying {} ({} bytes) to {}",
            basename,
            script.len(),
            self.path.display()
        );
        self.execute_script(&script)
    }

    pub fn table_names(&self) -> Result<Vec<String>> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "select name from sqlite_master
            where type = 'table' and name not like 'sqlite_%'
            order by name",
        )?;

        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;

        Ok(names)
    }

    pub fn drop_table(&self, name: &str) -> Result<()> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(LobbyistsError::Db(format!(
                "Refusing to drop table with name '{}'",
                name
            )));
        }

        let mut conn = self.open()?;
        let transaction = conn.transaction()?;

        transaction.execute(&format!("drop table if exists {}", name), ())?;

        transaction.commit()?;

        Ok(())
    }
}
