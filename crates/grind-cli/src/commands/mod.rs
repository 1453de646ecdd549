pub mod links;
pub mod progress;
pub mod projection;
pub mod theme;

use std::path::{Path, PathBuf};

use grind_core::catalog::Catalog;
use grind_core::progress::Progress;
use grind_core::store::{LocalStore, KEY_COMPLETED_LINKS};

/// Resolved board and store for the stateful subcommands.
pub struct BoardContext {
    pub catalog: Catalog,
    pub store_path: PathBuf,
}

impl BoardContext {
    pub fn resolve(
        board: Option<&Path>,
        store: Option<&Path>,
    ) -> Result<BoardContext, Box<dyn std::error::Error>> {
        let catalog = match board {
            Some(path) => {
                log::debug!("loading board from {}", path.display());
                Catalog::from_json_file(path)?
            }
            None => Catalog::builtin(),
        };

        let store_path = store.map(Path::to_path_buf).unwrap_or_else(default_store_path);
        log::debug!("store path resolved to {}", store_path.display());

        Ok(BoardContext { catalog, store_path })
    }

    /// Open the store and read the completion set out of it.
    pub fn load(&self) -> Result<(LocalStore, Progress), Box<dyn std::error::Error>> {
        let store = LocalStore::open(&self.store_path)?;
        let ids: Vec<String> = store.get(KEY_COMPLETED_LINKS)?.unwrap_or_default();
        Ok((store, Progress::from_ids(ids)))
    }
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("grind")
        .join("store.json")
}
