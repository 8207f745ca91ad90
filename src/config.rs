use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::args::Common;

const DB_FILE_NAME: &str = "budget_planner.db";

/// Settings resolved from flags, environment and platform defaults.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
}

impl Config {
    /// `--db` (or `BUDGET_PLANNER_DB`) wins; otherwise the database lives in
    /// the platform data directory. Nothing is created on disk here.
    pub(crate) fn from_args(common: &Common) -> Result<Self> {
        let db_path = match &common.db {
            Some(path) => path.clone(),
            None => default_db_path()?,
        };
        Ok(Self { db_path })
    }

    /// Create the directory the database file goes in.
    pub(crate) fn ensure_data_dir(&self) -> Result<()> {
        let Some(dir) = self.db_path.parent().filter(|d| !d.as_os_str().is_empty()) else {
            return Ok(());
        };
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))
    }
}

fn default_db_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "budget-planner", "BudgetPlanner")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().join(DB_FILE_NAME))
}
