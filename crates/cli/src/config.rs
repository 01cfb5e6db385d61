use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_DIR: &str = "trainer";
const DATA_FILE: &str = "exercises.json";

/// Resolves the location of the exercise data.
///
/// An explicit path (flag or `TRAINER_DATA`) wins over the platform data
/// directory.
pub fn data_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve(explicit, dirs::data_dir())
}

fn resolve(explicit: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    let data_dir = data_dir.context("Could not determine data directory")?;
    Ok(data_dir.join(APP_DIR).join(DATA_FILE))
}
