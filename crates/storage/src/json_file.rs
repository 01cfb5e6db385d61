#![allow(clippy::missing_errors_doc)]

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use trainer_domain as domain;

/// Exercise repository backed by a single JSON file.
///
/// The file is read completely on every read. Writes go to a sibling `.tmp`
/// file which then replaces the data file, so an interrupted write never
/// leaves a partial snapshot behind.
#[derive(Clone, Debug)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a file containing an empty exercise set.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, CreateError> {
        let path = path.into();

        if path.exists() {
            return Err(CreateError::AlreadyExists(path));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = Self { path };
        domain::ExerciseRepository::write_exercises(&file, &domain::ExerciseSet::new())?;
        debug!("created {}", file.path.display());
        Ok(file)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut path = self.path.clone().into_os_string();
        path.push(".tmp");
        PathBuf::from(path)
    }
}

impl domain::ExerciseRepository for JsonFile {
    fn read_exercises(&self) -> Result<domain::ExerciseSet, domain::StorageError> {
        if !self.path.is_file() {
            return Err(domain::StorageError::NoConnection);
        }

        let content =
            fs::read_to_string(&self.path).map_err(|err| domain::StorageError::Other(err.into()))?;
        let snapshot: Snapshot = serde_json::from_str(&content)
            .map_err(|err| domain::StorageError::Other(err.into()))?;
        let exercises = domain::ExerciseSet::try_from(snapshot)
            .map_err(|err| domain::StorageError::Other(err.into()))?;

        debug!(
            "read {} exercises from {}",
            exercises.len(),
            self.path.display()
        );
        Ok(exercises)
    }

    fn write_exercises(&self, exercises: &domain::ExerciseSet) -> Result<(), domain::StorageError> {
        let content = serde_json::to_string_pretty(&Snapshot::from(exercises))
            .map_err(|err| domain::StorageError::Other(err.into()))?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, content).map_err(|err| domain::StorageError::Other(err.into()))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|err| domain::StorageError::Other(err.into()))?;

        debug!(
            "wrote {} exercises to {}",
            exercises.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("File '{}' already exists", .0.display())]
    AlreadyExists(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Storage(#[from] domain::StorageError),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    exercises: Vec<Exercise>,
}

impl From<&domain::ExerciseSet> for Snapshot {
    fn from(value: &domain::ExerciseSet) -> Self {
        Self {
            exercises: value.iter().map(Exercise::from).collect(),
        }
    }
}

impl TryFrom<Snapshot> for domain::ExerciseSet {
    type Error = domain::ExerciseSetError;

    fn try_from(value: Snapshot) -> Result<Self, Self::Error> {
        domain::ExerciseSet::try_from(
            value
                .exercises
                .into_iter()
                .map(domain::Exercise::from)
                .collect::<Vec<_>>(),
        )
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
struct Exercise {
    description: String,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            description: value.description().to_string(),
        }
    }
}

impl From<Exercise> for domain::Exercise {
    fn from(value: Exercise) -> Self {
        Self::new(value.description)
    }
}
