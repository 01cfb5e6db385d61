use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{Exercise, ExerciseSet, ExerciseSetError};

impl ExerciseSet {
    /// Appends one exercise per record of a delimited text file, taking the
    /// first field of each record as the description.
    ///
    /// The whole batch is checked before the set is modified. If any record
    /// is unreadable or duplicates an exercise of the set or an earlier
    /// record, nothing is added.
    pub fn add_exercises_from_csv(&mut self, path: &Path) -> Result<usize, ImportError> {
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ImportError::SourceNotFound(path.to_path_buf()),
            _ => ImportError::Io(err),
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut batch: Vec<Exercise> = Vec::new();
        for record in reader.records() {
            let exercise = Exercise::new(record?.get(0).unwrap_or_default());
            if self.contains(&exercise) || batch.contains(&exercise) {
                return Err(ExerciseSetError::Duplicate(exercise).into());
            }
            batch.push(exercise);
        }

        let count = batch.len();
        self.extend_unchecked(batch);
        debug!("imported {count} exercises from {}", path.display());
        Ok(count)
    }

    pub fn to_csv(&self, path: &Path) -> Result<(), ExportError> {
        if !path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"))
        {
            return Err(ExportError::NotCsv(path.to_path_buf()));
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        for exercise in self {
            writer.write_record([exercise.description()])?;
        }
        writer.flush()?;
        debug!("exported {} exercises to {}", self.len(), path.display());
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ImportError {
    #[error("no such file or directory: '{}'", .0.display())]
    SourceNotFound(PathBuf),
    #[error(transparent)]
    Io(io::Error),
    #[error(transparent)]
    Read(#[from] csv::Error),
    #[error(transparent)]
    Rejected(#[from] ExerciseSetError),
}

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("File '{}' provided is not a csv", .0.display())]
    NotCsv(PathBuf),
    #[error(transparent)]
    Write(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
