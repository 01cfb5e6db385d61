#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod trainer;
mod transfer;

pub use error::StorageError;
pub use exercise::{Exercise, ExerciseSet, ExerciseSetError};
pub use trainer::{Trainer, TrainerError};
pub use transfer::{ExportError, ImportError};

/// Backing store holding a snapshot of the whole exercise collection.
///
/// Reads and writes always cover the complete set. Implementations must
/// preserve the order of the exercises.
pub trait ExerciseRepository {
    fn read_exercises(&self) -> Result<ExerciseSet, StorageError>;
    fn write_exercises(&self, exercises: &ExerciseSet) -> Result<(), StorageError>;
}
