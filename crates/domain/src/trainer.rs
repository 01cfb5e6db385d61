use std::path::Path;

use log::{debug, error, info};
use rand::Rng;

use crate::{
    Exercise, ExerciseRepository, ExerciseSet, ExerciseSetError, ExportError, ImportError,
    StorageError,
};

/// Keeps an exercise set in memory and writes it back to the repository after
/// every successful mutation.
///
/// A failed write is returned to the caller, but the in-memory change is kept.
pub struct Trainer<R> {
    repository: R,
    exercises: ExerciseSet,
}

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: literal) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                StorageError::NoConnection => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                StorageError::Other(_) => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> Trainer<R> {
    pub fn load(repository: R) -> Result<Self, StorageError> {
        let exercises = log_on_error!(repository.read_exercises(), "load", "exercises")?;
        debug!("loaded {} exercises", exercises.len());
        Ok(Self {
            repository,
            exercises,
        })
    }

    #[must_use]
    pub fn get_all_exercises(&self) -> ExerciseSet {
        self.exercises.clone()
    }

    pub fn get_new_list(&self, n: usize) -> Result<Vec<Exercise>, TrainerError> {
        self.get_new_list_with_rng(n, &mut rand::rng())
    }

    /// Draws `n` distinct exercises uniformly at random, in pick order.
    pub fn get_new_list_with_rng<G: Rng>(
        &self,
        n: usize,
        rng: &mut G,
    ) -> Result<Vec<Exercise>, TrainerError> {
        let available = self.exercises.len();
        if n > available {
            return Err(TrainerError::CountExceedsAvailable {
                requested: n,
                available,
            });
        }

        let mut remaining = self.exercises.iter().collect::<Vec<_>>();
        Ok((0..n)
            .map(|_| {
                let index = rng.random_range(0..remaining.len());
                remaining.remove(index).clone()
            })
            .collect())
    }

    pub fn add_exercise(&mut self, exercise: Exercise) -> Result<(), TrainerError> {
        if self.exercises.contains(&exercise) {
            return Err(TrainerError::AlreadyExists(exercise));
        }
        info!("adding exercise \"{exercise}\"");
        self.exercises.append(exercise)?;
        self.save()
    }

    pub fn remove_exercise(&mut self, exercise: &Exercise) -> Result<Exercise, TrainerError> {
        if !self.exercises.contains(exercise) {
            return Err(TrainerError::DoesNotExist(exercise.clone()));
        }
        let removed = self.exercises.remove(exercise)?;
        info!("removed exercise \"{removed}\"");
        self.save()?;
        Ok(removed)
    }

    pub fn update_exercise(
        &mut self,
        old: &Exercise,
        new: Exercise,
    ) -> Result<Exercise, TrainerError> {
        let replaced = self.exercises.update(old, new)?;
        info!("updated exercise \"{replaced}\"");
        self.save()?;
        Ok(replaced)
    }

    pub fn add_exercises_from_csv(&mut self, path: &Path) -> Result<usize, TrainerError> {
        let count = self.exercises.add_exercises_from_csv(path)?;
        info!("imported {count} exercises");
        self.save()?;
        Ok(count)
    }

    pub fn export_exercises_to_csv(&self, path: &Path) -> Result<(), TrainerError> {
        Ok(self.exercises.to_csv(path)?)
    }

    fn save(&self) -> Result<(), TrainerError> {
        log_on_error!(
            self.repository.write_exercises(&self.exercises),
            "save",
            "exercises"
        )?;
        debug!("saved {} exercises", self.exercises.len());
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum TrainerError {
    #[error("Exercise already exists. Exercise: {0}")]
    AlreadyExists(Exercise),
    #[error("Exercise does not exist. Cannot remove exercise. Exercise: {0}")]
    DoesNotExist(Exercise),
    #[error("{requested} exercises requested but only {available} available")]
    CountExceedsAvailable { requested: usize, available: usize },
    #[error(transparent)]
    Set(#[from] ExerciseSetError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
