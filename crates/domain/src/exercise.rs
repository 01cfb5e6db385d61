use std::slice::Iter;

use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
pub struct Exercise(String);

impl Exercise {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.0
    }
}

/// Ordered collection of exercises without duplicates.
///
/// Every mutation is validated before the collection is touched, so a failed
/// call leaves the set as it was.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseSet {
    exercises: Vec<Exercise>,
}

impl ExerciseSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    #[must_use]
    pub fn contains(&self, exercise: &Exercise) -> bool {
        self.exercises.contains(exercise)
    }

    pub fn iter(&self) -> Iter<'_, Exercise> {
        self.exercises.iter()
    }

    pub fn append(&mut self, exercise: Exercise) -> Result<(), ExerciseSetError> {
        if self.contains(&exercise) {
            return Err(ExerciseSetError::Duplicate(exercise));
        }
        self.exercises.push(exercise);
        Ok(())
    }

    pub fn remove(&mut self, exercise: &Exercise) -> Result<Exercise, ExerciseSetError> {
        let position = self
            .position(exercise)
            .ok_or_else(|| ExerciseSetError::NotFound(exercise.clone()))?;
        Ok(self.exercises.remove(position))
    }

    /// Replaces `old` by `new` at the same position.
    ///
    /// Unlike [`ExerciseSet::append`], `new` is not checked against the
    /// other elements of the set.
    pub fn update(&mut self, old: &Exercise, new: Exercise) -> Result<Exercise, ExerciseSetError> {
        let position = self
            .position(old)
            .ok_or_else(|| ExerciseSetError::UpdateTargetMissing(old.clone()))?;
        Ok(std::mem::replace(&mut self.exercises[position], new))
    }

    /// Returns the exercise at `index`, where negative indices count from the end.
    ///
    /// Valid indices range from `-len` to `len - 1`.
    pub fn get(&self, index: isize) -> Result<&Exercise, ExerciseSetError> {
        let len = self.exercises.len();
        let position = match usize::try_from(index) {
            Ok(position) if position < len => position,
            Ok(_) => return Err(ExerciseSetError::IndexOutOfRange(index)),
            Err(_) => len
                .checked_sub(index.unsigned_abs())
                .ok_or(ExerciseSetError::IndexOutOfRange(index))?,
        };
        Ok(&self.exercises[position])
    }

    fn position(&self, exercise: &Exercise) -> Option<usize> {
        self.exercises.iter().position(|e| e == exercise)
    }

    pub(crate) fn extend_unchecked(&mut self, exercises: Vec<Exercise>) {
        self.exercises.extend(exercises);
    }
}

impl TryFrom<Vec<Exercise>> for ExerciseSet {
    type Error = ExerciseSetError;

    fn try_from(value: Vec<Exercise>) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        for exercise in value {
            set.append(exercise)?;
        }
        Ok(set)
    }
}

impl<'a> IntoIterator for &'a ExerciseSet {
    type Item = &'a Exercise;
    type IntoIter = Iter<'a, Exercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ExerciseSet {
    type Item = Exercise;
    type IntoIter = std::vec::IntoIter<Exercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.exercises.into_iter()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExerciseSetError {
    #[error("Cannot add duplicate exercise. Exercise {0}")]
    Duplicate(Exercise),
    #[error("Exercise not in set. Exercise: {0}")]
    NotFound(Exercise),
    #[error("{0} not in exercises")]
    UpdateTargetMissing(Exercise),
    #[error("Index out of range. Index {0}")]
    IndexOutOfRange(isize),
}
