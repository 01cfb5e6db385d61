#![warn(clippy::pedantic)]

pub mod json_file;

pub use json_file::{CreateError, JsonFile};

#[cfg(test)]
mod tests;
