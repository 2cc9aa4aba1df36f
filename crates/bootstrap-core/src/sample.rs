//! Immutable observation samples
//!
//! A [`Sample`] is the original data a bootstrap draws from. It is validated
//! once at construction (non-empty) and never mutated afterwards, so every
//! resampling routine can rely on `len() >= 1`.

use crate::{Error, Result};
use std::ops::Deref;
use std::sync::Arc;

/// An ordered, immutable, non-empty collection of observations
///
/// Observations can be numeric (`f64`, integers) or categorical (`&str`,
/// `String`, `bool`, enums). Cloning a sample is cheap: the observations are
/// shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T> {
    observations: Arc<[T]>,
}

impl<T> Sample<T> {
    /// Create a sample from owned observations
    ///
    /// Fails with [`Error::InvalidInput`] when `observations` is empty.
    pub fn new(observations: Vec<T>) -> Result<Self> {
        if observations.is_empty() {
            return Err(Error::empty_input("Sample"));
        }
        Ok(Self {
            observations: observations.into(),
        })
    }

    /// Number of observations (`n`)
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the sample has no observations
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Observations in their original order
    pub fn as_slice(&self) -> &[T] {
        &self.observations
    }

    /// Iterate over the observations
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.observations.iter()
    }
}

impl<T: Clone> Sample<T> {
    /// Create a sample by copying a slice
    pub fn from_slice(observations: &[T]) -> Result<Self> {
        Self::new(observations.to_vec())
    }
}

impl<T: PartialEq> Sample<T> {
    /// Number of observations equal to `category`
    pub fn count_of(&self, category: &T) -> usize {
        self.observations.iter().filter(|x| *x == category).count()
    }
}

impl<T> Deref for Sample<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.observations
    }
}

impl<T> AsRef<[T]> for Sample<T> {
    fn as_ref(&self) -> &[T] {
        &self.observations
    }
}

impl<T> TryFrom<Vec<T>> for Sample<T> {
    type Error = Error;

    fn try_from(observations: Vec<T>) -> Result<Self> {
        Self::new(observations)
    }
}

impl<'a, T> IntoIterator for &'a Sample<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
