// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::numeric::Height;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("epsilon must be a non-negative number, got {0}")]
    NegativeEpsilon(String),
}

/// Run parameters of the sweep.
///
/// The distortion bound of a run is `epsilon` times the passes it executes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractionParams<T> {
    /// Largest filtration shift allowed per contraction.
    pub epsilon: T,
    /// `None` runs until a pass contracts nothing.
    pub max_passes: Option<usize>,
    /// `None` imposes no budget.
    pub max_contractions: Option<usize>,
}

impl<T: Height> Default for ContractionParams<T> {
    fn default() -> Self {
        Self {
            epsilon: T::zero(),
            max_passes: None,
            max_contractions: None,
        }
    }
}

impl<T: Height> ContractionParams<T> {
    pub fn new(epsilon: T) -> Self {
        Self {
            epsilon,
            ..Self::default()
        }
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    pub fn with_max_contractions(mut self, max_contractions: usize) -> Self {
        self.max_contractions = Some(max_contractions);
        self
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.epsilon.is_nan() || self.epsilon < T::zero() {
            return Err(ParamsError::NegativeEpsilon(self.epsilon.to_string()));
        }
        Ok(())
    }

    pub(crate) fn passes_exhausted(&self, passes: usize) -> bool {
        self.max_passes.is_some_and(|m| passes >= m)
    }

    pub(crate) fn budget_exhausted(&self, contractions: usize) -> bool {
        self.max_contractions.is_some_and(|m| contractions >= m)
    }
}
