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

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    complex::{Complex, ContractReject, IncidenceError},
    contraction::{
        params::{ContractionParams, ParamsError},
        report::ContractionReport,
    },
    numeric::Height,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractionError {
    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error("incidence structure corrupted during contraction: {0}")]
    Incidence(#[from] IncidenceError),
}

/// Tallies of one pass, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    pub contracted: usize,
    /// Skipped because the edge's window starts before the current floor.
    pub overlapping: usize,
    pub vanished: usize,
    pub boundary: usize,
    pub link_condition: usize,
    pub epsilon: usize,
}

impl PassStats {
    fn record(&mut self, reject: ContractReject) {
        match reject {
            ContractReject::Vanished => self.vanished += 1,
            ContractReject::Boundary => self.boundary += 1,
            ContractReject::LinkCondition => self.link_condition += 1,
            ContractReject::EpsilonBound => self.epsilon += 1,
        }
    }
}

/// Sweep order: ending time ascending, equal windows by value order.
pub fn sweep_order<T: Height>(complex: &Complex<T>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..complex.num_edges()).collect();
    order.sort_by(|&a, &b| complex.value_order(a, b));
    // Stable, so the value order survives among equal windows.
    order.sort_by(|&a, &b| complex.persistence_order(a, b));
    order
}

/// One greedy scan over `order`.
///
/// An edge is contracted only if its window starts strictly after the end of
/// the last window contracted in this pass, so the windows touched by one
/// pass are disjoint. Stops early once the contraction budget is spent.
pub fn sweep_pass<T: Height>(
    complex: &mut Complex<T>,
    order: &[usize],
    params: &ContractionParams<T>,
    total: &mut usize,
) -> Result<PassStats, ContractionError> {
    let mut stats = PassStats::default();
    let mut current = T::neg_infinity();

    for &e in order {
        if params.budget_exhausted(*total) {
            break;
        }
        if !(complex.starting_time(e) > current) {
            stats.overlapping += 1;
            continue;
        }
        match complex.check_contractible(e, params.epsilon) {
            Ok(()) => {
                current = complex.ending_time(e);
                complex.contract(e)?;
                *total += 1;
                stats.contracted += 1;
            }
            Err(reject) => stats.record(reject),
        }
    }
    Ok(stats)
}

/// Contracts edges of `complex` pass by pass until a pass contracts nothing,
/// the pass limit is reached, or the contraction budget is spent.
pub fn run<T: Height>(
    complex: &mut Complex<T>,
    params: &ContractionParams<T>,
) -> Result<ContractionReport, ContractionError> {
    params.validate()?;

    let started = Instant::now();
    let initial_simplices = complex.simplex_count();
    let order = sweep_order(complex);

    let mut contractions = 0usize;
    let mut passes = 0usize;
    let mut progressed = true;

    while progressed && !params.passes_exhausted(passes) && !params.budget_exhausted(contractions) {
        let before = contractions;
        passes += 1;
        let stats = sweep_pass(complex, &order, params, &mut contractions)?;
        progressed = contractions > before;
        debug!(
            pass = passes,
            contracted = stats.contracted,
            overlapping = stats.overlapping,
            vanished = stats.vanished,
            boundary = stats.boundary,
            link_condition = stats.link_condition,
            epsilon = stats.epsilon,
            "pass finished"
        );
    }

    let report = ContractionReport {
        elapsed: started.elapsed(),
        contractions,
        initial_simplices,
        passes,
    };
    info!(
        contractions = report.contractions,
        passes = report.passes,
        initial_simplices = report.initial_simplices,
        elapsed = ?report.elapsed,
        "contraction finished"
    );
    Ok(report)
}
