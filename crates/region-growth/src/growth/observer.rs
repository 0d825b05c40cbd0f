//! Hooks into a running growth loop.

use super::engine::Placement;
use super::region::RegionStats;
use crate::grid::Canvas;

/// Receives progress from [`GrowthEngine::run_with`].
///
/// Every method has an empty default, so an observer only implements what it
/// needs. Observers see the canvas read-only and cannot alter the run.
///
/// [`GrowthEngine::run_with`]: super::GrowthEngine::run_with
pub trait GrowthObserver {
    /// Called before each iteration with the current set sizes.
    fn before_step(&mut self, _stats: &RegionStats) {}

    /// Called after each placement with the canvas including it.
    fn after_step(&mut self, _placement: &Placement, _canvas: &Canvas) {}

    /// Called once when the Frontier is empty.
    fn finished(&mut self, _canvas: &Canvas) {}
}

impl GrowthObserver for () {}

impl<T: GrowthObserver + ?Sized> GrowthObserver for &mut T {
    fn before_step(&mut self, stats: &RegionStats) {
        (**self).before_step(stats);
    }

    fn after_step(&mut self, placement: &Placement, canvas: &Canvas) {
        (**self).after_step(placement, canvas);
    }

    fn finished(&mut self, canvas: &Canvas) {
        (**self).finished(canvas);
    }
}

impl<A: GrowthObserver, B: GrowthObserver> GrowthObserver for (A, B) {
    fn before_step(&mut self, stats: &RegionStats) {
        self.0.before_step(stats);
        self.1.before_step(stats);
    }

    fn after_step(&mut self, placement: &Placement, canvas: &Canvas) {
        self.0.after_step(placement, canvas);
        self.1.after_step(placement, canvas);
    }

    fn finished(&mut self, canvas: &Canvas) {
        self.0.finished(canvas);
        self.1.finished(canvas);
    }
}

impl<T: GrowthObserver> GrowthObserver for Option<T> {
    fn before_step(&mut self, stats: &RegionStats) {
        if let Some(inner) = self {
            inner.before_step(stats);
        }
    }

    fn after_step(&mut self, placement: &Placement, canvas: &Canvas) {
        if let Some(inner) = self {
            inner.after_step(placement, canvas);
        }
    }

    fn finished(&mut self, canvas: &Canvas) {
        if let Some(inner) = self {
            inner.finished(canvas);
        }
    }
}
