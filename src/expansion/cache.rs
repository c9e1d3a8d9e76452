//! Per-order memoization of expansion plans.
//!
//! Plans are built on the first request for an order and kept for the lifetime of the
//! cache; nothing is ever evicted. The process-wide instance behind
//! [`crate::determinant`] lives in a `OnceLock` and is never torn down.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::DetOptions;
use crate::core::traits::{MatShape, MatrixGet, Scalar};
use crate::error::MatrixError;
use crate::expansion::eval;
use crate::expansion::plan::Expansion;

/// Acquire read lock, recovering from poison if necessary.
fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Acquire write lock, recovering from poison if necessary.
fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

static GLOBAL_CACHE: OnceLock<PlanCache> = OnceLock::new();

/// Memoized expansion plans keyed by matrix order.
///
/// A miss builds the plan while holding the write lock, so concurrent first requests for
/// the same order build it once and readers only ever see complete plans.
#[derive(Debug, Default)]
pub struct PlanCache {
    plans: RwLock<HashMap<usize, Arc<Expansion>>>,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache.
    pub fn global() -> &'static PlanCache {
        GLOBAL_CACHE.get_or_init(PlanCache::new)
    }

    /// Returns the plan for `order`, building and storing it on first use.
    ///
    /// # Errors
    /// * `InvalidShape` for order 0
    /// * `OrderTooLarge` if `order > opts.max_order`
    pub fn get_plan(
        &self,
        order: usize,
        opts: &DetOptions,
    ) -> Result<Arc<Expansion>, MatrixError> {
        if order == 0 {
            return Err(MatrixError::InvalidShape { nrows: 0, ncols: 0 });
        }
        if order > opts.max_order {
            return Err(MatrixError::OrderTooLarge {
                order,
                max: opts.max_order,
            });
        }

        {
            let read_guard = read_lock(&self.plans);
            if let Some(plan) = read_guard.get(&order) {
                log::trace!("expansion plan cache hit for order {order}");
                return Ok(Arc::clone(plan));
            }
        }

        let mut write_guard = write_lock(&self.plans);
        // Another caller may have built it between the two locks.
        if let Some(plan) = write_guard.get(&order) {
            return Ok(Arc::clone(plan));
        }
        let plan = Arc::new(Expansion::build(order));
        log::debug!(
            "built expansion plan for order {order} ({} nodes)",
            plan.node_count()
        );
        write_guard.insert(order, Arc::clone(&plan));
        Ok(plan)
    }

    /// Determinant of `a` using this cache's plans.
    ///
    /// # Errors
    /// * `InvalidShape` if `a` is not square or is empty
    /// * `OrderTooLarge` if its order exceeds `opts.max_order`
    pub fn determinant<T, M>(&self, a: &M, opts: &DetOptions) -> Result<T, MatrixError>
    where
        T: Scalar,
        M: MatShape + MatrixGet<T> + Sync,
    {
        let (nrows, ncols) = a.shape();
        if nrows != ncols || nrows == 0 {
            return Err(MatrixError::InvalidShape { nrows, ncols });
        }
        let plan = self.get_plan(nrows, opts)?;
        #[cfg(feature = "rayon")]
        {
            if nrows >= opts.parallel_threshold {
                return eval::evaluate_parallel(&plan, a);
            }
        }
        eval::evaluate(&plan, a)
    }

    /// Number of orders with a stored plan.
    pub fn len(&self) -> usize {
        read_lock(&self.plans).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, order: usize) -> bool {
        read_lock(&self.plans).contains_key(&order)
    }
}
