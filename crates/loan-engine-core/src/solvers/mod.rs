//! Solvers recovering one unknown loan parameter from the others.
//!
//! Each unknown gets its own entry point because each uses a different
//! numerical method: bisection for the rate, closed-form inversion for the
//! principal, direct simulation for the tenure. A single dynamically
//! dispatched "solve" would obscure which method actually ran.

pub mod principal;
pub mod rate;
pub mod tenure;

/// Payment periods per year when the caller does not say otherwise (monthly).
pub(crate) fn default_periods_per_year() -> u32 {
    12
}
