//! Input and output around the equilibrium search: game descriptions in text
//! form, solver configuration and rendering of the equilibria found.
mod config;
pub use config::*;

mod nfg;
pub use nfg::*;

mod report;
pub use report::*;

mod solver_error;
pub use solver_error::SolverError;
