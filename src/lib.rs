//! Nash equilibria of two-player bimatrix games.
//!
//! The [`game`] module holds the Lemke-Howson pivoting engine and the
//! enumeration that restarts it from every label. The [`solver`] module turns
//! text input into a [`BimatrixGame`] and renders the equilibria it finds.
pub mod game;
pub mod solver;

pub use game::*;
