//! Annealing-style tour optimization.
//!
//! A single-solution trajectory search: each trial perturbs the
//! working route with a batch of random pairwise swaps, rescores the
//! closed cycle, and keeps or exactly undoes the batch under an
//! acceptance probability that decays each phase. Perturbation
//! strength decays alongside it, floored at one swap per trial.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod shuffle;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner};
pub use shuffle::Shuffler;
