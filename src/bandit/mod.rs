//! UCB1 multi-armed bandit controller for mutation rates.
//!
//! Each arm is one candidate mutation rate. Every round the driving loop
//! asks [`UcbAgent::select_action`] for an arm, applies that rate to the
//! evolutionary engine, and reports back the observed fitness improvement
//! via [`UcbAgent::update_action_reward`]. Rewards may be negative; they
//! legitimately lower an arm's average score in future selections.
//!
//! Arms live in a fixed, stable enumeration order and ties resolve to the
//! first arm with the maximal score, which keeps runs reproducible under
//! a fixed seed.
//!
//! # References
//!
//! - Auer, Cesa-Bianchi & Fischer (2002), *Finite-time Analysis of the
//!   Multiarmed Bandit Problem* (UCB1)

mod agent;
mod config;

pub use agent::{ArmLog, UcbAgent};
pub use config::BanditConfig;
