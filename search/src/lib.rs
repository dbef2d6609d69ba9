//! Statewalk: deterministic breadth-first search over caller-defined state spaces.
//!
//! The state space is generated lazily: the caller supplies the initial state,
//! a successor function, an optional per-node visitor, and an acceptance
//! predicate. The engine explores in strict FIFO order and returns the path of
//! states from the initial state to the first accepted one, plus a
//! serializable trace of the run.
//!
//! # Key types
//!
//! - [`StateSpace`]: trait for successor generation and goal detection
//! - [`StateObserver`]: optional per-node visitor hook
//! - [`SearchPolicy`]: node/depth budgets and pre-flight validation
//! - [`SearchResult`]: path (or not-found) plus the run trace
//! - [`SearchTrace`]: structural audit artifact with a canonical JSON form
//! - [`NodeArena`]: forward-only arena holding the predecessor-linked nodes
//!
//! [`StateSpace`]: contract::StateSpace
//! [`StateObserver`]: contract::StateObserver
//! [`SearchPolicy`]: policy::SearchPolicy
//! [`SearchResult`]: search::SearchResult
//! [`SearchTrace`]: trace::SearchTrace
//! [`NodeArena`]: node::NodeArena

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
pub mod trace;
