//! # ATM Machine
//!
//! Application layer of the ATM withdrawal engine.
//!
//! ## Architecture
//!
//! - `machine` - The withdrawal orchestrator (validation, bank calls, result assembly)
//! - `dispense` - The greedy banknote selection algorithm
//!
//! The machine is generic over `B: Bank`, allowing different bank
//! collaborators (network client, simulation ledger, test double) to be
//! injected.

pub mod dispense;
pub mod machine;


pub use machine::AtMachine;
