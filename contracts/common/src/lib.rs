//! Shared utilities for the MedLedger contract suite.
//!
//! This crate provides:
//! - [`CooldownState`] — the pure minimum-interval read throttle mirrored by
//!   the on-chain ledger contract.
//!
//! The crate is dependency-free and `no_std`-capable so the same logic can be
//! exercised from off-chain tooling and simulations.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod cooldown;

pub use cooldown::*;
