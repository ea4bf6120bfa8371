//! # vdt-core
//!
//! Core types shared across all Verdict crates:
//! - Run mode, comment state, objective status, and thread state enums
//! - The structured feedback model produced by the upstream analysis step
//! - Objective scoring (how a change measures against the quality target)
//! - The injected log sink used by report destinations

pub mod enums;
pub mod error;
pub mod feedback;
pub mod log;
pub mod objective;
