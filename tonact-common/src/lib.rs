//! Shared domain models for the tonact system.
//!
//! This crate contains the types exchanged between the upstream trace
//! classifier and the action normalizer: event nodes, classified trace
//! blocks with their typed per-operation payloads, and the canonical
//! [`models::action::Action`] record handed to the persistence layer.

pub mod models;
