//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls around the pure day and recents logic.
//! - Keep UI layers decoupled from storage details.

pub mod day_service;
pub mod recents_service;
