//! Shared test utilities for the skill-mirror workspace.
//!
//! This crate provides standardised fixtures so each crate's test suite can
//! build a project tree with a canonical source, mirrors, stray links and
//! user-owned directories in a few lines. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`project`]: [`project::TestProject`] builder and tree snapshots

pub mod project;
