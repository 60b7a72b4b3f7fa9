//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose these around their content; the access wrappers in `guard`
//! decide whether that content renders at all.

pub mod guard;
