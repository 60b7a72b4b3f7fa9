//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` carries every REST call the SPA makes; wire shapes live in the
//! shared `schemas` crate so the server parses what we send.

pub mod api;
