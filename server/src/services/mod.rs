//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own upstream calls and token logic so route handlers can
//! stay focused on protocol translation and auth plumbing.

pub mod booking;
pub mod cms;
pub mod oauth;
pub mod session;
