//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and wraps its content in an
//! access wrapper from `components::guard`.

pub mod admin;
pub mod home;
pub mod login;
