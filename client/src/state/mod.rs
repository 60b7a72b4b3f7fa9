//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session signal is the only cross-page state; everything else is
//! page-local. Pages receive it as a prop rather than reaching into context.

pub mod session;
