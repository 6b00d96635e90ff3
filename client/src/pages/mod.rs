//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own layout only and delegate behavior to `components`.

pub mod home;
