//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and async orchestration and delegates
//! rendering details to `components`. Every page except sign-in installs the
//! signed-out redirect.

pub mod item_edit;
pub mod item_new;
pub mod login;
pub mod penalties;
pub mod profile;
pub mod rental_pay;
