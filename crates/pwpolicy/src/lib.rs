//! Top-level facade crate for pwPolicy.
//!
//! Re-exports the codec crate and the console library so users can depend on
//! a single crate.

pub mod core {
    pub use pwpolicy_core::*;
}

pub mod console {
    pub use pwpolicy_console::*;
}
