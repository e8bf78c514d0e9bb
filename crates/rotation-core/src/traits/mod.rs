//! Seams between the rotation crates.

pub mod rotation_policy;

pub use rotation_policy::IRotationPolicy;
