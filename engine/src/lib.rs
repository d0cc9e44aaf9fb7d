//! Inundation frequency engine.
//! Normal-distribution math, the flood-frequency estimator, and the
//! mean-sea-level sweep; no UI here.
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod inundation;
pub mod normal;
pub mod snapshots;
pub mod sweep;

/// Returns the engine version string from Cargo metadata.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
