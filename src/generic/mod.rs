//! Generic structures, not specific to the adapter.

pub mod luby;

mod minimal_pcg;
pub use minimal_pcg::MinimalPCG32;
