//! Library components of the address reconciler CLI.

pub mod logging;
pub mod pipeline;
