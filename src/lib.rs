//! Stampboard runner support: config loading, logging setup, dependency
//! wiring and the monitor loop used by the `stampboard` binary.

pub mod bootstrap;
