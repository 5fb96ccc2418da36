//! Terminal drivers wrapping the runtime loop.

pub mod cli;
