//! Run wiring: settings → session → client → paginator.
mod startup;

pub use startup::{run, RuntimeExit};
