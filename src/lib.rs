#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;
#[macro_use]
mod utils;


pub mod structs;
pub mod subset;

pub use structs::*;
pub use utils::{CheckedIterator, QueueError, Result};

/// Init the logger. Binaries call this once at startup;
/// the containers work without it.
#[inline]
pub fn init() {
    utils::logger::init();

    info!("yyqueue Version: {} Initialized.", env!("CARGO_PKG_VERSION"));
}
