//! Decode targets for the two carsales endpoints.
//!
//! Values are built once by their `Decode` impl and never mutated. Wire key
//! names are the constants at the top of each module; encode and decode share
//! them.

pub mod details;
pub mod list;

pub use details::{CarDetails, Overview, SaleStatus};
pub use list::{ListItem, ListResult};
