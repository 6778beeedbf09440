//! Room search over an in-memory catalog.
//!
//! [`query`] holds the engine: suggestions, exact lookup, price/tag filtering
//! and display ordering. [`sources`] supplies catalogs and [`session`] keeps
//! the interactive state of a search screen.

pub mod models;
pub mod query;
pub mod session;
pub mod sources;

pub use models::{Catalog, Room, RoomStatus};
pub use session::SearchSession;
