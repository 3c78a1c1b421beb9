//! # Fossil
//!
//! Collection queries for a dinosaur museum.
//!
//! A museum is three read-only collections: dinosaur records, a floor plan
//! of rooms, and a ticket price table. Fossil loads them once and answers
//! visitor questions against them:
//!
//! - **Temporal range** - which dinosaurs were alive a given number of
//!   millions of years ago
//! - **Relational lookup** - which room displays a dinosaur
//! - **Graph neighbours** - which rooms connect to a room
//! - **Pricing** - ticket totals and printed receipts
//!
//! # Quick Start
//!
//! ```ignore
//! use fossil::{Museum, TicketInfo};
//!
//! // Reads fossil.toml and the JSON fixtures it points at
//! let museum = Museum::load()?;
//!
//! let room = museum.room_name_by_dinosaur_name("Tyrannosaurus")?;
//! let neighbours = museum.connected_room_names("dpaCkVzRGm")?;
//!
//! let receipt = museum.purchase_tickets(&[
//!     TicketInfo::new("general", "adult").with_extra("movie"),
//! ])?;
//! println!("{receipt}");
//! ```
//!
//! Failed lookups come back as [`MuseumError::Query`]; the wrapped
//! [`QueryError`] displays the visitor-facing message.
//!
//! # Modules
//!
//! - **SDK Layer**: [`Museum`] - main API
//! - **Records**: re-exported from `fossil-types`
//! - **Queries**: re-exported from `fossil-query` for callers that hold
//!   their own collections

mod error;
mod museum;

// SDK Layer - Main API
pub use error::{MuseumError, Result};
pub use museum::Museum;

// Re-export record types
pub use fossil_types::{
    Cents, Dinosaur, DinosaurField, DinosaurId, FieldValue, Mya, PriceEntry, Room, RoomId,
    TicketData, TicketInfo,
};

// Re-export queries
pub use fossil_query::{DanglingConnection, LongestDinosaur, QueryError, ReceiptStyle};

// Re-export configuration
pub use fossil_config::{ConfigLoader, FixtureConfig, FossilConfig};
