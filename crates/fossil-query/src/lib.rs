//! # fossil-query: Collection queries for `Fossil`
//!
//! Pure lookup, aggregation and formatting functions over the museum's
//! read-only collections. Every function takes the full collection it needs
//! and returns synchronously; nothing is cached or mutated between calls.
//!
//! ## Queries
//!
//! - **Temporal range**: [`dinosaurs_alive_at`], [`dinosaurs_alive_mya`]
//! - **Catalogue facts**: [`longest_dinosaur`], [`dinosaur_description`]
//! - **Relational lookup**: [`room_by_dinosaur_name`]
//! - **Graph neighbours**: [`connected_room_names`], [`dangling_connections`]
//! - **Pricing**: [`calculate_ticket_price`], [`purchase_tickets`]
//! - **Visitor questions**: [`meat_eaters`], [`herbivores_in_period`],
//!   [`rooms_without_dinosaurs`], [`required_ticket_permissions`], ...
//!
//! ## Errors
//!
//! Failed lookups return a [`QueryError`] naming the stage that failed.
//! Its `Display` output is the visitor-facing message:
//!
//! ```
//! use fossil_query::{dinosaur_description, QueryError};
//!
//! let err = dinosaur_description(&[], "incorrect-id").unwrap_err();
//! assert!(matches!(err, QueryError::DinosaurIdNotFound(_)));
//! assert_eq!(
//!     err.to_string(),
//!     "A dinosaur with an ID of 'incorrect-id' cannot be found."
//! );
//! ```
//!
//! ## Usage
//!
//! ```
//! use fossil_query::calculate_ticket_price;
//! use fossil_types::{TicketData, TicketInfo};
//!
//! let tickets: TicketData = serde_json::from_str(r#"{
//!     "general": {"description": "General Admission", "priceInCents": {"adult": 3000}},
//!     "extras": {"movie": {"description": "Movie Access", "priceInCents": {"adult": 1000}}}
//! }"#).unwrap();
//!
//! let info = TicketInfo::new("general", "adult").with_extra("movie");
//! assert_eq!(calculate_ticket_price(&tickets, &info).unwrap().to_string(), "$40.00");
//! ```

mod catalogue;
mod dinosaurs;
mod error;
mod rooms;
mod tickets;


pub use catalogue::{
    CARNIVOROUS, HERBIVOROUS, herbivores_in_period, meat_eaters, pronunciations_in_period,
    required_ticket_permissions, rooms_without_dinosaurs,
};
pub use dinosaurs::{
    FEET_PER_METER, LongestDinosaur, dinosaur_description, dinosaurs_alive_at,
    dinosaurs_alive_mya, longest_dinosaur,
};
pub use error::{QueryError, Result};
pub use rooms::{DanglingConnection, connected_room_names, dangling_connections, room_by_dinosaur_name};
pub use tickets::{ReceiptStyle, calculate_ticket_price, purchase_tickets, purchase_tickets_with};
