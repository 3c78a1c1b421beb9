//! Query error types.
//!
//! Each variant names the lookup stage that failed. The `Display` output is
//! the message shown to museum visitors, so callers that want the plain
//! string form can use `to_string()`.

use fossil_types::{DinosaurId, RoomId};
use thiserror::Error;

/// Errors returned by collection queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No dinosaur carries the requested id.
    #[error("A dinosaur with an ID of '{0}' cannot be found.")]
    DinosaurIdNotFound(DinosaurId),

    /// No dinosaur carries the requested name.
    #[error("Dinosaur with name '{0}' cannot be found.")]
    DinosaurNameNotFound(String),

    /// The dinosaur exists but no room lists it.
    #[error("Dinosaur with name '{0}' cannot be found in any rooms.")]
    DinosaurNotInAnyRoom(String),

    /// A room id (requested or referenced by a connection) is unknown.
    #[error("Room with ID of '{0}' could not be found.")]
    RoomIdNotFound(RoomId),

    /// No room carries the requested name.
    #[error("There is no room called {0}")]
    RoomNameNotFound(String),

    /// The ticket type is not in the price table.
    #[error("Ticket type '{0}' cannot be found.")]
    TicketTypeNotFound(String),

    /// The entrant type has no price for the selected ticket or extra.
    #[error("Entrant type '{0}' cannot be found.")]
    EntrantTypeNotFound(String),

    /// The extra is not in the extras table.
    #[error("Extra type '{0}' cannot be found.")]
    ExtraTypeNotFound(String),

    /// A ticket or receipt total does not fit in a `u64` of cents.
    #[error("Ticket total is too large to calculate.")]
    PriceOverflow,
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
