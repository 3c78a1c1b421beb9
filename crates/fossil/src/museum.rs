//! Main entry point for the Fossil SDK.
//!
//! The `Museum` struct owns the three collections and hands them to the
//! pure query functions in `fossil-query`.

use std::fs;
use std::path::Path;

use fossil_config::{FixtureConfig, FossilConfig};
use fossil_query::{DanglingConnection, LongestDinosaur, ReceiptStyle};
use fossil_types::{Cents, Dinosaur, FieldValue, Room, TicketData, TicketInfo};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{MuseumError, Result};

/// A loaded museum: dinosaurs, rooms and ticket prices.
///
/// Collections are read once and never mutated, so a `Museum` can be shared
/// by reference across as many callers as needed.
#[derive(Debug, Clone)]
pub struct Museum {
    dinosaurs: Vec<Dinosaur>,
    rooms: Vec<Room>,
    tickets: TicketData,
    receipt: ReceiptStyle,
}

impl Museum {
    /// Builds a museum from collections already in memory.
    pub fn new(dinosaurs: Vec<Dinosaur>, rooms: Vec<Room>, tickets: TicketData) -> Self {
        Self {
            dinosaurs,
            rooms,
            tickets,
            receipt: ReceiptStyle::default(),
        }
    }

    /// Overrides the header and rule used by [`Museum::purchase_tickets`].
    pub fn with_receipt_style(mut self, receipt: ReceiptStyle) -> Self {
        self.receipt = receipt;
        self
    }

    /// Loads configuration from the current directory and opens the fixtures
    /// it names.
    pub fn load() -> Result<Self> {
        let config = FossilConfig::load().map_err(MuseumError::config)?;
        Self::open(&config)
    }

    /// Loads configuration from `project_dir` and opens the fixtures it names.
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        let config = FossilConfig::load_from_dir(project_dir).map_err(MuseumError::config)?;
        Self::open(&config)
    }

    /// Opens the fixtures named by `config` and applies its receipt settings.
    pub fn open(config: &FossilConfig) -> Result<Self> {
        let receipt = ReceiptStyle {
            museum_name: config.receipt.museum_name.clone(),
            rule: config.receipt.separator.clone(),
        };
        Ok(Self::open_fixtures(&config.fixtures)?.with_receipt_style(receipt))
    }

    /// Reads the three JSON collections.
    ///
    /// Connections to unknown rooms are logged but not rejected; they only
    /// surface as errors when a query walks them.
    pub fn open_fixtures(fixtures: &FixtureConfig) -> Result<Self> {
        let dinosaurs: Vec<Dinosaur> = read_fixture(&fixtures.dinosaurs)?;
        let rooms: Vec<Room> = read_fixture(&fixtures.rooms)?;
        let tickets: TicketData = read_fixture(&fixtures.tickets)?;

        let museum = Self::new(dinosaurs, rooms, tickets);
        for DanglingConnection { room, missing } in museum.dangling_connections() {
            warn!(room = %room, missing = %missing, "room connects to an unknown room");
        }

        debug!(
            dinosaurs = museum.dinosaurs.len(),
            rooms = museum.rooms.len(),
            ticket_types = museum.tickets.ticket_types().count(),
            "museum opened"
        );
        Ok(museum)
    }

    pub fn dinosaurs(&self) -> &[Dinosaur] {
        &self.dinosaurs
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn tickets(&self) -> &TicketData {
        &self.tickets
    }

    pub fn receipt_style(&self) -> &ReceiptStyle {
        &self.receipt
    }

    // ========================================================================
    // Dinosaurs
    // ========================================================================

    /// See [`fossil_query::longest_dinosaur`].
    pub fn longest_dinosaur(&self) -> Option<LongestDinosaur<'_>> {
        fossil_query::longest_dinosaur(&self.dinosaurs)
    }

    /// See [`fossil_query::dinosaur_description`].
    pub fn dinosaur_description(&self, id: &str) -> Result<String> {
        Ok(fossil_query::dinosaur_description(&self.dinosaurs, id)?)
    }

    /// See [`fossil_query::dinosaurs_alive_at`].
    pub fn dinosaurs_alive_at(&self, mya: f64) -> impl Iterator<Item = &Dinosaur> {
        fossil_query::dinosaurs_alive_at(&self.dinosaurs, mya)
    }

    /// See [`fossil_query::dinosaurs_alive_mya`].
    pub fn dinosaurs_alive_mya(&self, mya: f64, key: Option<&str>) -> Vec<FieldValue> {
        fossil_query::dinosaurs_alive_mya(&self.dinosaurs, mya, key)
    }

    pub fn meat_eaters(&self) -> Vec<&str> {
        fossil_query::meat_eaters(&self.dinosaurs)
    }

    pub fn pronunciations_in_period(&self, period: &str) -> Vec<String> {
        fossil_query::pronunciations_in_period(&self.dinosaurs, period)
    }

    pub fn herbivores_in_period(&self, period: &str) -> String {
        fossil_query::herbivores_in_period(&self.dinosaurs, period)
    }

    // ========================================================================
    // Rooms
    // ========================================================================

    /// See [`fossil_query::room_by_dinosaur_name`].
    pub fn room_by_dinosaur_name(&self, name: &str) -> Result<&Room> {
        Ok(fossil_query::room_by_dinosaur_name(
            &self.dinosaurs,
            &self.rooms,
            name,
        )?)
    }

    /// Name of the room displaying `name`.
    pub fn room_name_by_dinosaur_name(&self, name: &str) -> Result<&str> {
        Ok(self.room_by_dinosaur_name(name)?.name.as_str())
    }

    /// See [`fossil_query::connected_room_names`].
    pub fn connected_room_names(&self, id: &str) -> Result<Vec<&str>> {
        Ok(fossil_query::connected_room_names(&self.rooms, id)?)
    }

    pub fn dangling_connections(&self) -> Vec<DanglingConnection<'_>> {
        fossil_query::dangling_connections(&self.rooms)
    }

    pub fn rooms_without_dinosaurs(&self) -> String {
        fossil_query::rooms_without_dinosaurs(&self.rooms)
    }

    pub fn required_ticket_permissions(&self, room_name: &str) -> Result<String> {
        Ok(fossil_query::required_ticket_permissions(
            &self.rooms,
            room_name,
        )?)
    }

    // ========================================================================
    // Tickets
    // ========================================================================

    /// See [`fossil_query::calculate_ticket_price`].
    pub fn calculate_ticket_price(&self, info: &TicketInfo) -> Result<Cents> {
        Ok(fossil_query::calculate_ticket_price(&self.tickets, info)?)
    }

    /// Renders a receipt using this museum's receipt style.
    pub fn purchase_tickets(&self, purchases: &[TicketInfo]) -> Result<String> {
        Ok(fossil_query::purchase_tickets_with(
            &self.tickets,
            purchases,
            &self.receipt,
        )?)
    }
}

fn read_fixture<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|source| MuseumError::FixtureRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| MuseumError::FixtureParse {
        path: path.to_path_buf(),
        source,
    })
}
