//! Visitor questions about the catalogue and floor plan.

use fossil_types::{Dinosaur, Room};

use crate::error::{QueryError, Result};

pub const CARNIVOROUS: &str = "carnivorous";
pub const HERBIVOROUS: &str = "herbivorous";

/// Names of the dinosaurs that only eat meat.
pub fn meat_eaters(dinosaurs: &[Dinosaur]) -> Vec<&str> {
    dinosaurs
        .iter()
        .filter(|dinosaur| dinosaur.diet == CARNIVOROUS)
        .map(|dinosaur| dinosaur.name.as_str())
        .collect()
}

/// `"<name> (<pronunciation>)"` for every dinosaur of the given period.
pub fn pronunciations_in_period(dinosaurs: &[Dinosaur], period: &str) -> Vec<String> {
    dinosaurs
        .iter()
        .filter(|dinosaur| dinosaur.period == period)
        .map(|dinosaur| format!("{} ({})", dinosaur.name, dinosaur.pronunciation))
        .collect()
}

/// Describes the herbivores that lived during the given period.
pub fn herbivores_in_period(dinosaurs: &[Dinosaur], period: &str) -> String {
    let names: Vec<&str> = dinosaurs
        .iter()
        .filter(|dinosaur| dinosaur.period == period && dinosaur.diet == HERBIVOROUS)
        .map(|dinosaur| dinosaur.name.as_str())
        .collect();

    match names.as_slice() {
        [] => format!("No herbivores lived during the {period} period."),
        [name] => format!("{name} is an herbivore that lived during the {period} period."),
        names => format!(
            "Herbivores that lived during the {period} period:\n{}",
            names.join(", ")
        ),
    }
}

/// Describes the rooms that exhibit no dinosaurs.
pub fn rooms_without_dinosaurs(rooms: &[Room]) -> String {
    let names: Vec<&str> = rooms
        .iter()
        .filter(|room| room.is_empty())
        .map(|room| room.name.as_str())
        .collect();

    match names.as_slice() {
        [] => "All the rooms have dinosaurs.".to_string(),
        [name] => format!("This room does not have any dinosaurs: {name}"),
        names => format!(
            "These rooms do not have any dinosaurs: {}",
            names.join(", ")
        ),
    }
}

/// Describes the ticket permissions needed to enter the named room.
pub fn required_ticket_permissions(rooms: &[Room], room_name: &str) -> Result<String> {
    let room = rooms
        .iter()
        .find(|room| room.name == room_name)
        .ok_or_else(|| QueryError::RoomNameNotFound(room_name.to_string()))?;

    if room.required_ticket_permissions.is_empty() {
        return Ok("There are no ticket requirements to enter this room".to_string());
    }

    Ok(format!(
        "Tickets with {} access required to enter this room",
        room.required_ticket_permissions.join(", ")
    ))
}
