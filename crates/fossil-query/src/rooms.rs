//! Room queries: where a dinosaur is exhibited and how rooms connect.

use std::collections::HashMap;

use fossil_types::{Dinosaur, Room, RoomId};

use crate::error::{QueryError, Result};

/// Returns the room exhibiting the dinosaur with the given name.
///
/// The two lookup stages fail differently: an unknown name yields
/// [`QueryError::DinosaurNameNotFound`], a known dinosaur that no room
/// lists yields [`QueryError::DinosaurNotInAnyRoom`]. When several rooms
/// list the dinosaur, the first one wins.
pub fn room_by_dinosaur_name<'a>(
    dinosaurs: &[Dinosaur],
    rooms: &'a [Room],
    name: &str,
) -> Result<&'a Room> {
    let dinosaur = dinosaurs
        .iter()
        .find(|dinosaur| dinosaur.name == name)
        .ok_or_else(|| QueryError::DinosaurNameNotFound(name.to_string()))?;

    let room = rooms
        .iter()
        .find(|room| room.has_dinosaur(&dinosaur.id))
        .ok_or_else(|| QueryError::DinosaurNotInAnyRoom(name.to_string()))?;

    tracing::trace!(dinosaur = %dinosaur.id, room = %room.id, "dinosaur located");
    Ok(room)
}

/// Returns the names of the rooms connected to the room with the given id.
///
/// # Errors
///
/// Returns [`QueryError::RoomIdNotFound`] naming `id` if the room does not
/// exist, or naming the first connection that resolves to no room.
pub fn connected_room_names<'a>(rooms: &'a [Room], id: &str) -> Result<Vec<&'a str>> {
    let index = index_rooms(rooms);

    let room = index
        .get(id)
        .copied()
        .ok_or_else(|| QueryError::RoomIdNotFound(id.into()))?;

    room.connects_to
        .iter()
        .map(|neighbour| {
            index
                .get(neighbour.as_str())
                .copied()
                .map(|room| room.name.as_str())
                .ok_or_else(|| QueryError::RoomIdNotFound(neighbour.clone()))
        })
        .collect()
}

/// A connection that points at a room id missing from the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingConnection<'a> {
    pub room: &'a RoomId,
    pub missing: &'a RoomId,
}

/// Lists every connection across the floor plan whose target room is
/// missing, in room order then adjacency order.
pub fn dangling_connections(rooms: &[Room]) -> Vec<DanglingConnection<'_>> {
    let index = index_rooms(rooms);

    let mut dangling = Vec::new();
    for room in rooms {
        for missing in &room.connects_to {
            if !index.contains_key(missing.as_str()) {
                tracing::debug!(room = %room.id, %missing, "dangling room connection");
                dangling.push(DanglingConnection {
                    room: &room.id,
                    missing,
                });
            }
        }
    }
    dangling
}

/// Indexes rooms by id. The first room wins on duplicate ids.
fn index_rooms(rooms: &[Room]) -> HashMap<&str, &Room> {
    let mut index = HashMap::with_capacity(rooms.len());
    for room in rooms {
        index.entry(room.id.as_str()).or_insert(room);
    }
    index
}
