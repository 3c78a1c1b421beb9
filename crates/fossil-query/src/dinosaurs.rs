//! Dinosaur catalogue queries: longest specimen, descriptions and the
//! "who was alive then" temporal range query.

use fossil_types::{Dinosaur, DinosaurField, FieldValue};

use crate::error::{QueryError, Result};

/// Conversion factor used for every length shown to visitors.
pub const FEET_PER_METER: f64 = 3.281;

/// The longest dinosaur in a collection, with its length in feet.
#[derive(Debug, Clone, PartialEq)]
pub struct LongestDinosaur<'a> {
    pub name: &'a str,
    pub length_in_feet: f64,
}

/// Returns the longest dinosaur, converting its length to feet.
///
/// The first dinosaur wins when several share the greatest length.
/// Returns `None` for an empty collection.
pub fn longest_dinosaur(dinosaurs: &[Dinosaur]) -> Option<LongestDinosaur<'_>> {
    let mut longest: Option<&Dinosaur> = None;
    for dinosaur in dinosaurs {
        if longest.is_none_or(|current| dinosaur.length_in_meters > current.length_in_meters) {
            longest = Some(dinosaur);
        }
    }

    let longest = longest?;
    tracing::trace!(
        name = %longest.name,
        meters = longest.length_in_meters,
        "longest dinosaur"
    );

    Some(LongestDinosaur {
        name: &longest.name,
        length_in_feet: longest.length_in_meters * FEET_PER_METER,
    })
}

/// Renders the two-line placard text for the dinosaur with the given id.
///
/// ```text
/// Xenoceratops (ZEE-no-SEH-ruh-tops)
/// Xenoceratops had horns ... It lived in the Early Cretaceous period, over 77.5 million years ago.
/// ```
pub fn dinosaur_description(dinosaurs: &[Dinosaur], id: &str) -> Result<String> {
    let dinosaur = dinosaurs
        .iter()
        .find(|dinosaur| dinosaur.id.as_str() == id)
        .ok_or_else(|| QueryError::DinosaurIdNotFound(id.into()))?;

    Ok(format!(
        "{} ({})\n{} It lived in the {} period, over {} million years ago.",
        dinosaur.name,
        dinosaur.pronunciation,
        dinosaur.info,
        dinosaur.period,
        dinosaur.mya.most_recent(),
    ))
}

/// Iterates the dinosaurs alive `mya` million years ago, in input order.
pub fn dinosaurs_alive_at(dinosaurs: &[Dinosaur], mya: f64) -> impl Iterator<Item = &Dinosaur> {
    dinosaurs
        .iter()
        .filter(move |dinosaur| dinosaur.mya.contains(mya))
}

/// Projects a field of every dinosaur alive `mya` million years ago.
///
/// `key` uses the fixture field names (`name`, `meaningOfName`, ...). When
/// it is absent or names no field, the dinosaur id is returned instead.
pub fn dinosaurs_alive_mya(dinosaurs: &[Dinosaur], mya: f64, key: Option<&str>) -> Vec<FieldValue> {
    let field = key
        .and_then(|key| key.parse::<DinosaurField>().ok())
        .unwrap_or(DinosaurField::Id);

    let values: Vec<FieldValue> = dinosaurs_alive_at(dinosaurs, mya)
        .map(|dinosaur| dinosaur.field(field))
        .collect();

    tracing::debug!(mya, %field, matches = values.len(), "dinosaurs alive");
    values
}
