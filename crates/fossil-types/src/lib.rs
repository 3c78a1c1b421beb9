//! # fossil-types: Core records for `Fossil`
//!
//! This crate contains the read-only reference records the museum queries
//! operate on:
//! - Identifiers ([`DinosaurId`], [`RoomId`])
//! - Temporal spans ([`Mya`])
//! - Money ([`Cents`])
//! - Catalogue records ([`Dinosaur`], [`Room`])
//! - Pricing ([`TicketData`], [`PriceEntry`], [`TicketInfo`])
//! - Field projection ([`DinosaurField`], [`FieldValue`])
//!
//! Field names follow the fixture files (`dinosaurId`, `connectsTo`,
//! `priceInCents`, ...), so every record deserializes straight from the
//! JSON the museum publishes.

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a dinosaur in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DinosaurId(String);

impl DinosaurId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DinosaurId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DinosaurId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DinosaurId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Unique identifier for a room in the museum floor plan.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RoomId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// ============================================================================
// Temporal span
// ============================================================================

/// When a species existed, in millions of years ago.
///
/// Fixtures store this as a JSON array with one or two numbers. A span is
/// usually written oldest first (`[155, 145]`), but containment does not
/// depend on the order of the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub enum Mya {
    /// A single known point. Covers `point` and `point - 1`.
    Point(f64),
    /// An interval between two bounds, inclusive.
    Span { start: f64, end: f64 },
}

impl Mya {
    pub fn point(value: f64) -> Self {
        Mya::Point(value)
    }

    pub fn span(start: f64, end: f64) -> Self {
        Mya::Span { start, end }
    }

    /// Returns true if the species was alive `target` million years ago.
    ///
    /// A point only matches its own value or the value exactly one below it;
    /// fixtures record whole millions, so nothing in between is considered.
    #[allow(clippy::float_cmp)]
    pub fn contains(self, target: f64) -> bool {
        match self {
            Mya::Point(point) => target == point || target == point - 1.0,
            Mya::Span { start, end } => {
                let (low, high) = if start <= end {
                    (start, end)
                } else {
                    (end, start)
                };
                low <= target && target <= high
            }
        }
    }

    /// The most recent bound (the smallest value).
    pub fn most_recent(self) -> f64 {
        match self {
            Mya::Point(point) => point,
            Mya::Span { start, end } => start.min(end),
        }
    }

    /// The oldest bound (the largest value).
    pub fn oldest(self) -> f64 {
        match self {
            Mya::Point(point) => point,
            Mya::Span { start, end } => start.max(end),
        }
    }
}

impl Display for Mya {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mya::Point(point) => write!(f, "[{point}]"),
            Mya::Span { start, end } => write!(f, "[{start}, {end}]"),
        }
    }
}

impl TryFrom<Vec<f64>> for Mya {
    type Error = MyaError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        if let Some(bad) = values.iter().copied().find(|v| !v.is_finite()) {
            return Err(MyaError::NotFinite(bad));
        }
        match values.as_slice() {
            [point] => Ok(Mya::Point(*point)),
            [start, end] => Ok(Mya::Span {
                start: *start,
                end: *end,
            }),
            other => Err(MyaError::InvalidLength(other.len())),
        }
    }
}

impl From<Mya> for Vec<f64> {
    fn from(mya: Mya) -> Self {
        match mya {
            Mya::Point(point) => vec![point],
            Mya::Span { start, end } => vec![start, end],
        }
    }
}

/// Errors raised while building a [`Mya`] from raw values.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MyaError {
    #[error("mya must hold one or two values, found {0}")]
    InvalidLength(usize),

    #[error("mya values must be finite, found {0}")]
    NotFinite(f64),
}

// ============================================================================
// Money
// ============================================================================

/// An amount of money in cents.
///
/// Displays as dollars with two decimals: `Cents::new(4550)` renders `$45.50`.
///
/// `+` and `Sum` saturate at `u64::MAX` cents; use [`Cents::checked_add`]
/// where an overflowing total must be reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Cents(u64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub fn new(cents: u64) -> Self {
        Self(cents)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn dollars(self) -> u64 {
        self.0 / 100
    }

    pub fn remainder(self) -> u64 {
        self.0 % 100
    }

    /// Adds two amounts, returning `None` if the total overflows.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.remainder())
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Cents> for Cents {
    fn sum<I: Iterator<Item = &'a Cents>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<u64> for Cents {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Cents> for u64 {
    fn from(cents: Cents) -> Self {
        cents.0
    }
}

// ============================================================================
// Catalogue records
// ============================================================================

/// A dinosaur on display (or archived) at the museum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dinosaur {
    #[serde(rename = "dinosaurId")]
    pub id: DinosaurId,
    pub name: String,
    pub pronunciation: String,
    pub period: String,
    pub meaning_of_name: String,
    pub diet: String,
    pub length_in_meters: f64,
    pub mya: Mya,
    pub info: String,
}

impl Dinosaur {
    /// Projects a single field of this record.
    pub fn field(&self, field: DinosaurField) -> FieldValue {
        match field {
            DinosaurField::Id => FieldValue::Text(self.id.as_str().to_string()),
            DinosaurField::Name => FieldValue::Text(self.name.clone()),
            DinosaurField::Pronunciation => FieldValue::Text(self.pronunciation.clone()),
            DinosaurField::Period => FieldValue::Text(self.period.clone()),
            DinosaurField::MeaningOfName => FieldValue::Text(self.meaning_of_name.clone()),
            DinosaurField::Diet => FieldValue::Text(self.diet.clone()),
            DinosaurField::LengthInMeters => FieldValue::Number(self.length_in_meters),
            DinosaurField::Mya => FieldValue::Mya(self.mya),
            DinosaurField::Info => FieldValue::Text(self.info.clone()),
        }
    }
}

/// A projectable [`Dinosaur`] field, named as in the fixture files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DinosaurField {
    Id,
    Name,
    Pronunciation,
    Period,
    MeaningOfName,
    Diet,
    LengthInMeters,
    Mya,
    Info,
}

impl DinosaurField {
    pub const ALL: [DinosaurField; 9] = [
        DinosaurField::Id,
        DinosaurField::Name,
        DinosaurField::Pronunciation,
        DinosaurField::Period,
        DinosaurField::MeaningOfName,
        DinosaurField::Diet,
        DinosaurField::LengthInMeters,
        DinosaurField::Mya,
        DinosaurField::Info,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DinosaurField::Id => "dinosaurId",
            DinosaurField::Name => "name",
            DinosaurField::Pronunciation => "pronunciation",
            DinosaurField::Period => "period",
            DinosaurField::MeaningOfName => "meaningOfName",
            DinosaurField::Diet => "diet",
            DinosaurField::LengthInMeters => "lengthInMeters",
            DinosaurField::Mya => "mya",
            DinosaurField::Info => "info",
        }
    }
}

impl Display for DinosaurField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DinosaurField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DinosaurField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A field name that does not exist on [`Dinosaur`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown dinosaur field: {0}")]
pub struct UnknownField(pub String);

/// A projected field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Mya(Mya),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(number) => write!(f, "{number}"),
            FieldValue::Mya(mya) => write!(f, "{mya}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// A room in the museum, the dinosaurs it holds, and the rooms it opens onto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(rename = "roomId")]
    pub id: RoomId,
    pub name: String,
    #[serde(default)]
    pub dinosaurs: Vec<DinosaurId>,
    #[serde(default)]
    pub connects_to: Vec<RoomId>,
    #[serde(default)]
    pub required_ticket_permissions: Vec<String>,
}

impl Room {
    pub fn has_dinosaur(&self, id: &DinosaurId) -> bool {
        self.dinosaurs.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.dinosaurs.is_empty()
    }
}

// ============================================================================
// Pricing
// ============================================================================

/// The reserved key in the ticket table that holds the add-ons.
pub const EXTRAS_KEY: &str = "extras";

/// A described price list keyed by entrant type (`child`, `adult`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    pub description: String,
    pub price_in_cents: BTreeMap<String, Cents>,
}

impl PriceEntry {
    pub fn price_for(&self, entrant_type: &str) -> Option<Cents> {
        self.price_in_cents.get(entrant_type).copied()
    }
}

/// The museum price table.
///
/// Every top-level key except [`EXTRAS_KEY`] is a ticket type; the extras
/// sub-table has the same shape and is keyed by extra name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TicketData {
    #[serde(default)]
    pub extras: BTreeMap<String, PriceEntry>,
    #[serde(flatten)]
    pub admissions: BTreeMap<String, PriceEntry>,
}

impl TicketData {
    /// Looks up a ticket type. `"extras"` is never a ticket type.
    pub fn admission(&self, ticket_type: &str) -> Option<&PriceEntry> {
        if ticket_type == EXTRAS_KEY {
            return None;
        }
        self.admissions.get(ticket_type)
    }

    pub fn extra(&self, name: &str) -> Option<&PriceEntry> {
        self.extras.get(name)
    }

    pub fn ticket_types(&self) -> impl Iterator<Item = &str> {
        self.admissions.keys().map(String::as_str)
    }
}

/// A single ticket selection: ticket type, entrant type and add-ons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketInfo {
    pub ticket_type: String,
    pub entrant_type: String,
    #[serde(default)]
    pub extras: Vec<String>,
}

impl TicketInfo {
    pub fn new(ticket_type: impl Into<String>, entrant_type: impl Into<String>) -> Self {
        Self {
            ticket_type: ticket_type.into(),
            entrant_type: entrant_type.into(),
            extras: Vec::new(),
        }
    }

    /// Adds an extra to the selection.
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extras.push(extra.into());
        self
    }

    pub fn with_extras<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras.extend(extras.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests;
