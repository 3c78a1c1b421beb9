//! Unit tests for fossil-types

#![allow(clippy::float_cmp)]

use proptest::prelude::*;
use test_case::test_case;

use crate::{
    Cents, Dinosaur, DinosaurField, DinosaurId, FieldValue, Mya, MyaError, Room, RoomId,
    TicketData, TicketInfo,
};

// ============================================================================
// Mya
// ============================================================================

#[test_case(29.0 => true; "the point itself")]
#[test_case(28.0 => true; "one below the point")]
#[test_case(30.0 => false; "one above the point")]
#[test_case(27.0 => false; "two below the point")]
#[test_case(28.5 => false; "between point and one below")]
fn point_membership(target: f64) -> bool {
    Mya::point(29.0).contains(target)
}

#[test_case(155.0 => true; "upper bound")]
#[test_case(150.0 => true; "inside")]
#[test_case(145.0 => true; "lower bound")]
#[test_case(144.0 => false; "below span")]
#[test_case(156.0 => false; "above span")]
fn span_membership(target: f64) -> bool {
    Mya::span(155.0, 145.0).contains(target)
}

#[test]
fn span_bounds_order_does_not_matter() {
    assert!(Mya::span(145.0, 155.0).contains(150.0));
    assert!(Mya::span(155.0, 145.0).contains(150.0));
}

#[test]
fn most_recent_and_oldest() {
    let span = Mya::span(78.0, 77.5);
    assert_eq!(span.most_recent(), 77.5);
    assert_eq!(span.oldest(), 78.0);

    let point = Mya::point(66.0);
    assert_eq!(point.most_recent(), 66.0);
    assert_eq!(point.oldest(), 66.0);
}

#[test]
fn mya_deserializes_from_arrays() {
    let point: Mya = serde_json::from_str("[66]").unwrap();
    assert_eq!(point, Mya::point(66.0));

    let span: Mya = serde_json::from_str("[155, 145]").unwrap();
    assert_eq!(span, Mya::span(155.0, 145.0));
}

#[test]
fn mya_rejects_bad_lengths() {
    assert!(serde_json::from_str::<Mya>("[]").is_err());
    assert!(serde_json::from_str::<Mya>("[1, 2, 3]").is_err());
    assert_eq!(
        Mya::try_from(Vec::<f64>::new()),
        Err(MyaError::InvalidLength(0))
    );
}

#[test]
fn mya_rejects_non_finite_values() {
    assert!(matches!(
        Mya::try_from(vec![f64::NAN]),
        Err(MyaError::NotFinite(_))
    ));
}

#[test]
fn mya_serializes_back_to_array() {
    let json = serde_json::to_string(&Mya::span(155.0, 145.0)).unwrap();
    assert_eq!(json, "[155.0,145.0]");
}

proptest! {
    #[test]
    fn span_contains_every_value_between_bounds(
        a in -500.0f64..500.0,
        b in -500.0f64..500.0,
        t in 0.0f64..=1.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let target = (low + (high - low) * t).clamp(low, high);
        prop_assert!(Mya::span(a, b).contains(target));
    }

    #[test]
    fn point_only_matches_itself_or_one_below(p in 0i32..300, offset in -5i32..5) {
        let point = f64::from(p);
        let target = f64::from(p + offset);
        let expected = offset == 0 || offset == -1;
        prop_assert_eq!(Mya::point(point).contains(target), expected);
    }
}

// ============================================================================
// Cents
// ============================================================================

#[test_case(0 => "$0.00"; "zero")]
#[test_case(5 => "$0.05"; "single digit cents")]
#[test_case(3000 => "$30.00"; "whole dollars")]
#[test_case(4550 => "$45.50"; "dollars and cents")]
#[test_case(17500 => "$175.00"; "receipt total")]
fn cents_display(cents: u64) -> String {
    Cents::new(cents).to_string()
}

#[test]
fn cents_add_and_sum() {
    let mut total = Cents::new(3000) + Cents::new(1000);
    total += Cents::new(500);
    assert_eq!(total, Cents::new(4500));

    let summed: Cents = [Cents::new(100), Cents::new(250)].iter().sum();
    assert_eq!(summed, Cents::new(350));
    assert_eq!(std::iter::empty::<Cents>().sum::<Cents>(), Cents::ZERO);
}

#[test]
fn cents_addition_never_overflows() {
    let max = Cents::new(u64::MAX);

    assert_eq!(max.checked_add(Cents::new(1)), None);
    assert_eq!(max.checked_add(Cents::ZERO), Some(max));
    assert_eq!(max + Cents::new(1), max);

    let mut total = Cents::new(u64::MAX - 1);
    total += Cents::new(5);
    assert_eq!(total, max);

    let summed: Cents = [max, max, Cents::new(100)].iter().sum();
    assert_eq!(summed, max);
}

// ============================================================================
// Records
// ============================================================================

const XENOCERATOPS: &str = r#"{
    "dinosaurId": "U9vuZmgKwUr",
    "name": "Xenoceratops",
    "pronunciation": "ZEE-no-SEH-ruh-tops",
    "meaningOfName": "Alien horned face",
    "diet": "herbivorous",
    "lengthInMeters": 6,
    "period": "Early Cretaceous",
    "mya": [78, 77.5],
    "info": "Xenoceratops had horns and a bony frill."
}"#;

#[test]
fn dinosaur_deserializes_from_fixture_shape() {
    let dinosaur: Dinosaur = serde_json::from_str(XENOCERATOPS).unwrap();
    assert_eq!(dinosaur.id, DinosaurId::new("U9vuZmgKwUr"));
    assert_eq!(dinosaur.meaning_of_name, "Alien horned face");
    assert_eq!(dinosaur.length_in_meters, 6.0);
    assert_eq!(dinosaur.mya, Mya::span(78.0, 77.5));
}

#[test]
fn dinosaur_field_projection() {
    let dinosaur: Dinosaur = serde_json::from_str(XENOCERATOPS).unwrap();
    assert_eq!(dinosaur.field(DinosaurField::Id), FieldValue::from("U9vuZmgKwUr"));
    assert_eq!(dinosaur.field(DinosaurField::Name), FieldValue::from("Xenoceratops"));
    assert_eq!(
        dinosaur.field(DinosaurField::LengthInMeters),
        FieldValue::Number(6.0)
    );
    assert_eq!(
        dinosaur.field(DinosaurField::Mya),
        FieldValue::Mya(Mya::span(78.0, 77.5))
    );
}

#[test]
fn dinosaur_field_names_round_trip() {
    for field in DinosaurField::ALL {
        assert_eq!(field.as_str().parse::<DinosaurField>(), Ok(field));
    }
    assert!("unknown-key".parse::<DinosaurField>().is_err());
}

#[test]
fn room_deserializes_with_defaults() {
    let room: Room =
        serde_json::from_str(r#"{"roomId": "A6QaYdyKra", "name": "Ticket Center"}"#).unwrap();
    assert_eq!(room.id, RoomId::new("A6QaYdyKra"));
    assert!(room.is_empty());
    assert!(room.connects_to.is_empty());
    assert!(room.required_ticket_permissions.is_empty());
}

#[test]
fn room_membership() {
    let room: Room = serde_json::from_str(
        r#"{"roomId": "dpaCkVzRGm", "name": "Roberts Room", "dinosaurs": ["BFjjLjea-O"], "connectsTo": [], "requiredTicketPermissions": ["education"]}"#,
    )
    .unwrap();
    assert!(room.has_dinosaur(&DinosaurId::new("BFjjLjea-O")));
    assert!(!room.has_dinosaur(&DinosaurId::new("WHQcpcOj0G")));
}

#[test]
fn ticket_data_splits_admissions_from_extras() {
    let tickets: TicketData = serde_json::from_str(
        r#"{
            "general": {"description": "General Admission", "priceInCents": {"adult": 3000}},
            "membership": {"description": "Membership Admission", "priceInCents": {"adult": 2800}},
            "extras": {
                "movie": {"description": "Movie Access", "priceInCents": {"adult": 1000}}
            }
        }"#,
    )
    .unwrap();

    assert_eq!(
        tickets.ticket_types().collect::<Vec<_>>(),
        vec!["general", "membership"]
    );
    assert_eq!(
        tickets.admission("general").unwrap().price_for("adult"),
        Some(Cents::new(3000))
    );
    assert!(tickets.admission("extras").is_none());
    assert_eq!(tickets.extra("movie").unwrap().description, "Movie Access");
    assert!(tickets.extra("general").is_none());
}

#[test]
fn ticket_info_builder() {
    let info = TicketInfo::new("general", "child")
        .with_extra("movie")
        .with_extras(["terrace"]);
    assert_eq!(info.extras, vec!["movie", "terrace"]);

    let parsed: TicketInfo =
        serde_json::from_str(r#"{"ticketType": "general", "entrantType": "adult"}"#).unwrap();
    assert!(parsed.extras.is_empty());
}
