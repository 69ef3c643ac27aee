use pretty_assertions::assert_eq;
use tests::{
    badge_of, ratio_of, score_of, set_badge, set_ratio, set_score, Person, PersonImplementation,
    ProfileImplementation,
};

use std::hash::{Hash, Hasher};

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn baseline_defaults() {
    let person = PersonImplementation::new();

    assert_eq!(person.id(), 0);
    assert_eq!(person.name(), "name");
    assert_eq!(person.description(), "description");
    assert_eq!(person.comment(), "no comment");
    assert_eq!(person.context(), "default");
    assert!(!person.required());
    assert!(!person.secret());
    assert_eq!(person.validator(), None);
    assert_eq!(person.test(), "");
}

#[test]
fn identity_is_unique_per_construction() {
    let a = PersonImplementation::new();
    let b = PersonImplementation::new();

    assert_ne!(a.uuid(), b.uuid());
}

#[test]
fn default_trait_matches_new() {
    let person = PersonImplementation::default();

    assert_eq!(person, PersonImplementation::new());
}

#[test]
fn accessors_round_trip() {
    let mut person = PersonImplementation::new();

    person.set_name("sample".to_string());
    person.set_id(7);
    person.set_required(true);
    person.set_test("probe".to_string());

    assert_eq!(person.name(), "sample");
    assert_eq!(person.id(), 7);
    assert!(person.required());
    assert_eq!(person.test(), "probe");
}

#[test]
fn elements_are_usable_through_the_trait() {
    let mut person = PersonImplementation::new();
    {
        let person: &mut dyn Person = &mut person;
        person.set_test("via trait".to_string());
    }

    let person: &dyn Person = &person;
    assert_eq!(person.test(), "via trait");
    assert_eq!(person.name(), "name");
}

#[test]
fn equality_ignores_identity() {
    let a = PersonImplementation::new();
    let b = PersonImplementation::new();

    assert_ne!(a.uuid(), b.uuid());
    assert_eq!(a, b);
}

#[test]
fn unmatched_fields_do_not_affect_equality_or_hash() {
    let mut a = ProfileImplementation::new();
    let mut b = ProfileImplementation::new();

    a.set_scratch("left".to_string());
    b.set_scratch("right".to_string());

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    b.set_nickname("someone".to_string());
    assert_ne!(a, b);
}

#[test]
fn declared_defaults_apply() {
    let profile = ProfileImplementation::new();

    assert_eq!(profile.nickname(), "anonymous");
    assert_eq!(ratio_of(&profile), 1.0);
    assert_eq!(score_of(&profile), 0);
    assert_eq!(profile.motto(), None);
}

#[test]
fn aliases_share_the_slot() {
    let mut profile = ProfileImplementation::new();

    profile.set_handle("deckard".to_string());
    assert_eq!(profile.nickname(), "deckard");
    assert_eq!(profile.handle(), "deckard");

    profile.set_nickname("rachael".to_string());
    assert_eq!(profile.handle(), "rachael");
}

#[test]
fn nullable_fields_accept_and_clear_values() {
    let mut profile = ProfileImplementation::new();

    profile.set_motto(Some("more human than human".to_string()));
    assert_eq!(profile.motto().map(String::as_str), Some("more human than human"));

    profile.set_motto(None);
    assert_eq!(profile.motto(), None);
}

#[test]
fn non_public_fields_stay_mutable_inside_the_crate() {
    let mut profile = ProfileImplementation::new();

    set_score(&mut profile, 42);
    set_ratio(&mut profile, 0.5);

    assert_eq!(score_of(&profile), 42);
    assert_eq!(ratio_of(&profile), 0.5);
}

#[test]
fn super_visible_fields_reach_the_parent_module() {
    // `badge` is declared `pub(super)` inside the module holding the spec;
    // its accessors work one module up and nowhere else.
    let mut profile = ProfileImplementation::new();

    assert_eq!(badge_of(&profile), "");
    set_badge(&mut profile, "gold".to_string());
    assert_eq!(badge_of(&profile), "gold");
}

#[test]
fn float_fields_compare_and_hash_by_bits() {
    let mut a = ProfileImplementation::new();
    let mut b = ProfileImplementation::new();

    set_ratio(&mut a, 0.25);
    set_ratio(&mut b, 0.25);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    set_ratio(&mut b, 0.75);
    assert_ne!(a, b);
}

#[test]
fn json_round_trip_preserves_identity_and_state() {
    let mut person = PersonImplementation::new();
    person.set_test("persisted".to_string());
    person.set_id(3);

    let json = person.to_json().unwrap();
    let restored = PersonImplementation::from_json(&json).unwrap();

    assert_eq!(restored, person);
    assert_eq!(restored.uuid(), person.uuid());
    assert_eq!(restored.test(), "persisted");
}

#[test]
fn with_fields_assigns_a_fresh_identity() {
    let person = PersonImplementation::with_fields(
        9,
        "name".to_string(),
        "description".to_string(),
        "no comment".to_string(),
        "default".to_string(),
        false,
        false,
        None,
        "explicit".to_string(),
    );

    assert_eq!(person.id(), 9);
    assert_eq!(person.test(), "explicit");
    assert_ne!(person.uuid(), PersonImplementation::new().uuid());
}

#[test]
fn validators_travel_with_the_element() {
    let mut person = PersonImplementation::new();
    person.set_name("clara".to_string());
    person.set_validator(Some(dataelement::Validator::new("name", "clara")));

    let doc: serde_json::Value = serde_json::from_str(&person.to_json().unwrap()).unwrap();
    assert!(person.validator().unwrap().check(&doc));

    person.set_name("karl".to_string());
    let doc: serde_json::Value = serde_json::from_str(&person.to_json().unwrap()).unwrap();
    assert!(!person.validator().unwrap().check(&doc));
}
