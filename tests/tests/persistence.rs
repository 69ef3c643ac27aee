use dataelement::{DocumentStore, MemoryStore, PersistenceError};
use pretty_assertions::assert_eq;
use tests::{PersonImplementation, PersonPersistenceHandler};

fn person(test: &str, id: i64) -> PersonImplementation {
    let mut person = PersonImplementation::new();
    person.set_test(test.to_string());
    person.set_id(id);
    person
}

#[test]
fn collection_name_is_fixed() {
    assert_eq!(PersonPersistenceHandler::<MemoryStore>::COLLECTION, "people");
}

#[test]
fn save_then_find_all() {
    let handler = PersonPersistenceHandler::new(MemoryStore::new());

    handler.save(&person("a", 1)).unwrap();
    handler.save(&person("b", 2)).unwrap();

    let all: Vec<_> = handler
        .find_all()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(all.len(), 2);
}

#[test]
fn saving_twice_updates_in_place() {
    let handler = PersonPersistenceHandler::new(MemoryStore::new());

    let mut element = person("first", 1);
    handler.save(&element).unwrap();

    element.set_test("second".to_string());
    handler.save(&element).unwrap();

    let all: Vec<_> = handler
        .find_all()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].test(), "second");
}

#[test]
fn find_by_field_streams_every_match() {
    let handler = PersonPersistenceHandler::new(MemoryStore::new());

    handler.save(&person("red", 1)).unwrap();
    handler.save(&person("red", 2)).unwrap();
    handler.save(&person("blue", 3)).unwrap();

    let matches: Vec<_> = handler
        .find_by_test(&"red".to_string())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|element| element.test() == "red"));
}

#[test]
fn find_by_uuid_returns_the_one_element_or_nothing() {
    let handler = PersonPersistenceHandler::new(MemoryStore::new());

    let element = person("target", 1);
    handler.save(&element).unwrap();
    handler.save(&person("other", 2)).unwrap();

    let hit = handler.find_by_uuid(&element.uuid()).unwrap().unwrap();
    assert_eq!(hit.uuid(), element.uuid());
    assert_eq!(hit.test(), "target");

    assert!(handler
        .find_by_uuid(&dataelement::Uuid::new_v4())
        .unwrap()
        .is_none());
}

#[test]
fn find_by_id_returns_the_first_stored_match() {
    let handler = PersonPersistenceHandler::new(MemoryStore::new());

    handler.save(&person("early", 7)).unwrap();
    handler.save(&person("late", 7)).unwrap();

    let hit = handler.find_by_id(7).unwrap().unwrap();
    assert_eq!(hit.test(), "early");

    assert!(handler.find_by_id(8).unwrap().is_none());
}

#[test]
fn queries_reach_non_public_attributes_of_the_document() {
    // `test` is public, but query matching happens on the serialized
    // document, so a field's declared visibility never changes results.
    let handler = PersonPersistenceHandler::new(MemoryStore::new());

    handler.save(&person("x", 1)).unwrap();

    let matches: Vec<_> = handler
        .find_by_comment(&"no comment".to_string())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(matches.len(), 1);
}

#[test]
fn clear_removes_everything() {
    let handler = PersonPersistenceHandler::new(MemoryStore::new());

    handler.save(&person("a", 1)).unwrap();
    handler.clear().unwrap();

    assert_eq!(handler.find_all().unwrap().count(), 0);
}

#[test]
fn a_borrowed_store_can_back_several_handlers() {
    let store = MemoryStore::new();

    {
        let handler = PersonPersistenceHandler::new(&store);
        handler.save(&person("shared", 1)).unwrap();
    }

    let handler = PersonPersistenceHandler::new(&store);
    assert_eq!(handler.find_all().unwrap().count(), 1);
}

struct FailingStore;

impl DocumentStore for FailingStore {
    type Iter = std::iter::Empty<Result<serde_json::Value, PersistenceError>>;

    fn upsert(
        &self,
        _collection: &str,
        _key: &str,
        _document: serde_json::Value,
    ) -> Result<(), PersistenceError> {
        Err(PersistenceError::Connection("store offline".to_string()))
    }

    fn clear(&self, _collection: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::Connection("store offline".to_string()))
    }

    fn scan(&self, _collection: &str) -> Result<Self::Iter, PersistenceError> {
        Err(PersistenceError::Connection("store offline".to_string()))
    }
}

#[test]
fn connection_failures_surface_from_every_operation() {
    let handler = PersonPersistenceHandler::new(FailingStore);

    assert!(matches!(
        handler.save(&person("a", 1)),
        Err(PersistenceError::Connection(_))
    ));
    assert!(matches!(
        handler.clear(),
        Err(PersistenceError::Connection(_))
    ));
    assert!(handler.find_all().is_err());
    assert!(handler.find_by_id(1).is_err());
}

#[test]
fn find_all_replays_saves_in_storage_order() {
    let handler = PersonPersistenceHandler::new(MemoryStore::new());

    handler.save(&person("first", 1)).unwrap();
    handler.save(&person("second", 2)).unwrap();

    let all: Vec<_> = handler
        .find_all()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(all[0].test(), "first");
    assert_eq!(all[1].test(), "second");
}
