mod common;

use common::{adult_document, child_document, temp_service};
use prossan_core::{AdultSearchQuery, CATCH_ALL_ACTIVITY};
use serde_json::json;

#[test]
fn service_wraps_child_lifecycle() {
    let (_dir, service) = temp_service();

    let id = service
        .create_child(&child_document("Maria Silva", &["balé"]))
        .unwrap();
    let mut child = service.get_child(id).unwrap().unwrap();
    assert_eq!(child.first_name(), "Maria");

    child.set_name("Ana Silva");
    child.guardian.contacts.push("(35) 97777-2222".to_string());
    service.save_child(&child).unwrap();

    let reloaded = service.get_child(id).unwrap().unwrap();
    assert_eq!(reloaded, child);
    assert_eq!(reloaded.first_name(), "Ana");

    service.delete_child(id).unwrap();
    assert!(service.get_child(id).unwrap().is_none());
    assert!(service.list_children().unwrap().is_empty());
}

#[test]
fn service_groups_children_for_export() {
    let (_dir, service) = temp_service();
    service
        .create_child(&child_document("Ana", &["judô"]))
        .unwrap();
    service
        .create_child(&child_document("Bia", &["música"]))
        .unwrap();

    let groups = service.children_by_activity().unwrap();
    let keys: Vec<&str> = groups.keys().collect();
    assert_eq!(keys, vec![CATCH_ALL_ACTIVITY, "música", "judô"]);
    assert_eq!(service.child_activities().unwrap().len(), 2);
}

#[test]
fn service_wraps_adult_lifecycle_and_search() {
    let (_dir, service) = temp_service();

    let joao = service
        .create_adult(&adult_document("João Souza", "111", "A1", &["futebol"]))
        .unwrap();
    let rita = service
        .create_adult(&adult_document("Rita Alves", "222", "B2", &[]))
        .unwrap();

    let listed: Vec<i64> = service
        .list_adults()
        .unwrap()
        .iter()
        .map(|adult| adult.id())
        .collect();
    assert_eq!(listed, vec![rita, joao]);

    service
        .update_adult(rita, json!({ "adult_activities": ["futebol"] }).as_object().unwrap())
        .unwrap();
    let futebol = service.adults_by_activity().unwrap();
    assert_eq!(futebol.get("futebol").unwrap().len(), 2);
    assert_eq!(service.adult_activities().unwrap().len(), 1);

    let hits = service
        .search_adults(&AdultSearchQuery::new("rita"))
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id(), rita);

    service.delete_adult(joao).unwrap();
    assert_eq!(service.adults().count().unwrap(), 1);
}

#[test]
fn service_update_of_missing_child_is_silent() {
    let (_dir, service) = temp_service();

    service
        .update_child(404, json!({ "child_name": "Ninguém" }).as_object().unwrap())
        .unwrap();
    assert!(service.list_children().unwrap().is_empty());
}
