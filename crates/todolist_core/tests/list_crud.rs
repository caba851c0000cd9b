use todolist_core::{ItemValidationError, TodoList};
use uuid::Uuid;

#[test]
fn add_increments_count_and_returns_trimmed_item() {
    let mut list = TodoList::new();
    assert_eq!(list.count(), 0);

    let item = list.add("  Buy milk  ").unwrap();
    assert_eq!(item.title(), "Buy milk");
    assert!(!item.is_done());

    assert_eq!(list.count(), 1);
}

#[test]
fn add_rejects_blank_title_and_leaves_list_unchanged() {
    let mut list = TodoList::new();
    list.add("Buy milk").unwrap();

    let err = list.add("   ").unwrap_err();
    assert_eq!(err, ItemValidationError::EmptyTitle);
    assert_eq!(list.count(), 1);
}

#[test]
fn remove_by_id_returns_true_and_shrinks_list() {
    let mut list = TodoList::new();
    let id = list.add("Buy milk").unwrap().id();
    list.add("Read book").unwrap();

    assert!(list.remove(id));

    assert_eq!(list.count(), 1);
    assert!(list.get(id).is_none());
}

#[test]
fn remove_unknown_id_returns_false() {
    let mut list = TodoList::new();
    list.add("Buy milk").unwrap();

    assert!(!list.remove(Uuid::new_v4()));
    assert_eq!(list.count(), 1);
}

#[test]
fn find_matches_substring_case_insensitively() {
    let mut list = TodoList::new();
    list.add("Buy milk").unwrap();
    list.add("Read book").unwrap();

    let hits: Vec<_> = list.find("buy").collect();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title(), "Buy milk");
}

#[test]
fn find_with_empty_needle_matches_everything() {
    let mut list = TodoList::new();
    list.add("Buy milk").unwrap();
    list.add("Read book").unwrap();

    assert_eq!(list.find("").count(), 2);
}

#[test]
fn find_results_follow_list_order() {
    let mut list = TodoList::new();
    list.add("pay rent").unwrap();
    list.add("Read book").unwrap();
    list.add("pay insurance").unwrap();

    let titles: Vec<_> = list.find("PAY").map(|item| item.title()).collect();
    assert_eq!(titles, ["pay rent", "pay insurance"]);
}

#[test]
fn find_is_restartable() {
    let mut list = TodoList::new();
    list.add("Buy milk").unwrap();

    assert_eq!(list.find("milk").count(), 1);
    assert_eq!(list.find("milk").count(), 1);
}

#[test]
fn items_view_preserves_insertion_order() {
    let mut list = TodoList::new();
    list.add("first").unwrap();
    list.add("second").unwrap();
    list.add("third").unwrap();

    let titles: Vec<_> = list.items().iter().map(|item| item.title()).collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[test]
fn get_mut_reaches_owned_items_for_mutation() {
    let mut list = TodoList::new();
    let id = list.add("Buy milk").unwrap().id();

    list.get_mut(id).unwrap().mark_done();

    assert!(list.get(id).unwrap().is_done());
    assert!(list.get_mut(Uuid::new_v4()).is_none());
}

#[test]
fn add_returns_item_ready_for_mutation() {
    let mut list = TodoList::new();

    let item = list.add("Ship release").unwrap();
    item.mark_done();
    let id = item.id();

    assert!(list.get(id).unwrap().is_done());
}
