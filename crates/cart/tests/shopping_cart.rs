use shopkit_cart::{Cart, Item};

/// Fresh cart per scenario, with logging wired up the same way a binary would.
fn fresh_cart() -> Cart {
    shopkit_observability::init();
    Cart::new()
}

fn apple() -> Item {
    Item::new("apple", 0.99).expect("valid item")
}

fn position_of(cart: &Cart, name: &str) -> Option<usize> {
    cart.iter().position(|entry| entry.name() == name)
}

#[test]
fn counts_entries_in_the_cart() {
    let mut cart = fresh_cart();
    let item = apple();
    cart.add(item.clone());
    assert_eq!(cart.len(), 1);

    let item2 = Item::new("Banana", 0.99).unwrap();
    cart.add(item);
    cart.add(item2);
    assert_eq!(cart.len(), 3);
}

#[test]
fn lists_all_items_in_the_cart() {
    let mut cart = fresh_cart();
    cart.add(apple());

    let items = cart.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name(), "apple");
}

#[test]
fn added_item_is_first_entry() {
    let mut cart = fresh_cart();
    cart.add(apple());
    assert_eq!(position_of(&cart, "apple"), Some(0));
}

#[test]
fn removed_item_is_gone() {
    let mut cart = fresh_cart();
    let item = apple();
    cart.add(item.clone());
    cart.remove(&item);

    assert_eq!(position_of(&cart, "apple"), None);
    assert!(cart.items().is_empty());
}

#[test]
fn count_tracks_add_and_remove() {
    let mut cart = fresh_cart();
    let item = apple();
    cart.add(item.clone());

    let before_remove = cart.len();
    cart.remove(&item);
    assert_eq!(cart.len(), before_remove - 1);

    let before_add = cart.len();
    cart.add(item);
    assert_eq!(cart.len(), before_add + 1);
}

#[test]
fn cleared_cart_has_no_items() {
    let mut cart = fresh_cart();
    cart.add(apple());
    cart.clear();
    assert_eq!(cart.len(), 0);

    // Clearing an already-empty cart changes nothing.
    cart.clear();
    assert!(cart.is_empty());
}

#[test]
fn total_cost_of_all_items() {
    let mut cart = fresh_cart();
    let item = apple();
    let item2 = Item::new("banana", 1.29).unwrap();
    cart.add(item.clone());
    cart.add(item2);
    cart.add(item);

    assert!((cart.total_cost() - 3.27).abs() < 1e-9);
}

#[test]
fn removing_from_one_cart_leaves_another_alone() {
    let mut mine = fresh_cart();
    let mut yours = fresh_cart();
    let item = apple();
    mine.add(item.clone());
    yours.add(item.clone());

    mine.remove(&item);
    assert!(mine.is_empty());
    assert_eq!(yours.items(), &[item][..]);
}

#[test]
fn invalid_items_never_reach_a_cart() {
    assert!(Item::new("apple", -0.99).is_err());
    assert!(Item::with_quantity("apple", 0.99, 0).is_err());
}
