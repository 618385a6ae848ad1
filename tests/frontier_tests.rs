use min_route::data_structures::FrontierHeap;

#[test]
fn test_pop_order_is_ascending_cost() {
    let mut frontier: FrontierHeap<usize, u32> = FrontierHeap::new();
    frontier.push(1, 30);
    frontier.push(2, 10);
    frontier.push(3, 20);

    assert_eq!(frontier.pop(), Some((2, 10)));
    assert_eq!(frontier.pop(), Some((3, 20)));
    assert_eq!(frontier.pop(), Some((1, 30)));
    assert_eq!(frontier.pop(), None);
}

#[test]
fn test_peek_does_not_remove() {
    let mut frontier: FrontierHeap<&str, u32> = FrontierHeap::new();
    assert!(frontier.is_empty());

    frontier.push("b", 7);
    frontier.push("a", 3);

    assert_eq!(frontier.peek(), Some(("a", 3)));
    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.pop(), Some(("a", 3)));
    assert_eq!(frontier.len(), 1);
}

#[test]
fn test_duplicate_entries_are_kept() {
    // The engines rely on being able to re-push a node at a lower cost and
    // pop both entries.
    let mut frontier: FrontierHeap<usize, u32> = FrontierHeap::new();
    frontier.push(7, 50);
    frontier.push(7, 20);

    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.pop(), Some((7, 20)));
    assert_eq!(frontier.pop(), Some((7, 50)));
}
