use catalog_core::{page_slice, pages, total_pages, PageState};

#[test]
fn nine_items_four_per_page_makes_three_pages() {
    let items: Vec<usize> = (0..9).collect();
    assert_eq!(total_pages(items.len(), 4), 3);
    assert_eq!(page_slice(&items, 1, 4), &[0, 1, 2, 3]);
    assert_eq!(page_slice(&items, 2, 4), &[4, 5, 6, 7]);
    assert_eq!(page_slice(&items, 3, 4), &[8]);
}

#[test]
fn pages_partition_the_sequence() {
    for len in 0..=12usize {
        let items: Vec<usize> = (0..len).collect();
        for per_page in 1..=10usize {
            let all: Vec<&[usize]> = pages(&items, per_page).collect();
            assert_eq!(all.len(), total_pages(len, per_page));
            assert!(all.iter().all(|page| page.len() <= per_page));
            let rebuilt: Vec<usize> = all.concat();
            assert_eq!(rebuilt, items, "len={len} per_page={per_page}");
        }
    }
}

#[test]
fn empty_sequence_has_one_empty_page() {
    let items: Vec<u8> = Vec::new();
    let state = PageState::new(4, 0);
    assert_eq!(state.total_pages(), 1);
    assert_eq!(state.current_page(), 1);
    assert!(state.slice(&items).is_empty());
    assert!(!state.has_previous());
    assert!(!state.has_next());
}

#[test]
fn go_to_page_clamps_any_integer() {
    for requested in [i64::MIN, -5, -1, 0, 1, 2, 3, 4, 99, i64::MAX] {
        let mut state = PageState::new(4, 9);
        state.go_to_page(requested);
        assert!(
            (1..=state.total_pages()).contains(&state.current_page()),
            "requested {requested}"
        );
    }

    let mut state = PageState::new(4, 9);
    assert!(state.go_to_page(99));
    assert_eq!(state.current_page(), 3);
    assert!(state.go_to_page(-5));
    assert_eq!(state.current_page(), 1);
    assert!(!state.go_to_page(0));
}

#[test]
fn next_and_previous_stop_at_the_bounds() {
    let mut state = PageState::new(4, 9);
    assert!(!state.previous());
    assert!(state.next());
    assert!(state.next());
    assert_eq!(state.current_page(), 3);
    assert!(!state.next());
    assert_eq!(state.current_page(), 3);
    assert!(state.previous());
    assert_eq!(state.current_page(), 2);
}

#[test]
fn reset_returns_to_first_page() {
    let mut state = PageState::new(4, 9);
    state.go_to_page(3);
    state.reset(2);
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.total_pages(), 1);
}

#[test]
fn shrinking_page_count_reclamps_current_page() {
    let mut state = PageState::new(2, 9);
    state.go_to_page(5);
    assert_eq!(state.window(), 8..9);

    assert!(state.set_items_per_page(4));
    assert_eq!(state.total_pages(), 3);
    assert_eq!(state.current_page(), 3);

    assert!(!state.set_items_per_page(4));
    assert!(state.set_items_per_page(0));
    assert_eq!(state.items_per_page(), 1);
    assert_eq!(state.current_page(), 3);
}

#[test]
fn page_numbers_cover_every_page() {
    let state = PageState::new(4, 9);
    assert_eq!(state.page_numbers().collect::<Vec<_>>(), vec![1, 2, 3]);
}
