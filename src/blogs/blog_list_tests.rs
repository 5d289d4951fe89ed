use proptest::prelude::*;

use super::*;

fn blog(id: &str, title: &str, author: &str, likes: u64) -> Blog {
    Blog {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        url: format!("http://{id}.example"),
        likes,
        user: None,
    }
}

fn titles(list: &BlogList) -> Vec<&str> {
    list.visible_blogs().map(|b| b.title.as_str()).collect()
}

fn sample() -> BlogList {
    let mut list = BlogList::new();
    list.replace_all(vec![
        blog("1", "React patterns", "Michael Chan", 7),
        blog("2", "Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
        blog("3", "Canonical string reduction", "Edsger W. Dijkstra", 12),
        blog("4", "First class tests", "Robert C. Martin", 10),
    ]);
    list
}

#[test]
fn test_replace_all_sorts_by_likes_descending() {
    let list = sample();
    let likes: Vec<u64> = list.all().iter().map(|b| b.likes).collect();
    assert_eq!(likes, vec![12, 10, 7, 5]);
}

#[test]
fn test_insert_appends_exactly_one_entry() {
    let mut list = sample();
    list.insert(blog("5", "T", "A", 0));

    assert_eq!(list.len(), 5);
    let matching: Vec<&Blog> = list.all().iter().filter(|b| b.title == "T").collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].author, "A");
    // Zero likes sorts last
    assert_eq!(list.all().last().unwrap().id, "5");
}

#[test]
fn test_insert_keeps_sort_order() {
    let mut list = sample();
    list.insert(blog("5", "Popular", "P", 11));
    let likes: Vec<u64> = list.all().iter().map(|b| b.likes).collect();
    assert_eq!(likes, vec![12, 11, 10, 7, 5]);
}

#[test]
fn test_ties_keep_arrival_order() {
    let mut list = BlogList::new();
    list.insert(blog("a", "first", "x", 1));
    list.insert(blog("b", "second", "x", 1));
    assert_eq!(titles(&list), vec!["first", "second"]);
}

#[test]
fn test_replace_resorts_from_server_copy() {
    let mut list = sample();
    assert!(list.replace(blog(
        "2",
        "Go To Statement Considered Harmful",
        "Edsger W. Dijkstra",
        20
    )));
    assert_eq!(list.all()[0].id, "2");
    assert_eq!(list.all()[0].likes, 20);
}

#[test]
fn test_replace_unknown_id_is_ignored() {
    let mut list = sample();
    assert!(!list.replace(blog("99", "Ghost", "Nobody", 100)));
    assert_eq!(list.len(), 4);
}

#[test]
fn test_remove_deletes_exactly_that_entry() {
    let mut list = sample();
    let removed = list.remove("1").unwrap();

    assert_eq!(removed.title, "React patterns");
    assert_eq!(list.len(), 3);
    assert!(list.get("1").is_none());
    assert!(list.get("2").is_some());
    assert!(list.get("3").is_some());
    assert!(list.get("4").is_some());
}

#[test]
fn test_remove_unknown_id_returns_none() {
    let mut list = sample();
    assert!(list.remove("99").is_none());
    assert_eq!(list.len(), 4);
}

#[test]
fn test_filter_matches_title_and_author_case_insensitive() {
    let mut list = sample();

    list.set_filter("dijkstra");
    assert_eq!(
        titles(&list),
        vec!["Canonical string reduction", "Go To Statement Considered Harmful"]
    );

    list.set_filter("REACT");
    assert_eq!(titles(&list), vec!["React patterns"]);

    list.set_filter("");
    assert_eq!(list.visible_count(), 4);
}

#[test]
fn test_filter_with_no_matches() {
    let mut list = sample();
    list.set_filter("zzz");
    assert_eq!(list.visible_count(), 0);
    assert!(list.selected_blog().is_none());
    assert!(list.selected_index().is_none());
}

#[test]
fn test_filter_applies_to_new_entries() {
    let mut list = sample();
    list.set_filter("rust");
    list.insert(blog("5", "Rust in Action", "Tim McNamara", 3));
    assert_eq!(titles(&list), vec!["Rust in Action"]);
}

#[test]
fn test_selection_moves_and_clamps() {
    let mut list = sample();
    assert_eq!(list.selected_index(), Some(0));

    list.select_prev();
    assert_eq!(list.selected_index(), Some(0));

    list.select_next();
    list.select_next();
    list.select_next();
    list.select_next();
    assert_eq!(list.selected_index(), Some(3));

    list.select_first();
    assert_eq!(list.selected_index(), Some(0));
    list.select_last();
    assert_eq!(list.selected_index(), Some(3));
}

#[test]
fn test_selection_follows_entry_after_resort() {
    let mut list = sample();
    list.select_last();
    assert_eq!(list.selected_blog().unwrap().id, "2");

    list.replace(blog("2", "Go To Statement Considered Harmful", "Edsger W. Dijkstra", 50));
    assert_eq!(list.selected_blog().unwrap().id, "2");
    assert_eq!(list.selected_index(), Some(0));
}

#[test]
fn test_remove_selected_moves_to_next_row() {
    let mut list = sample();
    list.select_next();
    let removed_id = list.selected_blog().unwrap().id.clone();
    list.remove(&removed_id);
    assert_eq!(list.selected_index(), Some(1));

    list.select_last();
    let last_id = list.selected_blog().unwrap().id.clone();
    list.remove(&last_id);
    assert_eq!(list.selected_index(), Some(1));
}

#[test]
fn test_toggle_details() {
    let mut list = sample();
    let id = list.selected_blog().unwrap().id.clone();

    list.toggle_details();
    assert!(list.is_expanded(&id));
    list.toggle_details();
    assert!(!list.is_expanded(&id));
}

#[test]
fn test_replace_all_forgets_details_of_vanished_entries() {
    let mut list = sample();
    list.toggle_details();
    let id = list.selected_blog().unwrap().id.clone();

    list.replace_all(vec![blog("other", "Other", "O", 1)]);
    assert!(!list.is_expanded(&id));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every mutation leaves the cache sorted by likes, most first
    #[test]
    fn prop_sorted_after_any_mutation(
        initial in prop::collection::vec(0u64..50, 0..10),
        inserts in prop::collection::vec(0u64..50, 0..5),
        updates in prop::collection::vec((0usize..15, 0u64..50), 0..5),
        removes in prop::collection::vec(0usize..15, 0..5),
    ) {
        let mut list = BlogList::new();
        list.replace_all(
            initial.iter().enumerate()
                .map(|(i, likes)| blog(&i.to_string(), "t", "a", *likes))
                .collect(),
        );
        for (j, likes) in inserts.iter().enumerate() {
            list.insert(blog(&format!("n{j}"), "t", "a", *likes));
        }
        for (idx, likes) in &updates {
            list.replace(blog(&idx.to_string(), "t", "a", *likes));
        }
        for idx in &removes {
            list.remove(&idx.to_string());
        }

        let likes: Vec<u64> = list.all().iter().map(|b| b.likes).collect();
        prop_assert!(likes.windows(2).all(|w| w[0] >= w[1]));
        prop_assert_eq!(list.visible_count(), list.len());
    }

    /// Removing an id drops exactly one entry when present
    #[test]
    fn prop_remove_is_exact(count in 1usize..10, target in 0usize..10) {
        let mut list = BlogList::new();
        list.replace_all((0..count).map(|i| blog(&i.to_string(), "t", "a", i as u64)).collect());

        let removed = list.remove(&target.to_string());
        if target < count {
            prop_assert!(removed.is_some());
            prop_assert_eq!(list.len(), count - 1);
            prop_assert!(list.get(&target.to_string()).is_none());
        } else {
            prop_assert!(removed.is_none());
            prop_assert_eq!(list.len(), count);
        }
    }

    /// Visible entries are exactly those matching the filter, ignoring case
    #[test]
    fn prop_filter_matches_title_or_author(
        entries in prop::collection::vec(("[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,12}"), 0..10),
        filter in "[a-zA-Z]{0,3}",
    ) {
        let mut list = BlogList::new();
        list.replace_all(
            entries.iter().enumerate()
                .map(|(i, (title, author))| blog(&i.to_string(), title, author, 0))
                .collect(),
        );
        list.set_filter(&filter);

        let needle = filter.to_lowercase();
        let expected = entries
            .iter()
            .filter(|(t, a)| {
                t.to_lowercase().contains(&needle) || a.to_lowercase().contains(&needle)
            })
            .count();
        prop_assert_eq!(list.visible_count(), expected);
        if expected == 0 {
            prop_assert!(list.selected_blog().is_none());
        }
    }
}
