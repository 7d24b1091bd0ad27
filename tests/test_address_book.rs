mod fixtures;

use address_book::AddressBook;
use fixtures::{numbered_book, record};
use std::collections::HashSet;

#[test]
fn test_add_record_last_write_wins() {
    let mut book = AddressBook::new();
    book.add_record(record("John", &["1111111111"]));
    book.add_record(record("John", &["2222222222"]));

    assert_eq!(book.len(), 1);
    assert_eq!(book.find("John"), Some(&record("John", &["2222222222"])));
}

#[test]
fn test_delete_existing_and_missing() {
    let mut book = numbered_book(3);
    book.delete("Contact 001");
    book.delete("Contact 001");
    book.delete("Nobody");

    assert_eq!(book.len(), 2);
    assert!(book.find("Contact 001").is_none());
    assert!(book.find("Contact 000").is_some());
}

#[test]
fn test_pagination_completeness() {
    for count in [0usize, 1, 2, 5, 6, 7, 20] {
        for page_size in [1usize, 2, 3, 7, 25] {
            let book = numbered_book(count);
            let pages: Vec<String> = book.pages(page_size).collect();

            assert_eq!(
                pages.len(),
                count.div_ceil(page_size),
                "count={} page_size={}",
                count,
                page_size
            );
            for page in &pages {
                assert!(page.lines().count() <= page_size);
                assert!(page.ends_with('\n'));
            }

            let expected: Vec<String> = book
                .iter()
                .map(|(name, record)| format!("{}: {}", name, record))
                .collect();
            let lines: Vec<String> = pages
                .iter()
                .flat_map(|page| page.lines().map(str::to_string))
                .collect();
            assert_eq!(lines, expected);

            let unique: HashSet<&String> = lines.iter().collect();
            assert_eq!(unique.len(), count);
        }
    }
}

#[test]
fn test_pages_stop_early() {
    let book = numbered_book(10);
    let first_two: Vec<String> = book.pages(3).take(2).collect();

    assert_eq!(first_two.len(), 2);
    assert!(first_two[1].starts_with("Contact 003: "));
}

#[test]
fn test_edit_through_book() {
    let mut book = AddressBook::new();
    book.add_record(record("John", &["1234567890", "5555555555"]));
    book.add_record(record("Jane", &["9876543210"]));

    book.find_mut("John")
        .unwrap()
        .edit_phone("1234567890", "1112223333")
        .unwrap();

    let first_page = book.pages(2).next().unwrap();
    assert_eq!(
        first_page,
        "John: Contact name: John, phones: 1112223333; 5555555555\n\
         Jane: Contact name: Jane, phones: 9876543210\n"
    );
}
