//! Shared builders for integration tests.

use address_book::{AddressBook, Record};

/// Build a record with the given phones.
#[allow(dead_code)]
pub fn record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name, None).expect("fixture name is valid");
    for phone in phones {
        record.add_phone(phone).expect("fixture phone is valid");
    }
    record
}

/// Build a book of `count` contacts named `Contact 000`, `Contact 001`, ...
/// each with one distinct phone number.
#[allow(dead_code)]
pub fn numbered_book(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..count {
        let phone = format!("{:010}", i);
        book.add_record(record(&format!("Contact {:03}", i), &[phone.as_str()]));
    }
    book
}

/// The phone list of a record as plain strings.
#[allow(dead_code)]
pub fn phones_of(record: &Record) -> Vec<String> {
    record.phones().iter().map(|p| p.to_string()).collect()
}
