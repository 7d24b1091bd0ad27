//! Address Book - sample session
//!
//! Builds a small address book, edits a few entries, and prints the book
//! page by page along with each contact's distance to their next birthday.

use address_book::{AddressBook, Config, Record};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so stdout carries only the rendered book
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(page_size = config.page_size, "Configuration loaded");

    let book = match build_sample_book() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to build sample address book: {:#}", e);
            return Err(e);
        }
    };

    for page in book.pages(config.page_size) {
        println!("{}", page);
    }

    for (name, record) in &book {
        match record.days_to_birthday() {
            Some(days) => println!("{}: {} days until birthday", name, days),
            None => println!("{}: no birthday on record", name),
        }
    }

    Ok(())
}

fn build_sample_book() -> Result<AddressBook> {
    let mut book = AddressBook::new();

    let mut john = Record::new("John", None)?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane", None)?;
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    book.find_mut("John")
        .context("John was just added")?
        .edit_phone("1234567890", "1112223333")?;

    let mut tony = Record::new("Tony", Some("1999.11.06"))?;
    for phone in ["0000000000", "0000000001", "0000000002"] {
        tony.add_phone(phone)?;
    }
    book.add_record(tony);

    info!(contacts = book.len(), "Sample address book ready");
    Ok(book)
}
