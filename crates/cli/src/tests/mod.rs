// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod repl_tests;

use hirehive::AddressBookStorage;
use hirehive_domain::{Address, AddressBook, Email, Name, Person, Phone, Role};

pub fn create_test_person(name: &str) -> Person {
    let email: String = format!("{}@example.com", name.replace(' ', "").to_lowercase());
    Person::new(
        Name::new(name).unwrap(),
        Phone::new("93210283").unwrap(),
        Email::new(&email).unwrap(),
        Address::new("Blk 436 Serangoon Gardens Street 26, #16-43").unwrap(),
        Role::new("Product Manager").unwrap(),
    )
}

/// Accepts every save without writing anything.
#[derive(Debug, Default)]
pub struct NullStorage;

impl AddressBookStorage for NullStorage {
    type Error = String;

    fn save_address_book(&self, _address_book: &AddressBook) -> Result<(), Self::Error> {
        Ok(())
    }
}
