#![no_main]

use libfuzzer_sys::arbitrary::{self, Arbitrary};
use radix_set::{visitor::WellFormedChecker, InsertError, RadixSet};
use std::collections::HashSet;

#[derive(Arbitrary, Debug)]
enum Action {
    Insert(Box<[u8]>),
    Delete(Box<[u8]>),
    Contains(Box<[u8]>),
    Clear,
    CheckWellFormed,
}

libfuzzer_sys::fuzz_target!(|actions: Vec<Action>| {
    let mut set = RadixSet::new();
    let mut model = HashSet::new();

    for action in actions {
        match action {
            Action::Insert(key) => {
                let expected = if key.is_empty() {
                    Err(InsertError::EmptyKey)
                } else if model.insert(key.clone()) {
                    Ok(())
                } else {
                    Err(InsertError::AlreadyPresent)
                };
                assert_eq!(set.try_insert(&key), expected);
                assert_eq!(set.contains(&key), !key.is_empty());
            },
            Action::Delete(key) => {
                assert_eq!(set.delete(&key), model.remove(&key));
                assert!(!set.contains(&key));
            },
            Action::Contains(key) => {
                assert_eq!(set.contains(&key), model.contains(&key));
            },
            Action::Clear => {
                set.clear();
                model.clear();
            },
            Action::CheckWellFormed => {
                let _ = WellFormedChecker::check(&set).unwrap();
            },
        }

        assert_eq!(set.len(), model.len());
    }

    let _ = WellFormedChecker::check(&set).unwrap();
    for key in &model {
        assert!(set.contains(key));
    }
});
