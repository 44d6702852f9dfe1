use std::fs;

use tally_client::{Expense, ExpenseBook, Store};
use tempfile::tempdir;

fn expense(amount: f64, category: &str, date: &str) -> Expense {
    Expense {
        amount,
        category: category.to_string(),
        date: date.to_string(),
    }
}

#[test]
fn save_then_load_round_trips_records_in_order() {
    let temp = tempdir();
    assert!(temp.is_ok());
    if let Ok(temp_dir) = temp {
        let store = Store::new(temp_dir.path().join("expenses.json"));
        let book = ExpenseBook::from(vec![
            expense(10.0, "Food", "2024-01-01"),
            expense(0.1, "Transport", "2024-01-02"),
            expense(-3.75, "Refund", "not-a-date"),
            expense(1234567.89, "Rent", "2024-01-03"),
        ]);

        let saved = store.save(&book);
        assert!(saved.is_ok());

        let loaded = store.load();
        assert_eq!(loaded, book);
    }
}

#[test]
fn missing_file_loads_as_empty_book() {
    let temp = tempdir();
    assert!(temp.is_ok());
    if let Ok(temp_dir) = temp {
        let store = Store::new(temp_dir.path().join("absent.json"));
        assert!(store.load().is_empty());
        assert!(!store.path().exists());
    }
}

#[test]
fn corrupt_file_loads_as_empty_book() {
    let temp = tempdir();
    assert!(temp.is_ok());
    if let Ok(temp_dir) = temp {
        let path = temp_dir.path().join("expenses.json");
        let cases = [
            "",
            "not json",
            "[{\"amount\": 1.0, \"category\": \"Food\"",
            "{\"amount\": 1.0, \"category\": \"Food\", \"date\": \"2024-01-01\"}",
            "[{\"amount\": \"ten\", \"category\": \"Food\", \"date\": \"2024-01-01\"}]",
            "[{\"amount\": 1.0, \"category\": null, \"date\": \"2024-01-01\"}]",
            "[1, 2, 3]",
        ];

        for body in cases {
            let write = fs::write(&path, body);
            assert!(write.is_ok());
            let store = Store::new(&path);
            assert!(store.load().is_empty(), "expected empty book for {body:?}");
        }
    }
}

#[test]
fn one_malformed_record_invalidates_the_whole_file() {
    let temp = tempdir();
    assert!(temp.is_ok());
    if let Ok(temp_dir) = temp {
        let path = temp_dir.path().join("expenses.json");
        let body = r#"[
    {"amount": 5.0, "category": "Food", "date": "2024-01-01"},
    {"amount": 6.0, "date": "2024-01-02"}
]"#;
        let write = fs::write(&path, body);
        assert!(write.is_ok());
        assert!(Store::new(&path).load().is_empty());
    }
}

#[test]
fn hand_written_file_with_integer_amounts_loads() {
    let temp = tempdir();
    assert!(temp.is_ok());
    if let Ok(temp_dir) = temp {
        let path = temp_dir.path().join("expenses.json");
        let body = r#"[{"amount": 20, "category": "Transport", "date": "2024-01-01", "note": "bus"}]"#;
        let write = fs::write(&path, body);
        assert!(write.is_ok());

        let loaded = Store::new(&path).load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.as_slice()[0], expense(20.0, "Transport", "2024-01-01"));
    }
}

#[test]
fn save_overwrites_instead_of_appending() {
    let temp = tempdir();
    assert!(temp.is_ok());
    if let Ok(temp_dir) = temp {
        let store = Store::new(temp_dir.path().join("expenses.json"));
        let first = ExpenseBook::from(vec![
            expense(1.0, "Food", "2024-01-01"),
            expense(2.0, "Food", "2024-01-02"),
        ]);
        let second = ExpenseBook::from(vec![expense(3.0, "Rent", "2024-02-01")]);

        assert!(store.save(&first).is_ok());
        assert!(store.save(&second).is_ok());
        assert_eq!(store.load(), second);

        let body = fs::read_to_string(store.path());
        assert!(body.is_ok());
        if let Ok(text) = body {
            assert!(text.starts_with("[\n    {\n        \"amount\": 3.0,"));
            assert!(!text.contains("2024-01-01"));
        }
    }
}

#[test]
fn save_into_missing_directory_fails_loudly() {
    let temp = tempdir();
    assert!(temp.is_ok());
    if let Ok(temp_dir) = temp {
        let store = Store::new(temp_dir.path().join("no-such-dir").join("expenses.json"));
        let saved = store.save(&ExpenseBook::from(vec![expense(1.0, "Food", "2024-01-01")]));
        assert!(saved.is_err());
        if let Err(error) = saved {
            assert_eq!(error.code, "store_write_failed");
            assert!(!error.is_recoverable());
        }
    }
}

#[test]
fn save_refuses_non_finite_amount_and_keeps_previous_file() {
    let temp = tempdir();
    assert!(temp.is_ok());
    if let Ok(temp_dir) = temp {
        let store = Store::new(temp_dir.path().join("expenses.json"));
        let good = ExpenseBook::from(vec![expense(1.0, "Food", "2024-01-01")]);
        assert!(store.save(&good).is_ok());
        let before = fs::read_to_string(store.path()).unwrap_or_default();

        let bad = ExpenseBook::from(vec![
            expense(1.0, "Food", "2024-01-01"),
            expense(f64::NAN, "Food", "2024-01-02"),
        ]);
        let saved = store.save(&bad);
        assert!(saved.is_err());
        if let Err(error) = saved {
            assert_eq!(error.code, "store_write_failed");
            assert!(!error.is_recoverable());
        }

        assert_eq!(fs::read_to_string(store.path()).unwrap_or_default(), before);
        assert_eq!(store.load(), good);
    }
}
