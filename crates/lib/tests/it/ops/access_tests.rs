//! Accessor tests: the twelve get/first/last/by_number variants

use catena::{Absent, Container, Locator, Value, container, ops};

#[test]
fn test_absent_policies() {
    let c = container! {"a" => 1};
    let missing = Locator::Key("z".into());
    assert_eq!(ops::lookup(&c, &missing, Absent::Null).unwrap(), Value::Null);
    assert_eq!(
        ops::lookup(&c, &missing, Absent::Default(Value::from("d"))).unwrap(),
        Value::from("d")
    );
    let err = ops::lookup(&c, &missing, Absent::Error).unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_usage_error());
}

#[test]
fn test_wrappers_on_empty() {
    let empty = Container::new();
    assert_eq!(ops::first(&empty), Value::Null);
    assert_eq!(ops::last(&empty), Value::Null);
    assert_eq!(ops::first_or_else(&empty, "f"), Value::from("f"));
    assert_eq!(ops::last_or_else(&empty, "l"), Value::from("l"));
    assert_eq!(ops::by_number_or_else(&empty, 0, 9), Value::Int(9));
    assert_eq!(ops::get_or_else(&empty, "k", false), Value::Bool(false));
    assert!(ops::first_or_exception(&empty).unwrap_err().is_not_found());
    assert!(ops::last_or_exception(&empty).unwrap_err().is_not_found());
    assert!(ops::get_or_exception(&empty, 0).unwrap_err().is_not_found());
}

#[test]
fn test_positions_ignore_keys() {
    let c = container! {10 => "a", "k" => "b", 3 => "c"};
    assert_eq!(ops::first(&c), Value::from("a"));
    assert_eq!(ops::last(&c), Value::from("c"));
    assert_eq!(ops::by_number(&c, 1), Value::from("b"));
    assert_eq!(ops::by_number(&c, -3), Value::from("a"));
    assert_eq!(ops::get(&c, 3), Value::from("c"));
    assert_eq!(ops::by_number_or_exception(&c, 2).unwrap(), Value::from("c"));
}

#[test]
fn test_not_found_message_names_the_element() {
    let err = ops::by_number_or_exception(&container![1], 4).unwrap_err();
    assert_eq!(err.to_string(), "Element number 4 not found");
    let err = ops::last_or_exception(&Container::new()).unwrap_err();
    assert_eq!(err.to_string(), "Last element not found");
}
