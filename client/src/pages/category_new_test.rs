use super::*;

#[test]
fn name_is_required() {
    assert_eq!(new_category("   ", CategoryType::Expense, DEFAULT_COLOR).unwrap_err(), "Name is required.");
}

#[test]
fn colour_must_be_hex() {
    assert!(new_category("Food", CategoryType::Expense, "red").is_err());
    assert!(new_category("Food", CategoryType::Expense, "#12345").is_err());
    assert!(new_category("Food", CategoryType::Expense, "#12345g").is_err());
}

#[test]
fn valid_category_is_normalized() {
    let category = new_category(" Salary ", CategoryType::Income, "#A0B1C2").unwrap();
    assert_eq!(category.name, "Salary");
    assert_eq!(category.kind, CategoryType::Income);
    assert_eq!(category.color, "#a0b1c2");
}
