use super::*;

#[test]
fn monthly_budget_without_end_date() {
    let budget = new_budget("3", "500", BudgetPeriod::Monthly, "2024-01-01", "").unwrap();
    assert_eq!(budget.category_id, 3);
    assert_eq!(budget.end_date, None);
    assert_eq!(budget.period, BudgetPeriod::Monthly);
}

#[test]
fn custom_period_requires_end_date() {
    assert_eq!(
        new_budget("3", "500", BudgetPeriod::Custom, "2024-01-01", " ").unwrap_err(),
        "A custom period needs an end date."
    );
    let budget = new_budget("3", "500", BudgetPeriod::Custom, "2024-01-01", "2024-02-15").unwrap();
    assert_eq!(budget.end_date.as_deref(), Some("2024-02-15"));
}

#[test]
fn end_date_cannot_precede_start() {
    assert!(new_budget("3", "500", BudgetPeriod::Yearly, "2024-05-01", "2024-04-30").is_err());
}

#[test]
fn start_date_is_required() {
    assert_eq!(new_budget("3", "500", BudgetPeriod::Weekly, "", "").unwrap_err(), "Pick a start date.");
}

#[test]
fn serializes_period_in_api_casing() {
    let budget = new_budget("3", "500", BudgetPeriod::Quarterly, "2024-01-01", "").unwrap();
    let json = serde_json::to_value(&budget).unwrap();
    assert_eq!(json["period"], "QUARTERLY");
    assert_eq!(json["startDate"], "2024-01-01");
    assert!(json["endDate"].is_null());
}
