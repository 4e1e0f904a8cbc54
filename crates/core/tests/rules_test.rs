use pretty_assertions::assert_eq;
use rstest::rstest;
use rust_decimal_macros::dec;
use salon_core::{
    access::{requires_role, Principal},
    errors::SalonError,
    finance::{report_range, summarize, RevenueEntry},
    inventory::{remaining_stock, usage_amount},
    lifecycle::{can_transition, ensure_transition, next_statuses},
    models::{
        appointment::AppointmentStatus::{self, Cancelled, Completed, Scheduled},
        report::FinancialQuery,
        user::Role,
    },
};
use uuid::Uuid;

#[rstest]
#[case(Scheduled, Completed, true)]
#[case(Scheduled, Cancelled, true)]
#[case(Scheduled, Scheduled, true)]
#[case(Completed, Completed, true)]
#[case(Cancelled, Cancelled, true)]
#[case(Completed, Scheduled, false)]
#[case(Completed, Cancelled, false)]
#[case(Cancelled, Scheduled, false)]
#[case(Cancelled, Completed, false)]
fn test_status_transitions(
    #[case] from: AppointmentStatus,
    #[case] to: AppointmentStatus,
    #[case] allowed: bool,
) {
    assert_eq!(can_transition(from, to), allowed);
    assert_eq!(ensure_transition(from, to).is_ok(), allowed);
}

#[test]
fn test_terminal_statuses_have_no_successors() {
    assert_eq!(next_statuses(Scheduled), vec![Completed, Cancelled]);
    assert!(next_statuses(Completed).is_empty());
    assert!(next_statuses(Cancelled).is_empty());
}

#[test]
fn test_rejected_transition_names_allowed_statuses() {
    let err = ensure_transition(Completed, Scheduled).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Validation error: Cannot change appointment status from concluido to agendado; next allowed: []"
    );
}

#[test]
fn test_requires_role() {
    assert!(requires_role(Role::Admin, &[Role::Admin]).is_ok());
    assert!(requires_role(Role::Employee, Role::STAFF).is_ok());
    assert!(matches!(
        requires_role(Role::Client, Role::STAFF),
        Err(SalonError::Authorization(_))
    ));
    assert!(matches!(
        requires_role(Role::Employee, &[Role::Admin]),
        Err(SalonError::Authorization(_))
    ));
}

#[test]
fn test_principal_require_role() {
    let principal = Principal {
        user_id: Uuid::new_v4(),
        email: "ana@salon.test".to_string(),
        name: "Ana".to_string(),
        role: Role::Employee,
    };

    assert!(principal.require_role(Role::STAFF).is_ok());
    assert!(principal.require_role(&[Role::Admin]).is_err());
}

#[rstest]
#[case(None, 1)]
#[case(Some(1), 1)]
#[case(Some(5), 5)]
fn test_usage_amount(#[case] requested: Option<i32>, #[case] expected: i32) {
    assert_eq!(usage_amount(requested).unwrap(), expected);
}

#[rstest]
#[case(Some(0))]
#[case(Some(-3))]
fn test_usage_amount_rejects_non_positive(#[case] requested: Option<i32>) {
    assert!(matches!(usage_amount(requested), Err(SalonError::Validation(_))));
}

#[test]
fn test_remaining_stock_never_negative() {
    assert_eq!(remaining_stock(10, 3).unwrap(), 7);
    assert_eq!(remaining_stock(3, 3).unwrap(), 0);
    assert!(matches!(remaining_stock(2, 3), Err(SalonError::Validation(_))));
}

#[test]
fn test_summarize_revenue_and_commission() {
    let joana = Uuid::new_v4();
    let carla = Uuid::new_v4();
    let entries = vec![
        RevenueEntry {
            employee_id: joana,
            employee_name: "Joana".to_string(),
            price: dec!(100.00),
            commission_percent: dec!(30),
        },
        RevenueEntry {
            employee_id: joana,
            employee_name: "Joana".to_string(),
            price: dec!(50.00),
            commission_percent: dec!(30),
        },
        RevenueEntry {
            employee_id: carla,
            employee_name: "Carla".to_string(),
            price: dec!(80.00),
            commission_percent: dec!(40),
        },
    ];

    let summary = summarize(&entries);

    assert_eq!(summary.completed_appointments, 3);
    assert_eq!(summary.revenue, dec!(230.00));
    assert_eq!(summary.commission, dec!(77.00));
    assert_eq!(summary.profit, dec!(153.00));
    assert_eq!(summary.by_employee.len(), 2);
    assert_eq!(summary.by_employee[0].employee_id, joana);
    assert_eq!(summary.by_employee[0].appointments, 2);
    assert_eq!(summary.by_employee[0].commission, dec!(45.00));
    assert_eq!(summary.by_employee[1].revenue, dec!(80.00));
}

#[test]
fn test_summarize_empty() {
    let summary = summarize(&[]);

    assert_eq!(summary.completed_appointments, 0);
    assert_eq!(summary.profit, dec!(0));
    assert!(summary.by_employee.is_empty());
}

#[test]
fn test_report_range() {
    let all_time = FinancialQuery::default();
    let january = FinancialQuery { year: Some(2026), month: Some(1) };
    let whole_year = FinancialQuery { year: Some(2026), month: None };
    let month_only = FinancialQuery { year: None, month: Some(1) };

    assert!(report_range(&all_time).unwrap().is_none());
    let january = report_range(&january).unwrap().unwrap();
    assert_eq!((january.end - january.start).num_days(), 31);
    let whole_year = report_range(&whole_year).unwrap().unwrap();
    assert_eq!((whole_year.end - whole_year.start).num_days(), 365);
    assert!(matches!(report_range(&month_only), Err(SalonError::Validation(_))));
}
