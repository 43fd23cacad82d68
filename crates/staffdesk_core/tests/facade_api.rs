use staffdesk_core::db::open_db_in_memory;
use staffdesk_core::{
    MemoryEmployeeRepository, Role, ServiceError, SqliteEmployeeRepository, StaffDesk,
};

#[test]
fn facade_covers_the_full_directory_workflow() {
    let repo = MemoryEmployeeRepository::new();
    let desk = StaffDesk::new(&repo);

    let ann = desk.add_employee("Ann", 2, Role::Intern).unwrap();
    desk.add_employee("Bob", 7, Role::Head).unwrap();

    assert_eq!(desk.total_employees().unwrap(), 2);
    assert_eq!(desk.employee_by_index(0).unwrap(), ann);
    assert_eq!(desk.resolve_index(0).unwrap(), ann.id);

    let updated = desk
        .update_employee_by_index(0, "Ann-Maria", Role::Manager, 4)
        .unwrap();
    assert_eq!(updated.id, ann.id);
    assert_eq!(desk.employee(ann.id).unwrap().unwrap().name, "Ann-Maria");

    let removed = desk.delete_employee_by_index(0).unwrap();
    assert_eq!(removed.id, ann.id);
    assert_eq!(desk.total_employees().unwrap(), 1);
}

#[test]
fn facade_delegates_salary_and_statistics() {
    let repo = MemoryEmployeeRepository::new();
    let desk = StaffDesk::new(&repo);

    let head = desk.add_employee("Ann", 10, Role::Head).unwrap();
    desk.add_employee("Bob", 2, Role::Intern).unwrap();

    assert_eq!(desk.calculate_salary(&head), 150_000.0);
    assert_eq!(desk.average_experience().unwrap(), 6.0);
    assert_eq!(desk.most_experienced().unwrap().unwrap().id, head.id);
    assert_eq!(
        desk.total_salary_budget().unwrap(),
        150_000.0 + 2.0 * 1.1 * 10_000.0
    );

    let distribution = desk.role_distribution().unwrap();
    assert_eq!(distribution[&Role::Head], 1);
    assert_eq!(distribution[&Role::Intern], 1);
}

#[test]
fn facade_propagates_index_errors_unchanged() {
    let repo = MemoryEmployeeRepository::new();
    let desk = StaffDesk::new(&repo);

    let err = desk.employee_by_index(0).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::IndexOutOfRange { index: 0, count: 0 }
    ));
}

#[test]
fn facade_runs_on_the_sqlite_store_as_well() {
    let conn = open_db_in_memory().unwrap();
    let desk = StaffDesk::new(SqliteEmployeeRepository::new(&conn));

    let ann = desk.add_employee("Ann", 3, Role::Manager).unwrap();
    assert_eq!(desk.total_employees().unwrap(), 1);
    assert_eq!(desk.employees_by_role(Role::Manager).unwrap()[0], ann);

    let mut current = ann;
    desk.add_work_experience(&mut current).unwrap();
    assert_eq!(
        desk.employee(current.id).unwrap().unwrap().experience_years,
        4
    );
}
