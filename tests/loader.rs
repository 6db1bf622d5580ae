use std::io::Write;

use chain_db::{
    Database, DatabaseError, Employee, LoadError, MaritalStatus, Table, db::loader,
};
use tempfile::NamedTempFile;

fn write_records(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(text.as_bytes()).expect("Failed to write temp file");
    file
}

#[test]
fn load_file_fills_table() {
    let file = write_records(
        "Grace\tHopper\tm\t100\t5551000\t1\t30\n\
         Alan   Turing  S  101  5551001  2  12\n",
    );

    let mut table: Table<Employee> = Table::new("Faculty");
    let count = loader::load_file(&mut table, file.path()).unwrap();

    assert_eq!(count, 2);
    assert_eq!(table.len(), 2);

    let grace = table.first().unwrap();
    assert_eq!(grace.person.status, MaritalStatus::Married);
    assert_eq!(grace.department, "Faculty");
    assert_eq!(table.last().unwrap().id, "101");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let mut table = Table::new("Faculty");
    let err = loader::load_file(&mut table, &path).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn missing_fields_names_file_and_line() {
    let file = write_records("Grace Hopper m 100 5551000 1 30\nAlan Turing\n");
    let mut table = Table::new("Faculty");

    match loader::load_file(&mut table, file.path()) {
        Err(LoadError::MissingFields { source_name, line }) => {
            assert_eq!(source_name, file.path().display().to_string());
            assert_eq!(line, 2);
        }
        other => panic!("Expected MissingFields, got {other:?}"),
    }
    assert!(table.is_empty());
}

#[test]
fn database_loads_named_tables() {
    let faculty = write_records("Grace Hopper m 100 5551000 1 30\n");
    let admin = write_records("Grace Hopper m 100 5551000 1 30\nKaty Bell w 7 5551007 3 4\n");

    let mut db = Database::new();
    db.load_table("Faculty", faculty.path()).unwrap();
    db.load_table("Admin", admin.path()).unwrap();

    assert_eq!(db.table_names(), vec!["Faculty", "Admin"]);

    let union = db
        .get_table("F")
        .unwrap()
        .union(db.get_table("A").unwrap())
        .unwrap();
    let departments: Vec<_> = union.iter().map(|e| e.department.as_str()).collect();
    assert_eq!(departments, vec!["Faculty, Admin", "Admin"]);

    let err = db.load_table("Broken", "/definitely/not/here.txt").unwrap_err();
    assert!(matches!(err, DatabaseError::Load(LoadError::Io { .. })));
}
