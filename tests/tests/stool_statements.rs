//! Statement shapes for a record with a composite key, checked against a
//! scripted connection.

use pretty_assertions::assert_eq;
use rowbind::{values, Dialect, InsertStrategy, Record};
use rowbind_core::{
    driver::Response,
    stmt::{Value, ValueRecord},
};
use tests::{assert_err, assert_none, assert_ok, assert_some, db, ScriptedConnection};

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Stool {
    #[column("id, PRIMARY_KEY, AUTO_INCREMENT")]
    id: i64,

    #[column("id_two, PRIMARY_KEY")]
    id_two: i64,

    #[column("number_of_legs")]
    legs: i32,

    #[column]
    material: String,

    #[column]
    color: Option<String>,

    // Not mapped
    scratch: bool,
}

fn stool() -> Stool {
    Stool {
        id: 1,
        id_two: 2,
        legs: 3,
        material: "oak".into(),
        color: None,
        scratch: true,
    }
}

fn row(values: Vec<Value>) -> Response {
    Response::values(vec![ValueRecord::from_vec(values)])
}

#[test]
fn load_selects_non_key_columns() {
    let (db, mut log) = db::scripted(ScriptedConnection::new(Dialect::Mysql).respond(row(vec![
        Value::I32(4),
        Value::from("pine"),
        Value::from("green"),
    ])));

    let mut stool = Stool {
        id: 1,
        id_two: 2,
        ..Default::default()
    };
    assert_ok!(db.bind("stools", &mut stool).load());

    assert_eq!(
        log.pop_sql(),
        (
            "SELECT number_of_legs, material, color FROM stools WHERE id = ? AND id_two = ?"
                .to_string(),
            values![1i64, 2i64]
        )
    );
    assert_eq!(stool.legs, 4);
    assert_eq!(stool.material, "pine");
    assert_eq!(assert_some!(stool.color.as_deref()), "green");
    assert_eq!((stool.id, stool.id_two), (1, 2));
}

#[test]
fn load_widens_and_narrows_integers() {
    let (db, _log) = db::scripted(ScriptedConnection::new(Dialect::Mysql).respond(row(vec![
        Value::I64(4),
        Value::from("pine"),
        Value::Null,
    ])));

    let mut stool = stool();
    assert_ok!(db.bind("stools", &mut stool).load());
    assert_eq!(stool.legs, 4);
    assert_none!(stool.color.as_deref());
}

#[test]
fn load_without_rows_is_not_found() {
    let (db, _log) = db::empty_script(Dialect::Mysql);

    let mut stool = stool();
    let err = assert_err!(db.bind("stools", &mut stool).load());
    assert!(err.is_record_not_found());
    assert!(err.to_string().contains("table=stools"), "{err}");
}

#[test]
fn load_reports_the_field_that_failed() {
    let (db, _log) = db::scripted(ScriptedConnection::new(Dialect::Mysql).respond(row(vec![
        Value::from("four"),
        Value::from("pine"),
        Value::Null,
    ])));

    let mut stool = stool();
    let err = assert_err!(db.bind("stools", &mut stool).load());
    assert!(err.is_field_assignment());
    assert_eq!(
        err.to_string(),
        "could not set field `legs` to returned value: cannot convert String to i32"
    );
}

#[test]
fn load_rejects_rows_of_the_wrong_width() {
    let (db, _log) = db::scripted(
        ScriptedConnection::new(Dialect::Mysql)
            .respond(row(vec![Value::I32(4), Value::from("pine")])),
    );

    let mut stool = stool();
    let err = assert_err!(db.bind("stools", &mut stool).load());
    assert_eq!(
        err.to_string(),
        "row has 2 column(s) but 3 field(s) were expected"
    );
}

#[test]
fn load_where_selects_every_column() {
    let (db, mut log) = db::scripted(ScriptedConnection::new(Dialect::Postgresql).respond(row(
        vec![
            Value::I64(9),
            Value::I64(10),
            Value::I32(3),
            Value::from("oak"),
            Value::Null,
        ],
    )));

    let mut stool = Stool::default();
    assert_ok!(db
        .bind("stools", &mut stool)
        .load_where("material = ? AND number_of_legs > ?", values!["oak", 2]));

    assert_eq!(
        log.pop_sql(),
        (
            "SELECT id, id_two, number_of_legs, material, color FROM stools \
             WHERE material = $1 AND number_of_legs > $2"
                .to_string(),
            values!["oak", 2]
        )
    );
    assert_eq!((stool.id, stool.id_two, stool.legs), (9, 10, 3));
}

#[test]
fn load_where_checks_placeholder_count() {
    let (db, log) = db::empty_script(Dialect::Mysql);

    let mut stool = stool();
    let err = assert_err!(db
        .bind("stools", &mut stool)
        .load_where("material = ? AND color = ?", values!["oak"]));

    assert!(err.is_invalid_statement());
    assert!(log.is_empty());
}

#[test]
fn insert_reads_back_last_insert_id() {
    let (db, mut log) = db::scripted(
        ScriptedConnection::new(Dialect::Mysql)
            .respond(Response::count(1).with_last_insert_id(Some(42))),
    );

    let mut stool = stool();
    assert_ok!(db.bind("stools", &mut stool).insert());

    assert_eq!(
        log.pop_sql(),
        (
            "INSERT INTO stools (id_two, number_of_legs, material) VALUES (?, ?, ?)".to_string(),
            values![2i64, 3, "oak"]
        )
    );
    assert_eq!(stool.id, 42);
}

#[test]
fn insert_without_last_insert_id_is_a_configuration_error() {
    let (db, _log) = db::scripted(ScriptedConnection::new(Dialect::Mysql).respond(Response::count(1)));

    let mut stool = stool();
    let err = assert_err!(db.bind("stools", &mut stool).insert());
    assert!(err.is_invalid_driver_configuration());
    assert_eq!(stool.id, 1);
}

#[test]
fn insert_returning_refreshes_every_field() {
    let (db, mut log) = db::scripted(ScriptedConnection::new(Dialect::Postgresql).respond(row(
        vec![
            Value::I64(7),
            Value::I64(2),
            Value::I32(3),
            Value::from("oak"),
            Value::from("unpainted"),
        ],
    )));

    let mut stool = stool();
    assert_ok!(db.bind("stools", &mut stool).insert());

    let (sql, params) = log.pop_sql();
    assert_eq!(
        sql,
        "INSERT INTO stools (id_two, number_of_legs, material) VALUES ($1, $2, $3) \
         RETURNING id, id_two, number_of_legs, material, color"
    );
    assert_eq!(params, values![2i64, 3, "oak"]);
    assert_eq!(stool.id, 7);
    assert_eq!(assert_some!(stool.color.as_deref()), "unpainted");
}

#[test]
fn insert_strategy_can_be_overridden() {
    let (db, mut log) = db::scripted(ScriptedConnection::new(Dialect::Sqlite).respond(row(vec![
        Value::I64(5),
        Value::I64(2),
        Value::I32(3),
        Value::from("oak"),
        Value::Null,
    ])));

    let mut stool = stool();
    let mut recorder = db.bind("stools", &mut stool);
    assert_ok!(recorder.insert_strategy(InsertStrategy::Returning).insert());
    drop(recorder);

    assert!(log.pop_sql().0.ends_with("RETURNING id, id_two, number_of_legs, material, color"));
    assert_eq!(stool.id, 5);
}

#[test]
fn mysql_rejects_returning_before_sending() {
    let (db, log) = db::empty_script(Dialect::Mysql);

    let mut stool = stool();
    let mut recorder = db.bind("stools", &mut stool);
    let err = assert_err!(recorder.insert_strategy(InsertStrategy::Returning).insert());
    drop(recorder);

    assert!(err.is_invalid_statement());
    assert_eq!(
        err.to_string(),
        "invalid statement: MySQL dialect does not support RETURNING"
    );
    assert!(log.is_empty());
    assert_eq!(stool.id, 1);
}

#[test]
fn update_sets_non_key_columns() {
    let (db, mut log) = db::empty_script(Dialect::Mysql);

    let mut stool = stool();
    assert_ok!(db.bind("stools", &mut stool).update());

    assert_eq!(
        log.pop_sql(),
        (
            "UPDATE stools SET number_of_legs = ?, material = ?, color = ? WHERE id = ? AND id_two = ?"
                .to_string(),
            vec![
                Value::I32(3),
                Value::from("oak"),
                Value::Null,
                Value::I64(1),
                Value::I64(2)
            ]
        )
    );
}

#[test]
fn delete_by_key() {
    let (db, mut log) = db::empty_script(Dialect::Sqlite);

    let mut stool = stool();
    assert_ok!(db.bind("stools", &mut stool).delete());

    assert_eq!(
        log.pop_sql(),
        (
            "DELETE FROM stools WHERE id = ?1 AND id_two = ?2".to_string(),
            values![1i64, 2i64]
        )
    );
}

#[test]
fn exists_by_key() {
    let (db, mut log) = db::scripted(
        ScriptedConnection::new(Dialect::Mysql)
            .respond(row(vec![Value::Bool(true)]))
            .respond(row(vec![Value::I64(0)])),
    );

    let mut stool = stool();
    let recorder = db.bind("stools", &mut stool);

    assert!(assert_ok!(recorder.exists()));
    assert!(!assert_ok!(recorder.exists()));

    assert_eq!(
        log.pop_sql().0,
        "SELECT COUNT(*) > 0 FROM stools WHERE id = ? AND id_two = ?"
    );
}

#[test]
fn exists_where_uses_the_predicate() {
    let (db, mut log) =
        db::scripted(ScriptedConnection::new(Dialect::Postgresql).respond(row(vec![Value::Bool(true)])));

    let stool = db.bind_owned("stools", stool());
    assert!(assert_ok!(stool.exists_where("color IS NULL AND material = ?", values!["oak"])));

    assert_eq!(
        log.pop_sql(),
        (
            "SELECT COUNT(*) > 0 FROM stools WHERE color IS NULL AND material = $1".to_string(),
            values!["oak"]
        )
    );
}

#[test]
fn driver_errors_propagate() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
    let (db, _log) = db::scripted(
        ScriptedConnection::new(Dialect::Mysql).fail(rowbind::Error::driver_operation_failed(io)),
    );

    let mut stool = stool();
    let err = assert_err!(db.bind("stools", &mut stool).update());
    assert!(err.is_driver());
    assert_eq!(err.to_string(), "connection reset");
}

#[test]
fn unmapped_fields_are_untouched() {
    let (db, _log) = db::scripted(ScriptedConnection::new(Dialect::Mysql).respond(row(vec![
        Value::I32(4),
        Value::from("pine"),
        Value::Null,
    ])));

    let mut stool = stool();
    assert_ok!(db.bind("stools", &mut stool).load());
    assert!(stool.scratch);
    assert_eq!(Stool::FIELDS.len(), 5);
}
