use pretty_assertions::assert_eq;
use rowbind::{values, Describer, Dialect, Record};
use tests::{assert_err, assert_none, assert_ok, db};

const SCHEMA: &[&str] = &[
    "CREATE TABLE users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT,
        age INTEGER NOT NULL DEFAULT 0,
        active INTEGER NOT NULL DEFAULT 1
    )",
    "CREATE TABLE tokens (
        id TEXT PRIMARY KEY,
        owner INTEGER NOT NULL,
        secret BLOB NOT NULL,
        score REAL
    )",
];

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct User {
    #[column("id, PRIMARY_KEY, AUTO_INCREMENT")]
    id: i64,

    #[column]
    name: String,

    #[column]
    email: Option<String>,

    #[column]
    age: u8,

    #[column]
    active: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Token {
    #[column]
    #[key]
    id: uuid::Uuid,

    #[column]
    owner: i64,

    #[column]
    secret: Vec<u8>,

    #[column]
    score: Option<f64>,
}

#[test]
fn insert_load_update_delete() {
    let (db, mut log) = db::sqlite(SCHEMA);

    let mut user = User {
        name: "ann".into(),
        age: 31,
        active: true,
        ..Default::default()
    };

    let mut recorder = db.bind("users", &mut user);
    assert_ok!(recorder.insert());
    assert_eq!(recorder.id, 1);

    // Absent email is left to the column default
    assert_eq!(
        log.pop_sql(),
        (
            "INSERT INTO users (name, age, active) VALUES (?1, ?2, ?3)".to_string(),
            vec![
                rowbind_core::stmt::Value::from("ann"),
                rowbind_core::stmt::Value::U8(31),
                rowbind_core::stmt::Value::Bool(true)
            ]
        )
    );

    recorder.email = Some("ann@example.com".into());
    recorder.age = 32;
    assert_ok!(recorder.update());
    drop(recorder);

    let mut loaded = User {
        id: 1,
        ..Default::default()
    };
    assert_ok!(db.bind("users", &mut loaded).load());
    assert_eq!(loaded, user);

    let mut recorder = db.bind("users", &mut user);
    assert!(assert_ok!(recorder.exists()));
    assert_ok!(recorder.delete());
    assert!(!assert_ok!(recorder.exists()));
    assert!(assert_err!(recorder.load()).is_record_not_found());
}

#[test]
fn update_writes_null_for_none() {
    let (db, _log) = db::sqlite(SCHEMA);

    let mut user = User {
        name: "bob".into(),
        email: Some("bob@example.com".into()),
        ..Default::default()
    };
    let mut recorder = db.bind("users", &mut user);
    assert_ok!(recorder.insert());

    recorder.email = None;
    assert_ok!(recorder.update());

    let mut loaded = User {
        id: recorder.id,
        ..Default::default()
    };
    drop(recorder);
    assert_ok!(db.bind("users", &mut loaded).load());
    assert_none!(loaded.email.as_deref());
}

#[test]
fn load_where_fills_every_field() {
    let (db, _log) = db::sqlite(SCHEMA);

    for name in ["ann", "bob"] {
        let user = User {
            name: name.into(),
            age: 40,
            ..Default::default()
        };
        assert_ok!(db.bind_owned("users", user).insert());
    }

    let mut found = db.bind_owned("users", User::default());
    assert_ok!(found.load_where("name = ? AND age = ?", values!["bob", 40]));
    assert_eq!(found.id, 2);

    assert!(assert_ok!(found.exists_where("age >= ?", values![40])));
    assert!(!assert_ok!(found.exists_where("age > ?", values![40])));

    let err = assert_err!(found.load_where("name = ?", values!["cid"]));
    assert!(err.is_record_not_found());

    let user = found.into_record();
    assert_eq!(user.name, "bob");
}

#[test]
fn uuid_keys_bytes_and_floats_round_trip() {
    let (db, _log) = db::sqlite(SCHEMA);

    let token = Token {
        id: uuid::Uuid::new_v4(),
        owner: 7,
        secret: vec![0, 1, 2, 255],
        score: Some(0.5),
    };
    assert_ok!(db.bind_owned("tokens", token.clone()).insert());

    let mut loaded = Token {
        id: token.id,
        ..Default::default()
    };
    assert_ok!(db.bind("tokens", &mut loaded).load());
    assert_eq!(loaded, token);
}

#[test]
fn describer_reports_mapping_and_values() {
    let (db, _log) = db::sqlite(SCHEMA);

    let user = User {
        id: 4,
        name: "dee".into(),
        email: None,
        age: 19,
        active: false,
    };
    let recorder = db.bind_owned("users", user);

    assert_eq!(recorder.table_name(), "users");
    assert_eq!(recorder.dialect(), Dialect::Sqlite);
    assert_eq!(recorder.key(), ["id"]);
    assert_eq!(
        Describer::columns(&recorder, true),
        ["id", "name", "email", "age", "active"]
    );
    assert_eq!(
        Describer::columns(&recorder, false),
        ["name", "email", "age", "active"]
    );
    assert_eq!(
        recorder.values(false),
        vec![
            rowbind_core::stmt::Value::from("dee"),
            rowbind_core::stmt::Value::Null,
            rowbind_core::stmt::Value::U8(19),
            rowbind_core::stmt::Value::Bool(false),
        ]
    );
    assert_eq!(
        recorder.where_ids(),
        vec![("id", rowbind_core::stmt::Value::I64(4))]
    );
    assert_eq!(recorder.db().dialect(), Dialect::Sqlite);
}

#[test]
fn unique_violations_surface_driver_errors() {
    let (db, _log) = db::sqlite(SCHEMA);

    let token = Token {
        id: uuid::Uuid::new_v4(),
        owner: 1,
        secret: vec![],
        score: None,
    };
    assert_ok!(db.bind_owned("tokens", token.clone()).insert());

    let err = assert_err!(db.bind_owned("tokens", token).insert());
    assert!(err.is_driver());
    assert!(err.to_string().contains("UNIQUE"), "{err}");
}

#[test]
fn clones_share_one_connection() {
    let (db, log) = db::sqlite(SCHEMA);
    let other = db.clone();

    let user = User {
        name: "ann".into(),
        ..Default::default()
    };
    assert_ok!(other.bind_owned("users", user).insert());

    let mut loaded = User {
        id: 1,
        ..Default::default()
    };
    assert_ok!(db.bind("users", &mut loaded).load());
    assert_eq!(loaded.name, "ann");
    assert_eq!(log.len(), 2);
}
