use pretty_assertions::assert_eq;
use rowbind::{bail, values, Describer, Expr, InsertStrategy, Record};
use tests::{assert_err, assert_ok, assert_some, db};

const SCHEMA: &[&str] = &["CREATE TABLE users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT,
    age INTEGER NOT NULL
)"];

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct User {
    #[column("id, PRIMARY_KEY, AUTO_INCREMENT")]
    id: i64,

    #[column]
    name: String,

    #[column]
    email: Option<String>,

    #[column]
    age: i32,
}

fn seed(db: &rowbind::Db) {
    for (name, age) in [("ann", 31), ("bob", 25), ("cid", 47), ("dee", 19), ("eve", 38)] {
        let user = User {
            name: name.into(),
            age,
            ..Default::default()
        };
        assert_ok!(db.bind_owned("users", user).insert());
    }
}

fn names(users: &[rowbind::Recorder<User>]) -> Vec<&str> {
    users.iter().map(|user| &user.name[..]).collect()
}

#[test]
fn list_pages_through_the_table() {
    let (db, mut log) = db::sqlite(SCHEMA);
    seed(&db);
    log.clear();

    let template = db.bind_owned("users", User::default());

    let page = assert_ok!(rowbind::list(&template, 2, 1));
    assert_eq!(names(&page), ["bob", "cid"]);

    assert_eq!(
        log.pop_sql().0,
        "SELECT id, name, email, age FROM users LIMIT 2 OFFSET 1"
    );
}

#[test]
fn list_where_applies_the_modifier() {
    let (db, mut log) = db::sqlite(SCHEMA);
    seed(&db);
    log.clear();

    let template = db.bind_owned("users", User::default());

    let older = assert_ok!(rowbind::list_where(&template, |_, select| {
        Ok(select
            .and_filter(Expr::raw("age > ?", values![30])?)
            .order_by("age DESC"))
    }));

    assert_eq!(names(&older), ["cid", "eve", "ann"]);
    assert_eq!(
        log.pop_sql(),
        (
            "SELECT id, name, email, age FROM users WHERE age > ?1 ORDER BY age DESC".to_string(),
            values![30]
        )
    );
}

#[test]
fn modifier_can_use_the_describer() {
    let (db, _log) = db::sqlite(SCHEMA);
    seed(&db);

    let template = db.bind_owned("users", User::default());

    let users = assert_ok!(rowbind::list_where(&template, |desc, select| {
        assert_eq!(desc.table_name(), "users");
        Ok(select.order_by(format!("{} DESC", desc.key()[0])).limit(1))
    }));

    assert_eq!(names(&users), ["eve"]);
}

#[test]
fn failing_modifier_executes_nothing() {
    let (db, log) = db::sqlite(SCHEMA);
    seed(&db);
    let mut log = log;
    log.clear();

    let template = db.bind_owned("users", User::default());
    let err = assert_err!(rowbind::list_where(&template, |_, _| bail!("no filter today")));

    assert_eq!(err.to_string(), "no filter today");
    assert!(log.is_empty());
}

#[test]
fn empty_table_lists_nothing() {
    let (db, _log) = db::sqlite(SCHEMA);

    let template = db.bind_owned("users", User::default());
    let users = assert_ok!(rowbind::list(&template, 10, 0));
    assert!(users.is_empty());
}

#[test]
fn row_conversion_failure_discards_the_list() {
    let (db, _log) = db::sqlite(SCHEMA);
    seed(&db);

    // INTEGER affinity keeps text that does not look like a number
    assert_ok!(db.execute(
        "INSERT INTO users (name, age) VALUES (?1, ?2)",
        values!["zed", "unknown"]
    ));

    let template = db.bind_owned("users", User::default());
    let err = assert_err!(rowbind::list(&template, 100, 0));

    assert!(err.is_field_assignment());
    assert!(err.to_string().contains("`age`"), "{err}");
}

#[test]
fn listed_records_are_bound() {
    let (db, _log) = db::sqlite(SCHEMA);
    seed(&db);

    let template = db.bind_owned("users", User::default());
    let mut users = assert_ok!(rowbind::list_where(&template, |_, select| {
        Ok(select.and_filter(Expr::eq("name", "dee")))
    }));

    let dee = &mut users[0];
    dee.age += 1;
    dee.email = Some("dee@example.com".into());
    assert_ok!(dee.update());

    let mut reloaded = User {
        id: dee.id,
        ..Default::default()
    };
    assert_ok!(db.bind("users", &mut reloaded).load());

    assert_eq!(reloaded.age, 20);
    assert_eq!(assert_some!(reloaded.email.as_deref()), "dee@example.com");
    assert_eq!(reloaded, users.remove(0).into_record());
}

#[test]
fn listed_records_keep_the_insert_strategy() {
    let (db, mut log) = db::sqlite(SCHEMA);
    seed(&db);

    let mut template = db.bind_owned("users", User::default());
    template.insert_strategy(InsertStrategy::Returning);

    let mut users = assert_ok!(rowbind::list_where(&template, |_, select| {
        Ok(select.and_filter(Expr::eq("name", "dee")))
    }));
    log.clear();

    let copy = &mut users[0];
    assert_ok!(copy.insert());

    assert_eq!(
        log.pop_sql().0,
        "INSERT INTO users (name, age) VALUES (?1, ?2) RETURNING id, name, email, age"
    );
    assert_eq!(copy.id, 6);
}
