use pretty_assertions::assert_eq;
use rowbind::{bail, Dialect, Hooks, Record, Result};
use tests::{assert_err, assert_ok, db};

const SCHEMA: &[&str] = &["CREATE TABLE accounts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL
)"];

#[derive(Debug, Default, Record)]
#[hooks]
struct Account {
    #[column("id, PRIMARY_KEY, AUTO_INCREMENT")]
    id: i64,

    #[column]
    email: String,

    events: Vec<&'static str>,
    reject: Option<&'static str>,
}

impl Account {
    fn new(email: &str) -> Account {
        Account {
            email: email.to_string(),
            ..Default::default()
        }
    }

    fn event(&mut self, event: &'static str) -> Result<()> {
        self.events.push(event);

        if self.reject == Some(event) {
            bail!("{event} rejected");
        }

        Ok(())
    }
}

impl Hooks for Account {
    fn after_load(&mut self) -> Result<()> {
        self.event("after_load")
    }

    fn before_insert(&mut self) -> Result<()> {
        if !self.email.contains('@') {
            self.events.push("before_insert");
            bail!("invalid email: {}", self.email);
        }
        self.event("before_insert")
    }

    fn after_insert(&mut self) -> Result<()> {
        self.event("after_insert")
    }

    fn before_update(&mut self) -> Result<()> {
        self.event("before_update")
    }

    fn after_update(&mut self) -> Result<()> {
        self.event("after_update")
    }

    fn before_delete(&mut self) -> Result<()> {
        self.event("before_delete")
    }
}

#[test]
fn hooks_run_around_each_operation() {
    let (db, log) = db::sqlite(SCHEMA);

    let mut account = Account::new("a@example.com");
    let mut recorder = db.bind("accounts", &mut account);

    assert_ok!(recorder.insert());
    assert_ok!(recorder.load());
    recorder.email = "b@example.com".into();
    assert_ok!(recorder.update());
    assert_ok!(recorder.delete());
    drop(recorder);

    assert_eq!(
        account.events,
        [
            "before_insert",
            "after_insert",
            "after_load",
            "before_update",
            "after_update",
            "before_delete"
        ]
    );
    assert_eq!(log.len(), 4);
}

#[test]
fn failing_before_hook_prevents_the_statement() {
    let (db, log) = db::sqlite(SCHEMA);

    let mut account = Account::new("not-an-email");
    let err = assert_err!(db.bind("accounts", &mut account).insert());

    assert_eq!(err.to_string(), "invalid email: not-an-email");
    assert_eq!(account.events, ["before_insert"]);
    assert_eq!(account.id, 0);
    assert!(log.is_empty());
}

#[test]
fn before_hook_can_modify_the_record() {
    #[derive(Debug, Default, Record)]
    #[hooks]
    struct Slugged {
        #[column("id, PRIMARY_KEY, AUTO_INCREMENT")]
        id: i64,

        #[column]
        email: String,
    }

    impl Hooks for Slugged {
        fn before_insert(&mut self) -> Result<()> {
            self.email = self.email.to_lowercase();
            Ok(())
        }
    }

    let (db, mut log) = db::sqlite(SCHEMA);

    let mut record = Slugged {
        id: 0,
        email: "Mixed@Example.COM".into(),
    };
    assert_ok!(db.bind("accounts", &mut record).insert());

    let (_, params) = log.pop_sql();
    assert_eq!(params, rowbind::values!["mixed@example.com"]);
}

#[test]
fn failing_after_hook_reports_after_the_statement_ran() {
    let (db, _log) = db::sqlite(SCHEMA);

    let mut account = Account::new("a@example.com");
    account.reject = Some("after_insert");

    let mut recorder = db.bind("accounts", &mut account);
    let err = assert_err!(recorder.insert());
    assert_eq!(err.to_string(), "after_insert rejected");

    // The row was written and the id read back
    assert!(recorder.id > 0);
    assert!(assert_ok!(recorder.exists()));
}

#[test]
fn failing_before_update_leaves_row_unchanged() {
    let (db, _log) = db::sqlite(SCHEMA);

    let mut account = Account::new("a@example.com");
    let mut recorder = db.bind("accounts", &mut account);
    assert_ok!(recorder.insert());

    recorder.reject = Some("before_update");
    recorder.email = "changed@example.com".into();
    assert_err!(recorder.update());

    recorder.reject = None;
    assert_ok!(recorder.load());
    assert_eq!(recorder.email, "a@example.com");
}

#[test]
fn update_without_columns_still_runs_hooks() {
    #[derive(Debug, Default, Record)]
    #[hooks]
    struct Marker {
        #[column("id, PRIMARY_KEY, AUTO_INCREMENT")]
        id: i64,

        events: Vec<&'static str>,
    }

    impl Hooks for Marker {
        fn before_update(&mut self) -> Result<()> {
            self.events.push("before_update");
            Ok(())
        }

        fn after_update(&mut self) -> Result<()> {
            self.events.push("after_update");
            Ok(())
        }
    }

    let (db, log) = db::empty_script(Dialect::Mysql);

    let mut marker = Marker {
        id: 3,
        ..Default::default()
    };
    assert_ok!(db.bind("markers", &mut marker).update());

    assert_eq!(marker.events, ["before_update", "after_update"]);
    assert!(log.is_empty());
}

#[test]
fn listing_does_not_run_hooks() {
    let (db, _log) = db::sqlite(SCHEMA);

    for email in ["a@example.com", "b@example.com"] {
        assert_ok!(db.bind_owned("accounts", Account::new(email)).insert());
    }

    let template = db.bind_owned("accounts", Account::default());
    let accounts = assert_ok!(rowbind::list(&template, 10, 0));

    assert_eq!(accounts.len(), 2);
    assert!(accounts.iter().all(|account| account.events.is_empty()));
}

#[test]
fn records_without_hooks_attribute_skip_callbacks() {
    #[derive(Debug, Default, Record)]
    struct Plain {
        #[column("id, PRIMARY_KEY, AUTO_INCREMENT")]
        id: i64,

        #[column]
        email: String,
    }

    impl Hooks for Plain {
        fn before_insert(&mut self) -> Result<()> {
            bail!("never called");
        }
    }

    let (db, _log) = db::sqlite(SCHEMA);
    let mut plain = Plain {
        id: 0,
        email: "a@example.com".into(),
    };
    assert_ok!(db.bind("accounts", &mut plain).insert());
    assert_eq!(plain.id, 1);
}
