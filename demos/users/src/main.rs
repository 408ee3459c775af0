use rowbind::{values, Db, Dialect, Record, Recorder};
use std::borrow::BorrowMut;

const USER_TABLE: &str = "users";

#[derive(Debug, Default, Record)]
struct User {
    #[column("id, PRIMARY_KEY, SERIAL")]
    id: i64,

    #[column]
    name: String,

    #[column]
    email: String,
}

/// Loaders beyond the key-based `load`.
trait UserLoaders {
    fn load_by_name(&mut self) -> rowbind::Result<()>;
}

impl<S: BorrowMut<User>> UserLoaders for Recorder<User, S> {
    fn load_by_name(&mut self) -> rowbind::Result<()> {
        let name = self.name.clone();
        self.load_where("name = ? ORDER BY id DESC", values![name])
    }
}

fn create_table(db: &Db) -> rowbind::Result<()> {
    let ddl = match db.dialect() {
        Dialect::Postgresql => {
            "CREATE TABLE IF NOT EXISTS users (id BIGSERIAL PRIMARY KEY, name TEXT NOT NULL, email TEXT NOT NULL)"
        }
        _ => {
            "CREATE TABLE IF NOT EXISTS users (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL, email TEXT NOT NULL)"
        }
    };

    db.execute(ddl, vec![])?;
    Ok(())
}

fn main() -> rowbind::Result<()> {
    env_logger::init();

    let db = Db::builder().connect(
        std::env::var("ROWBIND_CONNECTION_URL")
            .as_deref()
            .unwrap_or("sqlite::memory:"),
    )?;

    create_table(&db)?;

    // Create a new user and give it some properties
    let mut user = db.bind_owned(
        USER_TABLE,
        User {
            name: "Matt".into(),
            email: "matt@example.com".into(),
            ..Default::default()
        },
    );
    user.insert()?;
    println!(
        "inserted user; id={} name={:?} email={:?}",
        user.id, user.name, user.email
    );

    // Load a second copy through the custom loader
    let mut again = db.bind_owned(
        USER_TABLE,
        User {
            name: "Matt".into(),
            ..Default::default()
        },
    );
    again.load_by_name()?;
    println!("loaded user by name; id={} email={:?}", again.id, again.email);

    again.email = "masterminds@example.com".into();
    again.update()?;
    println!("updated user; id={} email={:?}", again.id, again.email);

    again.delete()?;
    println!("deleted user; id={} exists={}", again.id, again.exists()?);

    Ok(())
}
