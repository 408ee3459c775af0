use rowbind::{values, Db, Dialect, Record};

const FENCE_TABLE: &str = "fences";

/// A geofence boundary.
#[derive(Debug, Default, Clone, Record)]
struct Fence {
    #[column("id, PRIMARY_KEY, SERIAL")]
    id: i64,

    #[column]
    region: i32,

    #[column]
    radius: f64,

    #[column]
    latitude: f64,

    #[column]
    longitude: f64,
}

/// Data access for fences. The fence values themselves stay plain structs.
struct Fences {
    db: Db,
}

impl Fences {
    fn new(db: Db) -> Fences {
        Fences { db }
    }

    fn create_table(&self) -> rowbind::Result<()> {
        let ddl = match self.db.dialect() {
            Dialect::Postgresql => {
                "CREATE TABLE IF NOT EXISTS fences (
                    id BIGSERIAL PRIMARY KEY,
                    region INTEGER NOT NULL,
                    radius DOUBLE PRECISION NOT NULL,
                    latitude DOUBLE PRECISION NOT NULL,
                    longitude DOUBLE PRECISION NOT NULL
                )"
            }
            _ => {
                "CREATE TABLE IF NOT EXISTS fences (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    region INTEGER NOT NULL,
                    radius REAL NOT NULL,
                    latitude REAL NOT NULL,
                    longitude REAL NOT NULL
                )"
            }
        };

        self.db.execute(ddl, vec![])?;
        Ok(())
    }

    fn insert(&self, fence: &mut Fence) -> rowbind::Result<()> {
        self.db.bind(FENCE_TABLE, fence).insert()
    }

    fn update(&self, fence: &mut Fence) -> rowbind::Result<()> {
        self.db.bind(FENCE_TABLE, fence).update()
    }

    fn delete(&self, fence: &mut Fence) -> rowbind::Result<()> {
        self.db.bind(FENCE_TABLE, fence).delete()
    }

    fn has(&self, fence: &mut Fence) -> rowbind::Result<bool> {
        self.db.bind(FENCE_TABLE, fence).exists()
    }

    /// Loads the fence whose latitude and longitude match the given fence.
    fn load_geopoint(&self, fence: &mut Fence) -> rowbind::Result<()> {
        let (latitude, longitude) = (fence.latitude, fence.longitude);

        self.db
            .bind(FENCE_TABLE, fence)
            .load_where("latitude = ? AND longitude = ?", values![latitude, longitude])
    }
}

fn main() -> rowbind::Result<()> {
    env_logger::init();

    let db = Db::builder().connect(
        std::env::var("ROWBIND_CONNECTION_URL")
            .as_deref()
            .unwrap_or("sqlite::memory:"),
    )?;

    let fences = Fences::new(db);
    fences.create_table()?;

    let mut fence = Fence {
        region: 7,
        radius: 25.0,
        latitude: 40.015,
        longitude: -105.27,
        ..Default::default()
    };
    fences.insert(&mut fence)?;
    println!("inserted fence; id={}", fence.id);

    let mut found = Fence {
        latitude: 40.015,
        longitude: -105.27,
        ..Default::default()
    };
    fences.load_geopoint(&mut found)?;
    println!("loaded fence by geopoint; {found:?}");

    found.radius = 50.0;
    fences.update(&mut found)?;
    println!("updated fence; id={} radius={}", found.id, found.radius);

    fences.delete(&mut found)?;
    let exists = fences.has(&mut found)?;
    println!("deleted fence; id={} exists={}", found.id, exists);

    Ok(())
}
