use bson::doc;
use eyre::{Context as _, Error};
use mongodb::{Client, Collection, Database};

const DB_NAME: &str = "shackfitness_db";

/// Connection to the hosted row store. All dashboard tables live in the
/// one `shackfitness_db` database, so the name is fixed here rather than
/// chosen per call.
#[derive(Clone)]
pub struct Db {
    _client: Client,
    db: Database,
}

impl Db {
    pub(crate) async fn connect(uri: &str) -> Result<Self, Error> {
        let client = Client::with_uri_str(uri)
            .await
            .context("Failed to connect to MongoDB")?;
        let db = client.database(DB_NAME);
        db.run_command(doc! { "ping": 1 })
            .await
            .context("Failed to ping MongoDB")?;
        Ok(Db {
            _client: client,
            db,
        })
    }

    /// Typed handle for one entity table.
    pub(crate) fn table<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}
