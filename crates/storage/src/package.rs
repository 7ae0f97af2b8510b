use std::sync::Arc;

use bson::doc;
use eyre::Error;
use futures_util::TryStreamExt as _;
use model::package::Package;
use mongodb::Collection;

use crate::session::Db;

const TABLE_NAME: &str = "packages";

#[derive(Clone)]
pub struct PackageStore {
    collection: Arc<Collection<Package>>,
}

impl PackageStore {
    pub fn new(db: &Db) -> Self {
        PackageStore {
            collection: Arc::new(db.table(TABLE_NAME)),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Package>, Error> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Package>, Error> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }
}
