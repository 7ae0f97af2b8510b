use std::sync::Arc;

use bson::doc;
use eyre::Error;
use futures_util::TryStreamExt as _;
use model::trainer::Trainer;
use mongodb::Collection;

use crate::session::Db;

const TABLE_NAME: &str = "trainers";

#[derive(Clone)]
pub struct TrainerStore {
    collection: Arc<Collection<Trainer>>,
}

impl TrainerStore {
    pub fn new(db: &Db) -> Self {
        TrainerStore {
            collection: Arc::new(db.table(TABLE_NAME)),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Trainer>, Error> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Trainer>, Error> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }
}
