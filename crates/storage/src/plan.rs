use std::sync::Arc;

use bson::doc;
use eyre::Error;
use futures_util::TryStreamExt as _;
use model::plan::Plan;
use mongodb::Collection;

use crate::session::Db;

const TABLE_NAME: &str = "plans";

#[derive(Clone)]
pub struct PlanStore {
    collection: Arc<Collection<Plan>>,
}

impl PlanStore {
    pub fn new(db: &Db) -> Self {
        PlanStore {
            collection: Arc::new(db.table(TABLE_NAME)),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Plan>, Error> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Plan>, Error> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }
}
