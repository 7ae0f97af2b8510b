use std::sync::Arc;

use bson::doc;
use eyre::Error;
use futures_util::TryStreamExt as _;
use model::registration::Registration;
use mongodb::Collection;

use crate::session::Db;

const TABLE_NAME: &str = "registrations";

#[derive(Clone)]
pub struct RegistrationStore {
    collection: Arc<Collection<Registration>>,
}

impl RegistrationStore {
    pub fn new(db: &Db) -> Self {
        RegistrationStore {
            collection: Arc::new(db.table(TABLE_NAME)),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Registration>, Error> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Registration>, Error> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }

    pub async fn find_by_member(&self, member_id: i64) -> Result<Vec<Registration>, Error> {
        let cursor = self
            .collection
            .find(doc! { "member_id": member_id })
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
