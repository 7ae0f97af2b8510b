use std::sync::Arc;

use bson::doc;
use eyre::Error;
use futures_util::TryStreamExt as _;
use model::payment::Payment;
use mongodb::Collection;

use crate::session::Db;

const TABLE_NAME: &str = "payments";

#[derive(Clone)]
pub struct PaymentStore {
    collection: Arc<Collection<Payment>>,
}

impl PaymentStore {
    pub fn new(db: &Db) -> Self {
        PaymentStore {
            collection: Arc::new(db.table(TABLE_NAME)),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Payment>, Error> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Payment>, Error> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }

    pub async fn find_by_registration(&self, registration_id: i64) -> Result<Vec<Payment>, Error> {
        let cursor = self
            .collection
            .find(doc! { "registration_id": registration_id })
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
