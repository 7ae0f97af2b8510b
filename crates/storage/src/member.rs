use std::sync::Arc;

use bson::doc;
use eyre::Error;
use futures_util::TryStreamExt as _;
use model::member::Member;
use mongodb::Collection;

use crate::session::Db;

const TABLE_NAME: &str = "members";

#[derive(Clone)]
pub struct MemberStore {
    collection: Arc<Collection<Member>>,
}

impl MemberStore {
    pub fn new(db: &Db) -> Self {
        MemberStore {
            collection: Arc::new(db.table(TABLE_NAME)),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Member>, Error> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Member>, Error> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }
}
