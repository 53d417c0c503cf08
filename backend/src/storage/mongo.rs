//! MongoDB document collections.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::{FindOptions, ReplaceOptions};
use mongodb::{Client, Collection, Database};

use super::traits::{Document, DocumentCollection, Result};

/// Open a client for `url` and select `database_name`.
///
/// The driver connects lazily and pools connections internally, so one
/// handle serves every request.
pub async fn connect(url: &str, database_name: &str) -> Result<Database> {
    let client = Client::with_uri_str(url).await?;
    Ok(client.database(database_name))
}

pub struct MongoCollection<T: Document> {
    collection: Collection<T>,
}

impl<T: Document> MongoCollection<T> {
    pub fn new(database: &Database, name: &str) -> Self {
        Self {
            collection: database.collection(name),
        }
    }
}

#[async_trait]
impl<T: Document> DocumentCollection<T> for MongoCollection<T> {
    fn name(&self) -> &str {
        self.collection.name()
    }

    async fn list(&self, limit: u32) -> Result<Vec<T>> {
        let options = FindOptions::builder().limit(i64::from(limit)).build();

        let mut cursor = self.collection.find(doc! {}).with_options(options).await?;

        let mut documents = Vec::new();
        while cursor.advance().await? {
            documents.push(cursor.deserialize_current()?);
        }

        Ok(documents)
    }

    async fn upsert(&self, document: &T) -> Result<()> {
        let filter = doc! { "id": document.id() };
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(filter, document)
            .with_options(options)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
