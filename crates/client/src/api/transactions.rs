use api_types::{
    pagination::{DateRange, PaginatedResponse},
    transaction::{Transaction, TransactionInput, TransactionKind, TransactionPatch},
};
use serde::de::IgnoredAny;

use super::ApiClient;
use crate::{error::Result, routes::Navigator};

/// CRUD calls for one transaction collection, selected by [`TransactionKind`].
#[derive(Debug, Clone)]
pub struct TransactionApi {
    client: ApiClient,
    kind: TransactionKind,
}

impl TransactionApi {
    pub(crate) fn new(client: ApiClient, kind: TransactionKind) -> Self {
        Self { client, kind }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn navigator(&self) -> &Navigator {
        self.client.navigator()
    }

    fn collection_path(&self) -> &'static str {
        self.kind.endpoint()
    }

    fn item_path(&self, id: i64) -> String {
        format!("{}/{id}", self.kind.endpoint())
    }

    /// Fetches one page. `page` is 1-indexed, as the backend expects.
    pub async fn get_all(
        &self,
        page: u32,
        page_size: u32,
        range: &DateRange,
    ) -> Result<PaginatedResponse<Transaction>> {
        let endpoint = self.client.endpoint(self.collection_path())?;

        let mut query = vec![
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];
        if let Some(start) = range.start_date {
            query.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = range.end_date {
            query.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }

        let request = self.client.http().get(endpoint).query(&query);
        let res = self.client.send(self.client.authorized(request)).await?;
        self.client.expect_body(res).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Transaction> {
        let endpoint = self.client.endpoint(&self.item_path(id))?;
        let request = self.client.http().get(endpoint);
        let res = self.client.send(self.client.authorized(request)).await?;
        self.client.expect_body(res).await
    }

    pub async fn create(&self, input: &TransactionInput) -> Result<Transaction> {
        let endpoint = self.client.endpoint(self.collection_path())?;
        let request = self.client.http().post(endpoint).json(input);
        let res = self.client.send(self.client.authorized(request)).await?;
        self.client.expect_body(res).await
    }

    pub async fn update(&self, id: i64, patch: &TransactionPatch) -> Result<Transaction> {
        let endpoint = self.client.endpoint(&self.item_path(id))?;
        let request = self.client.http().patch(endpoint).json(patch);
        let res = self.client.send(self.client.authorized(request)).await?;
        self.client.expect_body(res).await
    }

    /// Deletes one transaction; the backend answers 204.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let endpoint = self.client.endpoint(&self.item_path(id))?;
        let request = self.client.http().delete(endpoint);
        let res = self.client.send(self.client.authorized(request)).await?;
        self.client.handle_response::<IgnoredAny>(res).await?;
        Ok(())
    }
}
