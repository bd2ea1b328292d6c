use api_types::transaction::{Transaction, TransactionKind};

use crate::{api::TransactionApi, error::Result, routes::Route};

#[derive(Debug)]
pub struct TransactionDetail {
    api: TransactionApi,
    pub id: i64,
    pub transaction: Option<Transaction>,
    pub is_loading: bool,
    pub confirm_delete: bool,
    pub error: Option<String>,
}

impl TransactionDetail {
    pub fn new(api: TransactionApi, id: i64) -> Self {
        Self {
            api,
            id,
            transaction: None,
            is_loading: false,
            confirm_delete: false,
            error: None,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.api.kind()
    }

    pub async fn load(&mut self) -> Result<()> {
        self.is_loading = true;
        let res = self.api.get_by_id(self.id).await;
        self.is_loading = false;

        match res {
            Ok(transaction) => {
                self.transaction = Some(transaction);
                self.error = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!("error fetching {} {}: {err}", self.kind().endpoint(), self.id);
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn request_delete(&mut self) {
        self.confirm_delete = true;
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = false;
    }

    /// Deletes the transaction and returns to its list.
    pub async fn confirm_delete(&mut self) -> Result<()> {
        if !self.confirm_delete {
            return Ok(());
        }
        self.confirm_delete = false;

        match self.api.delete(self.id).await {
            Ok(()) => {
                self.api.navigator().replace(Route::List(self.kind()));
                Ok(())
            }
            Err(err) => {
                tracing::error!("error deleting {} {}: {err}", self.kind().endpoint(), self.id);
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
