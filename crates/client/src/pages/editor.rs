use api_types::transaction::{TransactionKind, TransactionPatch};

use crate::{
    api::TransactionApi,
    error::Result,
    forms::{FieldErrors, TransactionForm},
    routes::Route,
};

/// Create/edit page for one transaction.
#[derive(Debug)]
pub struct TransactionEditor {
    api: TransactionApi,
    pub id: Option<i64>,
    pub form: TransactionForm,
    pub errors: FieldErrors,
    pub is_loading: bool,
    pub is_loading_data: bool,
    pub error: Option<String>,
}

impl TransactionEditor {
    pub fn create(api: TransactionApi) -> Self {
        Self::with_id(api, None)
    }

    pub fn edit(api: TransactionApi, id: i64) -> Self {
        Self::with_id(api, Some(id))
    }

    fn with_id(api: TransactionApi, id: Option<i64>) -> Self {
        Self {
            api,
            id,
            form: TransactionForm::default(),
            errors: FieldErrors::default(),
            is_loading: false,
            is_loading_data: false,
            error: None,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.api.kind()
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn heading(&self) -> String {
        if self.is_editing() {
            format!("Edit {}", self.kind().label())
        } else {
            format!("Add New {}", self.kind().label())
        }
    }

    pub fn submit_label(&self) -> String {
        if self.is_editing() {
            format!("Update {}", self.kind().label())
        } else {
            format!("Add {}", self.kind().label())
        }
    }

    /// Pre-fills the form when editing. No-op for a new transaction.
    pub async fn load(&mut self) -> Result<()> {
        let Some(id) = self.id else {
            return Ok(());
        };

        self.is_loading_data = true;
        let res = self.api.get_by_id(id).await;
        self.is_loading_data = false;

        match res {
            Ok(transaction) => {
                self.form = TransactionForm::from_transaction(&transaction);
                Ok(())
            }
            Err(err) => {
                tracing::error!("error fetching {} {id}: {err}", self.kind().endpoint());
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Validates and saves. Returns `Ok(false)` when validation blocked the
    /// submission; on success the navigator moves to the list.
    pub async fn submit(&mut self) -> Result<bool> {
        let input = match self.form.validate() {
            Ok(input) => {
                self.errors = FieldErrors::default();
                input
            }
            Err(errors) => {
                self.errors = errors;
                return Ok(false);
            }
        };

        self.is_loading = true;
        let res = match self.id {
            Some(id) => self.api.update(id, &TransactionPatch::from(input)).await,
            None => self.api.create(&input).await,
        };
        self.is_loading = false;

        match res {
            Ok(saved) => {
                tracing::info!("saved {} {}", self.kind().endpoint(), saved.id);
                self.error = None;
                self.api.navigator().replace(Route::List(self.kind()));
                Ok(true)
            }
            Err(err) => {
                tracing::error!("error saving {}: {err}", self.kind().endpoint());
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
