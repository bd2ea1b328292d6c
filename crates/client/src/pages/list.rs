use api_types::{
    pagination::DateRange,
    transaction::{Transaction, TransactionKind},
};

use crate::{api::TransactionApi, error::Result, pagination::PageState};

/// One page of a transaction collection, with filter, selection and the
/// delete confirmation step.
#[derive(Debug)]
pub struct TransactionList {
    api: TransactionApi,
    pub page: PageState,
    pub filter: DateRange,
    pub items: Vec<Transaction>,
    pub total_items: u64,
    pub total_pages: u32,
    pub is_loading: bool,
    pub selected: usize,
    pub pending_delete: Option<i64>,
    pub error: Option<String>,
}

impl TransactionList {
    pub fn new(api: TransactionApi, page_size: u32) -> Self {
        Self {
            api,
            page: PageState::new(page_size),
            filter: DateRange::default(),
            items: Vec::new(),
            total_items: 0,
            total_pages: 0,
            is_loading: false,
            selected: 0,
            pending_delete: None,
            error: None,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.api.kind()
    }

    /// Fetches the current page with the current filter.
    pub async fn fetch(&mut self) -> Result<()> {
        self.is_loading = true;
        let res = self
            .api
            .get_all(self.page.page(), self.page.page_size(), &self.filter)
            .await;
        self.is_loading = false;

        match res {
            Ok(page) => {
                self.items = page.items;
                self.total_items = page.pagination.total_items;
                self.total_pages = page.pagination.total_pages;
                self.selected = self.selected.min(self.items.len().saturating_sub(1));
                self.error = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!("error fetching {}: {err}", self.kind().endpoint());
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Pagination control moved to the 0-indexed `index`.
    pub async fn go_to_control_index(&mut self, index: u32) -> Result<()> {
        self.page.set_control_index(index);
        self.selected = 0;
        self.fetch().await
    }

    pub async fn next_page(&mut self) -> Result<()> {
        if !self.page.has_next(self.total_pages) {
            return Ok(());
        }
        self.go_to_control_index(self.page.control_index() + 1).await
    }

    pub async fn prev_page(&mut self) -> Result<()> {
        if !self.page.has_prev() {
            return Ok(());
        }
        self.go_to_control_index(self.page.control_index() - 1).await
    }

    pub async fn cycle_page_size(&mut self, forward: bool) -> Result<()> {
        self.page.cycle_page_size(forward);
        self.selected = 0;
        self.fetch().await
    }

    /// Applies a new date range, back on the first page.
    pub async fn apply_filter(&mut self, filter: DateRange) -> Result<()> {
        self.filter = filter;
        self.page.reset();
        self.selected = 0;
        self.fetch().await
    }

    pub async fn reset_filter(&mut self) -> Result<()> {
        self.apply_filter(DateRange::default()).await
    }

    pub fn selected_item(&self) -> Option<&Transaction> {
        self.items.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.items.len() - 1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Opens the confirmation step for `id`.
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_item().map(|tx| tx.id) {
            self.request_delete(id);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the pending transaction, then re-fetches the current page.
    /// Removing the last row of a trailing page steps back one page.
    pub async fn confirm_delete(&mut self) -> Result<()> {
        let Some(id) = self.pending_delete else {
            return Ok(());
        };

        if let Err(err) = self.api.delete(id).await {
            tracing::error!("error deleting {} {id}: {err}", self.kind().endpoint());
            self.error = Some(err.to_string());
            return Err(err);
        }
        self.pending_delete = None;
        self.fetch().await?;

        if self.page.is_past_end(self.total_pages) {
            self.page.set_page(self.total_pages);
            self.selected = 0;
            self.fetch().await?;
        }
        Ok(())
    }
}
