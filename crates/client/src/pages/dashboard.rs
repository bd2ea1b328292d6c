use api_types::{Amount, pagination::DateRange, transaction::Transaction};

use crate::{api::ApiClient, error::Result};

/// How many of the most recent transactions of each kind the dashboard shows.
pub const RECENT_LIMIT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_income: Amount,
    pub total_expenses: Amount,
    pub balance: Amount,
}

#[derive(Debug)]
pub struct Dashboard {
    client: ApiClient,
    pub expenses: Vec<Transaction>,
    pub incomes: Vec<Transaction>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Dashboard {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            expenses: Vec::new(),
            incomes: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    /// Fetches the recent expenses and incomes concurrently.
    pub async fn load(&mut self) -> Result<()> {
        self.is_loading = true;
        let expenses = self.client.expenses();
        let incomes = self.client.incomes();
        let range = DateRange::default();

        let res = tokio::try_join!(
            expenses.get_all(1, RECENT_LIMIT, &range),
            incomes.get_all(1, RECENT_LIMIT, &range),
        );
        self.is_loading = false;

        match res {
            Ok((expenses, incomes)) => {
                self.expenses = expenses.items;
                self.incomes = incomes.items;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!("error fetching dashboard data: {err}");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Totals over the loaded recent transactions.
    pub fn summary(&self) -> DashboardSummary {
        let total_income: Amount = self.incomes.iter().map(|tx| tx.value).sum();
        let total_expenses: Amount = self.expenses.iter().map(|tx| tx.value).sum();
        DashboardSummary {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }
}
