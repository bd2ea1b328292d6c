//! Wire types exchanged with the Saldo REST backend.
//!
//! Every request and response body the client sends or receives is defined
//! here, grouped by resource.
use serde::{Deserialize, Serialize};

mod money;

pub use money::{Amount, AmountError};

pub mod user {
    use super::*;

    /// Identity of the logged-in user, as carried in the session token.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct User {
        pub id: i64,
        pub name: String,
        pub email: String,
    }

    /// Payload of the session token (a JWT). Only decoded, never verified.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TokenClaims {
        pub id: i64,
        pub name: String,
        pub email: String,
        /// Expiry as seconds since the epoch.
        #[serde(default)]
        pub exp: Option<i64>,
    }

    impl From<TokenClaims> for User {
        fn from(claims: TokenClaims) -> Self {
            Self {
                id: claims.id,
                name: claims.name,
                email: claims.email,
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LoginCredentials {
        pub email: String,
        pub password: String,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SignupData {
        pub name: String,
        pub email: String,
        pub password: String,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct AuthResponse {
        pub access_token: String,
    }
}

pub mod transaction {
    use chrono::NaiveDate;

    use super::*;

    /// The two transaction collections. They share one shape and differ only
    /// in the REST endpoint and the route prefix used to reach them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum TransactionKind {
        Expense,
        Income,
    }

    impl TransactionKind {
        /// REST resource name.
        pub fn endpoint(self) -> &'static str {
            match self {
                Self::Expense => "costs",
                Self::Income => "receivements",
            }
        }

        /// Route prefix in the client's path table.
        pub fn route_segment(self) -> &'static str {
            match self {
                Self::Expense => "expenses",
                Self::Income => "income",
            }
        }

        pub fn label(self) -> &'static str {
            match self {
                Self::Expense => "Expense",
                Self::Income => "Income",
            }
        }

        /// Collection label, as used in headings ("Expenses", "Income").
        pub fn plural_label(self) -> &'static str {
            match self {
                Self::Expense => "Expenses",
                Self::Income => "Income",
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Transaction {
        pub id: i64,
        pub title: String,
        #[serde(default)]
        pub description: Option<String>,
        pub value: Amount,
        #[serde(with = "transaction_date")]
        pub transaction_date: NaiveDate,
    }

    /// Body of a create request. An empty description is omitted.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TransactionInput {
        pub title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        pub value: Amount,
        #[serde(with = "transaction_date")]
        pub transaction_date: NaiveDate,
    }

    /// Body of a partial update: only present fields are sent.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TransactionPatch {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub value: Option<Amount>,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "transaction_date::option"
        )]
        pub transaction_date: Option<NaiveDate>,
    }

    /// A full replacement: a missing description is sent as `""` so the
    /// stored one is cleared.
    impl From<TransactionInput> for TransactionPatch {
        fn from(input: TransactionInput) -> Self {
            Self {
                title: Some(input.title),
                description: Some(input.description.unwrap_or_default()),
                value: Some(input.value),
                transaction_date: Some(input.transaction_date),
            }
        }
    }

    /// Dates are sent as `YYYY-MM-DD`. On the way in they may also arrive as
    /// RFC 2822 (`Tue, 05 Mar 2024 00:00:00 GMT`) or RFC 3339 timestamps; the
    /// calendar date of the timestamp is kept.
    pub mod transaction_date {
        use chrono::{DateTime, NaiveDate};
        use serde::{Deserialize, Deserializer, Serializer, de};

        const FORMAT: &str = "%Y-%m-%d";

        pub fn parse(raw: &str) -> Option<NaiveDate> {
            let raw = raw.trim();
            NaiveDate::parse_from_str(raw, FORMAT)
                .ok()
                .or_else(|| {
                    DateTime::parse_from_rfc2822(raw)
                        .ok()
                        .map(|dt| dt.date_naive())
                })
                .or_else(|| {
                    DateTime::parse_from_rfc3339(raw)
                        .ok()
                        .map(|dt| dt.date_naive())
                })
        }

        pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(&date.format(FORMAT))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
            let raw = String::deserialize(deserializer)?;
            parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
        }

        pub mod option {
            use super::*;

            pub fn serialize<S: Serializer>(
                date: &Option<NaiveDate>,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                match date {
                    Some(date) => super::serialize(date, serializer),
                    None => serializer.serialize_none(),
                }
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Option<NaiveDate>, D::Error> {
                Option::<String>::deserialize(deserializer)?
                    .map(|raw| {
                        parse(&raw)
                            .ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
                    })
                    .transpose()
            }
        }
    }
}

pub mod pagination {
    use chrono::NaiveDate;

    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Pagination {
        pub page: u32,
        pub page_size: u32,
        pub total_items: u64,
        pub total_pages: u32,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PaginationLinks {
        pub first: String,
        pub last: String,
        #[serde(default)]
        pub next: Option<String>,
        #[serde(default)]
        pub prev: Option<String>,
    }

    /// One server-computed page of items.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PaginatedResponse<T> {
        pub items: Vec<T>,
        pub pagination: Pagination,
        #[serde(default)]
        pub links: PaginationLinks,
    }

    /// Optional date bounds applied as `start_date` / `end_date` query parameters.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DateRange {
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
    }

    impl DateRange {
        pub fn is_empty(&self) -> bool {
            self.start_date.is_none() && self.end_date.is_none()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{
        Amount,
        pagination::PaginatedResponse,
        transaction::{Transaction, TransactionInput, TransactionKind, TransactionPatch},
    };

    #[test]
    fn transaction_accepts_backend_date_formats() {
        let iso: Transaction = serde_json::from_str(
            r#"{"id":1,"title":"Rent","description":null,"value":"900.00","transaction_date":"2024-03-05"}"#,
        )
        .unwrap();
        let http_date: Transaction = serde_json::from_str(
            r#"{"id":2,"title":"Rent","value":900,"transaction_date":"Tue, 05 Mar 2024 00:00:00 GMT"}"#,
        )
        .unwrap();

        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(iso.transaction_date, expected);
        assert_eq!(http_date.transaction_date, expected);
        assert_eq!(http_date.description, None);
        assert_eq!(http_date.value, Amount::from_cents(90_000));
    }

    #[test]
    fn input_omits_missing_description() {
        let input = TransactionInput {
            title: "Coffee".to_string(),
            description: None,
            value: Amount::from_cents(350),
            transaction_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title":"Coffee","value":"3.50","transaction_date":"2024-01-02"})
        );
    }

    #[test]
    fn patch_only_sends_present_fields() {
        let patch = TransactionPatch {
            title: Some("Groceries".to_string()),
            ..TransactionPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"title":"Groceries"}));
    }

    #[test]
    fn patch_from_input_clears_missing_description() {
        let input = TransactionInput {
            title: "Coffee".to_string(),
            description: None,
            value: Amount::from_cents(350),
            transaction_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        };
        let json = serde_json::to_value(TransactionPatch::from(input)).unwrap();
        assert_eq!(json["description"], serde_json::json!(""));
        assert_eq!(json["value"], serde_json::json!("3.50"));
    }

    #[test]
    fn paginated_response_tolerates_missing_links() {
        let page: PaginatedResponse<Transaction> = serde_json::from_str(
            r#"{"items":[],"pagination":{"page":1,"page_size":10,"total_items":0,"total_pages":0}}"#,
        )
        .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.links.next, None);
    }

    #[test]
    fn kinds_map_to_endpoints_and_routes() {
        assert_eq!(TransactionKind::Expense.endpoint(), "costs");
        assert_eq!(TransactionKind::Income.endpoint(), "receivements");
        assert_eq!(TransactionKind::Expense.route_segment(), "expenses");
        assert_eq!(TransactionKind::Income.route_segment(), "income");
    }
}
