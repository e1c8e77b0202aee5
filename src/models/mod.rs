use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// Agent row from the `agents` table
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Agent {
    #[schema(example = "A001")]
    pub agent_code: String,
    #[schema(example = "John Doe")]
    pub agent_name: Option<String>,
    #[schema(example = "New York")]
    pub working_area: Option<String>,
    #[schema(example = 0.15)]
    pub commission: Option<Decimal>,
}

/// Company row from the `company` table
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Company {
    #[schema(example = "18")]
    pub company_id: String,
    #[schema(example = "Tech Corp")]
    pub company_name: Option<String>,
    #[schema(example = "San Francisco")]
    pub company_city: Option<String>,
}

/// Customer listing projection (the `customer` table has more columns)
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CustomerSummary {
    #[schema(example = "C10001")]
    pub cust_code: String,
    #[schema(example = "Alice Corp")]
    pub cust_name: Option<String>,
    #[schema(example = "Charlotte")]
    pub cust_city: Option<String>,
    #[schema(example = "East")]
    pub working_area: Option<String>,
    #[schema(example = "USA")]
    pub cust_country: Option<String>,
}

/// Body of `POST /customers`.
///
/// Every field is optional at the JSON level so that missing keys reach
/// [`NewCustomer::validate`] and get the documented 400 instead of a
/// deserialization rejection.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct NewCustomer {
    #[schema(example = "C10001")]
    pub cust_code: Option<String>,
    #[schema(example = "Alice Corp")]
    pub cust_name: Option<String>,
    #[schema(example = "Charlotte")]
    pub cust_city: Option<String>,
    #[schema(example = "East")]
    pub working_area: Option<String>,
    #[schema(example = "USA")]
    pub cust_country: Option<String>,
    #[schema(example = 2)]
    pub grade: Option<i32>,
    #[schema(example = 500.00)]
    pub opening_amt: Option<Decimal>,
    #[schema(example = 200.00)]
    pub receive_amt: Option<Decimal>,
    #[schema(example = 100.00)]
    pub payment_amt: Option<Decimal>,
    #[schema(example = 600.00)]
    pub outstanding_amt: Option<Decimal>,
    #[schema(example = "123-4567890")]
    pub phone_no: Option<String>,
    #[schema(example = "A001")]
    pub agent_code: Option<String>,
}

/// Validated customer, ready to insert. `None` binds as SQL NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomerRow {
    pub cust_code: String,
    pub cust_name: String,
    pub cust_city: Option<String>,
    pub working_area: Option<String>,
    pub cust_country: Option<String>,
    pub grade: Option<i32>,
    pub opening_amt: Option<Decimal>,
    pub receive_amt: Option<Decimal>,
    pub payment_amt: Option<Decimal>,
    pub outstanding_amt: Option<Decimal>,
    pub phone_no: Option<String>,
    pub agent_code: Option<String>,
}

impl NewCustomer {
    pub fn validate(self) -> Result<NewCustomerRow, ApiError> {
        let (Some(cust_code), Some(cust_name)) =
            (trimmed(self.cust_code), trimmed(self.cust_name))
        else {
            return Err(ApiError::BadRequest("CUST_CODE and CUST_NAME are required"));
        };

        Ok(NewCustomerRow {
            cust_code,
            cust_name,
            cust_city: non_empty(self.cust_city),
            working_area: non_empty(self.working_area),
            cust_country: non_empty(self.cust_country),
            grade: self.grade,
            opening_amt: self.opening_amt,
            receive_amt: self.receive_amt,
            payment_amt: self.payment_amt,
            outstanding_amt: self.outstanding_amt,
            phone_no: non_empty(self.phone_no),
            agent_code: non_empty(self.agent_code),
        })
    }
}

/// Body of `PUT /customers/{code}`
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CustomerUpdate {
    #[schema(example = "Updated Corp")]
    pub cust_name: Option<String>,
    #[schema(example = "New York")]
    pub cust_city: Option<String>,
    #[schema(example = "West")]
    pub working_area: Option<String>,
    #[schema(example = "USA")]
    pub cust_country: Option<String>,
}

/// The four columns an update overwrites. Omitted optionals become NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerUpdateRow {
    pub cust_name: String,
    pub cust_city: Option<String>,
    pub working_area: Option<String>,
    pub cust_country: Option<String>,
}

impl CustomerUpdate {
    pub fn validate(self) -> Result<CustomerUpdateRow, ApiError> {
        // Unlike create, the name is stored exactly as sent.
        let cust_name =
            non_empty(self.cust_name).ok_or(ApiError::BadRequest("CUST_NAME is required"))?;

        Ok(CustomerUpdateRow {
            cust_name,
            cust_city: non_empty(self.cust_city),
            working_area: non_empty(self.working_area),
            cust_country: non_empty(self.cust_country),
        })
    }
}

/// Acknowledgement returned by customer writes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerWriteResponse {
    #[schema(example = "Customer created")]
    pub message: String,
    #[serde(rename = "CUST_CODE")]
    #[schema(example = "C10001")]
    pub cust_code: String,
}

impl CustomerWriteResponse {
    pub fn new(message: &str, cust_code: impl Into<String>) -> Self {
        Self {
            message: message.to_string(),
            cust_code: cust_code.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Jake-Pinos says hello")]
    pub message: String,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// Only the empty string collapses to NULL; whitespace is kept as given.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
