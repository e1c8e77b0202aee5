use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use crate::config::Config;
use crate::models::*;

/// Builds the connection pool. Connections are opened on first use and
/// handed back to the pool when each query finishes, whatever its outcome.
pub async fn connect(config: &Config) -> Result<MySqlPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        "Connecting to database"
    );

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
}

// Read queries
pub async fn list_agents(pool: &MySqlPool) -> Result<Vec<Agent>, sqlx::Error> {
    sqlx::query_as::<_, Agent>(
        r#"SELECT AGENT_CODE, AGENT_NAME, WORKING_AREA, COMMISSION FROM agents"#
    )
    .fetch_all(pool)
    .await
}

pub async fn list_companies(pool: &MySqlPool) -> Result<Vec<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        r#"SELECT COMPANY_ID, COMPANY_NAME, COMPANY_CITY FROM company"#
    )
    .fetch_all(pool)
    .await
}

pub async fn list_customers(pool: &MySqlPool) -> Result<Vec<CustomerSummary>, sqlx::Error> {
    sqlx::query_as::<_, CustomerSummary>(
        r#"SELECT CUST_CODE, CUST_NAME, CUST_CITY, WORKING_AREA, CUST_COUNTRY FROM customer"#
    )
    .fetch_all(pool)
    .await
}

// Customer writes. Duplicate codes surface as a database error from the
// primary key; AGENT_CODE is not checked against `agents`.
pub async fn insert_customer(pool: &MySqlPool, customer: &NewCustomerRow) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO customer
           (CUST_CODE, CUST_NAME, CUST_CITY, WORKING_AREA, CUST_COUNTRY,
            GRADE, OPENING_AMT, RECEIVE_AMT, PAYMENT_AMT, OUTSTANDING_AMT,
            PHONE_NO, AGENT_CODE)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#
    )
    .bind(&customer.cust_code)
    .bind(&customer.cust_name)
    .bind(&customer.cust_city)
    .bind(&customer.working_area)
    .bind(&customer.cust_country)
    // GRADE 0 is stored as 0, not NULL.
    .bind(customer.grade)
    .bind(customer.opening_amt)
    .bind(customer.receive_amt)
    .bind(customer.payment_amt)
    .bind(customer.outstanding_amt)
    .bind(&customer.phone_no)
    .bind(&customer.agent_code)
    .execute(pool)
    .await?;

    Ok(())
}

/// Returns the number of rows removed (0 when the code is unknown).
pub async fn delete_customer(pool: &MySqlPool, cust_code: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM customer WHERE CUST_CODE = ?"#)
        .bind(cust_code)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Overwrites name, city, area and country; every other column is left as is.
pub async fn update_customer(
    pool: &MySqlPool,
    cust_code: &str,
    update: &CustomerUpdateRow,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"UPDATE customer
           SET CUST_NAME = ?, CUST_CITY = ?, WORKING_AREA = ?, CUST_COUNTRY = ?
           WHERE CUST_CODE = ?"#
    )
    .bind(&update.cust_name)
    .bind(&update.cust_city)
    .bind(&update.working_area)
    .bind(&update.cust_country)
    .bind(cust_code)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
