use sqlx::{Executor, Sqlite};

use crate::{
    app::{
        envy::Envy,
        errors::DefaultApiError,
        models::api_error::ApiError,
        util::sqlx::{get_code_from_db_err, SqlStateCodes},
    },
    AppState,
};

use super::{
    dtos::{
        create_transaction_dto::CreateTransactionDto,
        get_transactions_filter_dto::GetTransactionsFilterDto,
    },
    enums::transaction_type::TransactionType,
    errors::WalletApiError,
    models::{
        create_transaction_response::CreateTransactionResponse, transaction::Transaction,
        wallet_balance::WalletBalance,
    },
    util::cents::{self, Cents},
};

/// Sum of income minus sum of expense, in cents. An empty ledger sums to 0.
pub async fn sum_balance<'e, E>(executor: E) -> Result<Cents, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_scalar::<_, i64>(
        "
        SELECT
            COALESCE(SUM(CASE WHEN type = 'income' THEN amount ELSE 0 END), 0)
            - COALESCE(SUM(CASE WHEN type = 'expense' THEN amount ELSE 0 END), 0)
        FROM transactions
        ",
    )
    .fetch_one(executor)
    .await
}

/// Appends a record to the ledger. No balance check happens here.
pub async fn insert_transaction<'e, E>(
    transaction: &Transaction,
    executor: E,
) -> Result<Transaction, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Transaction>(
        "
        INSERT INTO transactions (
            amount, type, description, created_at
        )
        VALUES (?, ?, ?, ?)
        RETURNING id, amount, type, description, created_at
        ",
    )
    .bind(transaction.amount)
    .bind(transaction.transaction_type)
    .bind(&transaction.description)
    .bind(transaction.created_at)
    .fetch_one(executor)
    .await
}

/// Store constraint violations are the caller's fault; anything else is internal.
fn write_error(e: &sqlx::Error, envy: &Envy) -> ApiError {
    let Some(db_err) = e.as_database_error() else {
        return DefaultApiError::from_error(e, envy);
    };

    match get_code_from_db_err(db_err).as_deref() {
        Some(SqlStateCodes::CHECK_VIOLATION) => {
            tracing::warn!(%e);
            WalletApiError::TransactionRejected.value()
        }
        _ => DefaultApiError::from_error(e, envy),
    }
}

pub async fn get_balance(state: &AppState) -> Result<WalletBalance, ApiError> {
    match sum_balance(&state.pool).await {
        Ok(balance) => Ok(WalletBalance::new(balance)),
        Err(e) => Err(DefaultApiError::from_error(&e, &state.envy)),
    }
}

pub async fn create_transaction(
    dto: &CreateTransactionDto,
    state: &AppState,
) -> Result<CreateTransactionResponse, ApiError> {
    let transaction = Transaction::new(dto);

    // the overdraft check and the write must not interleave with another writer
    let _writer = state.ledger_lock.lock().await;

    let mut tx = match state.pool.begin().await {
        Ok(tx) => tx,
        Err(e) => return Err(DefaultApiError::from_error(&e, &state.envy)),
    };

    if transaction.transaction_type == TransactionType::Expense {
        let balance = match sum_balance(&mut *tx).await {
            Ok(balance) => balance,
            Err(e) => return Err(DefaultApiError::from_error(&e, &state.envy)),
        };

        if transaction.amount > balance {
            tracing::info!(
                amount = %cents::format_cents(transaction.amount),
                balance = %cents::format_cents(balance),
                "expense rejected"
            );
            return Err(WalletApiError::InsufficientBalance(balance).value());
        }
    }

    let transaction = match insert_transaction(&transaction, &mut *tx).await {
        Ok(transaction) => transaction,
        Err(e) => return Err(write_error(&e, &state.envy)),
    };

    let balance = match sum_balance(&mut *tx).await {
        Ok(balance) => balance,
        Err(e) => return Err(DefaultApiError::from_error(&e, &state.envy)),
    };

    if let Err(e) = tx.commit().await {
        return Err(DefaultApiError::from_error(&e, &state.envy));
    }

    tracing::info!(
        id = transaction.id,
        transaction_type = transaction.transaction_type.value(),
        amount = %cents::format_cents(transaction.amount),
        "transaction created"
    );

    Ok(CreateTransactionResponse::new(transaction, balance))
}

pub async fn get_transactions(
    dto: &GetTransactionsFilterDto,
    state: &AppState,
) -> Result<Vec<Transaction>, ApiError> {
    let sql = dto.to_sql()?;

    let mut sqlx = sqlx::query_as::<_, Transaction>(&sql);

    if let Some(transaction_type) = dto.transaction_type {
        sqlx = sqlx.bind(transaction_type);
    }

    match sqlx.fetch_all(&state.pool).await {
        Ok(transactions) => Ok(transactions),
        Err(e) => Err(DefaultApiError::from_error(&e, &state.envy)),
    }
}

pub async fn get_transaction_by_id(id: i64, state: &AppState) -> Result<Transaction, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Transaction>(
        "
        SELECT id, amount, type, description, created_at
        FROM transactions
        WHERE id = ?
        ",
    )
    .bind(id)
    .fetch_optional(&state.pool)
    .await;

    match sqlx_result {
        Ok(transaction) => match transaction {
            Some(transaction) => Ok(transaction),
            None => Err(WalletApiError::TransactionNotFound.value()),
        },
        Err(e) => Err(DefaultApiError::from_error(&e, &state.envy)),
    }
}
