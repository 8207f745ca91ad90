mod schema;

use rusqlite::types::Type;
use rusqlite::{params, Connection, OpenFlags};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::PersistError;
use crate::models::{BudgetAmounts, EntryKind, StoredTransaction, INCOME_CATEGORY};

/// One category/amount pair queued for a persist batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BatchRow {
    pub(crate) category: &'static str,
    pub(crate) amount: Decimal,
    pub(crate) kind: EntryKind,
}

/// The six rows a budget is stored as: income first, then each expense
/// category in column order.
pub(crate) fn batch_rows(amounts: &BudgetAmounts) -> Vec<BatchRow> {
    let mut rows = Vec::with_capacity(6);
    rows.push(BatchRow {
        category: INCOME_CATEGORY,
        amount: amounts.income,
        kind: EntryKind::Income,
    });
    rows.extend(amounts.expenses().map(|(category, amount)| BatchRow {
        category: category.as_str(),
        amount,
        kind: EntryKind::Expense,
    }));
    rows
}

/// Writes budget entries to the SQLite store at `path`.
///
/// Holds no connection between calls: every operation opens its own and
/// drops it before returning.
pub(crate) struct PersistenceGateway {
    path: PathBuf,
}

impl PersistenceGateway {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Create the database file and table if they are missing.
    pub(crate) fn initialize(&self) -> Result<(), PersistError> {
        let conn = Connection::open(&self.path).map_err(|source| PersistError::Connect {
            path: self.path.clone(),
            source,
        })?;
        conn.execute_batch(schema::SCHEMA)?;
        tracing::debug!(path = %self.path.display(), "Database initialized");
        Ok(())
    }

    /// Open an existing store. A missing file is a connect failure rather
    /// than an empty new database.
    fn connect(&self) -> Result<Connection, PersistError> {
        Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| PersistError::Connect {
            path: self.path.clone(),
            source,
        })
    }

    /// Store a budget as six rows for `user_id`, all or nothing.
    pub(crate) fn persist(&self, user_id: i64, amounts: &BudgetAmounts) -> Result<(), PersistError> {
        let rows = batch_rows(amounts);
        let result = self
            .connect()
            .and_then(|mut conn| write_batch(&mut conn, user_id, &rows));
        match &result {
            Ok(()) => tracing::debug!(user_id, rows = rows.len(), "Budget saved"),
            Err(e) => tracing::warn!(user_id, "Budget not saved: {e}"),
        }
        result
    }

    /// Store a single category/amount row.
    pub(crate) fn add_transaction(
        &self,
        user_id: i64,
        category: &str,
        amount: Decimal,
        kind: EntryKind,
    ) -> Result<i64, PersistError> {
        let conn = self.connect()?;
        conn.execute(
            schema::INSERT_TRANSACTION,
            params![user_id, category, amount.to_string(), kind.as_str(), timestamp()],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(user_id, category, %amount, "Transaction added");
        Ok(id)
    }

    pub(crate) fn transactions_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<StoredTransaction>, PersistError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, category, amount, type, transaction_date
             FROM Transactions WHERE user_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![user_id], |row| {
            let amount_str: String = row.get(3)?;
            let amount = Decimal::from_str(&amount_str)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
            let kind_str: String = row.get(4)?;
            let kind = EntryKind::parse(&kind_str).ok_or_else(|| {
                rusqlite::Error::FromSqlConversionFailure(
                    4,
                    Type::Text,
                    format!("unknown transaction type '{kind_str}'").into(),
                )
            })?;
            Ok(StoredTransaction {
                id: row.get(0)?,
                user_id: row.get(1)?,
                category: row.get(2)?,
                amount,
                kind,
                transaction_date: row.get(5)?,
            })
        })?;
        let transactions = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(transactions)
    }
}

/// Insert `rows` through one prepared statement inside one transaction.
/// Returning early drops the transaction uncommitted, which rolls it back.
fn write_batch(conn: &mut Connection, user_id: i64, rows: &[BatchRow]) -> Result<(), PersistError> {
    let now = timestamp();
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(schema::INSERT_TRANSACTION)?;
        for row in rows {
            stmt.execute(params![
                user_id,
                row.category,
                row.amount.to_string(),
                row.kind.as_str(),
                now,
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
