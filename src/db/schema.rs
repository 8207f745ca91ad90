pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS Transactions (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id          INTEGER NOT NULL,
    category         TEXT NOT NULL,
    amount           TEXT NOT NULL,
    type             TEXT NOT NULL CHECK (type IN ('income', 'expense')),
    transaction_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_transactions_user ON Transactions(user_id);
"#;

pub(crate) const INSERT_TRANSACTION: &str = "INSERT INTO Transactions (user_id, category, amount, type, transaction_date)
     VALUES (?1, ?2, ?3, ?4, ?5)";
