//! Migration v1: facts and budgets tables

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS facts (
    conversation_id VARCHAR(255) PRIMARY KEY NOT NULL,
    fact TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS budgets (
    conversation_id VARCHAR(255) PRIMARY KEY NOT NULL,
    budget TEXT NOT NULL
);
";
