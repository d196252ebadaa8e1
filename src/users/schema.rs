//! Column-level declaration of the `users` table.
//!
//! The migration under `migrations/` creates the table; this declaration is
//! what the rest of the crate reads when it needs to know the columns, and a
//! test keeps the two in step.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Uuid,
    Text,
    Integer,
    Timestamp,
}

impl SqlType {
    /// Postgres type name used in the migration.
    pub fn ddl_name(self) -> &'static str {
        match self {
            SqlType::Uuid => "UUID",
            SqlType::Text => "TEXT",
            SqlType::Integer => "INTEGER",
            SqlType::Timestamp => "TIMESTAMPTZ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnDefault {
    RandomUuid,
    Int(i32),
    Now,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub nullable: bool,
    pub unique: bool,
    pub primary_key: bool,
    pub default: Option<ColumnDefault>,
}

impl Column {
    const fn new(name: &'static str, sql_type: SqlType) -> Self {
        Self {
            name,
            sql_type,
            nullable: true,
            unique: false,
            primary_key: false,
            default: None,
        }
    }

    const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    const fn default(mut self, default: ColumnDefault) -> Self {
        self.default = Some(default);
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Comma separated column names, in declaration order.
    pub fn select_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub const USERS: Table = Table {
    name: "users",
    columns: &[
        Column::new("id", SqlType::Uuid)
            .primary_key()
            .default(ColumnDefault::RandomUuid),
        Column::new("email", SqlType::Text).not_null().unique(),
        Column::new("name", SqlType::Text).not_null(),
        Column::new("image", SqlType::Text),
        Column::new("github_username", SqlType::Text),
        Column::new("bio", SqlType::Text),
        Column::new("reputation", SqlType::Integer).default(ColumnDefault::Int(0)),
        Column::new("level", SqlType::Integer).default(ColumnDefault::Int(1)),
        Column::new("created_at", SqlType::Timestamp).default(ColumnDefault::Now),
        Column::new("updated_at", SqlType::Timestamp).default(ColumnDefault::Now),
    ],
};
