use super::{Comma, Formatter, Params, ToSql};

use crate::stmt::{self, Expr, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Exists(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

struct Where<'a>(Option<&'a Expr>);

impl ToSql for Where<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if let Some(expr) = self.0 {
            fmt!(f, " WHERE " expr);
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let columns = Comma(&self.columns);
        let table = &self.table;
        let filter = Where(self.filter.as_ref());

        fmt!(f, "SELECT " columns " FROM " table filter);

        if !self.order_by.is_empty() {
            fmt!(f, " ORDER BY " Comma(&self.order_by));
        }

        match (self.limit, self.offset) {
            (Some(limit), offset) => {
                fmt!(f, " LIMIT " limit);

                if let Some(offset) = offset {
                    fmt!(f, " OFFSET " offset);
                }
            }
            (None, Some(offset)) => {
                // MySQL and SQLite only accept OFFSET after a LIMIT
                if f.serializer.is_sqlite() {
                    fmt!(f, " LIMIT -1");
                } else if f.serializer.is_mysql() {
                    fmt!(f, " LIMIT " u64::MAX);
                }

                fmt!(f, " OFFSET " offset);
            }
            (None, None) => {}
        }
    }
}

impl ToSql for &stmt::Exists {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = &self.table;
        let filter = Where(self.filter.as_ref());

        fmt!(f, "SELECT COUNT(*) > 0 FROM " table filter);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = &self.table;

        fmt!(f, "INSERT INTO " table);

        if self.columns.is_empty() {
            if f.serializer.is_mysql() {
                fmt!(f, " () VALUES ()");
            } else {
                fmt!(f, " DEFAULT VALUES");
            }
        } else {
            let columns = Comma(&self.columns);
            let values = Comma(&self.values);

            fmt!(f, " (" columns ") VALUES (" values ")");
        }

        if let Some(returning) = &self.returning {
            fmt!(f, " RETURNING " Comma(returning));
        }
    }
}

struct Assignment<'a>(&'a (String, stmt::Value));

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let (column, value) = self.0;
        fmt!(f, column " = " value);
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = &self.table;
        let assignments = Comma(self.assignments.iter().map(Assignment));
        let filter = Where(self.filter.as_ref());

        fmt!(f, "UPDATE " table " SET " assignments filter);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = &self.table;
        let filter = Where(self.filter.as_ref());

        fmt!(f, "DELETE FROM " table filter);
    }
}
