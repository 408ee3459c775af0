use rowbind_core::stmt::{self, Value as CoreValue};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core Rowbind value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a Rowbind value.
    ///
    /// SQLite has no boolean, UUID or small integer storage class, so the
    /// expected type decides how the stored value is read. Without a hint,
    /// or when the stored value does not fit the hint, the value keeps its
    /// storage class and conversion into the field reports the mismatch.
    pub fn from_sql(row: &Row, index: usize, ty: Option<&stmt::Type>) -> rusqlite::Result<Self> {
        use stmt::Type;

        let value: SqlValue = row.get(index)?;

        let core_value = match (value, ty) {
            (SqlValue::Null, _) => CoreValue::Null,
            (SqlValue::Integer(value), Some(ty)) => match ty {
                Type::Bool => CoreValue::Bool(value != 0),
                Type::I8 => narrow(value, CoreValue::I8),
                Type::I16 => narrow(value, CoreValue::I16),
                Type::I32 => narrow(value, CoreValue::I32),
                Type::U8 => narrow(value, CoreValue::U8),
                Type::U16 => narrow(value, CoreValue::U16),
                Type::U32 => narrow(value, CoreValue::U32),
                Type::U64 => narrow(value, CoreValue::U64),
                Type::F32 => CoreValue::F32(value as f32),
                Type::F64 => CoreValue::F64(value as f64),
                _ => CoreValue::I64(value),
            },
            (SqlValue::Integer(value), None) => CoreValue::I64(value),
            (SqlValue::Real(value), Some(stmt::Type::F32)) => CoreValue::F32(value as f32),
            (SqlValue::Real(value), _) => CoreValue::F64(value),
            (SqlValue::Text(value), Some(stmt::Type::Uuid)) => match value.parse() {
                Ok(uuid) => CoreValue::Uuid(uuid),
                Err(_) => CoreValue::String(value),
            },
            (SqlValue::Text(value), _) => CoreValue::String(value),
            (SqlValue::Blob(value), Some(stmt::Type::Uuid)) => match uuid::Uuid::from_slice(&value) {
                Ok(uuid) => CoreValue::Uuid(uuid),
                Err(_) => CoreValue::Bytes(value),
            },
            (SqlValue::Blob(value), _) => CoreValue::Bytes(value),
        };

        Ok(Value(core_value))
    }
}

/// Converts to a narrower integer variant, falling back to `I64` when the
/// value is out of range.
fn narrow<T: TryFrom<i64>>(value: i64, variant: fn(T) -> CoreValue) -> CoreValue {
    T::try_from(value)
        .map(variant)
        .unwrap_or(CoreValue::I64(value))
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I8(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I16(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::U8(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U16(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U64(v) => {
                let v = i64::try_from(*v)
                    .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?;
                Ok(ToSqlOutput::Owned(SqlValue::Integer(v)))
            }
            Value::F32(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v as f64))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Uuid(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_string()))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
