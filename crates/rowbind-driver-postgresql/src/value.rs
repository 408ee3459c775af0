use postgres::Row;
use postgres_types::{private::BytesMut, to_sql_checked, IsNull, ToSql, Type};
use rowbind_core::{
    err,
    stmt::{self, Value as CoreValue},
    Error, Result,
};

type BoxError = Box<dyn std::error::Error + Sync + Send>;

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a PostgreSQL value within a row to a Rowbind value.
    ///
    /// The column type reported by the server selects the wire decoding; the
    /// expected type, when given, selects the integer width.
    pub fn from_sql(row: &Row, index: usize, expected: Option<&stmt::Type>) -> Result<Self> {
        let ty = row.columns()[index].type_();

        let value = if *ty == Type::TEXT
            || *ty == Type::VARCHAR
            || *ty == Type::BPCHAR
            || *ty == Type::NAME
        {
            get::<String>(row, index)?.map(|v| match expected {
                Some(stmt::Type::Uuid) => v
                    .parse()
                    .map(CoreValue::Uuid)
                    .unwrap_or(CoreValue::String(v)),
                _ => CoreValue::String(v),
            })
        } else if *ty == Type::BOOL {
            get::<bool>(row, index)?.map(CoreValue::Bool)
        } else if *ty == Type::INT2 {
            get::<i16>(row, index)?.map(|v| integer(v.into(), expected))
        } else if *ty == Type::INT4 {
            get::<i32>(row, index)?.map(|v| integer(v.into(), expected))
        } else if *ty == Type::INT8 {
            get::<i64>(row, index)?.map(|v| integer(v, expected))
        } else if *ty == Type::FLOAT4 {
            get::<f32>(row, index)?.map(CoreValue::F32)
        } else if *ty == Type::FLOAT8 {
            get::<f64>(row, index)?.map(|v| match expected {
                Some(stmt::Type::F32) => CoreValue::F32(v as f32),
                _ => CoreValue::F64(v),
            })
        } else if *ty == Type::BYTEA {
            get::<Vec<u8>>(row, index)?.map(CoreValue::Bytes)
        } else if *ty == Type::UUID {
            get::<uuid::Uuid>(row, index)?.map(CoreValue::Uuid)
        } else {
            return Err(err!(
                "unsupported PostgreSQL column type `{ty}`; column={}",
                row.columns()[index].name()
            ));
        };

        Ok(Value(value.unwrap_or(CoreValue::Null)))
    }
}

fn get<'a, T: postgres_types::FromSql<'a>>(row: &'a Row, index: usize) -> Result<Option<T>> {
    row.try_get::<_, Option<T>>(index)
        .map_err(Error::driver_operation_failed)
}

/// Picks the integer variant of the expected type, keeping `I64` when the
/// value does not fit so that conversion into the field reports it.
fn integer(value: i64, expected: Option<&stmt::Type>) -> CoreValue {
    let wide = CoreValue::I64(value);

    let narrowed = match expected {
        Some(stmt::Type::I8) => wide.clone().to_i8().map(CoreValue::I8),
        Some(stmt::Type::I16) => wide.clone().to_i16().map(CoreValue::I16),
        Some(stmt::Type::I32) => wide.clone().to_i32().map(CoreValue::I32),
        Some(stmt::Type::U8) => wide.clone().to_u8().map(CoreValue::U8),
        Some(stmt::Type::U16) => wide.clone().to_u16().map(CoreValue::U16),
        Some(stmt::Type::U32) => wide.clone().to_u32().map(CoreValue::U32),
        Some(stmt::Type::U64) => wide.clone().to_u64().map(CoreValue::U64),
        _ => return wide,
    };

    narrowed.unwrap_or(wide)
}

fn encode_int(value: i64, ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError> {
    match *ty {
        Type::INT2 => i16::try_from(value)?.to_sql(ty, out),
        Type::INT4 => i32::try_from(value)?.to_sql(ty, out),
        Type::INT8 => value.to_sql(ty, out),
        Type::FLOAT4 => (value as f32).to_sql(ty, out),
        Type::FLOAT8 => (value as f64).to_sql(ty, out),
        _ => Err(format!("cannot encode integer {value} as PostgreSQL `{ty}`").into()),
    }
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        match &self.0 {
            stmt::Value::Null => Ok(IsNull::Yes),
            stmt::Value::Bool(value) => value.to_sql(ty, out),
            stmt::Value::F32(value) => match *ty {
                Type::FLOAT8 => (*value as f64).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::F64(value) => match *ty {
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::String(value) => match *ty {
                Type::UUID => value.parse::<uuid::Uuid>()?.to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::Bytes(value) => value.to_sql(ty, out),
            stmt::Value::Uuid(value) => match *ty {
                Type::UUID => value.to_sql(ty, out),
                _ => value.to_string().to_sql(ty, out),
            },
            stmt::Value::U64(value) => encode_int(i64::try_from(*value)?, ty, out),
            value => match value.as_i64() {
                Some(value) => encode_int(value, ty, out),
                None => Err(format!("cannot encode {value:?} as PostgreSQL `{ty}`").into()),
            },
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}
