/// Builds a `Vec<Value>` from a heterogeneous list of expressions.
///
/// ```
/// use rowbind_core::{stmt::Value, values};
///
/// let args = values![1, "steel"];
/// assert_eq!(args, vec![Value::I32(1), Value::from("steel")]);
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::stmt::Value>::new()
    };
    ( $( $value:expr ),+ $(,)? ) => {
        ::std::vec![ $( $crate::stmt::Value::from($value), )+ ]
    };
}
