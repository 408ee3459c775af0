use super::{Delimited, Formatter, Params, ToSql};

use crate::stmt::{expr::Segment, Expr, Raw};

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Expr::Eq(column, value) => fmt!(f, column " = " value),
            Expr::And(operands) => {
                let operands = operands.iter().map(Operand);
                fmt!(f, Delimited(operands, " AND "));
            }
            Expr::Raw(raw) => raw.to_sql(f),
        }
    }
}

/// An operand of a conjunction. Caller fragments are parenthesized so their
/// own `OR`s do not escape.
struct Operand<'a>(&'a Expr);

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self.0 {
            Expr::Raw(raw) => fmt!(f, "(" raw ")"),
            expr => expr.to_sql(f),
        }
    }
}

impl ToSql for &Raw {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let mut args = self.args.iter();

        for segment in self.segments() {
            match segment {
                Segment::Text(text) => fmt!(f, text),
                // The argument count is checked when the fragment is built
                Segment::Placeholder => fmt!(f, args.next()),
            }
        }
    }
}
