mod record;
mod util;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rowbind types
    rowbind: TokenStream,
}

pub(super) fn record(record: &Record) -> TokenStream {
    let rowbind = quote!(_rowbind::codegen_support);

    let expand = Expand { record, rowbind };

    wrap_in_const(expand.expand_record_impl())
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowbind as _rowbind;
            #code
        };
    }
}
