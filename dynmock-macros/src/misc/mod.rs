mod attribs_ex;
mod formatted_string;
mod method_ex;
mod return_type_ex;

use convert_case::{Case, Casing};
use proc_macro2::Ident;
use quote::format_ident;

pub(crate) use attribs_ex::AttribsEx;
pub(crate) use formatted_string::FormattedString;
pub(crate) use method_ex::MethodEx;
pub(crate) use return_type_ex::{is_unit, ReturnKind, ReturnTypeEx};

/// Name of the constant that refers to the member `method`.
pub(crate) fn format_member_const(method: &Ident) -> Ident {
    format_ident!("{}", method.to_string().to_case(Case::UpperSnake))
}

#[cfg(feature = "force-name")]
pub(crate) fn ident_dynmock() -> Ident {
    format_ident!("dynmock")
}

#[cfg(not(feature = "force-name"))]
pub(crate) fn ident_dynmock() -> Ident {
    use proc_macro_crate::{crate_name, FoundCrate};

    match crate_name("dynmock") {
        Ok(FoundCrate::Itself) => format_ident!("crate"),
        Ok(FoundCrate::Name(name)) => format_ident!("{name}"),
        Err(_) => format_ident!("dynmock"),
    }
}
