use proc_macro2::Ident;
use syn::{GenericParam, Signature};

pub(crate) trait MethodEx {
    fn is_associated_fn(&self) -> bool;
    fn type_params(&self) -> Vec<&Ident>;
}

impl MethodEx for Signature {
    fn is_associated_fn(&self) -> bool {
        self.receiver().is_none()
    }

    fn type_params(&self) -> Vec<&Ident> {
        self.generics
            .params
            .iter()
            .filter_map(|p| match p {
                GenericParam::Type(t) => Some(&t.ident),
                GenericParam::Lifetime(_) | GenericParam::Const(_) => None,
            })
            .collect()
    }
}
