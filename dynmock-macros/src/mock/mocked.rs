use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};

use crate::misc::{format_member_const, ident_dynmock};

use super::{identity::Identity, mock_method::MockMethod, parsed::Parsed};

/// Mocked implementation of a mock! macro
pub(crate) struct Mocked {
    parsed: Parsed,
}

impl Mocked {
    pub(crate) fn new(parsed: Parsed) -> Self {
        Self { parsed }
    }

    fn render_struct(&self, tokens: &mut TokenStream) {
        let dynmock = ident_dynmock();
        let ty = &self.parsed.ty;
        let attrs = &ty.attrs;
        let vis = &ty.vis;
        let ident = &ty.ident;

        tokens.extend(quote! {
            #( #attrs )*
            #vis struct #ident {
                proxy: #dynmock::Proxy,
            }
        });
    }

    fn render_member_refs(&self, tokens: &mut TokenStream) {
        let dynmock = ident_dynmock();
        let ident = &self.parsed.ty.ident;

        let mut names = HashSet::new();
        let consts = self.parsed.impls.iter().flat_map(|impl_| {
            impl_.methods.iter().map(move |method| (impl_, method))
        });
        let consts = consts
            .filter_map(|(impl_, method)| {
                let const_ = format_member_const(&method.sig.ident);
                if !names.insert(const_.to_string()) {
                    return None;
                }

                let interface = &impl_.interface;
                let name = method.sig.ident.to_string();
                let doc = format!("Refers to `{interface}::{name}`.");

                Some(quote! {
                    #[doc = #doc]
                    pub const #const_: #dynmock::MemberRef = #dynmock::MemberRef::new(#interface, #name);
                })
            })
            .collect::<Vec<_>>();

        tokens.extend(quote! {
            #[allow(dead_code)]
            impl #ident {
                #( #consts )*
            }
        });
    }

    fn render_impls(&self, tokens: &mut TokenStream) {
        let ident = &self.parsed.ty.ident;

        for impl_ in &self.parsed.impls {
            let attrs = &impl_.attrs;
            let trait_ = &impl_.trait_;
            let items = &impl_.items;
            let methods = impl_.methods.iter().map(|m| MockMethod::new(impl_, m));

            tokens.extend(quote! {
                #( #attrs )*
                impl #trait_ for #ident {
                    #( #items )*
                    #( #methods )*
                }
            });
        }
    }
}

impl ToTokens for Mocked {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.render_struct(tokens);
        self.render_member_refs(tokens);

        Identity::new(&self.parsed).to_tokens(tokens);

        self.render_impls(tokens);
    }
}
