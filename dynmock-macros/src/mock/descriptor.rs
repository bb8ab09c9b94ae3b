use proc_macro2::{Ident, TokenStream, TokenTree};
use quote::{quote, ToTokens};
use syn::Type;

use crate::misc::{ident_dynmock, is_unit, FormattedString, MethodEx, ReturnKind, ReturnTypeEx};

use super::parsed::{ArgKind, MockedFn, Parsed};

/// Expression that builds the `TypeDescriptor` of the mocked type.
pub(crate) struct Descriptor<'a> {
    parsed: &'a Parsed,
}

impl<'a> Descriptor<'a> {
    pub(crate) fn new(parsed: &'a Parsed) -> Self {
        Self { parsed }
    }
}

impl ToTokens for Descriptor<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Parsed { ty, impls } = self.parsed;

        let dynmock = ident_dynmock();
        let name = ty.ident.to_string();

        let interfaces = impls.iter().map(|i| &i.interface);
        let members = impls.iter().flat_map(|impl_| {
            impl_
                .methods
                .iter()
                .map(|method| Member::new(&impl_.interface, method))
        });

        tokens.extend(quote! {
            #dynmock::TypeDescriptor::new(#name)
                #( .interface(#interfaces) )*
                #( .member(#members) )*
        });
    }
}

struct Member<'a> {
    interface: &'a str,
    method: &'a MockedFn,
}

impl<'a> Member<'a> {
    fn new(interface: &'a str, method: &'a MockedFn) -> Self {
        Self { interface, method }
    }

    fn returns(&self, dynmock: &Ident) -> TokenStream {
        let sig = &self.method.sig;
        let type_params = sig.type_params();

        let ty = match sig.output.kind() {
            ReturnKind::Unit => return quote!(#dynmock::Returns::void()),
            ReturnKind::Value(ty) | ReturnKind::Fallible { ok: ty, .. } => ty,
        };

        if is_unit(&ty) {
            quote!(#dynmock::Returns::void())
        } else if type_params.iter().any(|p| contains_ident(&ty, p)) {
            let type_name = ty.to_formatted_string();

            quote!(#dynmock::Returns::unchecked(#type_name))
        } else {
            quote!(#dynmock::Returns::of::<#ty>())
        }
    }
}

impl ToTokens for Member<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { interface, method } = self;

        let dynmock = ident_dynmock();
        let name = method.sig.ident.to_string();

        let params = method.args.iter().map(|arg| {
            let param = arg.ident.to_string();
            let (type_name, kind) = match &arg.kind {
                ArgKind::In => (arg.ty.to_formatted_string(), quote!(In)),
                ArgKind::InOut(ty) => (ty.to_formatted_string(), quote!(InOut)),
                ArgKind::Out(ty) => (ty.to_formatted_string(), quote!(Out)),
            };

            quote!(.param(#param, #type_name, #dynmock::ParamKind::#kind))
        });

        let generics = method.sig.type_params().into_iter().map(|p| {
            let p = p.to_string();

            quote!(.generic(#p))
        });

        let returns = self.returns(&dynmock);
        let concrete = method.block.is_some().then(|| quote!(.concrete()));

        tokens.extend(quote! {
            #dynmock::Member::new(#interface, #name)
                #( #params )*
                #( #generics )*
                .returns(#returns)
                #concrete
        });
    }
}

fn contains_ident(ty: &Type, ident: &Ident) -> bool {
    fn walk(tokens: TokenStream, ident: &Ident) -> bool {
        tokens.into_iter().any(|tt| match tt {
            TokenTree::Ident(i) => i == *ident,
            TokenTree::Group(g) => walk(g.stream(), ident),
            TokenTree::Punct(_) | TokenTree::Literal(_) => false,
        })
    }

    walk(ty.to_token_stream(), ident)
}
