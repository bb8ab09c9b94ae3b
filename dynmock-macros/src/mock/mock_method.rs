use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, ToTokens};

use crate::misc::{ident_dynmock, MethodEx, ReturnKind, ReturnTypeEx};

use super::parsed::{ArgKind, MockedFn, MockedImpl};

/// Implementation of a single mocked method.
///
/// The method turns its arguments into an invocation, dispatches it to the
/// mockery and converts the outcome back into the declared return type.
pub(crate) struct MockMethod<'a> {
    impl_: &'a MockedImpl,
    method: &'a MockedFn,
}

impl<'a> MockMethod<'a> {
    pub(crate) fn new(impl_: &'a MockedImpl, method: &'a MockedFn) -> Self {
        Self { impl_, method }
    }
}

impl ToTokens for MockMethod<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { impl_, method } = self;
        let MockedFn {
            attrs,
            sig,
            block,
            args,
        } = method;

        let dynmock = ident_dynmock();
        let invocation = Ident::new("invocation", Span::mixed_site());

        let interface = &impl_.interface;
        let name = sig.ident.to_string();
        let display = format!("{interface}::{name}");

        let values = args.iter().map(|arg| {
            let ident = &arg.ident;

            match &arg.kind {
                ArgKind::In => quote!(#dynmock::ToValue::to_value(&#ident)),
                ArgKind::InOut(_) => quote!(#dynmock::ToValue::to_value(&*#ident)),
                ArgKind::Out(_) => quote!(#dynmock::Value::Out),
            }
        });

        let type_params = sig.type_params();
        let with_generics = (!type_params.is_empty()).then(|| {
            quote! {
                .with_generics(vec![ #( #dynmock::TypeArg::of::<#type_params>() ),* ])
            }
        });

        let call_through = match block {
            Some(block) => quote!(return #block),
            None => quote! {
                #dynmock::fail(#dynmock::MockError::NoImplementation(#display.into()))
            },
        };

        let write_back = args.iter().enumerate().filter_map(|(index, arg)| {
            let ident = &arg.ident;

            match &arg.kind {
                ArgKind::In => None,
                ArgKind::InOut(_) | ArgKind::Out(_) => Some(quote! {
                    #dynmock::write_back(&#invocation, #index, #ident);
                }),
            }
        });

        let finish = match sig.output.kind() {
            ReturnKind::Unit => quote!(#dynmock::finish::<()>(#invocation)),
            ReturnKind::Value(ty) => quote!(#dynmock::finish::<#ty>(#invocation)),
            ReturnKind::Fallible { ok, err } => {
                quote!(#dynmock::finish_fallible::<#ok, #err>(#invocation))
            }
        };

        tokens.extend(quote! {
            #( #attrs )*
            #sig {
                let mut #invocation = match self.proxy.invocation(
                    #dynmock::MemberRef::new(#interface, #name),
                    vec![ #( #values ),* ],
                ) {
                    Ok(#invocation) => #invocation #with_generics,
                    Err(error) => #dynmock::fail(error),
                };

                match self.proxy.dispatch(&mut #invocation) {
                    Ok(#dynmock::Dispatched::Handled) => (),
                    Ok(#dynmock::Dispatched::CallThrough) => #call_through,
                    Err(error) => #dynmock::fail(error),
                }

                #( #write_back )*

                #finish
            }
        });
    }
}
