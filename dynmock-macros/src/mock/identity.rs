use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};

use crate::misc::ident_dynmock;

use super::descriptor::Descriptor;
use super::parsed::Parsed;

/// Identity layer of the mock type.
///
/// Equality, hashing and the textual representation of a mock are answered
/// by its proxy, never by the mocked traits.
pub(crate) struct Identity<'a> {
    parsed: &'a Parsed,
}

impl<'a> Identity<'a> {
    pub(crate) fn new(parsed: &'a Parsed) -> Self {
        Self { parsed }
    }
}

impl ToTokens for Identity<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let dynmock = ident_dynmock();
        let ident: &Ident = &self.parsed.ty.ident;
        let descriptor = Descriptor::new(self.parsed);

        tokens.extend(quote! {
            impl #dynmock::AsProxy for #ident {
                fn proxy(&self) -> &#dynmock::Proxy {
                    &self.proxy
                }
            }

            impl #dynmock::Mockable for #ident {
                fn descriptor() -> std::sync::Arc<#dynmock::TypeDescriptor> {
                    static DESCRIPTOR: #dynmock::Lazy<std::sync::Arc<#dynmock::TypeDescriptor>> =
                        #dynmock::Lazy::new(|| std::sync::Arc::new(#descriptor));

                    DESCRIPTOR.clone()
                }

                fn from_proxy(proxy: #dynmock::Proxy) -> Self {
                    Self { proxy }
                }
            }

            impl #dynmock::ToValue for #ident {
                fn to_value(&self) -> #dynmock::Value {
                    #dynmock::Value::Mock(self.proxy.mock().clone())
                }
            }

            impl Clone for #ident {
                fn clone(&self) -> Self {
                    Self {
                        proxy: self.proxy.clone(),
                    }
                }
            }

            impl PartialEq for #ident {
                fn eq(&self, other: &Self) -> bool {
                    self.proxy == other.proxy
                }
            }

            impl Eq for #ident {}

            impl std::hash::Hash for #ident {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    std::hash::Hash::hash(&self.proxy, state);
                }
            }

            impl std::fmt::Display for #ident {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    std::fmt::Display::fmt(&self.proxy, f)
                }
            }

            impl std::fmt::Debug for #ident {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}({:?})", stringify!(#ident), self.proxy.mock())
                }
            }
        });
    }
}
