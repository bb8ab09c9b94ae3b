use syn::{Attribute, Meta};

/// Helper for the `#[dynmock(...)]` attributes that may be attached to
/// parameters of a mocked method.
pub(crate) trait AttribsEx {
    fn has_dynmock_attr(&self, ident: &str) -> bool;
    fn remove_dynmock_attrs(&mut self);
    fn remove_derives(&mut self);
}

impl AttribsEx for Vec<Attribute> {
    fn has_dynmock_attr(&self, ident: &str) -> bool {
        self.iter().any(|attr| {
            let Meta::List(ml) = &attr.meta else {
                return false;
            };

            if !ml.path.is_ident("dynmock") {
                return false;
            }

            let mut found = false;
            let _ = attr.parse_nested_meta(|meta| {
                found |= meta.path.is_ident(ident);

                Ok(())
            });

            found
        })
    }

    fn remove_dynmock_attrs(&mut self) {
        self.retain(|attr| !attr.path().is_ident("dynmock"));
    }

    fn remove_derives(&mut self) {
        self.retain(|attr| !attr.path().is_ident("derive"));
    }
}
