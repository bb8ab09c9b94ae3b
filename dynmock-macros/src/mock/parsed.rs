use proc_macro2::Ident;
use syn::{
    parse::{Parse, ParseStream, Result as ParseResult},
    parse2, Attribute, Block, Error, Fields, FnArg, ImplItem, ItemImpl, ItemStruct, Pat, Path,
    Signature, TraitItemFn, Type,
};

use crate::misc::{AttribsEx, MethodEx};

/// Parsed code inside the mock! macro
pub(crate) struct Parsed {
    pub ty: ItemStruct,
    pub impls: Vec<MockedImpl>,
}

/// Trait implementation of the mocked type
pub(crate) struct MockedImpl {
    pub attrs: Vec<Attribute>,
    pub trait_: Path,
    pub interface: String,
    pub items: Vec<ImplItem>,
    pub methods: Vec<MockedFn>,
}

/// Single method of a mocked trait
pub(crate) struct MockedFn {
    pub attrs: Vec<Attribute>,
    pub sig: Signature,
    pub block: Option<Block>,
    pub args: Vec<MethodArg>,
}

/// Typed argument of a mocked method
pub(crate) struct MethodArg {
    pub ident: Ident,
    pub ty: Type,
    pub kind: ArgKind,
}

/// Direction of a method argument
pub(crate) enum ArgKind {
    /// Passed by value or by shared reference.
    In,

    /// Passed as `&mut T`; the mock may read and replace the value.
    InOut(Type),

    /// Passed as `&mut T` and marked with `#[dynmock(out)]`.
    Out(Type),
}

impl Parse for Parsed {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let mut ty = input.parse::<ItemStruct>()?;

        match &ty.fields {
            Fields::Unit => (),
            Fields::Named(f) if f.named.is_empty() => (),
            fields => {
                return Err(Error::new_spanned(
                    fields,
                    "Mocked types must not declare any fields!",
                ))
            }
        }

        if !ty.generics.params.is_empty() {
            return Err(Error::new_spanned(
                &ty.generics,
                "Generic mock types are not supported!",
            ));
        }

        ty.attrs.remove_derives();

        let mut impls = Vec::new();
        while !input.is_empty() {
            let impl_ = input.parse::<ItemImpl>()?;

            impls.push(MockedImpl::new(&ty, impl_)?);
        }

        if impls.is_empty() {
            return Err(input.error("Expected at least one trait implementation!"));
        }

        Ok(Self { ty, impls })
    }
}

impl MockedImpl {
    fn new(ty: &ItemStruct, impl_: ItemImpl) -> ParseResult<Self> {
        let is_self = matches!(
            &*impl_.self_ty,
            Type::Path(p) if p.qself.is_none() && p.path.is_ident(&ty.ident)
        );
        if !is_self {
            return Err(Error::new_spanned(
                &impl_.self_ty,
                "Expected trait implementation for the mocked type of this mock!{} block!",
            ));
        }

        let Some((_, trait_, _)) = impl_.trait_ else {
            return Err(Error::new_spanned(
                &impl_.self_ty,
                "Only trait implementations can be mocked!",
            ));
        };

        let interface = match trait_.segments.last() {
            Some(segment) => segment.ident.to_string(),
            None => return Err(Error::new_spanned(&trait_, "Expected trait path!")),
        };

        let mut items = Vec::new();
        let mut methods = Vec::new();

        for item in impl_.items {
            let method = match item {
                ImplItem::Fn(f) => MockedFn::new(f.attrs, f.sig, Some(f.block))?,
                ImplItem::Verbatim(ts) => {
                    let TraitItemFn { attrs, sig, .. } = parse2::<TraitItemFn>(ts)?;

                    MockedFn::new(attrs, sig, None)?
                }
                item @ (ImplItem::Type(_) | ImplItem::Const(_)) => {
                    items.push(item);

                    continue;
                }
                item => {
                    return Err(Error::new_spanned(
                        item,
                        "Only methods, types and constants are supported in mocked traits!",
                    ))
                }
            };

            if method.sig.is_associated_fn() {
                return Err(Error::new_spanned(
                    &method.sig,
                    "Associated functions without receiver can not be mocked!",
                ));
            }

            methods.push(method);
        }

        Ok(Self {
            attrs: impl_.attrs,
            trait_,
            interface,
            items,
            methods,
        })
    }
}

impl MockedFn {
    fn new(attrs: Vec<Attribute>, mut sig: Signature, block: Option<Block>) -> ParseResult<Self> {
        let mut args = Vec::new();

        for input in &mut sig.inputs {
            let FnArg::Typed(arg) = input else {
                continue;
            };

            let Pat::Ident(pat) = &*arg.pat else {
                return Err(Error::new_spanned(
                    &arg.pat,
                    "Only simple identifiers are supported as argument patterns!",
                ));
            };

            let is_out = arg.attrs.has_dynmock_attr("out");
            arg.attrs.remove_dynmock_attrs();

            let kind = match (&*arg.ty, is_out) {
                (Type::Reference(r), true) if r.mutability.is_some() => {
                    ArgKind::Out((*r.elem).clone())
                }
                (_, true) => {
                    return Err(Error::new_spanned(
                        &arg.ty,
                        "Output arguments must be passed as mutable reference!",
                    ))
                }
                (Type::Reference(r), false) if r.mutability.is_some() => {
                    ArgKind::InOut((*r.elem).clone())
                }
                (_, false) => ArgKind::In,
            };

            args.push(MethodArg {
                ident: pat.ident.clone(),
                ty: (*arg.ty).clone(),
                kind,
            });
        }

        Ok(Self {
            attrs,
            sig,
            block,
            args,
        })
    }
}
