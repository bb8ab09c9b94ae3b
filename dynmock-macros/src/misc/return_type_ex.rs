use syn::{GenericArgument, PathArguments, ReturnType, Type};

/// How the result of a mocked method is handed back to its caller.
pub(crate) enum ReturnKind {
    /// The method returns `()`.
    Unit,

    /// The method returns a plain value.
    Value(Type),

    /// The method returns `Result<T, E>`; faults are converted into `E`.
    Fallible { ok: Type, err: Type },
}

pub(crate) trait ReturnTypeEx {
    fn kind(&self) -> ReturnKind;
}

impl ReturnTypeEx for ReturnType {
    fn kind(&self) -> ReturnKind {
        let ReturnType::Type(_, ty) = self else {
            return ReturnKind::Unit;
        };

        if is_unit(ty) {
            return ReturnKind::Unit;
        }

        match split_result(ty) {
            Some((ok, err)) => ReturnKind::Fallible { ok, err },
            None => ReturnKind::Value((**ty).clone()),
        }
    }
}

pub(crate) fn is_unit(ty: &Type) -> bool {
    matches!(ty, Type::Tuple(t) if t.elems.is_empty())
}

fn split_result(ty: &Type) -> Option<(Type, Type)> {
    let Type::Path(path) = ty else {
        return None;
    };

    let segment = path.path.segments.last()?;
    if segment.ident != "Result" {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty.clone()),
        _ => None,
    });

    let ok = types.next()?;
    let err = types.next()?;

    types.next().is_none().then_some((ok, err))
}
