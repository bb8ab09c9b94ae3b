use super::{ArgMatcher, IntoArgMatcher};

/// Converts a list of matchers or literals into one [`ArgMatcher`] per
/// argument.
///
/// The arguments are passed as
/// - a unit `()` for no arguments
/// - a single matcher or literal for one argument
/// - or a tuple `(m1, m2, ...)` for many arguments
pub trait IntoArgMatchers {
    /// Get the argument matchers.
    fn into_arg_matchers(self) -> Vec<ArgMatcher>;
}

impl IntoArgMatchers for () {
    fn into_arg_matchers(self) -> Vec<ArgMatcher> {
        Vec::new()
    }
}

impl IntoArgMatchers for Vec<ArgMatcher> {
    fn into_arg_matchers(self) -> Vec<ArgMatcher> {
        self
    }
}

impl<M> IntoArgMatchers for M
where
    M: IntoArgMatcher,
{
    fn into_arg_matchers(self) -> Vec<ArgMatcher> {
        vec![self.into_arg_matcher()]
    }
}

macro_rules! impl_multi {
    ($( $matcher_name:ident: $matcher_type:ident ),+) => {
        impl<$( $matcher_type ),+> IntoArgMatchers for ($( $matcher_type, )+)
        where
            $(
                $matcher_type: IntoArgMatcher,
            )+
        {
            fn into_arg_matchers(self) -> Vec<ArgMatcher> {
                let ($( $matcher_name, )+) = self;

                vec![$( $matcher_name.into_arg_matcher() ),+]
            }
        }
    };
}

impl_multi!(m0: M0);
impl_multi!(m0: M0, m1: M1);
impl_multi!(m0: M0, m1: M1, m2: M2);
impl_multi!(m0: M0, m1: M1, m2: M2, m3: M3);
impl_multi!(m0: M0, m1: M1, m2: M2, m3: M3, m4: M4);
impl_multi!(m0: M0, m1: M1, m2: M2, m3: M3, m4: M4, m5: M5);
impl_multi!(m0: M0, m1: M1, m2: M2, m3: M3, m4: M4, m5: M5, m6: M6);
impl_multi!(m0: M0, m1: M1, m2: M2, m3: M3, m4: M4, m5: M5, m6: M6, m7: M7);
impl_multi!(m0: M0, m1: M1, m2: M2, m3: M3, m4: M4, m5: M5, m6: M6, m7: M7, m8: M8);
impl_multi!(m0: M0, m1: M1, m2: M2, m3: M3, m4: M4, m5: M5, m6: M6, m7: M7, m8: M8, m9: M9);
