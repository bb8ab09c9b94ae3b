use quote::ToTokens;

/// Renders tokens as compact source text, like `Vec<String>` or `&str`.
pub(crate) trait FormattedString {
    fn to_formatted_string(&self) -> String;
}

impl<X> FormattedString for X
where
    X: ToTokens,
{
    fn to_formatted_string(&self) -> String {
        let code = self.to_token_stream().to_string();
        let mut ret = String::with_capacity(code.len());
        let mut prev = ' ';

        for c in code.chars() {
            if c == ' ' {
                prev = c;
                continue;
            }

            if prev == ' ' && !ret.is_empty() && needs_space(ret.chars().last(), c) {
                ret.push(' ');
            }

            ret.push(c);
            prev = c;
        }

        ret
    }
}

fn needs_space(last: Option<char>, next: char) -> bool {
    matches!(last, Some(c) if c.is_alphanumeric() || c == '_')
        && (next.is_alphanumeric() || next == '_')
}
