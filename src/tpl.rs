use std::collections::HashMap;

/// Expands `$VARIABLE` references in output paths.
///
/// Variable names are uppercase ASCII letters, digits and `_`, matched as a
/// whole word: with `NAME` registered, `$NAMES` is left untouched.
#[derive(Default)]
pub struct Tpl {
    variables: HashMap<String, String>,
}

impl Tpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn parse(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            let len = after
                .find(|c: char| !(c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'))
                .unwrap_or(after.len());

            match self.variables.get(&after[..len]) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('$');
                    out.push_str(&after[..len]);
                }
            }
            rest = &after[len..];
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_tpl(name: &str) -> Tpl {
        let mut tpl = Tpl::new();
        tpl.register("NAME", name);
        tpl
    }

    #[test]
    fn test_output_name() {
        let tpl = name_tpl("fogo");

        assert_eq!(tpl.parse("$NAME.skill"), "fogo.skill");
        assert_eq!(tpl.parse("dist/$NAME/$NAME.skill"), "dist/fogo/fogo.skill");
    }

    #[test]
    fn test_unknown_variables_are_kept() {
        let tpl = name_tpl("fogo");

        assert_eq!(tpl.parse("$VERSION-$NAME.zip"), "$VERSION-fogo.zip");
        assert_eq!(tpl.parse("$NAMES/$NAME"), "$NAMES/fogo");
    }

    #[test]
    fn test_bare_dollar() {
        let tpl = name_tpl("fogo");

        assert_eq!(tpl.parse("cost$.skill"), "cost$.skill");
        assert_eq!(tpl.parse("trailing$"), "trailing$");
        assert_eq!(tpl.parse("no variables"), "no variables");
    }

    #[test]
    fn test_value_is_not_expanded_again() {
        let tpl = name_tpl("$NAME");

        assert_eq!(tpl.parse("$NAME.skill"), "$NAME.skill");
    }
}
