/// Replace `${ENV_VAR}` placeholders in raw config text.
///
/// Unresolvable variables are left as-is so the error surfaces later with the
/// placeholder visible.
pub fn substitute_env(input: &str) -> String {
    substitute_env_with(input, |name| std::env::var(name).ok())
}

/// Same as [`substitute_env`] with an injectable lookup, so tests do not
/// touch the process environment.
pub(crate) fn substitute_env_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            // Unterminated: keep the remainder verbatim.
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match (!name.is_empty()).then(|| lookup(name)).flatten() {
            Some(value) => out.push_str(&value),
            None => {
                out.push_str("${");
                out.push_str(name);
                out.push('}');
            },
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "PROJECTS_HOME" => Some("/srv/projects".to_string()),
            "STRATEGY" => Some("OR".to_string()),
            _ => None,
        }
    }

    #[test]
    fn substitutes_known_vars() {
        assert_eq!(
            substitute_env_with("root = \"${PROJECTS_HOME}/active\"", lookup),
            "root = \"/srv/projects/active\""
        );
        assert_eq!(
            substitute_env_with("${STRATEGY}-${STRATEGY}", lookup),
            "OR-OR"
        );
    }

    #[test]
    fn leaves_unknown_and_empty_placeholders() {
        assert_eq!(
            substitute_env_with("${PROJECTOR_NOPE} ${}", lookup),
            "${PROJECTOR_NOPE} ${}"
        );
    }

    #[test]
    fn keeps_unterminated_placeholder() {
        assert_eq!(
            substitute_env_with("a ${PROJECTS_HOME", lookup),
            "a ${PROJECTS_HOME"
        );
    }

    #[test]
    fn no_placeholders() {
        assert_eq!(substitute_env("plain text"), "plain text");
    }
}
