//! Ordered command-line token construction.

/// Placeholder emitted in place of any secret value.
pub const REDACTED: &str = "[REDACTED]";

/// An ordered sequence of command-line tokens for one subcommand invocation.
///
/// Tokens are append-only; the serializers rely on insertion order being
/// preserved exactly, because field order is part of the observable contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList {
    tokens: Vec<String>,
}

impl ArgumentList {
    /// Start a token list with the fixed subcommand keyword.
    pub fn new(subcommand: &str) -> Self {
        Self {
            tokens: vec![subcommand.to_owned()],
        }
    }

    /// Append a bare token (a flag without a value, or a positional).
    pub fn push(&mut self, token: &str) {
        self.tokens.push(token.to_owned());
    }

    /// Append a switch followed by its value as two tokens.
    pub fn push_switch(&mut self, switch: &str, value: &str) {
        self.tokens.push(switch.to_owned());
        self.tokens.push(value.to_owned());
    }

    /// Append a switch whose value token is wrapped in double quotes.
    /// Used for every path-typed field.
    pub fn push_switch_quoted(&mut self, switch: &str, value: &str) {
        self.tokens.push(switch.to_owned());
        self.tokens.push(format!("\"{value}\""));
    }

    /// Append a switch for a secret field. The secret itself never reaches
    /// the list; the value token is always the [`REDACTED`] placeholder.
    pub fn push_switch_secret(&mut self, switch: &str) {
        self.tokens.push(switch.to_owned());
        self.tokens.push(REDACTED.to_owned());
    }

    /// Append a switch whose value is the items each wrapped in double
    /// quotes and joined with commas, e.g. `-g "Team 1","Team 2"`.
    pub fn push_switch_quoted_list(&mut self, switch: &str, items: &[String]) {
        let joined = items
            .iter()
            .map(|item| format!("\"{item}\""))
            .collect::<Vec<_>>()
            .join(",");
        self.tokens.push(switch.to_owned());
        self.tokens.push(joined);
    }

    /// The tokens in emission order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Consume the list, yielding the owned tokens.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    /// The space-joined command line, as asserted on by tests and printed
    /// by `--dry-run`.
    pub fn render(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Presence test for optional string fields: set, and not only whitespace.
pub(crate) fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_with_subcommand() {
        let args = ArgumentList::new("match");
        assert_eq!(args.render(), "match");
    }

    #[test]
    fn switch_and_value_are_separate_tokens() {
        let mut args = ArgumentList::new("pem");
        args.push_switch("-u", "user@example.com");
        assert_eq!(args.tokens(), ["pem", "-u", "user@example.com"]);
    }

    #[test]
    fn quoted_switch_wraps_value() {
        let mut args = ArgumentList::new("deliver");
        args.push_switch_quoted("-i", "/Working/app.ipa");
        assert_eq!(args.render(), "deliver -i \"/Working/app.ipa\"");
    }

    #[test]
    fn secret_switch_never_stores_the_value() {
        let mut args = ArgumentList::new("pem");
        args.push_switch_secret("--p12_password");
        assert_eq!(args.render(), "pem --p12_password [REDACTED]");
    }

    #[test]
    fn quoted_list_is_comma_joined() {
        let mut args = ArgumentList::new("pilot");
        args.push_switch_quoted_list(
            "-g",
            &["Team Wilson".to_owned(), "Brady Bunch".to_owned()],
        );
        assert_eq!(args.render(), "pilot -g \"Team Wilson\",\"Brady Bunch\"");
    }

    #[test]
    fn non_blank_rejects_whitespace() {
        assert_eq!(non_blank(Some(&"  ".to_owned())), None);
        assert_eq!(non_blank(Some(&"x".to_owned())), Some("x"));
        assert_eq!(non_blank(None), None);
    }

    proptest! {
        #[test]
        fn rendered_output_never_contains_a_secret(secret in "[a-zA-Z0-9!#%&]{1,24}") {
            let mut args = ArgumentList::new("pem");
            // The builder API makes leaking impossible by construction; the
            // property pins that down for arbitrary secrets.
            args.push_switch_secret("--p12_password");
            let rendered = args.render();
            prop_assert!(rendered.contains(REDACTED));
            let leaked = format!("password {secret}");
            prop_assert!(!rendered.contains(&leaked));
        }

        #[test]
        fn rendering_is_idempotent(values in proptest::collection::vec("[a-z]{1,8}", 0..6)) {
            let mut args = ArgumentList::new("supply");
            for value in &values {
                args.push(value);
            }
            prop_assert_eq!(args.render(), args.render());
            prop_assert_eq!(args.tokens().len(), values.len() + 1);
        }
    }
}
