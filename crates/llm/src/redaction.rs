use once_cell::sync::Lazy;
use regex::Regex;

/// Marker substituted for every matched sensitive span. Consumers scanning a
/// forwarded payload treat its presence as confirmation that redaction ran.
pub const SENTINEL: &str = "[REDACTED]";

// Fixed rule set, applied in declaration order. The patterns are the
// documented simplistic ones (dashed 9-digit id, bare 16-digit card number)
// and will both under- and over-match real sensitive data.
static BUILTIN_RULES: Lazy<Vec<RedactionRule>> = Lazy::new(|| {
    vec![
        RedactionRule::new("national-id", r"\b\d{3}-\d{2}-\d{4}\b"),
        RedactionRule::new("payment-card", r"\b\d{16}\b"),
    ]
});

#[derive(Debug, Clone)]
pub struct RedactionRule {
    label: &'static str,
    pattern: Regex,
    sentinel: &'static str,
}

impl RedactionRule {
    fn new(label: &'static str, pattern: &str) -> Self {
        Self {
            label,
            pattern: Regex::new(pattern).expect("valid redaction pattern"),
            sentinel: SENTINEL,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// One exhaustive, non-overlapping, left-to-right substitution pass.
    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.sentinel).into_owned()
    }
}

pub fn redaction_rules() -> &'static [RedactionRule] {
    &BUILTIN_RULES
}

pub fn matches_any(text: &str) -> bool {
    BUILTIN_RULES.iter().any(|rule| rule.matches(text))
}

#[derive(Debug, Clone)]
pub struct RedactionPolicy {
    enabled: bool,
}

impl RedactionPolicy {
    pub fn standard() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Runs every rule over the current string state. When the policy is
    /// disabled the input passes through untouched, even if patterns match.
    pub fn apply(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let mut current = text.to_string();
        for rule in BUILTIN_RULES.iter() {
            current = rule.apply(&current);
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_id_is_replaced() {
        let policy = RedactionPolicy::standard();
        let out = policy.apply("SSN: 123-45-6789, note it down");
        assert_eq!(out, format!("SSN: {SENTINEL}, note it down"));
    }

    #[test]
    fn payment_card_is_replaced() {
        let policy = RedactionPolicy::standard();
        let out = policy.apply("card 1234567812345678 used");
        assert_eq!(out, format!("card {SENTINEL} used"));
    }

    #[test]
    fn every_match_is_replaced() {
        let policy = RedactionPolicy::standard();
        let out = policy.apply("ids 111-22-3333 and 444-55-6666, card 9999888877776666");
        assert!(!out.contains("111-22-3333"));
        assert!(!out.contains("444-55-6666"));
        assert!(!out.contains("9999888877776666"));
        assert_eq!(out.matches(SENTINEL).count(), 3);
    }

    #[test]
    fn digit_runs_of_other_lengths_are_kept() {
        let policy = RedactionPolicy::standard();
        let fifteen = "claim ref 123456781234567";
        assert_eq!(policy.apply(fifteen), fifteen);
        let seventeen = "claim ref 12345678123456789";
        assert_eq!(policy.apply(seventeen), seventeen);
    }

    #[test]
    fn embedded_id_without_boundary_is_kept() {
        let policy = RedactionPolicy::standard();
        let text = "ref 9123-45-6789 logged";
        assert_eq!(policy.apply(text), text);
    }

    #[test]
    fn disabled_policy_passes_through() {
        let policy = RedactionPolicy::disabled();
        let text = "SSN: 123-45-6789 and card 1234567812345678";
        assert_eq!(policy.apply(text), text);
        assert!(!policy.enabled());
    }

    #[test]
    fn redacted_output_never_matches_a_rule() {
        let policy = RedactionPolicy::standard();
        let out = policy.apply("123-45-6789 then 1234567812345678 then 987-65-4321");
        assert!(!matches_any(&out));
    }

    #[test]
    fn rule_set_is_ordered_and_fixed() {
        let labels: Vec<&str> = redaction_rules().iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["national-id", "payment-card"]);
    }
}
