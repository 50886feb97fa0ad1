//! Secret-change policy: a labelled, ordered set of predicates a candidate
//! secret must satisfy, plus a coarse strength meter for the form UI.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A named boolean rule a candidate secret must satisfy.
#[derive(Debug, Clone)]
pub struct PolicyRule {
    label: String,
    predicate: Predicate,
}

#[derive(Debug, Clone)]
enum Predicate {
    MinLength(usize),
    Uppercase,
    Lowercase,
    Digit,
    Special,
    Pattern(Regex),
}

impl PolicyRule {
    pub fn min_length(min: usize) -> Self {
        Self {
            label: format!("At least {min} characters"),
            predicate: Predicate::MinLength(min),
        }
    }

    pub fn uppercase() -> Self {
        Self {
            label: "An uppercase letter".to_string(),
            predicate: Predicate::Uppercase,
        }
    }

    pub fn lowercase() -> Self {
        Self {
            label: "A lowercase letter".to_string(),
            predicate: Predicate::Lowercase,
        }
    }

    pub fn digit() -> Self {
        Self {
            label: "A number".to_string(),
            predicate: Predicate::Digit,
        }
    }

    pub fn special() -> Self {
        Self {
            label: "A symbol".to_string(),
            predicate: Predicate::Special,
        }
    }

    /// A deployment-specific rule backed by a regular expression.
    pub fn pattern(label: impl Into<String>, pattern: Regex) -> Self {
        Self {
            label: label.into(),
            predicate: Predicate::Pattern(pattern),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn check(&self, value: &str) -> bool {
        match &self.predicate {
            Predicate::MinLength(min) => value.chars().count() >= *min,
            Predicate::Uppercase => value.chars().any(|c| c.is_uppercase()),
            Predicate::Lowercase => value.chars().any(|c| c.is_lowercase()),
            Predicate::Digit => value.chars().any(|c| c.is_ascii_digit()),
            Predicate::Special => value.chars().any(|c| !c.is_alphanumeric()),
            Predicate::Pattern(regex) => regex.is_match(value),
        }
    }
}

/// Pass/fail for a single rule against the current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStatus {
    pub label: String,
    pub passed: bool,
}

/// Declarative form of a policy rule, for deployment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum PolicyRequirement {
    MinLength { min: usize },
    Uppercase,
    Lowercase,
    Digit,
    Special,
    Pattern { label: String, pattern: String },
}

/// An ordered set of rules a new secret must satisfy.
///
/// An empty set is valid and passes every value.
#[derive(Debug, Clone, Default)]
pub struct SecretPolicy {
    rules: Vec<PolicyRule>,
}

impl SecretPolicy {
    pub fn new(rules: Vec<PolicyRule>) -> Self {
        Self { rules }
    }

    /// The empty policy.
    pub fn none() -> Self {
        Self::default()
    }

    /// Default server policy: min 8 chars with uppercase, lowercase, and a
    /// number.
    pub fn standard() -> Self {
        Self::new(vec![
            PolicyRule::min_length(8),
            PolicyRule::uppercase(),
            PolicyRule::lowercase(),
            PolicyRule::digit(),
        ])
    }

    /// Build a policy from its declarative configuration form.
    pub fn from_requirements(
        requirements: &[PolicyRequirement],
    ) -> Result<Self, regex::Error> {
        let rules = requirements
            .iter()
            .map(|req| {
                Ok(match req {
                    PolicyRequirement::MinLength { min } => {
                        PolicyRule::min_length(*min)
                    }
                    PolicyRequirement::Uppercase => PolicyRule::uppercase(),
                    PolicyRequirement::Lowercase => PolicyRule::lowercase(),
                    PolicyRequirement::Digit => PolicyRule::digit(),
                    PolicyRequirement::Special => PolicyRule::special(),
                    PolicyRequirement::Pattern { label, pattern } => {
                        PolicyRule::pattern(label.clone(), Regex::new(pattern)?)
                    }
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self::new(rules))
    }

    pub fn rules(&self) -> &[PolicyRule] {
        &self.rules
    }

    /// Evaluate every rule against the value, in order.
    pub fn evaluate(&self, value: &str) -> Vec<RuleStatus> {
        self.rules
            .iter()
            .map(|rule| RuleStatus {
                label: rule.label().to_string(),
                passed: rule.check(value),
            })
            .collect()
    }

    /// Labels of every failing rule, in order. Empty when satisfied.
    pub fn failures(&self, value: &str) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| !rule.check(value))
            .map(|rule| rule.label().to_string())
            .collect()
    }

    pub fn is_satisfied(&self, value: &str) -> bool {
        self.rules.iter().all(|rule| rule.check(value))
    }
}

/// Coarse strength band shown next to the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthBand {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=25 => StrengthBand::Weak,
            26..=50 => StrengthBand::Fair,
            51..=75 => StrengthBand::Good,
            _ => StrengthBand::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthBand::Weak => "Weak",
            StrengthBand::Fair => "Fair",
            StrengthBand::Good => "Good",
            StrengthBand::Strong => "Strong",
        }
    }
}

/// Score a candidate secret 0-100 from length and character variety.
///
/// Advisory only; submission is gated by the policy rules, never by this.
pub fn strength_score(value: &str) -> u32 {
    let mut strength = 0;

    // Length bonus
    strength += (value.len() as u32).min(20) * 2;

    // Character variety bonus
    let has_lower = value.chars().any(|c| c.is_lowercase());
    let has_upper = value.chars().any(|c| c.is_uppercase());
    let has_digit = value.chars().any(|c| c.is_numeric());
    let has_special = value.chars().any(|c| !c.is_alphanumeric());

    if has_lower {
        strength += 15;
    }
    if has_upper {
        strength += 15;
    }
    if has_digit {
        strength += 15;
    }
    if has_special {
        strength += 15;
    }

    strength.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_policy_passes_everything() {
        let policy = SecretPolicy::none();
        assert!(policy.is_satisfied(""));
        assert!(policy.is_satisfied("anything"));
        assert!(policy.evaluate("x").is_empty());
    }

    #[test]
    fn standard_policy_rules() {
        let policy = SecretPolicy::standard();
        assert!(!policy.is_satisfied("abc"));
        assert!(!policy.is_satisfied("alllowercase1"));
        assert!(policy.is_satisfied("Str0ngPass"));

        let failures = policy.failures("abc");
        assert_eq!(
            failures,
            vec![
                "At least 8 characters".to_string(),
                "An uppercase letter".to_string(),
                "A number".to_string(),
            ]
        );
    }

    #[test]
    fn evaluate_reports_each_rule_individually() {
        let policy = SecretPolicy::new(vec![
            PolicyRule::min_length(4),
            PolicyRule::digit(),
        ]);
        let statuses = policy.evaluate("word");
        assert_eq!(statuses.len(), 2);
        assert!(statuses[0].passed);
        assert!(!statuses[1].passed);
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        let rule = PolicyRule::min_length(8);
        // 5 Cyrillic characters are 10 bytes; still too short
        assert!(!rule.check("парол"));
        assert!(rule.check("парольный"));
        assert!(rule.check("exactly8"));
    }

    #[test]
    fn pattern_rule() {
        let rule = PolicyRule::pattern(
            "No spaces",
            Regex::new(r"^\S+$").unwrap(),
        );
        assert!(rule.check("nospaces"));
        assert!(!rule.check("has space"));
    }

    #[test]
    fn policy_from_config() {
        let json = r#"[
            {"rule": "min_length", "min": 10},
            {"rule": "special"},
            {"rule": "pattern", "label": "Starts with a letter", "pattern": "^[A-Za-z]"}
        ]"#;
        let requirements: Vec<PolicyRequirement> =
            serde_json::from_str(json).unwrap();
        let policy = SecretPolicy::from_requirements(&requirements).unwrap();
        assert_eq!(policy.rules().len(), 3);
        assert!(policy.is_satisfied("abcdefgh1!"));
        assert!(!policy.is_satisfied("1bcdefgh1!"));
    }

    #[test]
    fn bad_pattern_is_an_error() {
        let requirements = vec![PolicyRequirement::Pattern {
            label: "broken".to_string(),
            pattern: "(".to_string(),
        }];
        assert!(SecretPolicy::from_requirements(&requirements).is_err());
    }

    #[test]
    fn strength_bands() {
        assert_eq!(StrengthBand::from_score(strength_score("")), StrengthBand::Weak);
        assert_eq!(
            StrengthBand::from_score(strength_score("Str0ngPass!word")),
            StrengthBand::Strong
        );
        assert_eq!(StrengthBand::Weak.label(), "Weak");
    }
}
