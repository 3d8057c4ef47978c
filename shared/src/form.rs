//! Form fields, their native-style constraints, and input markup helpers.

use std::collections::{BTreeMap, HashMap};
use std::sync::{LazyLock, Mutex};

use regex::Regex;

use crate::error::ValidationError;

/// Six digits, as typed from an authenticator app.
pub const OTP_CODE_PATTERN: &str = "[0-9]{6}";
pub const OTP_CODE_LENGTH: usize = 6;

/// Compiled `pattern` attributes, anchored to the whole value. An invalid
/// pattern is cached as `None`.
static PATTERNS: LazyLock<Mutex<HashMap<&'static str, Option<Regex>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn compiled_pattern(pattern: &'static str) -> Option<Regex> {
    let mut cache = PATTERNS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    cache
        .entry(pattern)
        .or_insert_with(|| Regex::new(&format!("^(?:{})$", pattern)).ok())
        .clone()
}

/// Declared constraints for one input, mirroring the HTML attributes
/// (`required`, `pattern`, `maxlength`) the page renders for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub pattern: Option<&'static str>,
    pub max_length: Option<usize>,
}

impl FieldSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            pattern: None,
            max_length: None,
        }
    }

    pub const fn with_pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Constraint validation with browser semantics: an empty value only
    /// fails `required`; `pattern` must match the whole value, and a pattern
    /// that does not compile imposes no constraint.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return if self.required {
                Err(ValidationError::Missing { field: self.name })
            } else {
                Ok(())
            };
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(ValidationError::TooLong { field: self.name, max });
            }
        }

        if let Some(re) = self.pattern.and_then(compiled_pattern) {
            if !re.is_match(value) {
                return Err(ValidationError::Pattern { field: self.name });
            }
        }

        Ok(())
    }
}

/// Current input values keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSet {
    values: BTreeMap<&'static str, String>,
}

impl FieldSet {
    /// Empty values for every declared field.
    pub fn new(specs: &[FieldSpec]) -> Self {
        Self {
            values: specs.iter().map(|spec| (spec.name, String::new())).collect(),
        }
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Returns `false` for names the form does not declare.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.values.values_mut().for_each(String::clear);
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    /// First failing constraint, in declaration order.
    pub fn validate(&self, specs: &[FieldSpec]) -> Result<(), ValidationError> {
        specs.iter().try_for_each(|spec| spec.check(self.get(spec.name)))
    }
}

// ============================================
// INPUT MARKUP
// ============================================

/// Element id for an input: the explicit id, else derived from its label
/// (lower-cased, each whitespace run replaced by one hyphen).
pub fn input_id(label: &str, explicit: Option<&str>) -> String {
    if let Some(id) = explicit.filter(|id| !id.is_empty()) {
        return id.to_string();
    }

    let mut slug = String::with_capacity(label.len());
    let mut in_space = false;
    for c in label.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }
    format!("input-{}", slug)
}

pub fn error_id(input_id: &str) -> String {
    format!("{}-error", input_id)
}

pub fn helper_id(input_id: &str) -> String {
    format!("{}-helper", input_id)
}

/// `aria-describedby` for an input. Points at the error message when there is
/// one, otherwise at the helper text; never both.
pub fn described_by(
    input_id: &str,
    has_error: bool,
    has_helper: bool,
    extra: Option<&str>,
) -> Option<String> {
    let ids: Vec<String> = [
        has_error.then(|| error_id(input_id)),
        (has_helper && !has_error).then(|| helper_id(input_id)),
        extra.filter(|s| !s.is_empty()).map(str::to_string),
    ]
    .into_iter()
    .flatten()
    .collect();

    (!ids.is_empty()).then(|| ids.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: FieldSpec = FieldSpec::required("code_2fa")
        .with_pattern(OTP_CODE_PATTERN)
        .with_max_length(OTP_CODE_LENGTH);

    #[test]
    fn test_required_rejects_empty_only() {
        let spec = FieldSpec::required("username");
        assert_eq!(spec.check(""), Err(ValidationError::Missing { field: "username" }));
        assert_eq!(spec.check("alice"), Ok(()));
        // native `required` accepts whitespace
        assert_eq!(spec.check(" "), Ok(()));
    }

    #[test]
    fn test_code_pattern() {
        assert_eq!(CODE.check("123456"), Ok(()));
        assert_eq!(CODE.check("12345"), Err(ValidationError::Pattern { field: "code_2fa" }));
        assert_eq!(CODE.check("12a456"), Err(ValidationError::Pattern { field: "code_2fa" }));
        assert_eq!(
            CODE.check("1234567"),
            Err(ValidationError::TooLong { field: "code_2fa", max: 6 })
        );
        assert_eq!(CODE.check(""), Err(ValidationError::Missing { field: "code_2fa" }));
    }

    #[test]
    fn test_patterns_compile_once() {
        assert_eq!(CODE.check("000000"), Ok(()));
        assert_eq!(CODE.check("999999"), Ok(()));
        let cache = PATTERNS.lock().unwrap();
        assert!(matches!(cache.get(OTP_CODE_PATTERN), Some(Some(_))));
    }

    #[test]
    fn test_invalid_pattern_is_ignored() {
        let broken = FieldSpec::required("code").with_pattern("[0-9");
        assert_eq!(broken.check("anything"), Ok(()));
        assert_eq!(broken.check(""), Err(ValidationError::Missing { field: "code" }));
        assert!(matches!(PATTERNS.lock().unwrap().get("[0-9"), Some(None)));
    }

    #[test]
    fn test_field_set_lifecycle() {
        let specs = [FieldSpec::required("username"), CODE];
        let mut fields = FieldSet::new(&specs);
        assert!(fields.is_empty());

        assert!(fields.set("username", "alice"));
        assert!(!fields.set("unknown", "x"));
        assert_eq!(fields.get("username"), "alice");
        assert_eq!(fields.get("unknown"), "");

        assert_eq!(
            fields.validate(&specs),
            Err(ValidationError::Missing { field: "code_2fa" })
        );
        fields.set("code_2fa", "654321");
        assert_eq!(fields.validate(&specs), Ok(()));

        fields.clear();
        assert!(fields.is_empty());
        assert_eq!(fields.get("username"), "");
    }

    #[test]
    fn test_input_id_derivation() {
        assert_eq!(input_id("Nom d'utilisateur", None), "input-nom-d'utilisateur");
        assert_eq!(input_id("Mot de  Passe", None), "input-mot-de-passe");
        assert_eq!(input_id("Mot\tde\nPasse", None), "input-mot-de-passe");
        assert_eq!(input_id("Label", Some("code-2fa")), "code-2fa");
        assert_eq!(input_id("Label", Some("")), "input-label");
    }

    #[test]
    fn test_described_by_never_points_at_both() {
        assert_eq!(described_by("a", false, false, None), None);
        assert_eq!(described_by("a", false, true, None).as_deref(), Some("a-helper"));
        assert_eq!(described_by("a", true, true, None).as_deref(), Some("a-error"));
        assert_eq!(
            described_by("a", true, false, Some("hint")).as_deref(),
            Some("a-error hint")
        );
        assert_eq!(described_by("a", false, false, Some("")), None);
    }
}
