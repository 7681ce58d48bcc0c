//! Loading and normalizing front-matter attributes.
//!
//! Loading hands the raw block to a [`MetadataEngine`]; normalizing reshapes
//! the resulting mapping so that `flags` is always a set (encoded as a map of
//! `name -> true`) and `includes` is always an ordered list. Every other key
//! is passed through untouched.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

use crate::constants::{FLAGS_KEY, INCLUDES_KEY};
use crate::core::{FrontmatterError, Result};

/// Structured-text parser used to load a front-matter block.
///
/// The crate only depends on this contract, so callers can swap the YAML
/// implementation without touching the extraction logic.
pub trait MetadataEngine: Send + Sync {
    /// Parse `text` into a YAML value, or return the parser's diagnostic.
    fn load(&self, text: &str) -> std::result::Result<Value, String>;
}

/// Default engine backed by `serde_yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeYamlEngine;

impl MetadataEngine for SerdeYamlEngine {
    fn load(&self, text: &str) -> std::result::Result<Value, String> {
        serde_yaml::from_str(text).map_err(|e| e.to_string())
    }
}

/// Normalized front-matter attributes of a test file.
///
/// `flags` and `includes` are always present, whatever the block contained.
///
/// ```rust
/// use t262_frontmatter::frontmatter::parse_file;
///
/// let parsed = parse_file("/*---\nflags: [onlyStrict]\nes5id: 10.4.2-1-1\n---*/").unwrap();
/// assert!(parsed.attrs.has_flag("onlyStrict"));
/// assert!(!parsed.attrs.has_flag("noStrict"));
/// assert!(parsed.attrs.includes.is_empty());
/// assert_eq!(parsed.attrs.get_str("es5id"), Some("10.4.2-1-1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestAttrs {
    /// Set flags, each mapped to `true`. Unset flags are absent.
    #[serde(default)]
    pub flags: BTreeMap<String, bool>,

    /// Harness files to prepend to the test, in declaration order.
    #[serde(default)]
    pub includes: Vec<String>,

    /// Every other key (`es5id`, `description`, `negative`, `features`, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl TestAttrs {
    /// Whether `flag` is set.
    #[must_use]
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.get(flag).copied().unwrap_or(false)
    }

    /// A pass-through attribute.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// A pass-through attribute holding a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// True when there are no flags, includes or other attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.includes.is_empty() && self.extra.is_empty()
    }

    /// Convert back into a YAML mapping in normalized shape.
    #[must_use]
    pub fn to_mapping(&self) -> Mapping {
        let mut mapping = Mapping::new();
        let flags: Mapping = self
            .flags
            .iter()
            .map(|(name, set)| (Value::String(name.clone()), Value::Bool(*set)))
            .collect();
        mapping.insert(Value::String(FLAGS_KEY.to_string()), Value::Mapping(flags));
        mapping.insert(
            Value::String(INCLUDES_KEY.to_string()),
            Value::Sequence(self.includes.iter().cloned().map(Value::String).collect()),
        );
        for (key, value) in &self.extra {
            mapping.insert(Value::String(key.clone()), value.clone());
        }
        mapping
    }
}

/// Load the raw attribute mapping from a front-matter block.
///
/// An empty block yields an empty mapping without calling the engine, and so
/// does a block holding only whitespace or comments. A block whose root is a
/// scalar or a sequence is rejected, as is anything the engine cannot parse.
/// Errors name `file`.
pub fn load_attrs(engine: &dyn MetadataEngine, file: &str, yaml: &str) -> Result<Mapping> {
    if yaml.is_empty() {
        return Ok(Mapping::new());
    }

    let value = engine.load(yaml).map_err(|message| FrontmatterError::MetadataParse {
        file: file.to_string(),
        message,
    })?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(FrontmatterError::MetadataParse {
            file: file.to_string(),
            message: format!("frontmatter must be a YAML mapping, found {}", value_kind(&other)),
        }),
    }
}

/// Reshape a raw attribute mapping. Never fails.
///
/// - `flags`: a list of names becomes `{name: true, ...}`; an already
///   normalized map keeps the names mapped to `true`; a single name counts as
///   a one-element list; absent, `null` or falsy values give an empty map.
/// - `includes`: a list keeps its scalar entries in order; a single name
///   counts as a one-element list; absent, `null` or falsy values give an
///   empty list.
/// - any other key is copied into [`TestAttrs::extra`] unchanged.
///
/// Entries of the wrong shape are dropped with a warning.
#[must_use]
pub fn normalize_attrs(raw: Mapping) -> TestAttrs {
    let mut attrs = TestAttrs::default();

    for (key, value) in raw {
        let key = key_to_string(&key);
        match key.as_str() {
            FLAGS_KEY => attrs.flags = normalize_flags(value),
            INCLUDES_KEY => attrs.includes = normalize_includes(value),
            _ => {
                attrs.extra.insert(key, value);
            }
        }
    }

    attrs
}

fn normalize_flags(value: Value) -> BTreeMap<String, bool> {
    let mut flags = BTreeMap::new();

    match value {
        Value::Sequence(items) => {
            for item in items {
                match scalar_to_string(&item) {
                    Some(name) => {
                        flags.insert(name, true);
                    }
                    None => tracing::warn!("Ignoring non-scalar flag entry: {item:?}"),
                }
            }
        }
        Value::Mapping(set) => {
            for (name, enabled) in set {
                if enabled == Value::Bool(true) {
                    flags.insert(key_to_string(&name), true);
                }
            }
        }
        Value::Tagged(tagged) => return normalize_flags(tagged.value),
        value if is_falsy(&value) => {}
        value => {
            if let Some(name) = scalar_to_string(&value) {
                flags.insert(name, true);
            }
        }
    }

    flags
}

fn normalize_includes(value: Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .filter_map(|item| {
                let name = scalar_to_string(item);
                if name.is_none() {
                    tracing::warn!("Ignoring non-scalar include entry: {item:?}");
                }
                name
            })
            .collect(),
        Value::Mapping(_) => {
            tracing::warn!("Ignoring 'includes' given as a mapping");
            Vec::new()
        }
        Value::Tagged(tagged) => normalize_includes(tagged.value),
        value if is_falsy(&value) => Vec::new(),
        value => scalar_to_string(&value).into_iter().collect(),
    }
}

/// Values that count as "not given": `null`, `false`, `0` and `""`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn key_to_string(key: &Value) -> String {
    match key {
        Value::Null => "null".to_string(),
        other => scalar_to_string(other).unwrap_or_else(|| {
            serde_yaml::to_string(other).map(|s| s.trim_end().to_string()).unwrap_or_default()
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
