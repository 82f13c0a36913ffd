//! Parsed proxy configuration tree and typed views over it.
//!
//! The document is kept as a generic YAML tree rather than a strict struct so
//! that a structurally broken file can still be walked and reported on.

use serde_yaml::Value;

/// Prefix marking a value that must be resolved from the environment.
pub const ENV_REFERENCE_PREFIX: &str = "os.environ/";

/// Root of a loaded configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    root: Value,
}

impl ConfigDocument {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Whether the root is usable as a mapping (an empty document counts).
    pub fn has_mapping_root(&self) -> bool {
        matches!(untag(&self.root), Value::Mapping(_) | Value::Null)
    }

    /// The raw `model_list` node, if the root is a mapping that carries one
    pub fn model_list(&self) -> Option<&Value> {
        lookup(&self.root, "model_list")
    }

    /// The raw `general_settings` node
    pub fn general_settings(&self) -> Option<&Value> {
        lookup(&self.root, "general_settings")
    }

    /// `general_settings.master_key`
    pub fn master_key(&self) -> Option<&Value> {
        self.general_settings()
            .and_then(|settings| lookup(settings, "master_key"))
    }
}

/// One element of `model_list`, with its 1-based position.
#[derive(Debug, Clone, Copy)]
pub struct ModelEntry<'a> {
    position: usize,
    node: &'a Value,
}

impl<'a> ModelEntry<'a> {
    pub fn new(position: usize, node: &'a Value) -> Self {
        Self { position, node }
    }

    /// 1-based index in `model_list`
    pub fn position(&self) -> usize {
        self.position
    }

    /// `model_name` rendered as text, or `Model #<position>` when absent.
    pub fn display_name(&self) -> String {
        lookup(self.node, "model_name")
            .filter(|name| !untag(name).is_null())
            .map_or_else(|| format!("Model #{}", self.position), render_scalar)
    }

    /// `litellm_params.model`
    pub fn model(&self) -> Option<&'a Value> {
        self.param("model")
    }

    /// `litellm_params.api_key`
    pub fn api_key(&self) -> Option<&'a Value> {
        self.param("api_key")
    }

    fn param(&self, key: &str) -> Option<&'a Value> {
        lookup(self.node, "litellm_params").and_then(|params| lookup(params, key))
    }
}

/// Environment variable named by an `os.environ/<NAME>` string value.
///
/// Non-string values and strings without the prefix yield `None`.
pub fn env_reference(value: &Value) -> Option<&str> {
    untag(value).as_str()?.strip_prefix(ENV_REFERENCE_PREFIX)
}

/// Elements of a sequence node, looking through YAML tags.
pub fn sequence_items(value: &Value) -> Option<&[Value]> {
    untag(value).as_sequence().map(Vec::as_slice)
}

/// Whether a node counts as "present" for a required setting.
///
/// Null, `false`, zero, empty strings and empty collections do not.
pub fn is_truthy(value: &Value) -> bool {
    match untag(value) {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(_) => true,
    }
}

/// Child of a mapping node; anything else has no children.
fn lookup<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    match untag(node) {
        Value::Mapping(map) => map.get(key),
        _ => None,
    }
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn render_scalar(value: &Value) -> String {
    match untag(value) {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
