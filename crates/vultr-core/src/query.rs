//! Request parameter maps and their encodings.
//!
//! Commands accept an ordered [`Params`] map. Helpers here pull identifiers out of the map
//! for path placement, project single-field bodies, and flatten the map into form/query
//! pairs for the wire.

use serde_json::Value;

/// Ordered mapping of parameter names to scalar, array or object values.
pub type Params = serde_json::Map<String, Value>;

/// Convert a JSON value into a parameter map.
///
/// Anything other than an object yields an empty map.
#[must_use]
pub fn params_from(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        _ => Params::new(),
    }
}

/// Remove a path identifier from the map and return it as a path segment.
///
/// Identifier keys are hyphenated (`instance-id`). The underscored spelling
/// (`instance_id`) is accepted as an alias; both spellings are removed so the identifier
/// never travels in the body as well. A missing identifier yields an empty segment.
/// The value is percent-encoded, so `/`, `?` and `#` stay inside the segment.
pub fn take_path_param(params: &mut Params, key: &str) -> String {
    urlencoding::encode(&take_param(params, key)).into_owned()
}

fn take_param(params: &mut Params, key: &str) -> String {
    let primary = params.shift_remove(key);
    let alias_key = key.replace('-', "_");
    let alias = if alias_key == key {
        None
    } else {
        params.shift_remove(&alias_key)
    };

    primary
        .or(alias)
        .map(|value| scalar_to_string(&value))
        .unwrap_or_default()
}

/// Read a field, substituting an empty string when it is missing or null.
#[must_use]
pub fn field_or_empty(params: &Params, key: &str) -> Value {
    match params.get(key) {
        Some(Value::Null) | None => Value::String(String::new()),
        Some(value) => value.clone(),
    }
}

/// Build a body containing only the named fields, each defaulting to an empty string.
#[must_use]
pub fn pick(params: &Params, keys: &[&str]) -> Params {
    keys.iter()
        .map(|key| ((*key).to_string(), field_or_empty(params, key)))
        .collect()
}

/// Move a path identifier (either spelling) to a v1 parameter name such as `SUBID`.
///
/// Nothing is inserted when the identifier is missing.
pub fn rename_path_param(params: &mut Params, key: &str, legacy_key: &str) {
    let id = take_param(params, key);
    if !id.is_empty() {
        params.insert(legacy_key.to_string(), Value::String(id));
    }
}

/// Flatten a parameter map into form/query pairs.
///
/// Strings are sent verbatim, numbers in decimal, booleans as `1`/`0`, and nulls are
/// omitted. Arrays expand to `key[0]`, `key[1]`, … and objects to `key[field]`.
#[must_use]
pub fn form_pairs(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten_into(key.clone(), value, &mut pairs);
    }
    pairs
}

fn flatten_into(prefix: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(format!("{prefix}[{index}]"), item, pairs);
            }
        }
        Value::Object(fields) => {
            for (field, item) in fields {
                flatten_into(format!("{prefix}[{field}]"), item, pairs);
            }
        }
        scalar => pairs.push((prefix, scalar_to_string(scalar))),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Builder for assembling parameter maps from optional values.
#[derive(Debug, Default, Clone)]
pub struct ParamsBuilder {
    params: Params,
}

impl ParamsBuilder {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: Params::new(),
        }
    }

    /// Append a required key/value pair.
    #[must_use]
    pub fn push<T>(mut self, key: &str, value: T) -> Self
    where
        T: Into<Value>,
    {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Append a key/value pair when the value is present.
    #[must_use]
    pub fn push_opt<T>(self, key: &str, value: Option<T>) -> Self
    where
        T: Into<Value>,
    {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Append using a mapping function when the value is present.
    #[must_use]
    pub fn push_opt_with<T, F>(self, key: &str, value: Option<T>, map: F) -> Self
    where
        F: FnOnce(T) -> Value,
    {
        match value {
            Some(value) => self.push(key, map(value)),
            None => self,
        }
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the collected parameters.
    #[must_use]
    pub fn build(self) -> Params {
        self.params
    }
}

/// Cursor pagination options accepted by every v2 list endpoint.
///
/// The cursor is opaque: it is copied from a previous response and forwarded verbatim.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Number of items per page.
    pub per_page: Option<u32>,
    /// Continuation cursor from a previous page.
    pub cursor: Option<String>,
}

impl ListOptions {
    /// Create options with no paging limits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            per_page: None,
            cursor: None,
        }
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set the continuation cursor.
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Merge the options into an existing parameter map.
    pub fn apply(&self, params: &mut Params) {
        if let Some(per_page) = self.per_page {
            params.insert("per_page".to_string(), Value::from(per_page));
        }
        if let Some(cursor) = &self.cursor {
            params.insert("cursor".to_string(), Value::from(cursor.clone()));
        }
    }

    /// Convert into a standalone parameter map.
    #[must_use]
    pub fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .push_opt("per_page", self.per_page)
            .push_opt("cursor", self.cursor.clone())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn params_from_non_object_is_empty() {
        assert!(params_from(json!(["a", "b"])).is_empty());
        assert!(params_from(Value::Null).is_empty());
        assert_eq!(params_from(json!({"a": 1})).len(), 1);
    }

    #[test]
    fn take_path_param_removes_identifier() {
        let mut params = params_from(json!({"instance-id": "abc", "label": "web"}));
        assert_eq!(take_path_param(&mut params, "instance-id"), "abc");
        assert_eq!(params, params_from(json!({"label": "web"})));
    }

    #[test]
    fn take_path_param_accepts_underscore_alias() {
        let mut params = params_from(json!({"dns_domain": "example.com", "name": "www"}));
        assert_eq!(take_path_param(&mut params, "dns-domain"), "example.com");
        assert!(!params.contains_key("dns_domain"));
        assert!(params.contains_key("name"));
    }

    #[test]
    fn take_path_param_removes_both_spellings() {
        let mut params = params_from(json!({"instance-id": "abc", "instance_id": "def"}));
        assert_eq!(take_path_param(&mut params, "instance-id"), "abc");
        assert!(params.is_empty());
    }

    #[test]
    fn take_path_param_missing_is_empty() {
        let mut params = Params::new();
        assert_eq!(take_path_param(&mut params, "instance-id"), "");

        let mut params = params_from(json!({"os-id": 387}));
        assert_eq!(take_path_param(&mut params, "os-id"), "387");
    }

    #[test]
    fn take_path_param_keeps_identifier_in_one_segment() {
        let mut params = params_from(json!({"instance-id": "../account?x=1#frag"}));
        assert_eq!(
            take_path_param(&mut params, "instance-id"),
            "..%2Faccount%3Fx%3D1%23frag"
        );
    }

    #[test]
    fn rename_path_param_does_not_encode() {
        let mut params = params_from(json!({"snapshot-id": "a/b"}));
        rename_path_param(&mut params, "snapshot-id", "SNAPSHOTID");
        assert_eq!(params["SNAPSHOTID"], "a/b");
    }

    #[test]
    fn pick_defaults_missing_fields_to_empty_string() {
        let params = params_from(json!({"ip": "10.0.0.1", "other": true}));
        let body = pick(&params, &["ip", "reverse"]);
        assert_eq!(body, params_from(json!({"ip": "10.0.0.1", "reverse": ""})));
    }

    #[test]
    fn field_or_empty_treats_null_as_missing() {
        let params = params_from(json!({"label": null}));
        assert_eq!(field_or_empty(&params, "label"), json!(""));
    }

    #[test]
    fn rename_path_param_moves_value() {
        let mut params = params_from(json!({"instance_id": 576965, "label": "web"}));
        rename_path_param(&mut params, "instance-id", "SUBID");
        assert_eq!(params, params_from(json!({"label": "web", "SUBID": "576965"})));

        rename_path_param(&mut params, "backup-id", "BACKUPID");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn form_pairs_flatten_like_a_form_post() {
        let params = params_from(json!({
            "label": "web 1",
            "DCID": 1,
            "notify": true,
            "enable": false,
            "skip": null,
            "tags": ["a", "b"],
            "schedule": {"hour": 3}
        }));

        let pairs = form_pairs(&params);
        assert_eq!(
            pairs,
            vec![
                ("label".to_string(), "web 1".to_string()),
                ("DCID".to_string(), "1".to_string()),
                ("notify".to_string(), "1".to_string()),
                ("enable".to_string(), "0".to_string()),
                ("tags[0]".to_string(), "a".to_string()),
                ("tags[1]".to_string(), "b".to_string()),
                ("schedule[hour]".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn builder_skips_none() {
        let builder = ParamsBuilder::new().push_opt("name", Option::<String>::None);
        assert!(builder.is_empty());

        let params = ParamsBuilder::new()
            .push("label", "web")
            .push_opt_with("per_page", Some(5u32), |v| Value::from(v * 2))
            .build();
        assert_eq!(params, params_from(json!({"label": "web", "per_page": 10})));
    }

    #[test]
    fn list_options_merge_into_params() {
        let mut params = params_from(json!({"label": "web"}));
        ListOptions::new()
            .with_per_page(25)
            .with_cursor("bmV4dF9fQU1T")
            .apply(&mut params);

        assert_eq!(
            params,
            params_from(json!({"label": "web", "per_page": 25, "cursor": "bmV4dF9fQU1T"}))
        );
        assert!(ListOptions::default().to_params().is_empty());
    }
}
