//! Canonical YAML rendering of decoded manifests
//!
//! Rendering is a pure function of the document and the `sort_keys` flag, so
//! two documents sharing a leaf can be compared byte-for-byte.

use crate::errors::Result;
use serde_yaml::{Mapping, Value};

/// Render a document as YAML text
///
/// With `sort_keys` false, mapping keys keep their decoded order. With
/// `sort_keys` true, keys at every nesting level are emitted in lexicographic
/// order of their textual form. Sequence order is never changed.
///
/// # Errors
///
/// Returns `Serialization` if the YAML emitter rejects the value.
pub fn render(raw: &Value, sort_keys_flag: bool) -> Result<String> {
    let text = if sort_keys_flag {
        serde_yaml::to_string(&sort_keys(raw))?
    } else {
        serde_yaml::to_string(raw)?
    };
    Ok(text)
}

/// Return a copy of `value` with mapping keys sorted at every level
pub fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Mapping(mapping) => {
            let mut entries: Vec<(&Value, &Value)> = mapping.iter().collect();
            entries.sort_by_cached_key(|(key, _)| key_text(key));

            let mut sorted = Mapping::with_capacity(entries.len());
            for (key, child) in entries {
                sorted.insert(key.clone(), sort_keys(child));
            }
            Value::Mapping(sorted)
        }
        Value::Sequence(items) => Value::Sequence(items.iter().map(sort_keys).collect()),
        Value::Tagged(tagged) => {
            let mut tagged = tagged.as_ref().clone();
            tagged.value = sort_keys(&tagged.value);
            Value::Tagged(Box::new(tagged))
        }
        scalar => scalar.clone(),
    }
}

/// Textual form of a mapping key used as its sort key
fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        complex => serde_yaml::to_string(complex).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSORTED: &str = r#"
kind: Deployment
apiVersion: apps/v1
metadata:
  name: web
  labels:
    zone: b
    app: web
spec:
  replicas: 2
  containers:
    - name: z
      image: nginx
    - name: a
      image: redis
"#;

    #[test]
    fn test_preserves_key_order_when_unsorted() {
        let value: Value = serde_yaml::from_str(UNSORTED).unwrap();
        let text = render(&value, false).unwrap();

        let kind_at = text.find("kind:").unwrap();
        let api_at = text.find("apiVersion:").unwrap();
        assert!(kind_at < api_at);
    }

    #[test]
    fn test_sorts_keys_at_every_level() {
        let value: Value = serde_yaml::from_str(UNSORTED).unwrap();
        let text = render(&value, true).unwrap();

        assert!(text.find("apiVersion:").unwrap() < text.find("kind:").unwrap());
        assert!(text.find("kind:").unwrap() < text.find("metadata:").unwrap());
        assert!(text.find("app: web").unwrap() < text.find("zone: b").unwrap());
        // inside each container, image sorts before name
        assert!(text.find("image: nginx").unwrap() < text.find("name: z").unwrap());
    }

    #[test]
    fn test_sorting_keeps_sequence_order() {
        let value: Value = serde_yaml::from_str(UNSORTED).unwrap();
        let text = render(&value, true).unwrap();

        assert!(text.find("name: z").unwrap() < text.find("name: a").unwrap());
    }

    #[test]
    fn test_key_order_differences_vanish_when_sorted() {
        let a: Value = serde_yaml::from_str("b: 1\na: 2\n").unwrap();
        let b: Value = serde_yaml::from_str("a: 2\nb: 1\n").unwrap();

        assert_ne!(render(&a, false).unwrap(), render(&b, false).unwrap());
        assert_eq!(render(&a, true).unwrap(), render(&b, true).unwrap());
    }

    #[test]
    fn test_unsorted_render_round_trips() {
        let value: Value = serde_yaml::from_str(UNSORTED).unwrap();
        let text = render(&value, false).unwrap();
        let decoded: Value = serde_yaml::from_str(&text).unwrap();

        assert_eq!(decoded, value);
    }
}
