// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! JSON merging functionality

use serde_json::Value as J;

/// Merge `layer` into `base`
///
/// Objects merge key by key; scalars and arrays replace. A null in the layer
/// leaves the base untouched.
pub fn merge_two_json(base: &mut J, layer: J) {
    match (base, layer) {
        (J::Object(a), J::Object(b)) => {
            for (k, v) in b {
                merge_two_json(a.entry(k).or_insert(J::Null), v);
            }
        }
        (_, J::Null) => {}
        (a, b) => *a = b,
    }
}

/// Insert `v` at a dotted path such as `remote.timeout-ms`, creating
/// intermediate objects and replacing any scalar in the way
pub fn insert_dotted(root: &mut J, dotted: &str, v: J) {
    let mut cur = root;
    let mut parts = dotted.split('.').peekable();

    while let Some(part) = parts.next() {
        if !cur.is_object() {
            *cur = J::Object(Default::default());
        }
        let J::Object(map) = cur else {
            unreachable!("just replaced with an object")
        };
        if parts.peek().is_none() {
            map.insert(part.to_string(), v);
            return;
        }
        cur = map.entry(part.to_string()).or_insert_with(|| J::Object(Default::default()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merges_nested_objects() {
        let mut base = json!({"remote": {"timeout-ms": 60000, "skip-remote-call": false}});
        merge_two_json(&mut base, json!({"remote": {"timeout-ms": 5000}}));
        assert_eq!(base["remote"]["timeout-ms"], 5000);
        assert_eq!(base["remote"]["skip-remote-call"], false);
    }

    #[test]
    fn arrays_are_replaced_wholesale() {
        let mut base = json!({"local-hosts": ["localhost", "127.0.0.1"]});
        merge_two_json(&mut base, json!({"local-hosts": ["dev.internal"]}));
        assert_eq!(base["local-hosts"], json!(["dev.internal"]));
    }

    #[test]
    fn null_keeps_base_value() {
        let mut base = json!({"user-agent": "gitgrade/1"});
        merge_two_json(&mut base, json!({"user-agent": null}));
        assert_eq!(base["user-agent"], "gitgrade/1");
    }

    #[test]
    fn insert_dotted_creates_intermediate_objects() {
        let mut root = json!({});
        insert_dotted(&mut root, "local.service-url", json!("http://127.0.0.1:9000/analyze"));
        assert_eq!(root["local"]["service-url"], "http://127.0.0.1:9000/analyze");
    }

    #[test]
    fn insert_dotted_overwrites_scalar_parent() {
        let mut root = json!({"local": 3});
        insert_dotted(&mut root, "local.timeout-ms", json!(10));
        assert_eq!(root, json!({"local": {"timeout-ms": 10}}));
    }
}
