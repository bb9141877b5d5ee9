//! Generic shallow merge: fill absent fields from a freshly built template.
//!
//! Composite config types with many sibling scalar fields get no bespoke
//! per-field rule in the resolver. Instead this pass inspects the type's
//! serialized field set at run time and copies every field whose live value
//! is absent, leaving explicit values — including `false` and `""` — alone.
//!
//! The pass is one level deep by contract: fields whose template value is an
//! object (nested configs, string maps) are skipped entirely. The resolver
//! descends into nested configs itself, replacing absent ones wholesale and
//! merging present ones level by level.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Copy every absent scalar/list field of `live` from a fresh template.
///
/// `live` is rewritten in place. Presence is nullity: a field is absent when
/// it serializes to `null` (an `Option::None` slot), never when it holds an
/// explicit falsy value.
///
/// Panics if `live` and the template do not share a struct field layout.
/// That is a contract violation in the calling code, not a user error, so
/// it is not reported as a `Result`.
pub fn merge_defaults<T>(live: &mut T, template: impl FnOnce() -> T)
where
    T: Serialize + DeserializeOwned,
{
    let mut fields = to_field_map(live);
    for (key, template_val) in to_field_map(&template()) {
        if matches!(template_val, Value::Object(_) | Value::Null) {
            // Nested configs belong to the resolver's explicit descent;
            // a null template slot has no default to offer.
            continue;
        }
        if matches!(fields.get(&key), None | Some(Value::Null)) {
            fields.insert(key, template_val);
        }
    }
    *live = serde_json::from_value(Value::Object(fields))
        .expect("specfill: live and template field layouts diverged");
}

fn to_field_map<T: Serialize>(value: &T) -> serde_json::Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => panic!("specfill: merge_defaults requires a struct-like config type"),
    }
}
