//! Deserialization front door: turn a user-authored cluster document into a
//! sparse [`GlobalSpec`].
//!
//! Input is always an in-memory string — the crate does no file or network
//! I/O. The lenient parsers accept any well-formed document and drop keys
//! the schema does not know; the strict variants reject those keys instead,
//! reporting each one as a dotted path via `serde_ignored`.

use crate::error::SpecError;
use crate::spec::GlobalSpec;

/// Parse a YAML document into a sparse spec. Unknown keys are ignored.
///
/// An empty (or whitespace-only) document is a valid, fully absent spec.
pub fn from_yaml(content: &str) -> Result<GlobalSpec, SpecError> {
    if content.trim().is_empty() {
        return Ok(GlobalSpec::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Parse a JSON document into a sparse spec. Unknown keys are ignored.
pub fn from_json(content: &str) -> Result<GlobalSpec, SpecError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a YAML document, rejecting keys the schema does not know.
///
/// Every unrecognized key is collected as a dotted path (`auth.tokne`,
/// `storage.storageClass.typo`) and reported in one
/// [`SpecError::UnknownKeys`], so a user fixing a config file sees all of
/// their typos at once.
pub fn from_yaml_strict(content: &str) -> Result<GlobalSpec, SpecError> {
    if content.trim().is_empty() {
        return Ok(GlobalSpec::default());
    }
    let mut unknown_keys: Vec<String> = Vec::new();
    let deserializer = serde_yaml::Deserializer::from_str(content);
    let spec: GlobalSpec = serde_ignored::deserialize(deserializer, |ignored_path| {
        unknown_keys.push(ignored_path.to_string());
    })
    .map_err(SpecError::Yaml)?;
    reject_unknown(spec, unknown_keys)
}

/// Parse a JSON document, rejecting keys the schema does not know.
pub fn from_json_strict(content: &str) -> Result<GlobalSpec, SpecError> {
    let mut unknown_keys: Vec<String> = Vec::new();
    let mut deserializer = serde_json::Deserializer::from_str(content);
    let spec: GlobalSpec = serde_ignored::deserialize(&mut deserializer, |ignored_path| {
        unknown_keys.push(ignored_path.to_string());
    })
    .map_err(SpecError::Json)?;
    reject_unknown(spec, unknown_keys)
}

fn reject_unknown(spec: GlobalSpec, unknown_keys: Vec<String>) -> Result<GlobalSpec, SpecError> {
    if unknown_keys.is_empty() {
        Ok(spec)
    } else {
        Err(SpecError::UnknownKeys(unknown_keys))
    }
}
