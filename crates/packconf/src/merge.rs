use packconf_common::{ConfigMap, ConfigValue, OnConflict};
use packconf_error::{ComposeError, ComposeResult};

/// Merges an overlay onto a base value with the default conflict policy
/// (`OnConflict::Fail`). Both inputs are borrowed; the result is a new value.
pub fn merge(base: &ConfigValue, overlay: &ConfigValue) -> ComposeResult<ConfigValue> {
  merge_values(base, overlay, OnConflict::Fail, &mut Vec::new())
}

/// Recursive merge. Mappings combine key-by-key, sequences concatenate
/// base-then-overlay, and any other pairing takes the overlay — except a
/// mapping against a scalar, which is a conflict decided by `on_conflict`.
pub(crate) fn merge_values(
  base: &ConfigValue,
  overlay: &ConfigValue,
  on_conflict: OnConflict,
  path: &mut Vec<String>,
) -> ComposeResult<ConfigValue> {
  match (base, overlay) {
    (ConfigValue::Mapping(base_map), ConfigValue::Mapping(overlay_map)) => {
      let mut merged = ConfigMap::default();
      for (key, base_value) in base_map {
        match overlay_map.get(key) {
          Some(overlay_value) => {
            path.push(key.clone());
            let merged_value = merge_values(base_value, overlay_value, on_conflict, path)?;
            path.pop();
            merged.insert(key.clone(), merged_value);
          }
          None => {
            merged.insert(key.clone(), base_value.clone());
          }
        }
      }
      // Overlay-only keys pass through, after the base keys.
      for (key, overlay_value) in overlay_map {
        if !base_map.contains_key(key) {
          merged.insert(key.clone(), overlay_value.clone());
        }
      }
      Ok(ConfigValue::Mapping(merged))
    }
    (ConfigValue::Sequence(base_items), ConfigValue::Sequence(overlay_items)) => {
      let mut merged = Vec::with_capacity(base_items.len() + overlay_items.len());
      merged.extend(base_items.iter().cloned());
      merged.extend(overlay_items.iter().cloned());
      Ok(ConfigValue::Sequence(merged))
    }
    _ if is_shape_conflict(base, overlay) => match on_conflict {
      OnConflict::PreferOverlay => {
        tracing::debug!(path = %display_path(path), "conflicting shapes, taking the overlay value");
        Ok(overlay.clone())
      }
      OnConflict::Fail => Err(ComposeError::TypeMismatch {
        path: display_path(path),
        base_kind: base.kind().as_str(),
        overlay_kind: overlay.kind().as_str(),
      }),
    },
    // Every remaining pairing has an unambiguous result: last write wins.
    _ => Ok(overlay.clone()),
  }
}

/// Only a mapping against a scalar is ambiguous. Sequence-vs-scalar and
/// mapping-vs-sequence replace, like scalar overrides do.
fn is_shape_conflict(base: &ConfigValue, overlay: &ConfigValue) -> bool {
  match (base, overlay) {
    (ConfigValue::Mapping(_), other) | (other, ConfigValue::Mapping(_)) => !other.is_container(),
    _ => false,
  }
}

fn display_path(path: &[String]) -> String {
  if path.is_empty() { "<root>".to_string() } else { path.join(".") }
}
