//! Detect keys missing from a configuration file compared to the current schema.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;

/// Dotted paths of keys present in the default configuration but absent from `content`.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let defaults = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(e.to_string()))?;
    let current: Value = if content.trim().is_empty() {
        Value::Mapping(Default::default())
    } else {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(format!("invalid YAML: {e}")))?
    };

    let mut missing = Vec::new();
    collect_missing(&defaults, &current, "", &mut missing);
    Ok(missing)
}

fn collect_missing(defaults: &Value, current: &Value, prefix: &str, out: &mut Vec<String>) {
    let Some(def_map) = defaults.as_mapping() else {
        return;
    };

    for (key, def_val) in def_map {
        let Some(name) = key.as_str() else { continue };
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match current.as_mapping().and_then(|m| m.get(key)) {
            None => out.push(path),
            Some(cur_val) => collect_missing(def_val, cur_val, &path, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_nested_and_top_level_keys() {
        let missing = missing_keys("site_code: GGN\nfailure_policy:\n  upload: abort\n").unwrap();
        assert!(missing.contains(&"year_code".to_string()));
        assert!(missing.contains(&"failure_policy.remote".to_string()));
        assert!(!missing.contains(&"site_code".to_string()));
        assert!(!missing.contains(&"failure_policy.upload".to_string()));
    }

    #[test]
    fn complete_file_has_nothing_missing() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(missing_keys(&yaml).unwrap().is_empty());
    }
}
