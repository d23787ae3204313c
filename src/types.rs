// src/types.rs
use serde::{Deserialize, Serialize};

/// A previously opened project as tracked by the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RecentProject {
    pub path: String,
    pub name: String,
    pub last_accessed: String,
    #[serde(default = "default_access_count")]
    pub access_count: i64,
}

fn default_access_count() -> i64 {
    1
}

impl RecentProject {
    /// Display name for a project path: the last path component, or the
    /// whole path when it has none (e.g. `/` or `C:\`).
    pub fn name_from_path(path: &str) -> String {
        std::path::Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_last_component() {
        assert_eq!(RecentProject::name_from_path("/home/me/code/widget"), "widget");
        assert_eq!(RecentProject::name_from_path("/home/me/code/widget/"), "widget");
    }

    #[test]
    fn name_falls_back_to_path() {
        assert_eq!(RecentProject::name_from_path("/"), "/");
    }

    #[test]
    fn missing_access_count_defaults_to_one() {
        let json = r#"{"path":"/a","name":"a","last_accessed":"2024-01-01 00:00:00"}"#;
        let p: RecentProject = serde_json::from_str(json).unwrap();
        assert_eq!(p.access_count, 1);
    }
}
