//! Group metadata

use serde::{Deserialize, Serialize};

/// The `group.json` document: what the page header shows.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupInfo {
    pub name: String,
    #[serde(default)]
    pub introduction: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_from_json() {
        let group: GroupInfo =
            serde_json::from_str(r#"{"name": "MULTI", "introduction": "We study things."}"#)
                .unwrap();
        assert_eq!(group.name, "MULTI");
        assert_eq!(group.introduction, "We study things.");
    }

    #[test]
    fn test_group_missing_introduction() {
        let group: GroupInfo = serde_json::from_str(r#"{"name": "MULTI"}"#).unwrap();
        assert!(group.introduction.is_empty());
    }
}
