use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVariable {
    pub key: String,
    pub value: String,
}

/// Editable environment-variable rows. Never shrinks below one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVariables {
    rows: Vec<EnvVariable>,
}

impl Default for EnvVariables {
    fn default() -> Self {
        Self { rows: vec![EnvVariable::default()] }
    }
}

impl EnvVariables {
    pub fn from_rows(rows: Vec<EnvVariable>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[EnvVariable] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push_empty(&mut self) {
        self.rows.push(EnvVariable::default());
    }

    pub fn can_remove(&self) -> bool {
        self.rows.len() > 1
    }

    /// Removes the row at `index`. Refused for the last remaining row or an
    /// out-of-range index.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Rows with a non-blank key, folded into a map. Later duplicates win.
    pub fn to_env_map(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        for row in self.rows.iter().filter(|r| !r.key.trim().is_empty()) {
            out.insert(row.key.clone(), row.value.clone());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(key: &str, value: &str) -> EnvVariable {
        EnvVariable { key: key.into(), value: value.into() }
    }

    #[test]
    fn starts_with_one_blank_row() {
        let env = EnvVariables::default();
        assert_eq!(env.rows(), &[EnvVariable::default()]);
        assert!(!env.can_remove());
    }

    #[test]
    fn last_row_cannot_be_removed() {
        let mut env = EnvVariables::default();
        assert!(!env.remove(0));
        assert_eq!(env.len(), 1);

        env.push_empty();
        assert!(env.remove(1));
        assert!(!env.remove(0));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn out_of_range_remove_is_ignored() {
        let mut env = EnvVariables::from_rows(vec![var("A", "1"), var("B", "2")]);
        assert!(!env.remove(7));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn blank_keys_are_dropped_and_duplicates_keep_last() {
        let env = EnvVariables::from_rows(vec![
            var("DATABASE_URL", "postgres://a"),
            var("", "orphan"),
            var("   ", "also orphan"),
            var("DATABASE_URL", "postgres://b"),
            var("NODE_ENV", "production"),
        ]);
        let map = env.to_env_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["DATABASE_URL"], "postgres://b");
        assert_eq!(map["NODE_ENV"], "production");
    }

    #[test]
    fn all_blank_rows_submit_nothing() {
        assert!(EnvVariables::default().to_env_map().is_empty());
    }
}
