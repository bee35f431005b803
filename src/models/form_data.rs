use serde::{Deserialize, Serialize};

use super::plan::PlanTier;

/// Selections collected by the first wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub organization: String,
    pub repository: String,
    pub branch: String,
    pub app_name: String,
    pub region: String,
    /// Sent to the API as `template`.
    pub framework: String,
    pub plan_type: PlanTier,
    pub use_database: bool,
}

impl FormData {
    /// Names of the required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("app_name", &self.app_name),
            ("region", &self.region),
            ("framework", &self.framework),
            ("repository", &self.repository),
            ("organization", &self.organization),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}/{}", self.organization, self.repository)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FormData {
        FormData {
            organization: "kuberns".into(),
            repository: "my-app".into(),
            branch: "main".into(),
            app_name: "demo".into(),
            region: "us-east-1".into(),
            framework: "react".into(),
            ..FormData::default()
        }
    }

    #[test]
    fn default_is_empty_starter() {
        let form = FormData::default();
        assert_eq!(form.plan_type, PlanTier::Starter);
        assert!(!form.use_database);
        assert_eq!(form.missing_fields().len(), 5);
    }

    #[test]
    fn each_required_field_blocks_completion() {
        let blank: [fn(&mut FormData); 5] = [
            |f| f.app_name.clear(),
            |f| f.region.clear(),
            |f| f.framework.clear(),
            |f| f.repository.clear(),
            |f| f.organization = "   ".into(),
        ];
        for clear in blank {
            let mut form = complete();
            clear(&mut form);
            assert!(!form.is_complete(), "{:?}", form);
            assert_eq!(form.missing_fields().len(), 1);
        }
    }

    #[test]
    fn branch_is_optional() {
        let mut form = complete();
        form.branch.clear();
        assert!(form.is_complete());
    }

    #[test]
    fn repo_url_points_at_github() {
        assert_eq!(complete().repo_url(), "https://github.com/kuberns/my-app");
    }
}
