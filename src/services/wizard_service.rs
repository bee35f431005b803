use std::collections::HashMap;

use crate::models::{EnvVariable, EnvVariables, FormData, PlanCatalog, PlanDetail, PlanTier, PortMode, PortSelection};
use crate::utils::parse_flag;

/// Everything the configuration step needs from the selection step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardHandoff {
    pub form_data: FormData,
    pub plans: PlanCatalog,
}

impl WizardHandoff {
    /// `None` unless the navigation state carries a complete selection.
    pub fn from_params(params: &HashMap<String, String>) -> Option<Self> {
        let form_data = parse_form_data(params);
        if !form_data.is_complete() {
            return None;
        }
        Some(WizardHandoff { form_data, plans: PlanCatalog })
    }

    pub fn selected_plan(&self) -> &'static PlanDetail {
        self.plans.detail(self.form_data.plan_type)
    }
}

/// Values are kept as typed; blankness is judged by `FormData::missing_fields`.
fn field(params: &HashMap<String, String>, key: &str) -> String {
    params.get(key).cloned().unwrap_or_default()
}

pub fn parse_form_data(params: &HashMap<String, String>) -> FormData {
    let plan_type = params
        .get("plan_type")
        .and_then(|s| s.parse::<PlanTier>().ok())
        .unwrap_or_default();
    FormData {
        organization: field(params, "organization"),
        repository: field(params, "repository"),
        branch: field(params, "branch"),
        app_name: field(params, "app_name"),
        region: field(params, "region"),
        framework: field(params, "framework"),
        plan_type,
        use_database: parse_flag(params.get("use_database").map(String::as_str)),
    }
}

pub fn build_form_query_pairs(form: &FormData) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in [
        ("organization", &form.organization),
        ("repository", &form.repository),
        ("branch", &form.branch),
        ("app_name", &form.app_name),
        ("region", &form.region),
        ("framework", &form.framework),
    ] {
        if !value.is_empty() {
            pairs.push((key.to_string(), value.clone()));
        }
    }
    pairs.push(("plan_type".into(), form.plan_type.id().to_string()));
    pairs.push(("use_database".into(), (form.use_database as u8).to_string()));
    pairs
}

/// Path with the form carried in the query string.
pub fn wizard_url(path: &str, form: &FormData) -> String {
    let query = build_form_query_pairs(form)
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

/// Pairs `env_key[i]` with `env_value[i]`; a missing value is empty.
pub fn parse_env_rows(form: &HashMap<String, Vec<String>>) -> EnvVariables {
    let keys = form.get("env_key").cloned().unwrap_or_default();
    let values = form.get("env_value").cloned().unwrap_or_default();
    let rows = keys
        .into_iter()
        .enumerate()
        .map(|(i, key)| EnvVariable { key, value: values.get(i).cloned().unwrap_or_default() })
        .collect();
    EnvVariables::from_rows(rows)
}

pub fn parse_port_selection(params: &HashMap<String, String>) -> PortSelection {
    PortSelection {
        mode: PortMode::from_form(params.get("port_mode").map(|s| s.as_str())),
        custom_port: params.get("custom_port").map(|s| s.trim().to_string()).unwrap_or_default(),
    }
}

/// Continue on the selection step is offered only for a complete form.
pub fn continue_disabled(form: &FormData) -> bool {
    !form.is_complete()
}

/// Submit on the configuration step is withheld while a submission is
/// outstanding or a custom port is still blank.
pub fn submit_disabled(is_submitting: bool, port: &PortSelection) -> bool {
    is_submitting || !port.is_ready()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn scenario() -> HashMap<String, String> {
        params(&[
            ("organization", "kuberns"),
            ("repository", "my-app"),
            ("branch", "main"),
            ("app_name", "demo"),
            ("region", "us-east-1"),
            ("framework", "react"),
            ("plan_type", "starter"),
        ])
    }

    #[test]
    fn handoff_requires_complete_selection() {
        assert!(WizardHandoff::from_params(&HashMap::new()).is_none());
        let mut p = scenario();
        p.remove("framework");
        assert!(WizardHandoff::from_params(&p).is_none());
        let handoff = WizardHandoff::from_params(&scenario()).expect("complete");
        assert_eq!(handoff.selected_plan().memory, 1024);
    }

    #[test]
    fn unknown_plan_falls_back_to_starter() {
        let mut p = scenario();
        p.insert("plan_type".into(), "platinum".into());
        assert_eq!(parse_form_data(&p).plan_type, PlanTier::Starter);
        p.insert("plan_type".into(), "pro".into());
        assert_eq!(parse_form_data(&p).plan_type, PlanTier::Pro);
    }

    #[test]
    fn query_pairs_round_trip_through_parser() {
        let form = FormData { use_database: true, plan_type: PlanTier::Pro, ..parse_form_data(&scenario()) };
        let back: HashMap<String, String> = build_form_query_pairs(&form).into_iter().collect();
        assert_eq!(parse_form_data(&back), form);
    }

    #[test]
    fn wizard_url_encodes_values() {
        let form = FormData { app_name: "my demo".into(), ..FormData::default() };
        assert_eq!(wizard_url("/create/step-1", &form), "/create/step-1?app_name=my%20demo&plan_type=starter&use_database=0");
    }

    #[test]
    fn selection_values_are_kept_verbatim() {
        let mut p = scenario();
        p.insert("app_name".into(), " my app ".into());
        let form = parse_form_data(&p);
        assert_eq!(form.app_name, " my app ");
        assert!(form.is_complete());
        assert!(wizard_url("/create/step-2", &form).contains("app_name=%20my%20app%20"));

        p.insert("app_name".into(), "   ".into());
        assert_eq!(parse_form_data(&p).missing_fields(), vec!["app_name"]);
    }

    #[test]
    fn env_rows_pair_by_position() {
        let mut form = HashMap::new();
        form.insert("env_key".to_string(), vec!["A".to_string(), "".to_string(), "C".to_string()]);
        form.insert("env_value".to_string(), vec!["1".to_string(), "2".to_string()]);
        let env = parse_env_rows(&form);
        assert_eq!(env.len(), 3);
        assert_eq!(env.rows()[2], EnvVariable { key: "C".into(), value: String::new() });
        assert_eq!(env.to_env_map().len(), 1);
    }

    #[test]
    fn no_env_rows_yields_one_blank_row() {
        assert_eq!(parse_env_rows(&HashMap::new()), EnvVariables::default());
    }

    #[test]
    fn continue_disabled_iff_a_required_field_is_empty() {
        assert!(continue_disabled(&FormData::default()));
        assert!(!continue_disabled(&parse_form_data(&scenario())));
        for key in ["app_name", "region", "framework", "repository", "organization"] {
            let mut p = scenario();
            p.insert(key.to_string(), String::new());
            assert!(continue_disabled(&parse_form_data(&p)), "{key}");
        }
        let mut p = scenario();
        p.remove("branch");
        assert!(!continue_disabled(&parse_form_data(&p)));
    }

    #[test]
    fn submit_disabled_truth_table() {
        let random = PortSelection::random();
        let custom_empty = PortSelection::custom("");
        let custom_set = PortSelection::custom("8080");
        assert!(!submit_disabled(false, &random));
        assert!(!submit_disabled(false, &custom_set));
        assert!(submit_disabled(false, &custom_empty));
        assert!(submit_disabled(true, &random));
        assert!(submit_disabled(true, &custom_set));
        assert!(submit_disabled(true, &custom_empty));
    }

    #[test]
    fn port_selection_from_form() {
        let p = params(&[("port_mode", "custom"), ("custom_port", " 8080 ")]);
        assert_eq!(parse_port_selection(&p), PortSelection::custom("8080"));
        assert_eq!(parse_port_selection(&HashMap::new()), PortSelection::random());
    }
}
