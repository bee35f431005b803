/// A fixed choice offered by the selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const ORGANIZATIONS: &[SelectOption] = &[opt("kuberns", "Kuberns"), opt("personal", "Personal")];

pub const REPOSITORIES: &[SelectOption] = &[
    opt("my-app", "my-app"),
    opt("webapp", "webapp"),
    opt("api-service", "api-service"),
];

pub const BRANCHES: &[SelectOption] = &[opt("main", "main"), opt("develop", "develop"), opt("staging", "staging")];

pub const REGIONS: &[SelectOption] = &[
    opt("us-east-1", "United States - Michigan"),
    opt("eu-west-1", "Europe - Ireland"),
    opt("ap-south-1", "Asia Pacific - Mumbai"),
];

pub const FRAMEWORKS: &[SelectOption] = &[
    opt("react", "React"),
    opt("vue", "Vue.js"),
    opt("angular", "Angular"),
    opt("next", "Next.js"),
    opt("nuxt", "Nuxt.js"),
];

/// An option as rendered in a `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub fn option_views(options: &[SelectOption], selected: &str) -> Vec<OptionView> {
    options
        .iter()
        .map(|o| OptionView {
            value: o.value.to_string(),
            label: o.label.to_string(),
            selected: o.value == selected,
        })
        .collect()
}

/// Display label for a catalog value, falling back to the raw value.
pub fn label_for(options: &[SelectOption], value: &str) -> String {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.to_string())
        .unwrap_or_else(|| value.to_string())
}
