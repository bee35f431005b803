use askama::Template;

use crate::models::{FormData, Notice, OptionView, PlanDetail, StepMark};

pub struct PlanOptionView {
    pub id: &'static str,
    pub detail: &'static PlanDetail,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "step_1.html")]
pub struct Step1Template {
    pub api_hostname: String,
    pub base_url: String,
    pub notices: Vec<Notice>,
    pub has_notices: bool,
    pub steps: Vec<StepMark>,
    pub form: FormData,
    pub organizations: Vec<OptionView>,
    pub repositories: Vec<OptionView>,
    pub branches: Vec<OptionView>,
    pub regions: Vec<OptionView>,
    pub frameworks: Vec<OptionView>,
    pub plans: Vec<PlanOptionView>,
    pub continue_disabled: bool,
    pub submit_url: String,
}

crate::impl_base_template!(Step1Template);
