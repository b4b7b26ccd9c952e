//! Choosing which template of an activity to compile.

use crate::timeline::Activity;

/// Text shown in place of an OKR prompt when an activity defines none.
pub const NO_OKR_TEMPLATE: &str = "No OKR prompt defined for this activity.";

/// Which of an activity's templates to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptKind {
    /// The activity's mega prompt (instructions for the model).
    #[default]
    Mega,
    /// The activity's OKR generation prompt.
    Okr,
}

impl PromptKind {
    /// Heading used when printing a compiled prompt of this kind.
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::Mega => "Instructions for LLM",
            PromptKind::Okr => "OKR Generation Logic",
        }
    }
}

/// Return the raw template for the requested kind.
///
/// A missing or empty OKR template yields [`NO_OKR_TEMPLATE`].
pub fn select_template(activity: &Activity, kind: PromptKind) -> &str {
    match kind {
        PromptKind::Mega => &activity.mega_prompt_template,
        PromptKind::Okr => activity
            .okr_prompt_template
            .as_deref()
            .filter(|template| !template.is_empty())
            .unwrap_or(NO_OKR_TEMPLATE),
    }
}

/// Template sent to the model when generating OKRs for an activity.
///
/// The activity's own OKR template wins. Otherwise a generic template is built
/// with the activity title baked in and the product fields left as placeholders.
pub fn okr_generation_template(activity: &Activity) -> String {
    match activity.okr_prompt_template.as_deref() {
        Some(template) if !template.is_empty() => template.to_string(),
        _ => format!(
            "Context: We are managing a software product named \"${{productName}}\".\n\
             Description: ${{productDescription}}\n\
             Goals: ${{productGoals}}\n\
             Task: Create 3 high-quality Objectives and Key Results (OKRs) specifically for the activity \"{}\".\n\
             Ensure the Key Results are measurable and numeric.",
            activity.title
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Fallbacks, compile, compile_with};
    use crate::product::ProductContext;

    fn activity(okr: Option<&str>) -> Activity {
        Activity {
            id: "prfaq".to_string(),
            title: "PR/FAQ & Value Prop".to_string(),
            description: "Work backwards".to_string(),
            mega_prompt_template: "Write a PR/FAQ for '${productName}'.".to_string(),
            okr_prompt_template: okr.map(str::to_string),
        }
    }

    #[test]
    fn mega_kind_selects_mega_template() {
        let a = activity(Some("okr"));
        assert_eq!(
            select_template(&a, PromptKind::Mega),
            "Write a PR/FAQ for '${productName}'."
        );
    }

    #[test]
    fn okr_kind_selects_okr_template() {
        let a = activity(Some("OKRs for ${productName}"));
        assert_eq!(select_template(&a, PromptKind::Okr), "OKRs for ${productName}");
    }

    #[test]
    fn missing_okr_template_uses_notice() {
        let a = activity(None);
        assert_eq!(select_template(&a, PromptKind::Okr), NO_OKR_TEMPLATE);
    }

    #[test]
    fn empty_okr_template_uses_notice() {
        let a = activity(Some(""));
        assert_eq!(select_template(&a, PromptKind::Okr), NO_OKR_TEMPLATE);
        assert_eq!(
            compile(select_template(&a, PromptKind::Okr), &ProductContext::default()),
            NO_OKR_TEMPLATE
        );
    }

    #[test]
    fn generation_template_prefers_activity_template() {
        let a = activity(Some("Custom ${productGoals}"));
        assert_eq!(okr_generation_template(&a), "Custom ${productGoals}");
    }

    #[test]
    fn generic_generation_template_names_activity_and_keeps_placeholders() {
        let a = activity(None);
        let template = okr_generation_template(&a);
        assert!(template.contains("\"PR/FAQ & Value Prop\""));
        assert!(template.contains("\"${productName}\""));

        let compiled = compile_with(&template, &ProductContext::empty(), &Fallbacks::GENERATION);
        assert!(compiled.contains("named \"the product\""));
        assert!(compiled.contains("Description: not specified"));
        assert!(compiled.contains("Goals: not specified"));
    }

    #[test]
    fn empty_okr_template_falls_back_to_generic() {
        let a = activity(Some(""));
        assert!(okr_generation_template(&a).starts_with("Context: We are managing"));
    }
}
