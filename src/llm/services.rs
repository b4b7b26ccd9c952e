//! High-level model requests used by the commands.
//!
//! Each service builds a prompt, sends it through a [`GenerativeModel`] and
//! decodes the reply. Structured replies are parsed with `serde_json`; a reply
//! that does not match the requested shape is [`LlmError::MalformedPayload`].

use super::LlmError;
use super::client::{GenerateRequest, GenerativeModel};
use super::schema;
use crate::product::ProductContext;
use crate::prompt::{Fallbacks, compile_with, okr_generation_template};
use crate::timeline::{Activity, Stage, Timeline};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Shown when the model answers a free-form prompt with nothing.
pub const NO_CONTENT: &str = "No content generated.";

/// Video id of the evaluation dashboard walkthrough, which has a known context.
const EVALUATION_DASHBOARD_VIDEO: &str = "MZlKnSJ_gaA";

const TRENDING_PROMPT: &str = "List 5 trending, impressive 'AI Product Ideas' for an aspiring AI Product Manager. These should be viable, modern AI applications. Examples: 'Legal Doc Summarizer', 'AI Health Coach', 'Personalized Tutor'. Give them catchy names.";

/// An objective with its measurable key results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Okr {
    pub objective: String,
    #[serde(default)]
    pub key_results: Vec<String>,
}

/// A product idea suggested by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingProject {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

impl TrendingProject {
    /// Adopt this idea as the product being planned.
    pub fn to_product_context(&self) -> ProductContext {
        ProductContext {
            name: self.title.clone(),
            description: self.description.clone(),
            goals: format!("Build MVP using {}.", self.tech_stack.join(", ")),
        }
    }
}

/// Send a compiled prompt and return the reply text.
pub async fn run_prompt(
    model: &dyn GenerativeModel,
    prompt: &str,
    temperature: f32,
) -> Result<String, LlmError> {
    let request = GenerateRequest::text(prompt).with_temperature(temperature);
    match model.generate(&request).await {
        Ok(response) if !response.text.is_empty() => Ok(response.text),
        Ok(_) | Err(LlmError::EmptyResponse) => Ok(NO_CONTENT.to_string()),
        Err(e) => Err(e),
    }
}

/// Generate OKRs for an activity in the given product context.
///
/// Empty context fields are filled with the generation fallbacks
/// (`the product`, `not specified`).
pub async fn generate_okrs(
    model: &dyn GenerativeModel,
    activity: &Activity,
    context: &ProductContext,
    temperature: f32,
) -> Result<Vec<Okr>, LlmError> {
    let template = okr_generation_template(activity);
    let prompt = compile_with(&template, context, &Fallbacks::GENERATION);
    debug!(activity = %activity.id, "generating OKRs");

    let request = GenerateRequest::json(prompt, schema::okr_list()).with_temperature(temperature);
    let response = model.generate(&request).await?;
    parse_json(&response.text)
}

/// Ask the model for trending AI product ideas.
pub async fn generate_trending_projects(
    model: &dyn GenerativeModel,
) -> Result<Vec<TrendingProject>, LlmError> {
    let request = GenerateRequest::json(TRENDING_PROMPT, schema::trending_projects());
    let response = model.generate(&request).await?;
    parse_json(&response.text)
}

/// The known context for a video URL, if it has one.
pub fn known_video_context(url: &str) -> Option<ProductContext> {
    url.contains(EVALUATION_DASHBOARD_VIDEO).then(|| ProductContext {
        name: "AI Product Manager's Evaluation Dashboard".to_string(),
        description: "A centralized dashboard for monitoring indeterministic AI outputs. It serves as an analytics beacon for AI Product Managers to oversee performance, factual correctness, and structural validity of LLM features.".to_string(),
        goals: "Ensure factual correctness, validate JSON output structure, monitor bias, and track token/infrastructure costs to ensure business viability.".to_string(),
    })
}

/// The placeholder context used when analysis fails.
pub fn generic_video_context() -> ProductContext {
    ProductContext {
        name: "Generic AI Product".to_string(),
        description: "A placeholder context derived from the video content.".to_string(),
        goals: "Define clear objectives.".to_string(),
    }
}

/// Derive a product context from a video URL.
///
/// Never fails: any model error yields [`generic_video_context`].
pub async fn analyze_video_context(
    model: &dyn GenerativeModel,
    url: &str,
    temperature: f32,
) -> ProductContext {
    if let Some(context) = known_video_context(url) {
        info!(url, "using known context for video");
        return context;
    }

    let prompt = format!(
        "I have a video URL: \"{url}\".\n\
         Please generate a plausible \"Product Context\" based on what a technical product video at this URL might be about.\n\
         Return a JSON object with:\n\
         - name: Product name\n\
         - description: What it does\n\
         - goals: Key business goals\n"
    );
    let request =
        GenerateRequest::json(prompt, schema::product_context()).with_temperature(temperature);

    let result = match model.generate(&request).await {
        Ok(response) => parse_json::<ProductContext>(&response.text),
        Err(e) => Err(e),
    };

    result.unwrap_or_else(|e| {
        warn!(url, error = %e, "video analysis failed, using generic context");
        generic_video_context()
    })
}

/// Ask the model for a four-stage timeline tailored to the product.
///
/// An empty or invalid timeline is an error so the caller can keep the
/// current one.
pub async fn generate_custom_timeline(
    model: &dyn GenerativeModel,
    context: &ProductContext,
    temperature: f32,
) -> Result<Timeline, LlmError> {
    let prompt = format!(
        "Act as a Head of Product. Create a custom 4-stage Product Development Timeline for:\n\
         Product: {}\n\
         Description: {}\n\
         Goals: {}\n\
         \n\
         The stages should be: Discovery, Definition, Development, Launch.\n\
         For each stage, provide 2 key activities (Self-Service).\n\
         For each activity, generate a \"megaPromptTemplate\" that helps a PM execute that task using an LLM.\n\
         \n\
         Return a JSON structure matching the Stage[] interface.\n",
        context.name, context.description, context.goals
    );
    let request = GenerateRequest::json(prompt, schema::timeline()).with_temperature(temperature);
    let response = model.generate(&request).await?;

    let stages: Vec<Stage> = parse_json(&response.text)?;
    if stages.is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    let timeline = Timeline { stages };
    timeline
        .validate()
        .map_err(|e| LlmError::MalformedPayload(e.to_string()))?;
    Ok(timeline)
}

fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    serde_json::from_str(text.trim()).map_err(|e| LlmError::MalformedPayload(e.to_string()))
}
