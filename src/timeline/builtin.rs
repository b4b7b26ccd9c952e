//! The built-in AI product lifecycle timeline.

use super::{Activity, Stage, StageActivities, StageId, Timeline};

pub(super) fn timeline() -> Timeline {
    Timeline {
        stages: vec![
            stage(
                StageId::Discovery,
                "Discovery & Feasibility",
                "Month 1",
                vec![
                    activity(
                        "problem-def",
                        "Problem Definition & User Needs",
                        "Identify the core user problem and assess if AI is the right solution.",
                        "Act as a Lead Product Manager. I am building '${productName}'.\n\n1. Generate 5 distinct user personas based on: '${productDescription}'.\n2. For each persona, list 3 critical pain points that '${productGoals}' aims to solve.\n3. Create a 'Problem Statement' format: 'Users [who] need [what] because [why], but [barrier]'.",
                        "Context: Discovery phase for '${productName}'. Task: Create 3 OKRs for 'Problem Validation'. Key Results should measure user interview counts, pain point validation rates, and market research depth.",
                    ),
                    activity(
                        "feasibility-check",
                        "AI Feasibility Assessment",
                        "Evaluate technical feasibility, data availability, and model capabilities.",
                        "Act as an AI Architect. We want to build: '${productDescription}'.\n\n1. Assess the feasibility of using current LLMs (like Gemini 1.5) vs Custom Models for this.\n2. Identify data requirements: What specific datasets do we need?\n3. List potential technical risks (Latency, Hallucination, Cost) for achieving: '${productGoals}'.",
                        "Context: Technical assessment for '${productName}'. Task: Create 3 OKRs for 'Feasibility Study'. Key Results should track prototype success rate, data availability checks, and cost modeling.",
                    ),
                ],
            ),
            stage(
                StageId::Definition,
                "Definition & Strategy",
                "Month 2",
                vec![
                    activity(
                        "prfaq",
                        "PR/FAQ & Value Prop",
                        "Draft the Press Release and FAQ to work backwards from the customer.",
                        "Act as a Product Leader at Amazon. Write a PR/FAQ for '${productName}'.\n\n1. **Press Release**: Write a visionary press release announcing the launch of the product, highlighting how it solves: '${productGoals}'.\n2. **FAQ**: Write 5 hard internal questions (e.g., 'Why will users switch?', 'How do we handle privacy?') and 5 external customer questions.",
                        "Context: Defining strategy for '${productName}'. Task: Create 3 OKRs for 'Product Definition'. Key Results should focus on stakeholder buy-in, PR/FAQ approval, and roadmap clarity.",
                    ),
                    activity(
                        "success-metrics",
                        "Define Success Metrics",
                        "Establish KPIs, Guardrail Metrics, and North Star Metric.",
                        "Act as a Data Scientist. Define the metrics for '${productName}'.\n\n1. **North Star Metric**: What is the single metric that captures value delivered?\n2. **L1/L2 Metrics**: List acquisition, engagement, and retention metrics.\n3. **Guardrail Metrics**: What AI-specific metrics (Latency, Toxicity, Token Cost) must we monitor to ensure '${productGoals}' is met safely?",
                        "Context: Metrics planning for '${productName}'. Task: Create 3 OKRs for 'Metric Definition'. Key Results should track dashboard setup, baseline establishment, and instrumentation coverage.",
                    ),
                ],
            ),
            stage(
                StageId::Development,
                "Development & Iteration",
                "Months 3-5",
                vec![
                    activity(
                        "prompt-eng",
                        "Prompt Engineering & Tuning",
                        "Iterative development of system instructions and few-shot examples.",
                        "Act as a Prompt Engineer. We are tuning the model for '${productName}'.\n\n1. Draft a robust 'System Instruction' that defines the persona and constraints.\n2. Create 3 'Few-Shot' examples (Input -> Desired Output) relevant to: '${productDescription}'.\n3. Suggest an evaluation rubric for measuring response quality.",
                        "Context: Developing '${productName}'. Task: Create 3 OKRs for 'Model Performance'. Key Results should measure response accuracy, latency reduction, and prompt iteration velocity.",
                    ),
                    activity(
                        "ux-design",
                        "AI UX/UI Design",
                        "Design interfaces that handle uncertainty, streaming, and feedback.",
                        "Act as a UX Designer specializing in AI. Design the experience for '${productName}'.\n\n1. Describe the 'Happy Path' user flow.\n2. **Error Handling**: How should the UI handle hallucinations or API failures?\n3. **Feedback Loops**: Propose a mechanism for users to correct the AI, improving the model for '${productGoals}'.",
                        "Context: UX Design for '${productName}'. Task: Create 3 OKRs for 'User Experience'. Key Results should track usability testing scores, error recovery rates, and feedback collection volume.",
                    ),
                ],
            ),
            stage(
                StageId::Launch,
                "Launch & Evaluation",
                "Month 6+",
                vec![
                    activity(
                        "go-to-market",
                        "Go-To-Market Strategy",
                        "Plan the launch, positioning, and user acquisition channels.",
                        "Act as a Product Marketing Manager. Plan the GTM for '${productName}'.\n\n1. **Positioning**: Write a positioning statement vs competitors.\n2. **Channels**: Identify the top 3 channels to acquire users interested in '${productDescription}'.\n3. **Launch Assets**: List the blog posts, demos, and docs needed for launch.",
                        "Context: Launching '${productName}'. Task: Create 3 OKRs for 'Launch Success'. Key Results should track signups, CAC (Customer Acquisition Cost), and Day-1 retention.",
                    ),
                    activity(
                        "post-launch-eval",
                        "Post-Launch Evaluation",
                        "Monitor performance, costs, and user feedback loop.",
                        "Act as the AI Product Manager. We just launched '${productName}'.\n\n1. Design a 'Weekly Business Review' agenda.\n2. Create a template for analyzing 'Bad Responses' to improve the model.\n3. How do we measure ROI against '${productGoals}'?",
                        "Context: Post-launch for '${productName}'. Task: Create 3 OKRs for 'Operational Excellence'. Key Results should track API cost efficiency, support ticket reduction, and model update frequency.",
                    ),
                ],
            ),
        ],
    }
}

fn stage(id: StageId, label: &str, time_label: &str, self_service: Vec<Activity>) -> Stage {
    Stage {
        id,
        label: label.to_string(),
        time_label: time_label.to_string(),
        activities: StageActivities {
            self_service,
            service: Vec::new(),
        },
    }
}

fn activity(id: &str, title: &str, description: &str, mega: &str, okr: &str) -> Activity {
    Activity {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        mega_prompt_template: mega.to_string(),
        okr_prompt_template: Some(okr.to_string()),
    }
}
