//! Tests for timeline functionality.

use super::*;
use crate::error::PromptlineError;
use tempfile::TempDir;

fn activity(id: &str, title: &str) -> Activity {
    Activity {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        mega_prompt_template: format!("Do {} for ${{productName}}", title),
        okr_prompt_template: None,
    }
}

fn single_stage(activities: Vec<Activity>) -> Timeline {
    Timeline {
        stages: vec![Stage {
            id: StageId::Discovery,
            label: "Discovery".to_string(),
            time_label: "Month 1".to_string(),
            activities: StageActivities {
                self_service: activities,
                service: Vec::new(),
            },
        }],
    }
}

#[test]
fn test_builtin_has_four_stages_in_order() {
    let timeline = Timeline::builtin();
    let ids: Vec<StageId> = timeline.stages.iter().map(|s| s.id).collect();
    assert_eq!(ids, StageId::ALL.to_vec());
}

#[test]
fn test_builtin_is_valid_with_eight_activities() {
    let timeline = Timeline::builtin();
    timeline.validate().unwrap();
    assert_eq!(timeline.activities().count(), 8);
    assert!(timeline.activities().all(|a| a.okr_prompt_template.is_some()));
}

#[test]
fn test_find_activity() {
    let timeline = Timeline::builtin();
    let activity = timeline.find_activity("prfaq").unwrap();
    assert_eq!(activity.title, "PR/FAQ & Value Prop");
    assert!(timeline.find_activity("missing").is_none());
}

#[test]
fn test_require_activity_lists_known_ids() {
    let timeline = Timeline::builtin();
    let err = timeline.require_activity("nope").unwrap_err();
    assert!(matches!(err, PromptlineError::NotFound(_)));
    let message = err.to_string();
    assert!(message.contains("activity 'nope' not found"));
    assert!(message.contains("problem-def"));
    assert!(message.contains("post-launch-eval"));
}

#[test]
fn test_activities_order_self_service_then_service() {
    let mut timeline = single_stage(vec![activity("a", "A")]);
    timeline.stages[0]
        .activities
        .service
        .push(activity("b", "B"));

    let ids: Vec<&str> = timeline.activities().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_search_is_case_insensitive_on_title_and_description() {
    let timeline = Timeline::builtin();

    let matches = timeline.search("FEASIBILITY");
    let found: Vec<&str> = matches
        .iter()
        .flat_map(|m| m.activities.iter().map(|a| a.id.as_str()))
        .collect();
    // Title match and description match ("Evaluate technical feasibility").
    assert_eq!(found, vec!["feasibility-check"]);

    let matches = timeline.search("press release");
    assert_eq!(matches[1].activities.len(), 1);
    assert_eq!(matches[1].activities[0].id, "prfaq");
}

#[test]
fn test_search_keeps_every_stage_and_marks_empty_ones() {
    let timeline = Timeline::builtin();
    let matches = timeline.search("go-to-market");

    assert_eq!(matches.len(), 4);
    assert!(matches[0].is_dimmed());
    assert!(matches[1].is_dimmed());
    assert!(matches[2].is_dimmed());
    assert!(!matches[3].is_dimmed());
}

#[test]
fn test_empty_search_matches_everything() {
    let timeline = Timeline::builtin();
    let total: usize = timeline.search("").iter().map(|m| m.activities.len()).sum();
    assert_eq!(total, 8);
}

#[test]
fn test_validate_rejects_empty_timeline() {
    let err = Timeline { stages: Vec::new() }.validate().unwrap_err();
    assert!(err.to_string().contains("no stages"));
}

#[test]
fn test_validate_rejects_duplicate_ids() {
    let timeline = single_stage(vec![activity("dup", "One"), activity("dup", "Two")]);
    let err = timeline.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate activity id 'dup'"));
}

#[test]
fn test_validate_rejects_empty_mega_template() {
    let mut a = activity("a", "A");
    a.mega_prompt_template = "  ".to_string();
    let err = single_stage(vec![a]).validate().unwrap_err();
    assert!(err.to_string().contains("empty megaPromptTemplate"));
}

#[test]
fn test_validate_rejects_blank_id() {
    let err = single_stage(vec![activity("", "Nameless")])
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("'Nameless' has an empty id"));
}

#[test]
fn test_stage_json_field_names() {
    let json = r#"[{
        "id": "LAUNCH",
        "label": "Launch",
        "timeLabel": "Month 6+",
        "activities": {
            "selfService": [{
                "id": "gtm",
                "title": "GTM",
                "description": "Plan the launch",
                "megaPromptTemplate": "Plan GTM for ${productName}"
            }]
        }
    }]"#;

    let stages: Vec<Stage> = serde_json::from_str(json).unwrap();
    assert_eq!(stages[0].id, StageId::Launch);
    assert_eq!(stages[0].time_label, "Month 6+");
    let gtm = &stages[0].activities.self_service[0];
    assert_eq!(gtm.mega_prompt_template, "Plan GTM for ${productName}");
    assert!(gtm.okr_prompt_template.is_none());
}

#[test]
fn test_stage_without_activities_parses() {
    let stage: Stage =
        serde_json::from_str(r#"{"id":"DEFINITION","label":"Def","timeLabel":"M2"}"#).unwrap();
    assert_eq!(stage.activities().count(), 0);
}

#[test]
fn test_unknown_stage_id_is_rejected() {
    let result: std::result::Result<Stage, _> =
        serde_json::from_str(r#"{"id":"MAINTENANCE","label":"x","timeLabel":"y"}"#);
    assert!(result.is_err());
}

#[test]
fn test_save_and_load_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("timeline.yaml");
    let timeline = Timeline::builtin();

    timeline.save(&path).unwrap();
    let loaded = Timeline::load(&path).unwrap();

    assert_eq!(loaded, timeline);
}

#[test]
fn test_yaml_uses_camel_case_keys() {
    let yaml = Timeline::builtin().to_yaml().unwrap();
    assert!(yaml.contains("timeLabel:"));
    assert!(yaml.contains("selfService:"));
    assert!(yaml.contains("megaPromptTemplate:"));
    assert!(!yaml.contains("service: []"));
}

#[test]
fn test_from_yaml_validates() {
    let yaml = "stages: []\n";
    let err = Timeline::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, PromptlineError::ConfigError(_)));
}

#[test]
fn test_stage_id_display() {
    assert_eq!(StageId::Development.to_string(), "DEVELOPMENT");
}
