//! Integration tests for program recommendations.

mod helpers;

use chrono::Duration;
use serde_json::json;

use helpers::{TestApp, program};
use navigator_core::types::ProgramId;
use navigator_entity::application::ApplicationStatus;
use navigator_entity::profile::{IncomeBracket, NeedCategory, UserProfile};
use navigator_entity::program::Program;
use navigator_service::GroupPriority;

fn catalog() -> Vec<Program> {
    vec![
        program(
            "home-repair",
            NeedCategory::Housing,
            json!({ "eligibility": { "income": "under-30k" }, "languages": ["English"] }),
        ),
        program(
            "snap",
            NeedCategory::Food,
            json!({
                "eligibility": { "income": "Any", "children": true },
                "languages": ["English", "Spanish"],
            }),
        ),
        program(
            "medical",
            NeedCategory::Healthcare,
            json!({ "eligibility": { "income": "over-75k" } }),
        ),
        program("bus-fare", NeedCategory::Transportation, json!({})),
    ]
}

fn detroit_family(p: &mut UserProfile) {
    p.primary_needs = vec![NeedCategory::Housing, NeedCategory::Food];
    p.zip_code = Some("48201".to_string());
    p.income_bracket = Some(IncomeBracket::Under15k);
    p.household_size = Some(3);
    p.has_children = true;
    p.preferred_language = Some("Spanish".to_string());
}

fn ids(scores: &[navigator_service::RecommendationScore]) -> Vec<&str> {
    scores.iter().map(|s| s.program.id.as_str()).collect()
}

#[tokio::test]
async fn test_no_profile_means_no_recommendations() {
    let app = TestApp::new(catalog());
    assert!(app.services.recommendations.all().await.is_empty());
    assert!(app.services.recommendations.top(3).await.is_empty());
    assert!(app.services.recommendations.categorized().await.is_empty());
}

#[tokio::test]
async fn test_empty_catalog_means_no_recommendations() {
    let app = TestApp::new(Vec::new());
    app.save_profile(detroit_family).await;
    assert!(app.services.recommendations.top(5).await.is_empty());
    assert!(app.services.recommendations.categorized().await.is_empty());
}

#[tokio::test]
async fn test_scores_and_reasons() {
    let app = TestApp::new(catalog());
    app.save_profile(detroit_family).await;

    let all = app.services.recommendations.all().await;
    assert_eq!(ids(&all), vec!["home-repair", "snap", "medical", "bus-fare"]);

    // need 50 + income 30 + zip 20 + household 15 + popular 5
    assert_eq!(all[0].score, 120);
    assert_eq!(all[0].reasons[0], "Matches your primary need: Housing");
    assert_eq!(all[0].match_percentage, 80);

    // adds children 10 and language 10
    assert_eq!(all[1].score, 140);
    assert!(all[1].reasons.contains(&"Available in Spanish".to_string()));

    // no income overlap: zip 20 + household 15
    assert_eq!(all[2].score, 35);
    // unstated income bucket matches: income 30 + zip 20 + household 15
    assert_eq!(all[3].score, 65);
}

#[tokio::test]
async fn test_top_is_sorted_and_truncated() {
    let app = TestApp::new(catalog());
    app.save_profile(detroit_family).await;

    let top = app.services.recommendations.top(2).await;
    assert_eq!(ids(&top), vec!["snap", "home-repair"]);
}

#[tokio::test]
async fn test_categorized_groups() {
    let app = TestApp::new(catalog());
    app.save_profile(detroit_family).await;

    let groups = app.services.recommendations.categorized().await;
    assert_eq!(groups.len(), 3);

    assert_eq!(groups[0].category, Some(NeedCategory::Housing));
    assert_eq!(groups[0].priority, GroupPriority::High);
    assert_eq!(ids(&groups[0].items), vec!["home-repair"]);

    assert_eq!(groups[1].category, Some(NeedCategory::Food));
    assert_eq!(ids(&groups[1].items), vec!["snap"]);

    assert_eq!(groups[2].category, None);
    assert_eq!(groups[2].priority, GroupPriority::Medium);
    assert_eq!(ids(&groups[2].items), vec!["bus-fare", "medical"]);
}

#[tokio::test]
async fn test_application_history_boosts_similar_programs() {
    let mut programs = catalog();
    programs.push(program("pantry", NeedCategory::Food, json!({})));
    let app = TestApp::new(programs);
    app.save_profile(detroit_family).await;

    let before = app.services.recommendations.all().await;
    app.services
        .applications
        .start(&ProgramId::from("snap"), ApplicationStatus::Submitted)
        .await
        .unwrap();
    let after = app.services.recommendations.all().await;

    let score = |scores: &[navigator_service::RecommendationScore], id: &str| {
        scores
            .iter()
            .find(|s| s.program.id.as_str() == id)
            .map(|s| s.score)
            .unwrap()
    };
    assert_eq!(score(&after, "pantry"), score(&before, "pantry") + 5);
    assert_eq!(score(&after, "snap"), score(&before, "snap"));
    assert_eq!(score(&after, "home-repair"), score(&before, "home-repair"));
}

#[tokio::test]
async fn test_deadline_urgency_tracks_the_clock() {
    let app = TestApp::new(vec![program(
        "prek",
        NeedCategory::Childcare,
        json!({ "deadline": "2025-04-30T00:00:00Z" }),
    )]);
    app.save_profile(|p| p.primary_needs = vec![NeedCategory::Childcare])
        .await;

    // 58 days out
    let far = app.services.recommendations.all().await[0].score;
    app.clock.advance(Duration::days(40));
    let near = app.services.recommendations.all().await[0].score;
    app.clock.advance(Duration::days(17));
    let urgent = app.services.recommendations.all().await[0].score;
    app.clock.advance(Duration::days(2));
    let passed = app.services.recommendations.all().await[0].score;

    assert_eq!(near, far + 5);
    assert_eq!(urgent, far + 15);
    assert_eq!(passed, far - 5);
}
