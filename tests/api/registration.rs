use crate::helpers::{assert_is_redirect_to, row_count, spawn_app, years_ago};
use std::collections::HashMap;

fn jane_doe() -> HashMap<&'static str, String> {
    HashMap::from([
        ("fullName", "Jane Doe".to_string()),
        ("email", "jane@example.com".to_string()),
        ("phone", "0412345678".to_string()),
        ("birthDate", years_ago(14)),
        ("terms", "on".to_string()),
    ])
}

#[tokio::test]
async fn the_page_starts_with_an_empty_table() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_page().await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<form id="regForm""#));
    assert_eq!(row_count(&html), 0);
}

#[tokio::test]
async fn a_valid_registration_appends_one_row_and_empties_the_form() {
    // Arrange
    let app = spawn_app().await;

    // Act - Part 1 - Submit
    let response = app.post_registration(&jane_doe()).await;
    assert_is_redirect_to(&response, "/");

    // Act - Part 2 - Follow the redirect
    let html = app.get_page_html().await;

    // Assert
    assert_eq!(row_count(&html), 1);
    assert!(html.contains(r#"<td class="px-3 py-2 border-b border-slate-200">Jane Doe</td>"#));
    assert!(html.contains(r#"<td class="px-3 py-2 border-b border-slate-200">Yes</td>"#));
    assert!(!html.contains(r#"value="Jane Doe""#));
    assert!(!html.contains(r#"value="jane@example.com""#));
    assert!(!html.contains("border-red-500"));
    assert!(!html.contains(" checked"));
}

#[tokio::test]
async fn each_accepted_registration_adds_its_own_row() {
    // Arrange
    let app = spawn_app().await;

    // Act
    app.post_registration(&jane_doe()).await;
    let mut second = jane_doe();
    second.insert("fullName", "John Smith".into());
    app.post_registration(&second).await;

    // Assert
    let html = app.get_page_html().await;
    assert_eq!(row_count(&html), 2);
    assert!(html.find("Jane Doe").unwrap() < html.find("John Smith").unwrap());
}

#[tokio::test]
async fn an_invalid_registration_shows_messages_and_keeps_the_typed_values() {
    // Arrange
    let app = spawn_app().await;
    let mut body = jane_doe();
    body.insert("phone", "123".into());
    body.insert("email", "not-an-email".into());

    // Act
    let response = app.post_registration(&body).await;
    assert_is_redirect_to(&response, "/");
    let html = app.get_page_html().await;

    // Assert
    assert_eq!(row_count(&html), 0);
    assert!(html.contains("Please enter a valid email address."));
    assert!(html.contains("Use +358 followed by 8–10 digits"));
    assert!(html.contains(r#"value="not-an-email""#));
    assert!(html.contains(r#"value="Jane Doe""#));
    assert!(html.contains("border-red-500"));
}

#[tokio::test]
async fn every_missing_field_is_reported_at_once() {
    // Arrange
    let app = spawn_app().await;
    let body: HashMap<&str, String> = HashMap::new();

    // Act
    app.post_registration(&body).await;
    let html = app.get_page_html().await;

    // Assert
    for message in [
        "Please enter your full name (first and last).",
        "Email is required.",
        "Phone number is required.",
        "Birth date is required.",
        "You must accept the terms to submit.",
    ] {
        assert!(html.contains(message), "missing message: {}", message);
    }
    assert_eq!(row_count(&html), 0);
}

#[tokio::test]
async fn an_unticked_terms_box_blocks_the_registration() {
    // Arrange
    let app = spawn_app().await;
    let mut body = jane_doe();
    body.remove("terms");

    // Act
    app.post_registration(&body).await;

    // Assert
    let html = app.get_page_html().await;
    assert!(html.contains("You must accept the terms to submit."));
    assert_eq!(row_count(&html), 0);
}

#[tokio::test]
async fn a_twelve_year_old_is_turned_away() {
    // Arrange
    let app = spawn_app().await;
    let mut body = jane_doe();
    body.insert("birthDate", years_ago(12));

    // Act
    app.post_registration(&body).await;

    // Assert
    let html = app.get_page_html().await;
    assert!(html.contains("You must be at least 13 years old."));
    assert_eq!(row_count(&html), 0);
}

#[tokio::test]
async fn clear_removes_messages_and_values_but_keeps_rows() {
    // Arrange
    let app = spawn_app().await;
    app.post_registration(&jane_doe()).await;
    let mut invalid = jane_doe();
    invalid.insert("fullName", "Jane".into());
    app.post_registration(&invalid).await;
    let html = app.get_page_html().await;
    assert!(html.contains("Use at least first and last name (two words)."));

    // Act
    let response = app.post_clear().await;
    assert_is_redirect_to(&response, "/");

    // Assert
    let html = app.get_page_html().await;
    assert!(!html.contains("Use at least first and last name (two words)."));
    assert!(!html.contains(r#"value="Jane""#));
    assert!(!html.contains("border-red-500"));
    assert_eq!(row_count(&html), 1);
}
