mod common;
use common::chain_project;

use rtracker::core::share::{decode_link, make_link};
use rtracker::errors::AppError;
use rtracker::models::ItemType;

#[test]
fn test_share_link_round_trip() {
    let (project, _epic, story, ..) = chain_project();

    let link = make_link("https://rtracker.local/app", &[project.clone()]).unwrap();
    assert!(link.starts_with("https://rtracker.local/app?share="));

    let payload = decode_link(&link).unwrap();
    assert_eq!(payload.projects.len(), 1);

    let decoded = &payload.projects[0];
    assert_eq!(decoded.name, project.name);
    assert_eq!(decoded.items.len(), 4);

    // The forest survives the trip intact, links included.
    let decoded_story = decoded.item(story).unwrap();
    assert_eq!(decoded_story.item_type, ItemType::Story);
    assert_eq!(decoded_story.parent_id, Some(1));
}

#[test]
fn test_decode_accepts_bare_blob() {
    let (project, ..) = chain_project();

    let link = make_link("https://rtracker.local/app", &[project]).unwrap();
    let blob = link.split_once("share=").unwrap().1;

    let payload = decode_link(blob).unwrap();
    assert_eq!(payload.projects.len(), 1);
}

#[test]
fn test_decode_ignores_trailing_query_params() {
    let (project, ..) = chain_project();

    let mut link = make_link("https://rtracker.local/app", &[project]).unwrap();
    link.push_str("&utm_source=mail");

    let payload = decode_link(&link).unwrap();
    assert_eq!(payload.projects.len(), 1);
}

#[test]
fn test_decode_rejects_bad_base64() {
    let result = decode_link("https://rtracker.local/app?share=@@not-base64@@");
    assert!(matches!(result, Err(AppError::Share(_))));
}

#[test]
fn test_decode_rejects_non_project_payload() {
    // Valid base64, but the JSON inside is not a share payload.
    let result = decode_link("eyJmb28iOiJiYXIifQ==");
    assert!(matches!(result, Err(AppError::Share(_))));
}
