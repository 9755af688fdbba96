// ABOUTME: Integration tests for document import and export
// ABOUTME: Covers top-level validation, all-or-nothing rejection, and exported layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::{sample_catalog, sample_ingredients};
use grocermator::errors::{AppError, ErrorCode, FormatError};
use grocermator::models::MealPlan;
use grocermator::services::data_transfer::{
    export_backup, export_document, import_document, AppData,
};
use serde_json::{json, Value};

#[test]
fn test_accepts_document_without_ingredients() {
    let text = json!({
        "recipes": [{
            "id": "r1",
            "name": "Toast",
            "ingredients": [{"name": "bread", "quantity": 2, "unit": "slice"}],
            "servings": 1
        }],
        "mealPlans": []
    })
    .to_string();

    let data = import_document(&text).unwrap();
    assert_eq!(data.recipes.len(), 1);
    assert_eq!(data.recipes[0].ingredients[0].quantity, 2.0);
    assert!(data.ingredients.is_empty());
}

#[test]
fn test_rejects_non_array_fields() {
    let cases = [
        (json!({"recipes": {}, "mealPlans": []}), "recipes"),
        (json!({"recipes": [], "mealPlans": "none"}), "mealPlans"),
        (json!({"recipes": [], "mealPlans": [], "ingredients": 3}), "ingredients"),
    ];
    for (document, expected) in cases {
        match import_document(&document.to_string()) {
            Err(FormatError::NotAnArray { field }) => assert_eq!(field, expected),
            other => panic!("expected NotAnArray for {expected}, got {other:?}"),
        }
    }
}

#[test]
fn test_rejects_missing_fields_and_bad_roots() {
    assert!(matches!(
        import_document(r#"{"recipes": []}"#),
        Err(FormatError::MissingField { field: "mealPlans" })
    ));
    assert!(matches!(
        import_document("[1, 2, 3]"),
        Err(FormatError::NotAnObject)
    ));
    assert!(matches!(
        import_document("not json"),
        Err(FormatError::Malformed(_))
    ));
}

#[test]
fn test_one_bad_record_rejects_everything() {
    let text = json!({
        "recipes": [
            {"id": "ok", "name": "Fine", "ingredients": [], "servings": 2},
            {"id": "bad", "ingredients": [], "servings": 2}
        ],
        "mealPlans": []
    })
    .to_string();

    let error = import_document(&text).unwrap_err();
    assert!(matches!(error, FormatError::Malformed(_)));
    let app_error: AppError = error.into();
    assert_eq!(app_error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_export_always_writes_every_field() {
    let text = export_document(&AppData::default()).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, json!({"recipes": [], "mealPlans": [], "ingredients": []}));
}

#[test]
fn test_export_then_import_preserves_document() {
    let mut data = AppData {
        recipes: sample_catalog(),
        meal_plans: Vec::new(),
        ingredients: sample_ingredients(),
    };
    let mut plan = MealPlan::new(sample_catalog()[..2].to_vec(), 2, None);
    plan.toggle_favorite();
    data.add_meal_plan(plan);

    let (file_name, text) =
        export_backup(&data, NaiveDate::from_ymd_opt(2025, 11, 2).unwrap()).unwrap();
    assert_eq!(file_name, "grocermator-backup-2025-11-02.json");

    let value: Value = serde_json::from_str(&text).unwrap();
    assert!(value["mealPlans"][0]["isFavorite"].as_bool().unwrap());
    assert!(value["mealPlans"][0]["createdAt"].is_string());

    let restored = import_document(&text).unwrap();
    assert_eq!(restored, data);
}

#[test]
fn test_line_level_hints_survive_reexport() {
    let text = json!({
        "recipes": [{
            "id": "r1",
            "name": "Porridge",
            "ingredients": [
                {"name": "milk", "quantity": 500, "unit": "ml", "shelfLife": 7, "packageSize": 1000},
                {"name": "oats", "quantity": 80, "unit": "g"}
            ],
            "servings": 2
        }],
        "mealPlans": []
    })
    .to_string();

    let data = import_document(&text).unwrap();
    let exported: Value = serde_json::from_str(&export_document(&data).unwrap()).unwrap();
    let lines = &exported["recipes"][0]["ingredients"];

    assert_eq!(lines[0]["shelfLife"], 7);
    assert_eq!(lines[0]["packageSize"], 1000.0);
    assert!(lines[1].get("shelfLife").is_none());
}
