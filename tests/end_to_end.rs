// ABOUTME: End-to-end workflow tests from catalog to shopping list and back through storage
// ABOUTME: Generates plans, rescales slots, nets the pantry, and persists the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::{date, init_test_logging, line, recipe, sample_catalog, sample_ingredients, stock};
use grocermator::models::{IngredientCategory, IngredientEntity, Recipe};
use grocermator::planner::{
    build_shopping_list, GenerationOptions, MealPlanGenerator, RecipeScaler, SeededRandom,
};
use grocermator::services::data_transfer::{export_backup, import_document, AppData};
use grocermator::storage::{DataRepository, FileStore};
use tempfile::TempDir;

fn baking_catalog() -> Vec<Recipe> {
    vec![
        recipe(
            "Crepes",
            2,
            vec![line("egg", 1.0, "whole"), line("flour", 100.0, "g")],
        ),
        recipe("Omelette", 2, vec![line("egg", 2.0, "whole")]),
    ]
}

fn baking_ingredients() -> Vec<IngredientEntity> {
    vec![
        IngredientEntity::new("Egg", IngredientCategory::Dairy, 21, 6.0, "whole").with_id("egg"),
        IngredientEntity::new("Flour", IngredientCategory::Pantry, 180, 1000.0, "g")
            .with_id("flour"),
    ]
}

#[test]
fn test_two_day_plan_to_shopping_list() {
    init_test_logging();
    let catalog = baking_catalog();
    let options = GenerationOptions::new(2)
        .with_start_date(date(2025, 3, 10))
        .with_allow_repeats(false);

    let plan = MealPlanGenerator::new(SeededRandom::seeded(11))
        .generate(&catalog, &options)
        .unwrap();
    assert_eq!(plan.recipes.len(), 2);
    assert!(!plan.is_short());

    let list = build_shopping_list(&plan, &baking_ingredients(), &[]);
    let names: Vec<&str> = list.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["egg", "flour"]);
    assert_eq!(list[0].quantity, 3.0);
    assert_eq!(list[0].adjusted_quantity, 3.0);
    assert_eq!(list[0].packs_needed, Some(1));
    assert_eq!(list[1].quantity, 100.0);
    assert_eq!(list[1].packs_needed, Some(1));

    let pantry = vec![stock("egg", 1.0, "whole")];
    let netted = build_shopping_list(&plan, &baking_ingredients(), &pantry);
    assert_eq!(netted[0].adjusted_quantity, 2.0);
    assert_eq!(netted[0].in_pantry, 1.0);
    assert_eq!(netted[1].adjusted_quantity, 100.0);
}

#[test]
fn test_rescaled_slot_flows_into_shopping_list() {
    init_test_logging();
    let catalog = baking_catalog();
    let options = GenerationOptions::new(2).with_allow_repeats(false);
    let mut plan = MealPlanGenerator::new(SeededRandom::seeded(3))
        .generate(&catalog, &options)
        .unwrap();

    let crepes_slot = plan
        .recipes
        .iter()
        .position(|r| r.id == "crepes")
        .unwrap();
    RecipeScaler::default()
        .rescale_slot(&mut plan, crepes_slot, 4)
        .unwrap();

    let list = build_shopping_list(&plan, &baking_ingredients(), &[]);
    assert_eq!(list[0].quantity, 4.0);
    assert_eq!(list[1].quantity, 200.0);
    // Catalog is untouched by slot edits
    assert_eq!(catalog[0].servings, 2);
}

#[test]
fn test_plan_survives_backup_and_storage() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let mut repository = DataRepository::new(FileStore::new(dir.path()));

    let catalog = sample_catalog();
    let options = GenerationOptions::new(4)
        .with_start_date(date(2025, 7, 1))
        .with_optimize_waste(true);
    let plan = MealPlanGenerator::new(SeededRandom::seeded(42))
        .generate(&catalog, &options)
        .unwrap();

    let mut data = AppData {
        recipes: catalog,
        meal_plans: Vec::new(),
        ingredients: sample_ingredients(),
    };
    data.add_meal_plan(plan.clone());
    repository.save(&data).unwrap();

    let stored = repository.load().unwrap();
    assert_eq!(stored.meal_plans[0], plan);

    let (_, text) = export_backup(&stored, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()).unwrap();
    let restored = import_document(&text).unwrap();
    assert_eq!(restored, data);

    let before = build_shopping_list(&plan, &data.ingredients, &[]);
    let after = build_shopping_list(&restored.meal_plans[0], &restored.ingredients, &[]);
    assert_eq!(before, after);
}
