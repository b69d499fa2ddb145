// Unit tests for the learning path domain
//
// Tests cover:
// - Course and difficulty model behavior
// - User progress and age derivation
// - Prerequisite forest construction from catalog records
// - Configuration defaults

use chrono::NaiveDate;
use pathways::config::config::AppConfig;
use pathways::models::course::{CourseRecord, Difficulty};
use pathways::models::user::{User, compute_age};
use pathways::services::build_prerequisite_forest;

// ============ Model Tests ============

#[test]
fn test_difficulty_roundtrip() {
    for difficulty in Difficulty::ALL {
        let parsed: Difficulty = difficulty.as_str().parse().unwrap();
        assert_eq!(parsed, difficulty);
    }
}

#[test]
fn test_user_age_follows_birthday() {
    let birth = NaiveDate::from_ymd_opt(2000, 6, 1).unwrap();
    let before_birthday = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
    let on_birthday = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    assert_eq!(compute_age(birth, before_birthday), 23);
    assert_eq!(compute_age(birth, on_birthday), 24);
}

#[test]
fn test_user_progress_is_deduplicated() {
    let mut user = User::new(
        "lucasg",
        NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
        "Desarrollo Web",
    );

    assert!(user.complete_course("HTML y CSS Básico"));
    assert!(user.complete_course("JavaScript Moderno"));
    assert!(!user.complete_course("HTML y CSS Básico"));

    assert_eq!(user.progress.len(), 2);
}

// ============ Prerequisite Forest Tests ============

fn record(code: &str, name: &str, difficulty: Difficulty, prereqs: &[&str]) -> CourseRecord {
    CourseRecord::new(code, name, "descripción", difficulty)
        .with_prerequisites(prereqs.iter().map(|p| p.to_string()).collect())
}

#[test]
fn test_forest_orders_roots_by_name() {
    let records = vec![
        record("Z1", "Zoología Computacional", Difficulty::Beginner, &[]),
        record("A1", "Algoritmos", Difficulty::Beginner, &[]),
    ];

    let forest = build_prerequisite_forest(&records);
    let names: Vec<&str> = forest.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Algoritmos", "Zoología Computacional"]);
}

#[test]
fn test_forest_nests_by_catalog_code() {
    let records = vec![
        record("PYAI001", "Python para IA", Difficulty::Beginner, &[]),
        record(
            "MLBASICO002",
            "Machine Learning Básico",
            Difficulty::Intermediate,
            &["PYAI001"],
        ),
        record(
            "NLP003",
            "Procesamiento de Lenguaje Natural",
            Difficulty::Advanced,
            &["MLBASICO002"],
        ),
        record(
            "CV004",
            "Visión por Computadora",
            Difficulty::Advanced,
            &["MLBASICO002"],
        ),
    ];

    let forest = build_prerequisite_forest(&records);
    assert_eq!(forest.len(), 1);

    let root = &forest[0];
    assert_eq!(root.code, "PYAI001");
    assert_eq!(root.unlocks.len(), 1);

    let ml = &root.unlocks[0];
    assert_eq!(ml.code, "MLBASICO002");
    let leaf_names: Vec<&str> = ml.unlocks.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        leaf_names,
        vec!["Procesamiento de Lenguaje Natural", "Visión por Computadora"]
    );
}

#[test]
fn test_forest_ignores_free_text_prerequisites() {
    let records = vec![record(
        "SQL001",
        "SQL desde Cero",
        Difficulty::Beginner,
        &["Manejo básico de computadora", "Lógica elemental"],
    )];

    let forest = build_prerequisite_forest(&records);
    assert_eq!(forest.len(), 1);
    assert!(forest[0].unlocks.is_empty());
}

// ============ Configuration Tests ============

#[test]
fn test_development_config_is_valid() {
    let config = AppConfig::development();
    assert!(!config.database.url.is_empty());
    assert!(config.server.port > 0);
    assert_eq!(config.app_name, "pathways");
}
