//! Detection behavior tests through the public library API
//!
//! Covers normalization and similarity properties plus the end-to-end
//! scenarios a backlog curator relies on.

use issue_dedup::parsing::parse_issues;
use issue_dedup::utils::validation::DEFAULT_MAX_ISSUES;
use issue_dedup::{
    detect_duplicates, normalize, normalize_str, similarity, DetectionConfig, DuplicateDetector,
    Issue, IssueNumber,
};

fn numbers(issues: &[Issue]) -> Vec<i64> {
    detect_duplicates(issues).into_iter().map(|n| n.0).collect()
}

#[test]
fn test_normalize_properties() {
    assert_eq!(normalize_str("A  B!").as_str(), "a b");
    assert_eq!(normalize(None).as_str(), "");
    assert_eq!(normalize(Some("")).as_str(), "");

    for raw in ["A  B!", "Hello,   World", " x\ty\nz ", "ÀÉÎ óü", "a . b . c"] {
        let once = normalize_str(raw);
        assert_eq!(normalize_str(once.as_str()), once, "idempotence failed for {raw:?}");
        assert_eq!(normalize_str(&raw.to_uppercase()), normalize_str(&raw.to_lowercase()));
    }
}

#[test]
fn test_similarity_properties() {
    let texts = [
        "",
        "pump broken",
        "pump is broken",
        "the pump broke down",
        "conveyor stuck",
        "aab",
        "aba",
    ];
    for a in texts {
        let na = normalize_str(a);
        assert!((similarity(&na, &na) - 1.0).abs() < f64::EPSILON);
        for b in texts {
            let nb = normalize_str(b);
            let ab = similarity(&na, &nb);
            let ba = similarity(&nb, &na);
            assert!((ab - ba).abs() < f64::EPSILON, "asymmetric: {a:?} / {b:?}");
            assert!((0.0..=1.0).contains(&ab));
        }
    }
}

#[test]
fn test_scenario_identical_issues() {
    let issues = vec![
        Issue::new(1).with_title("Pump broken").with_body("leaks oil"),
        Issue::new(2).with_title("Pump broken").with_body("leaks oil"),
    ];
    assert_eq!(numbers(&issues), vec![2]);
}

#[test]
fn test_scenario_case_and_punctuation() {
    let issues = vec![
        Issue::new(1).with_title("Pump is broken"),
        Issue::new(2).with_title("pump is broken!!"),
    ];
    assert_eq!(numbers(&issues), vec![2]);
}

#[test]
fn test_scenario_similar_title_dissimilar_body() {
    // Titles share 85 of 100 characters; bodies share 3 of 10
    let issues = vec![
        Issue::new(1)
            .with_title(format!("{}{}", "x".repeat(85), "a".repeat(15)))
            .with_body(format!("yyy{}", "a".repeat(7))),
        Issue::new(2)
            .with_title(format!("{}{}", "x".repeat(85), "b".repeat(15)))
            .with_body(format!("yyy{}", "b".repeat(7))),
        Issue::new(3)
            .with_title("q".repeat(10))
            .with_body("w".repeat(10)),
    ];
    assert_eq!(numbers(&issues), vec![2]);
}

#[test]
fn test_scenario_empty_input() {
    assert!(detect_duplicates(&[]).is_empty());
}

#[test]
fn test_title_threshold_boundary() {
    let make = |shared: usize| {
        vec![
            Issue::new(1)
                .with_title(format!("{}{}", "x".repeat(shared), "a".repeat(100 - shared)))
                .with_body("first"),
            Issue::new(2)
                .with_title(format!("{}{}", "x".repeat(shared), "b".repeat(100 - shared)))
                .with_body("qqqqq"),
        ]
    };
    assert_eq!(numbers(&make(80)), vec![2]);
    assert!(numbers(&make(79)).is_empty());
}

#[test]
fn test_order_decides_who_is_flagged() {
    let a = Issue::new(1).with_title("Database timeout").with_body("on save");
    let b = Issue::new(2).with_title("database timeout").with_body("on load");

    assert_eq!(numbers(&[a.clone(), b.clone()]), vec![2]);
    assert_eq!(numbers(&[b, a]), vec![1]);
}

#[test]
fn test_detection_is_deterministic() {
    let input = r#"[
        {"number": 5, "title": "Checkout page slow", "body": "takes 10s to load"},
        {"number": 3, "title": "checkout page is slow", "body": "takes ten seconds"},
        {"number": 8, "title": "Refund button missing", "body": "cannot refund"},
        {"number": 1, "body": "takes 10s to load!"}
    ]"#;
    let issues = parse_issues(input, DEFAULT_MAX_ISSUES).unwrap();
    let detector = DuplicateDetector::new(DetectionConfig::default());

    let first = detector.detect(&issues);
    let second = detector.detect(&issues);
    assert_eq!(first.numbers(), second.numbers());
    assert_eq!(first.numbers(), vec![IssueNumber(1), IssueNumber(3)]);
}

#[test]
fn test_prefilter_does_not_change_result() {
    let reports = [
        ("Login fails with SSO", "steps one"),
        ("login failing with sso", "happens daily"),
        ("Logout fails", "after update"),
        ("Export to CSV broken", "xlsx fine"),
        ("Export CSV is broken", "since monday"),
        ("Dark mode colors wrong", "contrast low"),
        ("dark-mode colours wrong", "hard to read"),
        ("Search returns nothing", "empty list"),
    ];
    let issues: Vec<Issue> = reports
        .iter()
        .zip(1..)
        .map(|((title, body), n)| Issue::new(n).with_title(*title).with_body(*body))
        .collect();

    let pruned = DuplicateDetector::default().detect(&issues);
    let full = DuplicateDetector::new(DetectionConfig {
        prefilter: false,
        ..DetectionConfig::default()
    })
    .detect(&issues);

    assert_eq!(pruned.numbers(), full.numbers());
    assert_eq!(pruned.findings, full.findings);
    assert!(pruned.stats.pruned > 0);
}
