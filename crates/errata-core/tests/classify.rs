use errata_core::classify::{classify, Classifier};
use errata_core::rules::{Rule, FALLBACK_FIX, FALLBACK_MEANING, RULES};

fn fallback_pair() -> (String, String) {
    (FALLBACK_MEANING.to_string(), FALLBACK_FIX.to_string())
}

#[test]
fn null_properties_points_at_missing_element() {
    let t = classify("Cannot read properties of null (reading 'foo')");
    assert!(t.meaning.contains("element that does not exist in your HTML"));
    assert!(t.fix.contains("element ID/class"));
    assert!(t.fix.contains("script runs after the HTML loads"));
}

#[test]
fn matching_ignores_case() {
    let lower = classify("uncaught typeerror: x is not a function");
    let upper = classify("UNCAUGHT TYPEERROR: X IS NOT A FUNCTION");
    assert_eq!(lower, upper);
    assert_eq!(lower.meaning, RULES[7].meaning);
}

#[test]
fn fetch_failed_is_not_failed_to_fetch() {
    let t = classify("fetch failed");
    assert_eq!((t.meaning, t.fix), fallback_pair());
}

#[test]
fn unknown_input_falls_back() {
    let t = classify("segmentation fault (core dumped)");
    assert_eq!((t.meaning, t.fix), fallback_pair());

    let t = classify("");
    assert_eq!((t.meaning, t.fix), fallback_pair());
}

#[test]
fn undefined_wins_over_is_not_defined() {
    // Both triggers are present; table order decides.
    let t = classify("ReferenceError: undefined is not defined");
    assert_eq!(t.meaning, RULES[1].meaning);

    let t = classify("ReferenceError: foo is not defined");
    assert_eq!(t.meaning, RULES[2].meaning);
}

#[test]
fn earlier_rule_wins_when_several_match() {
    // "net::err" (7) and "404" (12) both occur.
    let t = classify("GET http://localhost/app.js net::ERR_ABORTED 404 (Not Found)");
    assert_eq!(t.meaning, RULES[6].meaning);

    // "failed to fetch" (6) and "cors" (11).
    let t = classify("TypeError: Failed to fetch (blocked by CORS policy)");
    assert_eq!(t.meaning, RULES[5].meaning);
}

#[test]
fn every_rule_is_reachable_by_its_own_trigger() {
    let classifier = Classifier::default();
    for (i, rule) in RULES.iter().enumerate() {
        let hit = classifier
            .matching_rule(rule.trigger)
            .expect("trigger should match something");
        // A trigger may contain an earlier trigger; it must never resolve later.
        assert!(hit <= i, "{} resolved to rule {hit}", rule.trigger);
    }
}

#[test]
fn triggers_are_lower_case() {
    for rule in &RULES {
        assert_eq!(rule.trigger, rule.trigger.to_lowercase());
    }
}

#[test]
fn classification_is_deterministic() {
    let input = "Uncaught SyntaxError: Unexpected token '}'";
    let first = classify(input);
    for _ in 0..5 {
        assert_eq!(classify(input), first);
    }
}

static CUSTOM: [Rule; 2] = [
    Rule {
        trigger: "disk",
        meaning: "first",
        fix: "first fix",
    },
    Rule {
        trigger: "disk full",
        meaning: "second",
        fix: "second fix",
    },
];

#[test]
fn custom_table_uses_first_match() {
    let classifier = Classifier::new(&CUSTOM);
    assert_eq!(classifier.matching_rule("Disk full on /dev/sda1"), Some(0));
    assert_eq!(classifier.classify("disk full").meaning, "first");
    assert_eq!(classifier.matching_rule("out of memory"), None);
    assert_eq!(classifier.classify("out of memory").meaning, FALLBACK_MEANING);
}
