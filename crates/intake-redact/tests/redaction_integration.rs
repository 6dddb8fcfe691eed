//! Integration tests for intake-redact.
//!
//! These tests verify:
//! - End-to-end scenarios for each redaction category
//! - Canary PII never survives into the sanitized text
//! - Organizations are never re-flagged as names
//! - Custom lexicons change name, urgency and concept decisions

use intake_config::LexiconConfig;
use intake_redact::{
    assess_urgency, extract_entities, extract_legal_concepts, extract_personal_info,
    extract_personal_info_with, EntityCategory, Lexicon, UrgencyLevel,
};

/// A narrative touching every redaction category.
const FULL_NARRATIVE: &str = "Bună ziua, mă numesc Andrei Ionescu și am 34 de ani. \
Puteți să mă contactați la andrei.ionescu@mail.ro sau la 0722 123 456. \
CNP-ul meu este 1900101123456. Angajatorul meu, Mega Build SRL, \
îmi datorează 4500 lei din 12.01.2024. Ionescu vă mulțumește.";

/// Personal data in [`FULL_NARRATIVE`] that must NEVER appear in output.
const CANARY_PII: &[&str] = &[
    "Andrei",
    "Ionescu",
    "andrei.ionescu@mail.ro",
    "0722 123 456",
    "1900101123456",
    "34",
    "Mega Build",
    "4500",
    "12.01.2024",
];

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_email_scenario() {
    let result = extract_personal_info("Contact me at jane.doe@example.com regarding the case.");
    assert_eq!(result.sanitized_text, "Contact me at [EMAIL] regarding the case.");
    assert_eq!(result.extracted_items, vec!["jane.doe@example.com"]);
    assert_eq!(result.urgency, UrgencyLevel::Low);
}

#[test]
fn test_name_and_date_scenario() {
    let result = extract_personal_info("Ion Popescu a semnat contractul pe 15.03.2023.");
    assert_eq!(result.sanitized_text, "[NUME] a semnat contractul pe [DATĂ].");
    assert_eq!(result.extracted_items, vec!["15.03.2023", "Ion Popescu"]);
}

#[test]
fn test_amount_scenario() {
    let result = extract_personal_info("Suma datorată este 500 lei.");
    assert_eq!(result.sanitized_text, "Suma datorată este [SUMĂ].");
    assert_eq!(result.extracted_items, vec!["500 lei"]);
}

#[test]
fn test_urgency_scenario() {
    let result = extract_personal_info("Vă rog ajutați urgent, este o urgență!");
    assert_eq!(result.urgency, UrgencyLevel::High);
    assert!(result.is_clean());
}

#[test]
fn test_clean_text_scenario() {
    let text = "nu am nimic de declarat în această privință";
    let result = extract_personal_info(text);
    assert!(result.extracted_items.is_empty());
    assert_eq!(result.sanitized_text, text);
    assert_eq!(result.urgency, UrgencyLevel::Low);
}

#[test]
fn test_organization_scenario() {
    let extraction = extract_entities("Popescu SRL a refuzat plata.", Lexicon::builtin());
    assert_eq!(extraction.sanitized_text, "[ORGANIZAȚIE] a refuzat plata.");
    assert_eq!(extraction.spans.len(), 1);
    assert_eq!(extraction.spans[0].category, EntityCategory::Organization);
    assert_eq!(extraction.spans[0].text, "Popescu SRL");
}

// ============================================================================
// Full narrative
// ============================================================================

#[test]
fn test_full_narrative_sanitized() {
    let result = extract_personal_info(FULL_NARRATIVE);
    assert_eq!(
        result.sanitized_text,
        "Bună ziua, mă numesc [NUME] și am [VÂRSTĂ] de ani. \
Puteți să mă contactați la [EMAIL] sau la [TELEFON]. \
CNP-ul meu este [CNP]. Angajatorul meu, [ORGANIZAȚIE], \
îmi datorează [SUMĂ] din [DATĂ]. [NUME] vă mulțumește."
    );
}

#[test]
fn test_full_narrative_items_in_stage_order() {
    let extraction = extract_entities(FULL_NARRATIVE, Lexicon::builtin());
    let categories: Vec<_> = extraction.spans.iter().map(|s| s.category).collect();
    assert_eq!(
        categories,
        vec![
            EntityCategory::Email,
            EntityCategory::NationalId,
            EntityCategory::Phone,
            EntityCategory::Age,
            EntityCategory::Amount,
            EntityCategory::Date,
            EntityCategory::Organization,
            EntityCategory::FullName,
        ]
    );
    assert_eq!(
        extraction.item_texts(),
        vec![
            "andrei.ionescu@mail.ro",
            "1900101123456",
            "0722 123 456",
            "34 de ani",
            "4500 lei",
            "12.01.2024",
            "Mega Build SRL",
            "Andrei Ionescu",
        ]
    );
}

#[test]
fn test_canary_pii_never_leaks() {
    let result = extract_personal_info(FULL_NARRATIVE);
    for canary in CANARY_PII {
        assert!(
            !result.sanitized_text.contains(canary),
            "Canary '{}' leaked into sanitized text: {}",
            canary,
            result.sanitized_text
        );
    }
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_organization_never_reported_as_name() {
    let texts = [
        "Popescu SRL a refuzat plata.",
        "am semnat cu Acme Corp și cu Ionescu Company",
        "lucrez la Delta Ltd, iar Maria Pop la Gamma SA",
    ];

    for text in texts {
        let extraction = extract_entities(text, Lexicon::builtin());
        let orgs: Vec<&str> = extraction
            .of_category(EntityCategory::Organization)
            .map(|s| s.text.as_str())
            .collect();
        assert!(!orgs.is_empty(), "no organization found in {:?}", text);

        for name in extraction.spans.iter().filter(|s| s.category.is_name()) {
            for org in &orgs {
                assert!(
                    !org.contains(name.text.as_str()),
                    "name {:?} overlaps organization {:?}",
                    name.text,
                    org
                );
            }
        }
    }
}

#[test]
fn test_result_is_deterministic() {
    let first = extract_personal_info(FULL_NARRATIVE);
    for _ in 0..5 {
        assert_eq!(extract_personal_info(FULL_NARRATIVE), first);
    }
}

#[test]
fn test_second_pass_is_a_no_op() {
    let first = extract_personal_info(FULL_NARRATIVE);
    let second = extract_personal_info(&first.sanitized_text);
    assert_eq!(second.sanitized_text, first.sanitized_text);
    assert!(second.is_clean(), "second pass extracted {:?}", second.extracted_items);
}

#[test]
fn test_overlapping_names_second_pass_is_a_no_op() {
    let text = "am vorbit cu Ion Pop, apoi cu Ion Pop Curtea Tribunalul azi";
    let first = extract_personal_info(text);
    assert_eq!(first.extracted_items, vec!["Ion Pop", "Ion Pop Curtea"]);
    assert_eq!(
        first.sanitized_text,
        "am vorbit cu [NUME], apoi cu [NUME] Tribunalul azi"
    );

    let second = extract_personal_info(&first.sanitized_text);
    assert_eq!(second.sanitized_text, first.sanitized_text);
    assert!(second.is_clean(), "second pass extracted {:?}", second.extracted_items);
}

#[test]
fn test_diacritic_surname_does_not_leak() {
    let result = extract_personal_info("am vorbit cu Ion Mihăilescu ieri, apoi Mihăilescu a plecat");
    assert_eq!(result.extracted_items, vec!["Ion Mih"]);
    assert_eq!(
        result.sanitized_text,
        "am vorbit cu [NUME]ăilescu ieri, apoi [NUME]ăilescu a plecat"
    );
    assert!(!result.sanitized_text.contains("Mihăilescu"));
}

#[test]
fn test_result_json_shape() {
    let result = extract_personal_info("Suma datorată este 500 lei, termen mâine.");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["extractedItems"][0], "500 lei");
    assert_eq!(value["sanitizedText"], "Suma datorată este [SUMĂ], termen mâine.");
    assert_eq!(value["urgency"], "MEDIUM");
}

// ============================================================================
// Lexicon
// ============================================================================

#[test]
fn test_custom_common_terms_suppress_names() {
    let text = "am vorbit cu Andrei despre caz";
    assert_eq!(extract_personal_info(text).extracted_items, vec!["Andrei"]);

    let mut config = LexiconConfig::default();
    config.common_terms.push("andrei".to_string());
    let lexicon = Lexicon::from_config(&config).unwrap();

    let result = extract_personal_info_with(text, &lexicon);
    assert!(result.is_clean());
    assert_eq!(result.sanitized_text, text);
}

#[test]
fn test_secondary_entry_points() {
    let text = "Cer custodie și pensie alimentară, am termen la instanță.";
    assert_eq!(
        extract_legal_concepts(text),
        vec!["custodie", "pensie alimentară"]
    );
    assert_eq!(assess_urgency(text), UrgencyLevel::Medium);
}
