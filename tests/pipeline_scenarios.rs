use signgloss::gloss::lemmatizer::{Lemmatizer, MorphyLemmatizer, ReductionMode};
use signgloss::gloss::pronoun::rewrite_pronouns;
use signgloss::gloss::resolver::{resolve, title_case, GlossKind};
use signgloss::gloss::{resources, text_to_gloss, GlossPipeline, MemoryCatalog};
use std::sync::Arc;

fn marker_catalog() -> MemoryCatalog {
    MemoryCatalog::from_names(["Before", "Will", "Now"], ".mp4")
}

fn pipeline(catalog: MemoryCatalog) -> GlossPipeline {
    GlossPipeline::new(Arc::new(catalog)).expect("embedded resources load")
}

fn spelled(word: &str) -> Vec<String> {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().to_string())
        .collect()
}

#[test]
fn past_tense_sentence_starts_with_before() {
    let words = text_to_gloss("I walked to school", marker_catalog()).unwrap();
    assert_eq!(words[0], "Before");
    assert_eq!(&words[1..5], &spelled("walk")[..]);
}

#[test]
fn future_sentence_starts_with_single_will() {
    let words = text_to_gloss("I will go home", marker_catalog()).unwrap();
    assert_eq!(words[0], "Will");
    assert_eq!(words.iter().filter(|w| *w == "Will").count(), 1);
    assert_eq!(&words[1..], &["G", "O", "H", "O", "M", "E"]);
}

#[test]
fn continuous_sentence_starts_with_now() {
    let words = text_to_gloss("I am running now", marker_catalog()).unwrap();
    assert_eq!(words[0], "Now");
    assert_eq!(&words[1..4], &["R", "U", "N"]);
}

#[test]
fn empty_and_blank_input_yield_nothing() {
    let pipeline = pipeline(marker_catalog());
    assert!(pipeline.transform("").is_empty());
    assert!(pipeline.transform("   \n\t").is_empty());
    assert!(pipeline.transform("... !?").is_empty());
}

#[test]
fn unknown_word_is_finger_spelled() {
    let words = text_to_gloss("xyzzy", marker_catalog()).unwrap();
    assert_eq!(words, vec!["X", "Y", "Z", "Z", "Y"]);
}

#[test]
fn stopwords_never_reach_the_output() {
    let catalog = MemoryCatalog::from_names(["Has", "Been", "The", "Was", "School"], ".mp4");
    let words = pipeline(catalog).transform("She has been at the school, and she was happy.");

    for stopword in ["Has", "Been", "The", "Was"] {
        assert!(!words.iter().any(|w| w == stopword), "{} leaked into {:?}", stopword, words);
    }
    assert!(words.iter().any(|w| w == "School"));
}

#[test]
fn missing_signs_spell_every_character_in_order() {
    let trace = pipeline(MemoryCatalog::new()).trace("Quick zebras jumped over 42 fences");

    let expected: Vec<String> = trace.adjusted.iter().flat_map(|w| spelled(w)).collect();
    assert_eq!(trace.words(), expected);
    assert!(trace.resolved.iter().all(|t| t.kind == GlossKind::Letter));
}

#[test]
fn resolved_signs_keep_input_order() {
    let text = "The children walked to the old library yesterday";
    let adjusted = pipeline(MemoryCatalog::new()).trace(text).adjusted;

    let catalog = MemoryCatalog::from_names(adjusted.iter().map(|w| title_case(w)), ".mp4");
    let words = pipeline(catalog).transform(text);

    let expected: Vec<String> = adjusted.iter().map(|w| title_case(w)).collect();
    assert_eq!(words, expected);
}

#[test]
fn output_is_never_shorter_than_its_candidates() {
    let pipeline = pipeline(marker_catalog());
    for text in [
        "I walked to school",
        "We will meet tomorrow, won't we?",
        "Running is fun; reading is better.",
        "x",
    ] {
        let trace = pipeline.trace(text);
        assert!(trace.resolved.len() >= trace.adjusted.len(), "{}", text);
    }
}

#[test]
fn first_person_pronoun_resolves_to_me() {
    let catalog = MemoryCatalog::from_names(["Me", "Go"], ".mp4");
    let adjusted = rewrite_pronouns(vec!["I".to_string(), "go".to_string()]);
    let resolved = resolve(&adjusted, &catalog, ".mp4");

    let words: Vec<&str> = resolved.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(words, vec!["Me", "Go"]);
}

#[test]
fn inflections_outside_the_lexicon_are_reduced() {
    let pipeline = pipeline(MemoryCatalog::new());

    let trace = pipeline.trace("He is climbing the mountains");
    assert_eq!(trace.normalized, vec!["he", "climb", "mountain"]);

    let trace = pipeline.trace("The dogs jumped over the fences");
    assert_eq!(trace.normalized, vec!["dog", "jump", "over", "fence"]);
}

#[test]
fn reduced_unknown_words_resolve_to_their_signs() {
    let catalog = MemoryCatalog::from_names(["Climb", "Mountain"], ".mp4");
    let words = pipeline(catalog).transform("He is climbing the mountains");
    assert!(words.ends_with(&["Climb".to_string(), "Mountain".to_string()]));
}

#[test]
fn canonical_forms_survive_every_reduction_mode() {
    let lemmatizer = MorphyLemmatizer::new(resources::init().unwrap());
    for word in ["walk", "run", "school", "happy", "child", "go", "home"] {
        for mode in ReductionMode::ALL {
            assert_eq!(lemmatizer.lemmatize(word, mode), word, "{:?}", mode);
        }
    }
}

#[test]
fn resources_are_ready_after_first_pipeline() {
    let _ = pipeline(MemoryCatalog::new());
    assert!(resources::is_ready());
}
