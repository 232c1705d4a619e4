use phrasebook_core::{filter_phrases, matching_phrases, Phrase, SearchOptions};
use std::borrow::Cow;
use std::sync::Arc;
use uuid::Uuid;

fn phrase(n: u128, text: &str, author: &str) -> Phrase {
    Phrase::with_id(Uuid::from_u128(n), text, author, 1_700_000_000_000)
}

fn sample() -> Arc<Vec<Phrase>> {
    Arc::new(vec![
        phrase(1, "La vida es bella", "Roberto Benigni"),
        phrase(2, "Ser o no ser, esa es la cuestión", "William Shakespeare"),
        phrase(3, "Pienso, luego existo", "René Descartes"),
        phrase(4, "El precio es $10.99 (oferta)", "Test Author"),
        phrase(5, "JavaScript (ES6+) es genial", "Developer"),
        phrase(6, "Array[0] contiene datos", "Programmer"),
    ])
}

fn ids(phrases: &[Phrase]) -> Vec<u128> {
    phrases.iter().map(|phrase| phrase.id.as_u128()).collect()
}

fn search(term: &str) -> Vec<u128> {
    ids(&filter_phrases(&sample(), term, &SearchOptions::default()))
}

#[test]
fn blank_or_short_terms_return_the_same_snapshot() {
    let phrases = sample();
    let options = SearchOptions::default();

    for term in ["", "   ", " \t  \n ", "a", "a  ", "  é "] {
        let view = filter_phrases(&phrases, term, &options);
        assert!(Arc::ptr_eq(&view, &phrases), "term={term:?}");
    }
}

#[test]
fn slice_filter_borrows_when_gated() {
    let phrases = sample();
    let options = SearchOptions::default();

    assert!(matches!(
        matching_phrases(&phrases, "a", &options),
        Cow::Borrowed(_)
    ));
    let filtered = matching_phrases(&phrases, "vida", &options);
    assert!(matches!(filtered, Cow::Owned(_)));
    assert_eq!(ids(&filtered), vec![1]);
}

#[test]
fn two_char_term_filters() {
    let hits = search("la");
    assert!(!hits.is_empty());
    assert!(hits.len() < sample().len());
}

#[test]
fn text_match_ignores_case() {
    assert_eq!(search("vida"), vec![1]);
    assert_eq!(search("VIDA"), vec![1]);
    assert_eq!(search("ViDa"), vec![1]);
}

#[test]
fn author_match_ignores_case() {
    assert_eq!(search("shakespeare"), vec![2]);
    assert_eq!(search("SHAKESPEARE"), vec![2]);
    assert_eq!(search("Descartes"), vec![3]);
}

#[test]
fn accented_terms_fold_case() {
    assert_eq!(search("RENÉ"), vec![3]);
    assert_eq!(search("CUESTIÓN"), vec![2]);
}

#[test]
fn no_match_returns_empty() {
    assert!(search("xyz123").is_empty());
}

#[test]
fn whitespace_is_trimmed_and_collapsed() {
    assert_eq!(search("  vida  "), vec![1]);
    assert_eq!(search("luego existo"), vec![3]);
    assert_eq!(search("luego    existo"), vec![3]);
    assert_eq!(search("luego\t\nexisto"), vec![3]);
}

#[test]
fn special_characters_match_literally() {
    assert_eq!(search("(oferta)"), vec![4]);
    assert_eq!(search("$10.99"), vec![4]);
    assert_eq!(search("(ES6+)"), vec![5]);
    assert_eq!(search("Array[0]"), vec![6]);
    assert!(search(".*").is_empty());
    assert!(search("a|b").is_empty());
}

#[test]
fn dot_is_not_a_wildcard() {
    let phrases = Arc::new(vec![
        phrase(1, "cuesta $10.99", "x"),
        phrase(2, "cuesta $10X99", "x"),
    ]);
    let hits = filter_phrases(&phrases, "$10.99", &SearchOptions::default());
    assert_eq!(ids(&hits), vec![1]);
}

#[test]
fn either_field_is_enough() {
    let phrases = Arc::new(vec![
        phrase(1, "rust in text", "someone"),
        phrase(2, "nothing here", "Rustacean"),
        phrase(3, "rust everywhere", "rusty"),
        phrase(4, "nothing", "nobody"),
    ]);
    let hits = filter_phrases(&phrases, "rust", &SearchOptions::default());
    assert_eq!(ids(&hits), vec![1, 2, 3]);
}

#[test]
fn output_preserves_input_order() {
    let phrases = Arc::new(vec![
        phrase(9, "zeta match", "a"),
        phrase(3, "alpha match", "b"),
        phrase(7, "omega match", "c"),
    ]);
    let hits = filter_phrases(&phrases, "match", &SearchOptions::default());
    assert_eq!(ids(&hits), vec![9, 3, 7]);
}

#[test]
fn gate_follows_options() {
    let phrases = sample();

    let eager = SearchOptions { min_query_len: 1 };
    let hits = filter_phrases(&phrases, "$", &eager);
    assert_eq!(ids(&hits), vec![4]);

    let strict = SearchOptions { min_query_len: 5 };
    let view = filter_phrases(&phrases, "vida", &strict);
    assert!(Arc::ptr_eq(&view, &phrases));
}

#[test]
fn two_phrase_scenario() {
    let phrases = Arc::new(vec![
        phrase(1, "La vida es bella", "Roberto Benigni"),
        phrase(2, "Ser o no ser", "William Shakespeare"),
    ]);
    let options = SearchOptions::default();

    assert_eq!(ids(&filter_phrases(&phrases, "VIDA", &options)), vec![1]);
    assert_eq!(
        ids(&filter_phrases(&phrases, "shakespeare", &options)),
        vec![2]
    );
    assert_eq!(ids(&filter_phrases(&phrases, "a", &options)), vec![1, 2]);
    assert!(filter_phrases(&phrases, "xyz123", &options).is_empty());
}
