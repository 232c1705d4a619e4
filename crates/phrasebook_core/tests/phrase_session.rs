use phrasebook_core::{
    GridView, MemoryKvStore, PhraseSession, PhrasebookConfig, DEFAULT_AUTHOR,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn session() -> PhraseSession<MemoryKvStore> {
    PhraseSession::open(MemoryKvStore::new(), &PhrasebookConfig::default())
}

fn seeded() -> PhraseSession<MemoryKvStore> {
    let mut session = session();
    session.submit_phrase("La vida es bella", Some("Roberto Benigni"));
    session.submit_phrase("Ser o no ser", Some("William Shakespeare"));
    session
}

#[test]
fn submit_trims_and_rejects_blank_text() {
    let mut session = session();

    assert_eq!(session.submit_phrase("   ", None), None);
    assert_eq!(session.submit_phrase("\t\n", Some("Autor")), None);
    assert!(session.store().is_empty());

    let id = session
        .submit_phrase("  Frase con espacios  ", Some("  Autor  "))
        .unwrap();
    let phrase = session.store().get(id).unwrap();
    assert_eq!(phrase.text, "Frase con espacios");
    assert_eq!(phrase.author, "Autor");

    let anonymous = session.submit_phrase("otra", Some("   ")).unwrap();
    assert_eq!(session.store().get(anonymous).unwrap().author, DEFAULT_AUTHOR);
}

#[test]
fn search_input_is_debounced() {
    let mut session = seeded();
    let start = Instant::now();

    session.input_search("V", start);
    session.input_search("VI", start + Duration::from_millis(100));
    session.input_search("VIDA", start + Duration::from_millis(200));
    assert!(session.is_search_pending());
    assert!(!session.tick(start + Duration::from_millis(400)));
    assert_eq!(session.search_term(), "");
    assert_eq!(session.visible_phrases().len(), 2);

    assert!(session.tick(start + Duration::from_millis(500)));
    assert_eq!(session.search_term(), "VIDA");
    let visible = session.visible_phrases();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].text, "La vida es bella");
}

#[test]
fn zero_debounce_applies_immediately() {
    let config = PhrasebookConfig {
        debounce_ms: 0,
        ..PhrasebookConfig::default()
    };
    let mut session = PhraseSession::open(MemoryKvStore::new(), &config);
    session.submit_phrase("Ser o no ser", Some("William Shakespeare"));

    session.input_search("shakespeare", Instant::now());
    assert_eq!(session.search_term(), "shakespeare");
    assert_eq!(session.visible_phrases().len(), 1);
}

#[test]
fn clear_search_cancels_pending_input() {
    let mut session = seeded();
    let start = Instant::now();

    session.search_now("vida");
    session.input_search("ser", start);
    session.clear_search();

    assert!(!session.is_search_pending());
    assert_eq!(session.search_term(), "");
    assert!(!session.tick(start + Duration::from_secs(1)));
    assert_eq!(session.search_term(), "");
}

#[test]
fn teardown_drops_pending_input() {
    let mut session = seeded();
    let start = Instant::now();

    session.input_search("vida", start);
    session.teardown();

    assert!(!session.tick(start + Duration::from_secs(1)));
    assert_eq!(session.search_term(), "");
}

#[test]
fn visible_phrases_are_memoized_until_inputs_change() {
    let mut session = seeded();
    session.search_now("ser");

    let first = session.visible_phrases();
    let second = session.visible_phrases();
    assert!(Arc::ptr_eq(&first, &second));

    session.submit_phrase("Ser feliz", None);
    let third = session.visible_phrases();
    assert!(!Arc::ptr_eq(&second, &third));
    assert_eq!(third.len(), 2);
}

#[test]
fn grid_view_reports_each_state() {
    let mut session = session();
    assert_eq!(session.grid_view(), GridView::Empty);

    session.submit_phrase("La vida es bella", Some("Roberto Benigni"));
    session.submit_phrase("Ser o no ser", Some("William Shakespeare"));
    assert_eq!(
        session.grid_view(),
        GridView::Results {
            shown: 2,
            total: 2,
            filtering: false
        }
    );

    session.search_now("a");
    assert_eq!(
        session.grid_view(),
        GridView::Results {
            shown: 2,
            total: 2,
            filtering: true
        }
    );

    session.search_now("vida");
    assert_eq!(
        session.grid_view(),
        GridView::Results {
            shown: 1,
            total: 2,
            filtering: true
        }
    );

    session.search_now("xyz123");
    assert_eq!(
        session.grid_view(),
        GridView::NoResults {
            term: "xyz123".to_string()
        }
    );
}

#[test]
fn delete_requires_confirmation() {
    let mut session = seeded();
    let target = session.store().phrases()[0].id;

    assert!(session.request_delete(target));
    assert_eq!(
        session.pending_delete().map(|phrase| phrase.id),
        Some(target)
    );
    session.cancel_delete();
    assert!(session.pending_delete().is_none());
    assert_eq!(session.confirm_delete(), None);
    assert_eq!(session.store().len(), 2);

    assert!(session.request_delete(target));
    let removed = session.confirm_delete().unwrap();
    assert_eq!(removed.id, target);
    assert_eq!(session.store().len(), 1);
    assert!(session.store().get(target).is_none());
}

#[test]
fn delete_request_for_unknown_id_is_ignored() {
    let mut session = seeded();
    assert!(!session.request_delete(uuid::Uuid::new_v4()));
    assert!(session.pending_delete().is_none());
}

#[test]
fn session_state_survives_reopen_through_storage() {
    let mut session = seeded();
    session.search_now("vida");
    let storage = session.into_store().into_storage();

    let mut reopened = PhraseSession::open(storage, &PhrasebookConfig::default());
    assert_eq!(reopened.store().len(), 2);
    assert_eq!(reopened.search_term(), "");
    assert_eq!(reopened.visible_phrases().len(), 2);
}
