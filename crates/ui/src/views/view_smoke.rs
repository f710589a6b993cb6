use std::sync::{Arc, Mutex};

use quiz_core::model::{
    Article, NounRecord, ProgressEntry, ProgressHistory, ProgressRecord, SentenceRecord,
    VerbChallenge,
};
use services::SentenceIntent;
use storage::repository::{
    InMemoryRepository, ProgressRepository, SentenceRepository, Storage, StorageError,
};
use tokio::sync::Notify;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

#[tokio::test(flavor = "current_thread")]
async fn sentence_view_renders_prompt_bank_and_progress() {
    let history: ProgressHistory = [
        ("2023-11-10".to_string(), ProgressEntry::new(6, 9)),
        ("2023-11-14".to_string(), ProgressEntry::new(2, 3)),
    ]
    .into_iter()
    .collect();
    let repo = InMemoryRepository::new()
        .with_sentences(vec![SentenceRecord::new("I have 2 apples.", "Ich habe 2 Äpfel.").unwrap()])
        .with_progress(history);

    let mut harness = setup_view_harness(ViewKind::Sentences, repo);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("I have 2 apples."), "missing prompt in {html}");
    assert!(html.contains("Äpfel."), "missing bank token in {html}");
    assert!(html.contains("Last day (2023-11-10): 6"), "missing last day in {html}");
    assert!(html.contains(">2</span>"), "missing today's count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sentence_view_shows_empty_message() {
    let mut harness = setup_view_harness(ViewKind::Sentences, InMemoryRepository::new());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No sentences available"), "missing message in {html}");
    assert!(!html.contains("check-btn"), "controls should be hidden in {html}");
}

struct Offline;

#[async_trait::async_trait]
impl SentenceRepository for Offline {
    async fn list_sentences(&self) -> Result<Vec<SentenceRecord>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[async_trait::async_trait]
impl ProgressRepository for Offline {
    async fn load_progress(&self) -> Result<ProgressHistory, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn save_progress(&self, _record: &ProgressRecord) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn sentence_view_shows_load_error() {
    let mut storage = Storage::in_memory();
    storage.sentences = Arc::new(Offline);
    storage.progress = Arc::new(Offline);

    let mut harness = setup_view_harness_with_storage(ViewKind::Sentences, &storage);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Error loading sentences"), "missing error text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn noun_view_renders_article_buttons() {
    let noun = NounRecord::new("Tisch", Article::Der, "der Tisch", "die Tische", "table", "")
        .unwrap();
    let repo = InMemoryRepository::new().with_nouns(vec![noun]);

    let mut harness = setup_view_harness(ViewKind::Nouns, repo);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Tisch"), "missing noun in {html}");
    assert!(html.contains("table"), "missing meaning in {html}");
    for article in ["der", "die", "das"] {
        assert!(html.contains(&format!(">{article}</button>")), "missing {article} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn lookup_view_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Lookup, InMemoryRepository::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Word lookup"), "missing title in {html}");
    assert!(html.contains("Look up"), "missing button in {html}");
}

/// Progress store whose saves wait until the test releases them.
struct HeldProgress {
    release: Arc<Notify>,
    history: Mutex<ProgressHistory>,
}

#[async_trait::async_trait]
impl ProgressRepository for HeldProgress {
    async fn load_progress(&self) -> Result<ProgressHistory, StorageError> {
        self.history
            .lock()
            .map(|history| history.clone())
            .map_err(|e| StorageError::Connection(e.to_string()))
    }

    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        self.release.notified().await;
        let mut history = self
            .history
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        history.upsert(record);
        Ok(())
    }
}

#[tokio::test(flavor = "current_thread")]
async fn sentence_board_stays_usable_while_progress_is_pushed() {
    let release = Arc::new(Notify::new());
    let held = Arc::new(HeldProgress {
        release: Arc::clone(&release),
        history: Mutex::new(ProgressHistory::default()),
    });
    let repo = InMemoryRepository::new()
        .with_sentences(vec![SentenceRecord::new("We go.", "Wir gehen.").unwrap()]);
    let mut storage = Storage::from_in_memory(repo);
    let progress: Arc<dyn ProgressRepository> = held.clone();
    storage.progress = progress;

    let mut harness = setup_view_harness_with_storage(ViewKind::Sentences, &storage);
    harness.rebuild();
    harness.drive_async().await;

    harness.dispatch_sentence(SentenceIntent::Hint);
    harness.dispatch_sentence(SentenceIntent::Hint);
    harness.dispatch_sentence(SentenceIntent::Check);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("We go."), "board went blank during push: {html}");
    assert!(html.contains("check-btn"), "controls missing during push: {html}");
    assert!(html.contains("correct-count\">1<"), "local count missing: {html}");
    assert!(held.history.lock().unwrap().is_empty());

    release.notify_one();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("correct-count\">1<"), "count lost after push: {html}");
    assert!(html.contains("total-count\">1<"), "total lost after push: {html}");
    assert!(!held.history.lock().unwrap().is_empty());
}

fn verb_challenge() -> VerbChallenge {
    serde_json::from_value(serde_json::json!({
        "verb": {
            "meaning": "to go",
            "infinitive": "gehen",
            "perfect": "ist gegangen",
            "ich": "gehe",
            "du": "gehst"
        },
        "sentence": {
            "english": "We go home.",
            "german": "Wir gehen nach Hause.",
            "blanked_sentence": "wir ____ nach hause.",
            "correct_form": "gehen"
        },
        "has_perfect_form": true
    }))
    .unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn verb_view_renders_conjugation_and_blank() {
    let repo = InMemoryRepository::new().with_verbs(vec![verb_challenge()]);

    let mut harness = setup_view_harness(ViewKind::Verbs, repo);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("gehen"), "missing infinitive in {html}");
    assert!(html.contains("Perfekt: ist gegangen"), "missing perfect in {html}");
    assert!(html.contains("gehst"), "missing conjugation in {html}");
    assert!(html.contains("We go home."), "missing english in {html}");
    assert!(html.contains("wir ____ nach hause."), "missing blank in {html}");
    assert!(html.contains("verb-check"), "missing check button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn verb_view_shows_empty_message() {
    let mut harness = setup_view_harness(ViewKind::Verbs, InMemoryRepository::new());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No verbs available"), "missing message in {html}");
    assert!(!html.contains("verb-answer"), "input should be hidden in {html}");
}
