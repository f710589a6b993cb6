use mockito::{Matcher, Server};
use quiz_core::model::{Article, ProgressEntry, ProgressRecord};
use serde_json::json;
use storage::http::{ApiConfig, HttpRepository};
use storage::repository::{
    LookupRepository, NounRepository, ProgressRepository, SentenceRepository, Storage,
    StorageError, VerbRepository,
};

fn repo_for(server: &Server) -> HttpRepository {
    HttpRepository::new(&ApiConfig::new(server.url())).unwrap()
}

#[tokio::test]
async fn lists_nouns_and_skips_malformed_entries() {
    let mut server = Server::new_async().await;
    let body = json!([
        {"singular": "Tisch", "article": "der", "full_word": "der Tisch",
         "plural": "die Tische", "meaning": "table", "example": "Der Tisch ist neu."},
        {"singular": "Lampe", "article": "xyz", "full_word": "die Lampe", "meaning": "lamp"},
        {"singular": "Buch", "article": "das", "full_word": "das Buch", "meaning": "book",
         "plural": null}
    ]);
    let mock = server
        .mock("GET", "/api/noun-quiz/nouns")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let nouns = repo_for(&server).list_nouns().await.unwrap();

    mock.assert_async().await;
    assert_eq!(nouns.len(), 2);
    assert_eq!(nouns[0].article(), Article::Der);
    assert_eq!(nouns[1].singular(), "Buch");
    assert_eq!(nouns[1].known_plural(), None);
}

#[tokio::test]
async fn lists_sentences_in_backend_order() {
    let mut server = Server::new_async().await;
    let body = json!([
        {"english": "I am here.", "german": "Ich bin hier."},
        {"english": "It rains."},
        {"english": "We eat.", "german": "Wir essen."}
    ]);
    let _mock = server
        .mock("GET", "/api/quiz/sentences")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let sentences = repo_for(&server).list_sentences().await.unwrap();

    let germans: Vec<_> = sentences.iter().map(|s| s.german()).collect();
    assert_eq!(germans, vec!["Ich bin hier.", "Wir essen."]);
}

#[tokio::test]
async fn loads_and_saves_progress() {
    let mut server = Server::new_async().await;
    let _get = server
        .mock("GET", "/api/quiz/progress")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"2024-01-01": {"correct": 3, "total": 5}}"#)
        .create_async()
        .await;
    let post = server
        .mock("POST", "/api/quiz/progress")
        .match_body(Matcher::Json(json!({
            "date": "2024-01-02",
            "correct": 1,
            "total": 2
        })))
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;

    let repo = repo_for(&server);
    let history = repo.load_progress().await.unwrap();
    assert_eq!(history.get("2024-01-01"), Some(ProgressEntry::new(3, 5)));

    repo.save_progress(&ProgressRecord::new("2024-01-02", ProgressEntry::new(1, 2)))
        .await
        .unwrap();
    post.assert_async().await;
}

#[tokio::test]
async fn failed_save_reports_status() {
    let mut server = Server::new_async().await;
    let _post = server
        .mock("POST", "/api/quiz/progress")
        .with_status(500)
        .create_async()
        .await;

    let err = repo_for(&server)
        .save_progress(&ProgressRecord::new("2024-01-02", ProgressEntry::new(1, 1)))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::HttpStatus(500)));
}

#[tokio::test]
async fn lookup_sends_encoded_word() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/lookup")
        .match_query(Matcher::UrlEncoded("word".into(), "Größe".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "word": "Größe",
                "pons": {"hits": []},
                "verbformen_html": "<p>die Größe</p>",
                "verb_image_url": null,
                "translation": "size",
                "beispiele_list": [{"de": "Welche Größe?", "en": "Which size?"}],
                "article": "die"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let result = repo_for(&server).lookup("Größe").await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.translation.as_deref(), Some("size"));
    assert_eq!(result.examples[0].en, "Which size?");
    assert!(result.image_url().is_none());
}

#[tokio::test]
async fn dictionary_decodes_embedded_translations() {
    let mut server = Server::new_async().await;
    let result = json!({"translations": [{"source": "Haus", "target": "house"}]}).to_string();
    let _mock = server
        .mock("GET", "/api/dict/pons")
        .match_query(Matcher::UrlEncoded("word".into(), "Haus".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"word": "Haus", "result": result, "is_cached": true}).to_string())
        .create_async()
        .await;

    let response = repo_for(&server).dictionary("Haus").await.unwrap();
    assert!(response.is_cached);
    let set = response.translations().unwrap();
    assert_eq!(set.translations[0].target, "house");
}

#[tokio::test]
async fn unknown_word_maps_to_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/lookup")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let err = repo_for(&server).lookup("Quatsch").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn garbage_body_is_a_serialization_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/quiz/sentences")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let storage = Storage::http(&ApiConfig::new(server.url())).unwrap();
    let err = storage.sentences.list_sentences().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn next_verb_decodes_question() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/verb-quiz/next")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "verb": {
                    "meaning": "to see", "infinitive": "sehen", "perfect": "gesehen",
                    "ich": "sehe", "du": "siehst", "er": "sieht", "sie": "sieht",
                    "es": "sieht", "wir_sie": "sehen", "ihr": "seht"
                },
                "sentence": {
                    "english": "Do you see the dog?",
                    "german": "Siehst du den Hund?",
                    "blanked_sentence": "____ du den hund?",
                    "correct_form": "siehst",
                    "sentence_index": 12
                },
                "has_perfect_form": true
            })
            .to_string(),
        )
        .create_async()
        .await;

    let challenge = repo_for(&server).next_verb().await.unwrap();

    mock.assert_async().await;
    assert_eq!(challenge.verb.perfect, "gesehen");
    let sentence = challenge.sentence.unwrap();
    assert_eq!(sentence.correct_form, "siehst");
    assert_eq!(sentence.blanked_sentence, "____ du den hund?");
}

#[tokio::test]
async fn empty_verb_list_is_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/verb-quiz/next")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"error": "No verbs available"}).to_string())
        .create_async()
        .await;

    let storage = Storage::http(&ApiConfig::new(server.url())).unwrap();
    let err = storage.verbs.next_verb().await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn generated_examples_send_encoded_word() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/genai/examples")
        .match_query(Matcher::UrlEncoded("word".into(), "Straße".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"examples": [
                {"de": "Die Straße ist lang.", "en": "The street is long."},
                {"de": "Wir wohnen in dieser Straße.", "en": "We live on this street."}
            ]})
            .to_string(),
        )
        .create_async()
        .await;

    let examples = repo_for(&server).examples("Straße").await.unwrap();

    mock.assert_async().await;
    assert_eq!(examples.len(), 2);
    assert_eq!(examples[1].de, "Wir wohnen in dieser Straße.");
}

#[tokio::test]
async fn generation_failure_is_a_backend_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/genai/examples")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"error": "Invalid API key"}).to_string())
        .create_async()
        .await;

    let err = repo_for(&server).examples("Haus").await.unwrap_err();
    assert!(matches!(err, StorageError::Backend(message) if message == "Invalid API key"));
}
