use policy_corpus::{builtin_policies, CorpusError, POLICY_CORPUS_SCHEMA_VERSION};
use policy_search::{PolicySearchEngine, SearchError, SearchOptions};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[tokio::test]
async fn engine_from_saved_corpus_ranks_like_builtin() {
    let tmp = TempDir::new().expect("temp dir should be created");
    let path = tmp.path().join("policies").join("corpus.json");

    builtin_policies()
        .save(&path)
        .await
        .expect("corpus should save");

    let loaded = PolicySearchEngine::from_corpus_file(&path)
        .await
        .expect("corpus should load");
    let builtin = PolicySearchEngine::with_builtin_policies();

    let options = SearchOptions::default().top_k(5);
    assert_eq!(
        loaded.search("knee replacement conservative treatment", &options),
        builtin.search("knee replacement conservative treatment", &options)
    );
}

#[tokio::test]
async fn schema_mismatch_surfaces_as_corpus_error() {
    let tmp = TempDir::new().expect("temp dir should be created");
    let path = tmp.path().join("corpus.json");

    let body = serde_json::json!({
        "schema_version": 99,
        "documents": [],
    });
    tokio::fs::write(&path, serde_json::to_vec(&body).expect("body should encode"))
        .await
        .expect("file should write");

    let err = PolicySearchEngine::from_corpus_file(&path)
        .await
        .expect_err("load should reject unknown schema");
    assert!(
        matches!(
            err,
            SearchError::Corpus(CorpusError::UnsupportedSchemaVersion {
                found: 99,
                expected: POLICY_CORPUS_SCHEMA_VERSION,
            })
        ),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn missing_corpus_file_surfaces_as_io_error() {
    let tmp = TempDir::new().expect("temp dir should be created");

    let err = PolicySearchEngine::from_corpus_file(tmp.path().join("missing.json"))
        .await
        .expect_err("load should fail");
    assert!(
        matches!(err, SearchError::Corpus(CorpusError::Io(_))),
        "unexpected error: {err}"
    );
}
