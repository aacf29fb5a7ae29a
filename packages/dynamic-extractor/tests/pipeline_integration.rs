//! End-to-end pipeline runs against mock search and agent services.

use std::time::Duration;

use dynamic_extractor::{
    input::read_csv, Config, ExtractionOutcome, FieldKind, MockAgent, MockSearcher, Pipeline,
    PipelineOptions, ResultTable, RunState, SearchResult, Session,
};

fn hit(snippet: &str) -> SearchResult {
    SearchResult::new("Search hit", "https://example.org").with_snippet(snippet)
}

#[tokio::test]
async fn test_acme_email_scenario() {
    let searcher = MockSearcher::new().with_results(
        "Email of Acme Corp Company",
        vec![hit("Contact us at contact@acme.com")],
    );
    let agent = MockAgent::new().with_response_when("contact@acme.com", "contact@acme.com");
    let pipeline = Pipeline::new(searcher, agent);

    let table = pipeline
        .run(&["Acme Corp"], "Company", &FieldKind::Email)
        .await;

    assert_eq!(table.headers(), ["entry", "email"]);
    assert_eq!(table.records()[0].entry, "Acme Corp");
    assert_eq!(table.records()[0].value(), "contact@acme.com");
}

#[tokio::test]
async fn test_nowhere_phone_scenario() {
    let agent = MockAgent::new().with_default_response("+1 555 0100");
    let pipeline = Pipeline::new(MockSearcher::new(), agent.clone());

    let table = pipeline
        .run(&["Nowhere Inc"], "Company", &FieldKind::PhoneNumber)
        .await;

    assert_eq!(table.headers(), ["entry", "phone number"]);
    assert_eq!(table.records()[0].entry, "Nowhere Inc");
    assert_eq!(table.records()[0].value(), "No results found");
    assert_eq!(agent.call_count(), 0);
}

#[tokio::test]
async fn test_one_record_per_row_in_order_with_mixed_outcomes() {
    let searcher = MockSearcher::new()
        .with_results("Address of Acme Company", vec![hit("acme")])
        .with_results("Address of Globex Company", vec![hit("globex")])
        .with_results("Address of Hooli Company", vec![hit("hooli")])
        .failing_on("Address of Initech Company");
    let agent = MockAgent::new()
        .with_response_when("acme", "Acme is at 123 Main Street, Springfield, Illinois")
        .with_response_when("globex", "I could not find an address.")
        .failing_when("hooli");
    let pipeline = Pipeline::new(searcher, agent);

    let entries = ["Acme", "Globex", "Initech", "Hooli", "Umbrella"];
    let table = pipeline.run(&entries, "Company", &FieldKind::Address).await;

    let got: Vec<&str> = table.records().iter().map(|r| r.entry.as_str()).collect();
    assert_eq!(got, entries);

    let values: Vec<String> = table.records().iter().map(|r| r.value()).collect();
    assert_eq!(values[0], "123 Main Street, Springfield, Illinois");
    assert_eq!(values[1], "No address found");
    assert_eq!(values[2], "No results found");
    assert!(values[3].starts_with("Extraction failed: "));
    assert_eq!(values[4], "No results found");
}

#[tokio::test]
async fn test_concurrent_run_preserves_row_order() {
    let searcher = MockSearcher::new()
        .with_default_results(vec![hit("generic")])
        .with_delay("Who founded A?", Duration::from_millis(60))
        .with_delay("Who founded B?", Duration::from_millis(30));
    let agent = MockAgent::new().with_default_response("  Somebody.  ");
    let pipeline = Pipeline::new(searcher.clone(), agent.clone())
        .with_options(PipelineOptions::default().with_concurrency(3));

    let kind = FieldKind::custom("Who founded {company}?");
    let table = pipeline.run(&["A", "B", "C"], "Company", &kind).await;

    let entries: Vec<&str> = table.records().iter().map(|r| r.entry.as_str()).collect();
    assert_eq!(entries, ["A", "B", "C"]);
    assert!(table
        .records()
        .iter()
        .all(|r| r.outcome == ExtractionOutcome::Answer("Somebody.".into())));
    assert_eq!(searcher.call_count(), 3);
    assert_eq!(agent.call_count(), 3);
}

#[tokio::test]
async fn test_custom_prompt_blank_answer() {
    let searcher = MockSearcher::new().with_default_results(vec![hit("generic")]);
    let agent = MockAgent::new().with_default_response("\n\n");
    let pipeline = Pipeline::new(searcher.clone(), agent);

    let kind = FieldKind::custom("Headcount of {company}");
    let table = pipeline.run(&["Acme"], "Company", &kind).await;

    assert_eq!(table.headers(), ["entry", "result"]);
    assert_eq!(table.records()[0].value(), "No relevant information found");
    assert_eq!(searcher.calls(), ["Headcount of Acme"]);
}

#[tokio::test]
async fn test_agent_sees_serialized_results_and_instruction() {
    let searcher = MockSearcher::new().with_results(
        "Phone number of Acme Company",
        vec![hit("Call (555) 010-0199").with_position(1)],
    );
    let agent = MockAgent::new().with_default_response("(555) 010-0199");
    let pipeline = Pipeline::new(searcher, agent.clone());

    pipeline
        .run(&["Acme"], "company", &FieldKind::PhoneNumber)
        .await;

    let call = &agent.calls()[0];
    assert!(call.instruction.contains("valid and specific phone numbers"));

    let json = call
        .content
        .strip_prefix("JSON search results: ")
        .expect("prefixed payload");
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value[0]["snippet"], "Call (555) 010-0199");
    assert_eq!(value[0]["position"], 1);
}

#[tokio::test]
async fn test_session_csv_to_csv_round_trip() {
    let dataset = read_csv("Company,City\nAcme,Austin\nNowhere Inc,Nowhere\n".as_bytes()).unwrap();

    let searcher = MockSearcher::new()
        .with_results("Email of Acme Company", vec![hit("acme")]);
    let agent = MockAgent::new().with_default_response("Try sales@acme.com or help@acme.com");
    let pipeline = Pipeline::new(searcher, agent);

    let mut session = Session::new(Config::default());
    session.set_dataset(dataset);
    session
        .run_with(&pipeline, "Company", &FieldKind::Email)
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("extracted_email.csv");
    session.export(Some(&path)).unwrap();
    assert_eq!(session.state(), RunState::Exported);

    let reread =
        ResultTable::read_csv(std::fs::File::open(&path).unwrap(), FieldKind::Email).unwrap();
    assert_eq!(Some(&reread), session.results());

    let pairs: Vec<(String, String)> = reread
        .records()
        .iter()
        .map(|r| (r.entry.clone(), r.value()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Acme".to_string(), "sales@acme.com, help@acme.com".to_string()),
            ("Nowhere Inc".to_string(), "No results found".to_string()),
        ]
    );
}
