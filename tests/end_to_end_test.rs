use anyhow::Result;
use message_insight::app::report::{render, OutputFormat};
use message_insight::core::{ConfigProvider, Storage};
use message_insight::{
    DatasetHolder, InsightEngine, InsightError, LocalStorage, Query, QueryOutcome, TomlConfig,
};
use std::sync::Arc;
use tempfile::TempDir;

const EXPORT: &str = "Telefono;Mensaje
555;Hola el mundo mundo
777;\"Estoy en 40.4168;-3.7038\"
";

fn storage_with_export(dir: &TempDir) -> Result<LocalStorage> {
    std::fs::write(dir.path().join("mensajes.csv"), EXPORT)?;
    Ok(LocalStorage::new(dir.path().to_str().unwrap().to_string()))
}

#[tokio::test]
async fn test_upload_and_run_all_actions() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let engine = InsightEngine::new(storage_with_export(&temp_dir)?);

    let summary = engine.ingest("mensajes.csv").await?;
    assert_eq!(summary.records, 2);
    assert_eq!(summary.columns, vec!["Telefono", "Mensaje"]);

    match engine.run_selector("buscar_mensajes", Some("MUNDO"), 10)? {
        QueryOutcome::Messages(records) => {
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].identifier(), Some("555"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    match engine.run_selector("ver_palabras", None, 10)? {
        QueryOutcome::TopWords(words) => {
            assert_eq!(words["555"][0].word, "mundo");
            assert_eq!(words["555"][0].count, 2);
            assert!(words.contains_key("777"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    match engine.run_selector("ver_coordenadas", None, 10)? {
        QueryOutcome::Coordinates(matches) => {
            assert_eq!(matches.len(), 1);
            assert_eq!(matches[0].latitude, "40.4168");
            assert_eq!(matches[0].longitude, "-3.7038");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn test_invalid_upload_leaves_previous_dataset_current() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = storage_with_export(&temp_dir)?;
    storage.write_file("roto.csv", b";;\n1;2\n").await?;

    let holder = Arc::new(DatasetHolder::new());
    let engine = InsightEngine::with_holder(storage, Arc::clone(&holder));

    engine.ingest("mensajes.csv").await?;
    let result = engine.ingest("roto.csv").await;

    assert!(matches!(result, Err(InsightError::ParseError { .. })));
    assert_eq!(holder.current().len(), 2);
    assert_eq!(holder.last_load().unwrap().source, "mensajes.csv");
    Ok(())
}

#[tokio::test]
async fn test_unknown_selector_is_reported_not_executed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let engine = InsightEngine::new(storage_with_export(&temp_dir)?);
    engine.ingest("mensajes.csv").await?;

    let err = engine.run_selector("ver_graficos", None, 10).unwrap_err();
    assert!(matches!(err, InsightError::InvalidQuery { ref selector } if selector == "ver_graficos"));
    Ok(())
}

#[tokio::test]
async fn test_toml_batch_renders_to_output_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = storage_with_export(&temp_dir)?;

    let config = TomlConfig::from_toml_str(
        r#"
[analysis]
name = "batch"

[input]
path = "mensajes.csv"

[defaults]
format = "json"
top_n = 1

[[queries]]
action = "ver_palabras"

[[queries]]
action = "ver_coordenadas"

[output]
path = "reportes/resultado.json"
"#,
    )?;

    let engine = InsightEngine::new(storage);
    engine.ingest(config.input_path()).await?;

    let queries = config.build_queries()?;
    let outcomes: Vec<_> = queries.iter().map(|q| engine.run(q)).collect();
    let rendered = message_insight::app::report::render_all(&outcomes, OutputFormat::Json)?;
    engine
        .storage()
        .write_file("reportes/resultado.json", rendered.as_bytes())
        .await?;

    let written = std::fs::read_to_string(temp_dir.path().join("reportes/resultado.json"))?;
    let value: serde_json::Value = serde_json::from_str(&written)?;
    assert_eq!(value[0]["query"], "top_words");
    assert_eq!(value[0]["results"]["555"].as_array().unwrap().len(), 1);
    assert_eq!(value[1]["results"][0]["identifier"], "777");
    Ok(())
}

#[tokio::test]
async fn test_text_report_for_search() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let engine = InsightEngine::new(storage_with_export(&temp_dir)?);
    engine.ingest("mensajes.csv").await?;

    let outcome = engine.run(&Query::Search {
        needle: "estoy".to_string(),
    });
    let text = render(&outcome, OutputFormat::Text)?;
    assert!(text.starts_with("Mensajes encontrados: 1"));
    assert!(text.contains("[777] Estoy en 40.4168;-3.7038"));
    Ok(())
}
