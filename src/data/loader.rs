use std::path::Path;

use anyhow::{Context, Result};

use super::model::FeatureSchema;
use super::regressor::{ModelArtifact, Regressor};

// ---------------------------------------------------------------------------
// Artifacts – the process-wide, read-only inputs
// ---------------------------------------------------------------------------

/// Feature schema and model, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub schema: FeatureSchema,
    pub model: ModelArtifact,
}

impl Artifacts {
    /// Load both artifacts. Any failure here is fatal for the application.
    pub fn load(schema_path: &Path, model_path: &Path) -> Result<Self> {
        let schema = load_schema(schema_path)
            .with_context(|| format!("loading feature schema {}", schema_path.display()))?;
        let model = load_model(model_path)
            .with_context(|| format!("loading model {}", model_path.display()))?;

        log::info!(
            "Loaded {} model ({} features, {} outputs) and schema with {} columns, {} stations",
            model.kind(),
            model.n_features(),
            model.n_outputs(),
            schema.len(),
            schema.known_stations().len()
        );
        if model.n_features() != schema.len() {
            log::warn!(
                "Model expects {} features but schema has {} columns; predictions will fail",
                model.n_features(),
                schema.len()
            );
        }

        Ok(Self { schema, model })
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Read a JSON array of column names.
pub fn load_schema(path: &Path) -> Result<FeatureSchema> {
    let text = std::fs::read_to_string(path).context("reading schema file")?;
    parse_schema(&text)
}

/// Expected JSON layout:
///
/// ```json
/// ["year", "id_1", "id_10", "id_11", ...]
/// ```
pub fn parse_schema(text: &str) -> Result<FeatureSchema> {
    let columns: Vec<String> = serde_json::from_str(text).context("parsing schema JSON")?;
    if columns.is_empty() {
        anyhow::bail!("schema has no columns");
    }
    Ok(FeatureSchema::new(columns))
}

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

pub fn load_model(path: &Path) -> Result<ModelArtifact> {
    let text = std::fs::read_to_string(path).context("reading model file")?;
    parse_model(&text)
}

pub fn parse_model(text: &str) -> Result<ModelArtifact> {
    let model: ModelArtifact = serde_json::from_str(text).context("parsing model JSON")?;
    model.validate().context("validating model")?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINEAR: &str = r#"{
        "kind": "linear",
        "coefficients": [[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0,0,0], [0,0,0], [0,0,0], [0,0,0]],
        "intercepts": [1, 2, 3, 4, 5, 6]
    }"#;

    #[test]
    fn parses_schema_array() {
        let schema = parse_schema(r#"["year", "id_1", "id_2"]"#).unwrap();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.known_stations(), ["1", "2"]);
    }

    #[test]
    fn rejects_empty_or_malformed_schema() {
        assert!(parse_schema("[]").is_err());
        assert!(parse_schema(r#"{"year": 1}"#).is_err());
    }

    #[test]
    fn parses_linear_model() {
        let model = parse_model(LINEAR).unwrap();
        assert_eq!(model.kind(), "linear");
        assert_eq!(model.n_features(), 3);
        assert_eq!(
            model.predict_row(&[2022.0, 1.0, 0.0]).unwrap(),
            vec![2.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
    }

    #[test]
    fn rejects_inconsistent_linear_model() {
        let bad = r#"{"kind": "linear", "coefficients": [[1.0], [1.0, 2.0]], "intercepts": [0, 0]}"#;
        assert!(parse_model(bad).is_err());
        assert!(parse_model(r#"{"kind": "svm"}"#).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = std::env::temp_dir().join("wqp-loader-missing");
        let err = Artifacts::load(&dir.join("cols.json"), &dir.join("model.json")).unwrap_err();
        assert!(format!("{err:#}").contains("loading feature schema"));
    }

    #[test]
    fn load_reads_both_files() {
        let dir = std::env::temp_dir().join(format!("wqp-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let schema_path = dir.join("model_columns.json");
        let model_path = dir.join("pollution_model.json");
        std::fs::write(&schema_path, r#"["year", "id_1", "id_2"]"#).unwrap();
        std::fs::write(&model_path, LINEAR).unwrap();

        let artifacts = Artifacts::load(&schema_path, &model_path).unwrap();
        assert_eq!(artifacts.schema.len(), artifacts.model.n_features());

        std::fs::remove_dir_all(&dir).ok();
    }
}
