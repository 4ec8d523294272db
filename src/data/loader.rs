use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

/// Column names of the source table. Any extra columns are ignored.
pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_COLUMN: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while loading the launch table.
/// All variants are fatal at startup.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {message}")]
    Row { row: usize, message: String },

    #[error("dataset contains no rows")]
    Empty,

    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reading parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("reading arrow batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

fn row_error(row: usize, message: impl Into<String>) -> DataLoadError {
    DataLoadError::Row {
        row,
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – delimited file with a header row (the original dataset format)
/// * `.json`    – records-oriented array of objects with the same keys
/// * `.parquet` – flat columns with the same names
pub fn load_file(path: &Path) -> Result<LaunchDataset, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(DataLoadError::UnsupportedExtension(other.to_string())),
    }?;

    if records.is_empty() {
        // An empty table would leave the payload bounds undefined.
        return Err(DataLoadError::Empty);
    }
    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row schema shared by the CSV and JSON loaders
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

fn validate(raw: RawRecord, row: usize) -> Result<LaunchRecord, DataLoadError> {
    let outcome = Outcome::from_class(raw.class)
        .ok_or_else(|| row_error(row, format!("class is {}, expected 0 or 1", raw.class)))?;

    if !raw.payload_mass_kg.is_finite() || raw.payload_mass_kg < 0.0 {
        return Err(row_error(
            row,
            format!("payload mass {} kg is not a non-negative number", raw.payload_mass_kg),
        ));
    }

    Ok(LaunchRecord {
        site: raw.launch_site,
        payload_mass_kg: raw.payload_mass_kg,
        outcome,
        booster_category: raw.booster_version_category,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for required in [SITE_COLUMN, PAYLOAD_COLUMN, CLASS_COLUMN, BOOSTER_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(DataLoadError::MissingColumn(required));
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.map_err(|e| row_error(row_no, e.to_string()))?;
        records.push(validate(raw, row_no)?);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')` shape:
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 2500.0,
///     "class": 1,
///     "Booster Version Category": "FT"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raws: Vec<RawRecord> = serde_json::from_str(&text)?;

    raws.into_iter()
        .enumerate()
        .map(|(row_no, raw)| validate(raw, row_no))
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Flat-column Parquet with the same schema as the CSV. Works with files
/// written by both Pandas (`df.to_parquet()`) and Polars
/// (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let mut records = Vec::new();
    let mut row_no = 0usize;

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();

        let col = |name: &'static str| {
            schema
                .index_of(name)
                .map(|i| batch.column(i).clone())
                .map_err(|_| DataLoadError::MissingColumn(name))
        };
        let site_col = col(SITE_COLUMN)?;
        let payload_col = col(PAYLOAD_COLUMN)?;
        let class_col = col(CLASS_COLUMN)?;
        let booster_col = col(BOOSTER_COLUMN)?;

        for row in 0..batch.num_rows() {
            let raw = RawRecord {
                launch_site: string_value(&site_col, row, row_no, SITE_COLUMN)?,
                payload_mass_kg: f64_value(&payload_col, row, row_no, PAYLOAD_COLUMN)?,
                class: i64_value(&class_col, row, row_no, CLASS_COLUMN)?,
                booster_version_category: string_value(&booster_col, row, row_no, BOOSTER_COLUMN)?,
            };
            records.push(validate(raw, row_no)?);
            row_no += 1;
        }
    }
    Ok(records)
}

// -- Arrow helpers --

fn string_value(
    col: &Arc<dyn Array>,
    row: usize,
    row_no: usize,
    name: &str,
) -> Result<String, DataLoadError> {
    if col.is_null(row) {
        return Err(row_error(row_no, format!("null value in '{name}'")));
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => Err(row_error(
            row_no,
            format!("'{name}' has type {other:?}, expected a string column"),
        )),
    }
}

fn f64_value(
    col: &Arc<dyn Array>,
    row: usize,
    row_no: usize,
    name: &str,
) -> Result<f64, DataLoadError> {
    if col.is_null(row) {
        return Err(row_error(row_no, format!("null value in '{name}'")));
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            Ok(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        other => Err(row_error(
            row_no,
            format!("'{name}' has type {other:?}, expected a numeric column"),
        )),
    }
}

fn i64_value(
    col: &Arc<dyn Array>,
    row: usize,
    row_no: usize,
    name: &str,
) -> Result<i64, DataLoadError> {
    if col.is_null(row) {
        return Err(row_error(row_no, format!("null value in '{name}'")));
    }
    match col.data_type() {
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            Ok(arr.value(row))
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            Ok(arr.value(row) as i64)
        }
        DataType::Boolean => {
            let arr = col.as_any().downcast_ref::<BooleanArray>().unwrap();
            Ok(arr.value(row) as i64)
        }
        other => Err(row_error(
            row_no,
            format!("'{name}' has type {other:?}, expected an integer column"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    const CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS LC-40,0,0,v1.0
2,CCAFS LC-40,1,525,v1.0
3,VAFB SLC-4E,1,500,v1.1
";

    #[test]
    fn loads_csv_and_ignores_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "launches.csv", CSV);

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(ds.booster_categories, vec!["v1.0", "v1.1"]);
        assert_eq!(ds.min_payload, 0.0);
        assert_eq!(ds.max_payload, 525.0);
        assert_eq!(ds.records[1].outcome, Outcome::Success);
    }

    #[test]
    fn loads_records_oriented_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "launches.json",
            r#"[
                {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 3000.0,
                 "class": 1, "Booster Version Category": "FT"}
            ]"#,
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].site, "KSC LC-39A");
        assert_eq!(ds.records[0].payload_mass_kg, 3000.0);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "launches.csv",
            "Launch Site,class,Booster Version Category\nCCAFS LC-40,1,FT\n",
        );

        match load_file(&path) {
            Err(DataLoadError::MissingColumn(col)) => assert_eq!(col, PAYLOAD_COLUMN),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn class_outside_binary_range_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "launches.csv",
            "Launch Site,class,Payload Mass (kg),Booster Version Category\nCCAFS LC-40,2,100,FT\n",
        );

        match load_file(&path) {
            Err(DataLoadError::Row { row, .. }) => assert_eq!(row, 0),
            other => panic!("expected Row error, got {other:?}"),
        }
    }

    #[test]
    fn negative_payload_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "launches.csv",
            "Launch Site,class,Payload Mass (kg),Booster Version Category\nCCAFS LC-40,1,-5,FT\n",
        );

        assert!(matches!(load_file(&path), Err(DataLoadError::Row { .. })));
    }

    #[test]
    fn empty_table_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "launches.csv",
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n",
        );

        assert!(matches!(load_file(&path), Err(DataLoadError::Empty)));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "launches.xlsx", "");

        match load_file(&path) {
            Err(DataLoadError::UnsupportedExtension(ext)) => assert_eq!(ext, "xlsx"),
            other => panic!("expected UnsupportedExtension, got {other:?}"),
        }
    }
}
