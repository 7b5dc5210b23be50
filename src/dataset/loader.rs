//! CSV Loader
//!
//! Reads the launch records CSV into a [`LaunchTable`].
//! Column lookup is by header name, so column order does not matter and
//! extra columns (such as an unnamed index column) are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::error::{LoadError, LoadResult};
use super::types::{LaunchRecord, LaunchTable, Outcome};

/// Header names the loader looks for
///
/// Deserializes from the `[dataset.columns]` config section; absent keys keep
/// the standard names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub launch_site: String,
    pub payload_mass: String,
    pub booster_version_category: String,
    pub outcome: String,
    pub flight_number: String,
    pub booster_version: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            launch_site: "Launch Site".to_string(),
            payload_mass: "Payload Mass (kg)".to_string(),
            booster_version_category: "Booster Version Category".to_string(),
            outcome: "class".to_string(),
            flight_number: "Flight Number".to_string(),
            booster_version: "Booster Version".to_string(),
        }
    }
}

/// Resolved column positions for one file
struct ColumnIndex {
    launch_site: usize,
    payload_mass: usize,
    booster_version_category: usize,
    outcome: usize,
    flight_number: Option<usize>,
    booster_version: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord, names: &ColumnNames) -> LoadResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| find(name).ok_or_else(|| LoadError::MissingColumn(name.to_string()));

        Ok(Self {
            launch_site: require(&names.launch_site)?,
            payload_mass: require(&names.payload_mass)?,
            booster_version_category: require(&names.booster_version_category)?,
            outcome: require(&names.outcome)?,
            flight_number: find(&names.flight_number),
            booster_version: find(&names.booster_version),
        })
    }
}

/// Launch CSV loader with configurable header names
#[derive(Debug, Clone, Default)]
pub struct LaunchLoader {
    columns: ColumnNames,
}

impl LaunchLoader {
    /// Create a loader expecting the standard header names
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the expected header names
    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    /// Load a table from a CSV file on disk
    pub fn load(&self, path: &Path) -> LoadResult<LaunchTable> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = self.load_reader(file)?;

        let bounds = table.payload_bounds();
        tracing::info!(
            path = %path.display(),
            records = table.len(),
            sites = table.sites().len(),
            payload_min = bounds.min,
            payload_max = bounds.max,
            "Loaded launch dataset"
        );

        Ok(table)
    }

    /// Load a table from any CSV byte source
    pub fn load_reader<R: Read>(&self, reader: R) -> LoadResult<LaunchTable> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let index = ColumnIndex::resolve(&headers, &self.columns)?;

        let mut records = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record = result?;
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(row as u64 + 2);
            records.push(self.parse_record(&record, &index, line)?);
        }

        LaunchTable::from_records(records)
    }

    fn parse_record(
        &self,
        record: &csv::StringRecord,
        index: &ColumnIndex,
        line: u64,
    ) -> LoadResult<LaunchRecord> {
        let cell = |idx: usize, name: &str| {
            record
                .get(idx)
                .map(str::trim)
                .ok_or_else(|| malformed(line, format!("missing value for {name:?}")))
        };

        let launch_site = cell(index.launch_site, &self.columns.launch_site)?;
        if launch_site.is_empty() {
            return Err(malformed(line, "empty launch site".to_string()));
        }

        let payload_raw = cell(index.payload_mass, &self.columns.payload_mass)?;
        let payload_mass_kg = payload_raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| malformed(line, format!("invalid payload mass {payload_raw:?}")))?;

        let booster_version_category =
            cell(index.booster_version_category, &self.columns.booster_version_category)?;

        let class_raw = cell(index.outcome, &self.columns.outcome)?;
        let outcome = parse_outcome(class_raw)
            .ok_or_else(|| malformed(line, format!("class must be 0 or 1, got {class_raw:?}")))?;

        let flight_number = match index.flight_number.and_then(|idx| record.get(idx)) {
            Some(raw) if !raw.trim().is_empty() => Some(raw.trim().parse::<u32>().map_err(|_| {
                malformed(line, format!("invalid flight number {raw:?}"))
            })?),
            _ => None,
        };

        let booster_version = index
            .booster_version
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(LaunchRecord {
            flight_number,
            launch_site: launch_site.to_string(),
            payload_mass_kg,
            booster_version,
            booster_version_category: booster_version_category.to_string(),
            outcome,
        })
    }
}

/// Accepts `0`/`1` and their float spellings (`0.0`/`1.0`)
fn parse_outcome(raw: &str) -> Option<Outcome> {
    if let Ok(class) = raw.parse::<u8>() {
        return Outcome::from_class(class);
    }
    match raw.parse::<f64>() {
        Ok(v) if v == 0.0 => Some(Outcome::Failure),
        Ok(v) if v == 1.0 => Some(Outcome::Success),
        _ => None,
    }
}

fn malformed(line: u64, message: String) -> LoadError {
    LoadError::Malformed { line, message }
}

/// Load the launch table from `path` using the standard header names
pub fn load_table(path: &Path) -> LoadResult<LaunchTable> {
    LaunchLoader::new().load(path)
}

/// Load the launch table from an in-memory CSV source
pub fn load_table_from_reader<R: Read>(reader: R) -> LoadResult<LaunchTable> {
    LaunchLoader::new().load_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1
3,4,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
";

    #[test]
    fn test_load_sample() {
        let table = load_table_from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(
            table.sites(),
            &[
                "CCAFS LC-40".to_string(),
                "VAFB SLC-4E".to_string(),
                "KSC LC-39A".to_string()
            ]
        );

        let bounds = table.payload_bounds();
        assert_eq!(bounds.min, 0.0);
        assert_eq!(bounds.max, 2490.0);

        let last = &table.records()[3];
        assert_eq!(last.flight_number, Some(4));
        assert_eq!(last.booster_version.as_deref(), Some("F9 FT B1031.1"));
        assert_eq!(last.booster_version_category, "FT");
        assert_eq!(last.outcome, Outcome::Success);
    }

    #[test]
    fn test_optional_columns_absent() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version Category,class
A,100,FT,1
";
        let table = load_table_from_reader(csv_data.as_bytes()).unwrap();
        let record = &table.records()[0];
        assert_eq!(record.flight_number, None);
        assert_eq!(record.booster_version, None);
    }

    #[test]
    fn test_missing_required_column() {
        let csv_data = "Launch Site,Payload Mass (kg),class
A,100,1
";
        let err = load_table_from_reader(csv_data.as_bytes()).unwrap_err();
        match err {
            LoadError::MissingColumn(name) => assert_eq!(name, "Booster Version Category"),
            other => panic!("Expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_class_reports_line() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version Category,class
A,100,FT,1
A,200,FT,3
";
        let err = load_table_from_reader(csv_data.as_bytes()).unwrap_err();
        match err {
            LoadError::Malformed { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("class"));
            }
            other => panic!("Expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_float_class_accepted() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version Category,class
A,100,FT,1.0
A,200,FT,0.0
";
        let table = load_table_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(table.records()[0].outcome, Outcome::Success);
        assert_eq!(table.records()[1].outcome, Outcome::Failure);
    }

    #[test]
    fn test_invalid_payload() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version Category,class
A,heavy,FT,1
";
        let err = load_table_from_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_header_only_is_empty() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version Category,class\n";
        let err = load_table_from_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn test_custom_column_names() {
        let csv_data = "site,mass,category,success
A,100,FT,1
";
        let loader = LaunchLoader::new().with_columns(ColumnNames {
            launch_site: "site".to_string(),
            payload_mass: "mass".to_string(),
            booster_version_category: "category".to_string(),
            outcome: "success".to_string(),
            ..ColumnNames::default()
        });
        let table = loader.load_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(table.sites(), &["A".to_string()]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        file.flush().unwrap();

        let table = load_table(file.path()).unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_bundled_dataset() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/spacex_launch_dash.csv");
        let table = load_table(&path).unwrap();

        assert_eq!(table.len(), 56);
        assert_eq!(table.sites().len(), 4);
        assert_eq!(table.payload_bounds().min, 0.0);
        assert_eq!(table.payload_bounds().max, 9600.0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
