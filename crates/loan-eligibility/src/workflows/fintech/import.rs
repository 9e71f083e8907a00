use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::domain::ApplicantProfile;

/// Errors raised while loading applicant profiles from CSV.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

/// Read one profile per CSV row. Headers must match the profile's field names.
pub fn profiles_from_reader<R: Read>(reader: R) -> Result<Vec<ApplicantProfile>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<ApplicantProfile>()
        .enumerate()
        .map(|(idx, row)| row.map_err(|source| ImportError::Row { row: idx + 1, source }))
        .collect()
}

pub fn profiles_from_path(path: impl AsRef<Path>) -> Result<Vec<ApplicantProfile>, ImportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.display().to_string(),
        source,
    })?;
    profiles_from_reader(file)
}
