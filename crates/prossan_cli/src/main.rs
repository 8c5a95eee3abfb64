//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `prossan_core` linkage without the desktop UI.
//! - With a store path argument, report how many records each table holds.
//!   The store file must already exist; this binary never creates one.

use prossan_core::{RegistryService, StoreConfig};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("prossan_core ping={}", prossan_core::ping());
    println!("prossan_core version={}", prossan_core::core_version());

    let Some(path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    match report_counts(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("prossan_core error={err}");
            ExitCode::FAILURE
        }
    }
}

fn report_counts(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !Path::new(path).is_file() {
        return Err(format!("store file `{path}` does not exist").into());
    }
    let config = StoreConfig::new(path)?;
    let service = RegistryService::new(&config);
    println!("store={}", service.store().path().display());
    println!("children={}", service.children().count()?);
    println!("adults={}", service.adults().count()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::report_counts;

    #[test]
    fn missing_store_is_reported_and_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typo").join("database.db");
        let path_str = path.to_str().unwrap();

        let err = report_counts(path_str).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        assert!(!path.exists());
        assert!(!dir.path().join("typo").exists());
    }

    #[test]
    fn existing_store_reports_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.db");
        let config = prossan_core::StoreConfig::new(&path).unwrap();
        prossan_core::RegistryService::new(&config)
            .children()
            .count()
            .unwrap();

        report_counts(path.to_str().unwrap()).unwrap();
    }
}
