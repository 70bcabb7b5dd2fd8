//! Plan catalog configuration
//!
//! The catalog is loaded once per process and is read-only afterwards.
//! Lookup order: the file named by `MAAMUL_PLAN_CATALOG`, then
//! `<config dir>/maamul/plans.json`, then the built-in defaults.

use std::path::{Path, PathBuf};

use crate::catalog::PlanCatalog;
use crate::PlanError;

/// Environment variable naming a catalog JSON file
pub const CATALOG_ENV_VAR: &str = "MAAMUL_PLAN_CATALOG";

lazy_static::lazy_static! {
    static ref CATALOG: PlanCatalog = load_catalog();
}

/// The process-wide plan catalog
pub fn catalog() -> &'static PlanCatalog {
    &CATALOG
}

/// Default location of the catalog override file
pub fn default_catalog_path() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("maamul").join("plans.json")
}

/// Read and validate a catalog file
pub fn load_catalog_file(path: &Path) -> Result<PlanCatalog, PlanError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        PlanError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;

    PlanCatalog::from_json(&contents)
}

/// Resolve the catalog from the environment, falling back to defaults.
///
/// A broken override file is logged and ignored so recommendations keep working.
pub fn load_catalog() -> PlanCatalog {
    resolve_catalog(
        std::env::var_os(CATALOG_ENV_VAR).map(PathBuf::from),
        &default_catalog_path(),
    )
}

/// Pick the catalog source: an explicit override path, then `config_path`
/// if it exists, then the built-in defaults
pub fn resolve_catalog(override_path: Option<PathBuf>, config_path: &Path) -> PlanCatalog {
    let candidate = match override_path {
        Some(path) => Some(path),
        None => config_path.exists().then(|| config_path.to_path_buf()),
    };

    let Some(path) = candidate else {
        tracing::info!("Using built-in plan catalog");
        return PlanCatalog::default();
    };

    match load_catalog_file(&path) {
        Ok(catalog) => {
            tracing::info!("Loaded plan catalog from {:?}", path);
            catalog
        }
        Err(e) => {
            tracing::error!("Ignoring plan catalog {:?}: {}", path, e);
            PlanCatalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::catalog::get_default_plans;
    use crate::catalog::plans::DEFAULT_USD_TO_KES;
    use crate::models::Tier;

    #[test]
    fn test_load_catalog_file() {
        let path = std::env::temp_dir().join("maamul_test_catalog.json");
        let mut plans = get_default_plans();
        plans[0].monthly_price_usd = 60;
        let catalog = PlanCatalog::new(130.0, plans).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();

        let loaded = load_catalog_file(&path).unwrap();
        assert_eq!(loaded.plan(Tier::Tier1).monthly_price_usd, 60);
        assert_eq!(loaded.usd_to_kes(), 130.0);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_catalog_file_missing() {
        let path = std::env::temp_dir().join("maamul_missing_catalog.json");
        fs::remove_file(&path).ok();
        assert!(matches!(load_catalog_file(&path), Err(PlanError::Config(_))));
    }

    #[test]
    fn test_load_catalog_file_invalid() {
        let path = std::env::temp_dir().join("maamul_invalid_catalog.json");
        fs::write(&path, r#"{"plans": [{"tier": "tier1"}]}"#).unwrap();

        assert!(load_catalog_file(&path).is_err());

        fs::remove_file(&path).ok();
    }

    fn write_catalog(name: &str, tier1_price: u64) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut plans = get_default_plans();
        plans[0].monthly_price_usd = tier1_price;
        let catalog = PlanCatalog::new(DEFAULT_USD_TO_KES, plans).unwrap();
        fs::write(&path, serde_json::to_string(&catalog).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_resolve_catalog_falls_back_on_invalid_file() {
        let path = std::env::temp_dir().join("maamul_test_broken_catalog.json");
        fs::write(&path, "{ not json").unwrap();
        let missing = std::env::temp_dir().join("maamul_no_config").join("plans.json");

        assert_eq!(resolve_catalog(Some(path.clone()), &missing), PlanCatalog::default());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_resolve_catalog_uses_valid_override() {
        let path = write_catalog("maamul_test_override_catalog.json", 65);
        let missing = std::env::temp_dir().join("maamul_no_config").join("plans.json");

        let catalog = resolve_catalog(Some(path.clone()), &missing);
        assert_eq!(catalog.plan(Tier::Tier1).monthly_price_usd, 65);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_resolve_catalog_lookup_order() {
        let override_path = write_catalog("maamul_test_order_override.json", 61);
        let config_path = write_catalog("maamul_test_order_config.json", 62);

        // Override wins over the config file
        let catalog = resolve_catalog(Some(override_path.clone()), &config_path);
        assert_eq!(catalog.plan(Tier::Tier1).monthly_price_usd, 61);

        // Config file is used when there is no override
        let catalog = resolve_catalog(None, &config_path);
        assert_eq!(catalog.plan(Tier::Tier1).monthly_price_usd, 62);

        fs::remove_file(&override_path).ok();
        fs::remove_file(&config_path).ok();

        // Neither present
        assert_eq!(resolve_catalog(None, &config_path), PlanCatalog::default());
    }

    #[test]
    fn test_default_catalog_path() {
        let path = default_catalog_path();
        assert!(path.ends_with("maamul/plans.json"));
    }
}
