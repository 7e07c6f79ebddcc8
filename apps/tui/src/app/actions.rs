use crate::config::FleetConfig;
use crate::fleet::{FleetSnapshot, SyntheticFleet};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::path::Path;

/// Where snapshots come from: a JSON file when one is configured, otherwise
/// the synthetic generator.
#[derive(Debug, Clone)]
pub struct AppActions {
    pub config: FleetConfig,
}

impl AppActions {
    pub const fn new(config: FleetConfig) -> Self {
        Self { config }
    }

    pub async fn load_snapshot(&self) -> Result<FleetSnapshot> {
        if let Some(path) = self.config.resolved_data_path()? {
            let snapshot = FleetSnapshot::load_json(&path)
                .await
                .wrap_err_with(|| format!("Failed to load fleet snapshot from {}", path.display()))?;
            tracing::info!(path = %path.display(), vehicles = snapshot.len(), "snapshot loaded");
            return Ok(snapshot);
        }

        let snapshot = SyntheticFleet::new(self.config.fleet_size)
            .with_optional_seed(self.config.seed)
            .generate()
            .wrap_err("Failed to generate synthetic fleet")?;
        tracing::info!(vehicles = snapshot.len(), seed = ?self.config.seed, "snapshot generated");
        Ok(snapshot)
    }

    pub async fn export_snapshot(&self, snapshot: &FleetSnapshot, path: &Path) -> Result<()> {
        snapshot
            .write_json(path)
            .await
            .wrap_err_with(|| format!("Failed to export fleet snapshot to {}", path.display()))
    }

    pub fn source_label(&self) -> String {
        self.config.data_path.as_ref().map_or_else(
            || format!("synthetic ({} vehicles)", self.config.fleet_size),
            |path| path.display().to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generates_when_no_path_is_configured() -> Result<()> {
        let actions = AppActions::new(FleetConfig {
            fleet_size: 12,
            seed: Some(5),
            ..FleetConfig::default()
        });

        let snapshot = actions.load_snapshot().await?;
        assert_eq!(snapshot.len(), 12);
        assert_eq!(actions.source_label(), "synthetic (12 vehicles)");
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let actions = AppActions::new(FleetConfig {
            data_path: Some(std::env::temp_dir().join("fleet-dashboard-missing.json")),
            ..FleetConfig::default()
        });

        let err = actions.load_snapshot().await.unwrap_err();
        assert!(err.to_string().contains("Failed to load fleet snapshot"));
    }

    #[tokio::test]
    async fn exported_snapshot_loads_back() -> Result<()> {
        let path = std::env::temp_dir().join(format!(
            "fleet-actions-export-{}.json",
            std::process::id()
        ));
        let generator = AppActions::new(FleetConfig {
            fleet_size: 7,
            seed: Some(2),
            ..FleetConfig::default()
        });
        let snapshot = generator.load_snapshot().await?;
        generator.export_snapshot(&snapshot, &path).await?;

        let loader = AppActions::new(FleetConfig {
            data_path: Some(path.clone()),
            ..FleetConfig::default()
        });
        let loaded = loader.load_snapshot().await?;
        tokio::fs::remove_file(&path).await?;

        assert_eq!(loaded.records(), snapshot.records());
        Ok(())
    }
}
