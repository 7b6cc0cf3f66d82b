//! Startup-time assembly of everything the dashboard serves.
//!
//! [`Dashboard::init`] does all file I/O up front and returns an immutable
//! value; a dashboard is never partially loaded.

use thiserror::Error;
use tracing::{info, warn};

use crate::chart::ChartData;
use crate::config::{Config, ConfigError};
use crate::hierarchy::{ClassHierarchy, HierarchyError};
use crate::selection::{
    ClassCatalog, ClassLabel, ClassSource, PlotResolver, PlotSelection, SelectionError,
};

/// Errors that prevent the dashboard from starting.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to load class hierarchy: {0}")]
    Hierarchy(#[from] HierarchyError),

    #[error("Invalid class selection setup: {0}")]
    Selection(#[from] SelectionError),
}

/// Chart data and selection state shared by every request.
#[derive(Debug, Clone)]
pub struct Dashboard {
    chart: ChartData,
    catalog: ClassCatalog,
    resolver: PlotResolver,
    default_class: String,
}

impl Dashboard {
    /// Load the hierarchy, assemble the chart and prepare the class list.
    pub fn init(config: &Config) -> Result<Self, DashboardError> {
        let hierarchy = ClassHierarchy::from_file(&config.data.hierarchy_file)?;
        let chart = ChartData::from_hierarchy(&hierarchy);

        let catalog = match config.selection.source {
            ClassSource::Fixed => ClassCatalog::fixed(),
            ClassSource::Assets => ClassCatalog::scan(
                config.assets.plots_path(),
                &config.assets.plot_suffix,
                &config.selection.namespace,
            )?,
        };

        Self::new(
            chart,
            catalog,
            PlotResolver::from_config(&config.assets),
            &config.selection.default_class,
        )
    }

    /// Build a dashboard from already-loaded parts.
    pub fn new(
        chart: ChartData,
        catalog: ClassCatalog,
        resolver: PlotResolver,
        default_class: &str,
    ) -> Result<Self, DashboardError> {
        ClassLabel::parse(default_class)?;
        if !catalog.contains(default_class) {
            warn!(class = default_class, "default class is not in the selectable list");
        }

        info!(
            rows = chart.len(),
            classes = catalog.len(),
            default = default_class,
            "dashboard ready"
        );

        Ok(Self {
            chart,
            catalog,
            resolver,
            default_class: default_class.to_string(),
        })
    }

    pub fn chart(&self) -> &ChartData {
        &self.chart
    }

    pub fn catalog(&self) -> &ClassCatalog {
        &self.catalog
    }

    pub fn default_class(&self) -> &str {
        &self.default_class
    }

    /// Handle a "selection changed" event.
    pub fn select(&self, label: &str) -> Result<PlotSelection, SelectionError> {
        self.resolver.resolve(label)
    }
}
