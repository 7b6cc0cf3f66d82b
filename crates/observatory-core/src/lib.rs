pub mod chart;
pub mod config;
pub mod dashboard;
pub mod hierarchy;
pub mod selection;

pub use chart::{ChartAssembler, ChartData, ChartRecord, RecordKind};
pub use config::{AssetsConfig, Config, ConfigError, DataConfig, SelectionConfig, ServerConfig};
pub use dashboard::{Dashboard, DashboardError};
pub use hierarchy::{ClassHierarchy, ClassNode, HierarchyError};
pub use selection::{
    resolve_plot_path, ClassCatalog, ClassLabel, ClassSource, PlotResolver, PlotSelection,
    SelectionError,
};
