//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod clustering_panel;
pub mod loading;
pub mod nav;
pub mod result_display;
pub mod scraping_panel;
pub mod toast;

pub use clustering_panel::ClusteringPanel;
pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
pub use result_display::ResultDisplay;
pub use scraping_panel::ScrapingPanel;
pub use toast::Toast;
