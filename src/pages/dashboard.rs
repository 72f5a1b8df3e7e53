//! Dashboard Page
//!
//! Main view: scraping tools on the left, clustering on the right. Each
//! panel manages its own action slots; nothing here is shared between them.

use leptos::*;

use crate::components::{ClusteringPanel, ScrapingPanel};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"SNUC Club Analysis Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Trigger scraping jobs and cluster club data"</p>
            </div>

            // Two column layout for scraping and clustering
            <div class="grid lg:grid-cols-2 gap-8 items-start">
                <ScrapingPanel />
                <ClusteringPanel />
            </div>
        </div>
    }
}
