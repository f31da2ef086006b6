//! Navigation state shared with the presentation layer

use serde::{Deserialize, Serialize};

/// Top-level views
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ViewState {
    #[default]
    Dashboard,
    Brands,
    Resources,
    Settings,
    BrandDetail,
    Reports,
}

/// Current view plus the brand selected for `brand-detail`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub view: ViewState,
    pub selected_brand_id: Option<String>,
}

impl Selection {
    /// Switches view; leaving `brand-detail` clears the selected brand.
    pub fn navigate(&mut self, view: ViewState) {
        self.view = view;
        if view != ViewState::BrandDetail {
            self.selected_brand_id = None;
        }
    }

    /// Opens the detail view for a brand.
    pub fn select_brand(&mut self, brand_id: impl Into<String>) {
        self.selected_brand_id = Some(brand_id.into());
        self.view = ViewState::BrandDetail;
    }
}
