//! The three mutually exclusive dashboard views.

use std::fmt;

/// Selects which section of the dashboard is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Side-by-side taxonomy and occurrence records for two species.
    #[default]
    Occurrence,
    /// Current temperature at the first recorded location of each species.
    Climate,
    /// Yearly average temperatures from the local CSV.
    Historical,
}

impl View {
    pub const ALL: [View; 3] = [View::Occurrence, View::Climate, View::Historical];

    /// The label shown in the view selector.
    pub fn label(&self) -> &'static str {
        match self {
            View::Occurrence => "Occurrence Data",
            View::Climate => "Climate Data",
            View::Historical => "Global Average Temperature for the Past 40 Years",
        }
    }

    /// The page title displayed above the view.
    pub fn title(&self) -> &'static str {
        match self {
            View::Occurrence => "🌿 Biodiversity Data Explorer - Species Comparison",
            View::Climate => {
                "🌿 Biodiversity Data Explorer - Species Preferred Temperature for Survival"
            }
            View::Historical => "🌍 Global Average Temperature for the Past 40 Years",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
