//! Message catalog: stable keys and their English and Danish renderings.
//!
//! The wire never carries a key, only rendered text; keys exist so the
//! channel can cache the last notice and re-render it when the hosting
//! document switches language.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

/// Display language selected by the hosting document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default).
    #[default]
    En,
    /// Danish.
    Dk,
}

/// Stable identifier for one catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    /// Greeting shown before the first exercise.
    Welcome,
    /// Prompt for the area-counting exercise.
    CountingIntro,
    /// Counting solved; announces the area-building exercise.
    CountingDone,
    /// Prompt for the area-building exercise.
    AreaBuildingIntro,
    /// Building solved; announces the perimeter-tracing exercise.
    AreaBuildingDone,
    /// Prompt for the perimeter-tracing exercise.
    TracingIntro,
    /// Tracing solved; announces the comparison exercise.
    TracingDone,
    /// Prompt for the comparison exercise.
    ComparisonIntro,
    /// Comparison solved; announces the perimeter-building exercise.
    ComparisonDone,
    /// Prompt for the perimeter-building exercise.
    PerimeterBuildingIntro,
    /// The whole flow is complete.
    Mastery,
}

impl MessageKey {
    /// Dotted catalog id, used for logging and host-side correlation.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Welcome => "shape_lab.welcome",
            Self::CountingIntro => "shape_lab.counting.intro",
            Self::CountingDone => "shape_lab.counting.done",
            Self::AreaBuildingIntro => "shape_lab.area_building.intro",
            Self::AreaBuildingDone => "shape_lab.area_building.done",
            Self::TracingIntro => "shape_lab.tracing.intro",
            Self::TracingDone => "shape_lab.tracing.done",
            Self::ComparisonIntro => "shape_lab.comparison.intro",
            Self::ComparisonDone => "shape_lab.comparison.done",
            Self::PerimeterBuildingIntro => "shape_lab.perimeter_building.intro",
            Self::Mastery => "shape_lab.mastery",
        }
    }

    /// Rendered text for the given language.
    #[must_use]
    pub fn render(self, language: Language) -> &'static str {
        match language {
            Language::En => self.english(),
            Language::Dk => self.danish(),
        }
    }

    fn english(self) -> &'static str {
        match self {
            Self::Welcome => {
                "Welcome to Shape Lab! Let's discover area and perimeter through hands-on building!"
            }
            Self::CountingIntro => {
                "How many squares fit inside this orange shape? Click each square to count!"
            }
            Self::CountingDone => "Great counting! Now let's build a shape with a specific area!",
            Self::AreaBuildingIntro => {
                "Click squares to place blocks. Build any shape with exactly 10 squares!"
            }
            Self::AreaBuildingDone => "Excellent building! Time to trace the perimeter!",
            Self::TracingIntro => "Click on the outer edge squares to trace the perimeter!",
            Self::TracingDone => "Perfect tracing! Can you compare two shapes?",
            Self::ComparisonIntro => "Do these shapes have the same area or the same perimeter?",
            Self::ComparisonDone => "Awesome comparison! Final challenge - build with perimeter!",
            Self::PerimeterBuildingIntro => {
                "Click squares to build any shape with a perimeter of exactly 14 units!"
            }
            Self::Mastery => {
                "Amazing! You've mastered area and perimeter! You're a Shape Lab expert!"
            }
        }
    }

    fn danish(self) -> &'static str {
        match self {
            Self::Welcome => {
                "Velkommen til Formlaboratoriet! Lad os udforske areal og omkreds ved at bygge selv!"
            }
            Self::CountingIntro => {
                "Hvor mange felter er der inde i den orange figur? Klik på hvert felt for at tælle!"
            }
            Self::CountingDone => "Flot talt! Nu skal vi bygge en figur med et bestemt areal!",
            Self::AreaBuildingIntro => {
                "Klik på felterne for at lægge klodser. Byg en figur med præcis 10 felter!"
            }
            Self::AreaBuildingDone => "Flot bygget! Nu skal vi tegne omkredsen!",
            Self::TracingIntro => "Klik på kantfelterne for at tegne figurens omkreds!",
            Self::TracingDone => "Perfekt tegnet! Kan du sammenligne to figurer?",
            Self::ComparisonIntro => "Har de to figurer samme areal eller samme omkreds?",
            Self::ComparisonDone => "Flot sammenlignet! Sidste udfordring - byg efter omkreds!",
            Self::PerimeterBuildingIntro => {
                "Klik på felterne og byg en figur med en omkreds på præcis 14 enheder!"
            }
            Self::Mastery => {
                "Fantastisk! Du mestrer areal og omkreds! Du er ekspert i Formlaboratoriet!"
            }
        }
    }
}
