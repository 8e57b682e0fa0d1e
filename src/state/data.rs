/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the bundled catalog, the classification workflow, and the UI layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Broad taxonomic grouping used by the directory filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Insect,
    Larvae,
    Mite,
    Beetle,
    Nematode,
    Disease,
}

impl Category {
    /// Every category, in the order the filter dropdown lists them
    pub const ALL: [Category; 6] = [
        Category::Insect,
        Category::Larvae,
        Category::Mite,
        Category::Beetle,
        Category::Nematode,
        Category::Disease,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Insect => "Insect",
            Category::Larvae => "Larvae",
            Category::Mite => "Mite",
            Category::Beetle => "Beetle",
            Category::Nematode => "Nematode",
            Category::Disease => "Disease",
        };
        write!(f, "{}", name)
    }
}

/// Coarse severity rating attached to each pest record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

impl ThreatLevel {
    /// Every threat level, lowest first
    pub const ALL: [ThreatLevel; 3] = [
        ThreatLevel::Low,
        ThreatLevel::Medium,
        ThreatLevel::High,
    ];
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThreatLevel::Low => "Low",
            ThreatLevel::Medium => "Medium",
            ThreatLevel::High => "High",
        };
        write!(f, "{}", name)
    }
}

/// A single entry in the pest directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestRecord {
    /// Unique catalog ID
    pub id: u32,
    /// Display name (e.g. "Spider Mite")
    pub name: String,
    /// Taxonomic grouping shown as a badge and used by the category filter
    pub category: Category,
    /// Severity rating shown as a badge and used by the threat filter
    pub threat: ThreatLevel,
    /// Opaque locator for the display photo; never dereferenced by the
    /// filter logic
    pub image_url: String,
}

/// An image the user picked or dropped, validated at the input boundary
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    /// Full path to the image file
    pub path: PathBuf,
    /// Filename only (e.g. "field-photo.jpg")
    pub file_name: String,
    /// Pixel dimensions probed from the file header
    pub dimensions: (u32, u32),
}

/// Outcome of one classification run
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Predicted pest name
    pub label: String,
    /// Model confidence, 0..=100
    pub confidence_pct: u8,
    /// Short descriptive traits shown as badges (e.g. "Sap-sucking")
    pub traits: Vec<String>,
    /// Severity rating of the identified pest
    pub threat: ThreatLevel,
    /// Treatment guidance for the grower
    pub recommendations: String,
}
