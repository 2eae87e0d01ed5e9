//! # Project Data Structures
//!
//! The `Project` struct is the root container for a client job's quotes.
//! Projects serialize to `.pjq` (paint job quote) files as human-readable
//! JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, estimator, job info, timestamps)
//! ├── settings: CompanySettings (rate book, default business settings)
//! └── items: HashMap<Uuid, PricingStrategy> (all quote entries)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use quote_core::project::Project;
//!
//! let project = Project::new("Sam Ruiz", "25-117", "Whitfield Residence");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&project).unwrap();
//!
//! // Save to file (see file_io module for atomic saves)
//! std::fs::write("whitfield.pjq", &json).unwrap();
//! # std::fs::remove_file("whitfield.pjq").unwrap();
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::charge_rate::BusinessSettings;
use crate::calculations::PricingStrategy;
use crate::rates::RateBook;

/// Current schema version for .pjq files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the top-level struct that gets serialized to `.pjq` files.
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, estimator, job info)
    pub meta: ProjectMetadata,

    /// Company settings (rate book, default business settings)
    pub settings: CompanySettings,

    /// All quote entries, keyed by UUID
    ///
    /// A job often carries several entries at once: an area-model quote for
    /// the main floor, a charge-rate quote for the exterior, a simplified
    /// quick estimate from the first phone call.
    pub items: HashMap<Uuid, PricingStrategy>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `estimator` - Name of the estimator who owns the job
    /// * `job_id` - Job number (e.g., "25-117")
    /// * `client` - Client or property name
    ///
    /// # Example
    ///
    /// ```rust
    /// use quote_core::project::Project;
    ///
    /// let project = Project::new("Sam Ruiz", "25-117", "Whitfield Residence");
    /// assert_eq!(project.meta.estimator, "Sam Ruiz");
    /// ```
    pub fn new(
        estimator: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                estimator: estimator.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: CompanySettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a quote entry to the project.
    ///
    /// Returns the UUID assigned to the entry.
    pub fn add_item(&mut self, item: PricingStrategy) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a quote entry by UUID.
    ///
    /// Returns the removed entry if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<PricingStrategy> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a quote entry by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&PricingStrategy> {
        self.items.get(id)
    }

    /// Get a mutable reference to a quote entry by UUID.
    ///
    /// Note: This method updates the modified timestamp when an entry is
    /// found. The caller should be aware that getting a mutable reference
    /// marks the project as modified.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut PricingStrategy> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of quote entries in the project.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the estimator who owns the job
    pub estimator: String,

    /// Job number
    pub job_id: String,

    /// Client or property name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Company-level settings a project carries with it.
///
/// Saving the active rate book inside the file means a quote re-opened next
/// season still prices against the numbers it was sold with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySettings {
    /// The rate book all entries in this project price against
    pub rate_book: RateBook,

    /// Default overhead/markup/tax settings for new charge-rate entries
    pub default_business: BusinessSettings,
}

impl Default for CompanySettings {
    fn default() -> Self {
        CompanySettings {
            rate_book: RateBook::default(),
            default_business: BusinessSettings::default(),
        }
    }
}
