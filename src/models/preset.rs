// ABOUTME: Named measure/objective preset bundles a creator applies to exercises
// ABOUTME: A simple keyed store entity; application happens through the session repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use crate::models::session::{Measure, Objective};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reusable measures/objectives bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Measures the preset applies
    pub measures: Vec<Measure>,
    /// Objectives the preset applies
    pub objectives: Vec<Objective>,
    /// Labels for `Measure::Custom` entries
    #[serde(default)]
    pub custom_measure_labels: Vec<String>,
    /// Labels for `Objective::Custom` entries
    #[serde(default)]
    pub custom_objective_labels: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Preset {
    /// Create a new preset
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        measures: Vec<Measure>,
        objectives: Vec<Objective>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            measures,
            objectives,
            custom_measure_labels: Vec::new(),
            custom_objective_labels: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
