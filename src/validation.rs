// ABOUTME: Exercise creation validity gate backing the disabled-save UI state
// ABOUTME: A draft persists only with a primary reference, configured data, and at least one set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use crate::models::{ExerciseRef, Measure, Objective};
use serde::{Deserialize, Serialize};

/// One not-yet-persisted set inside a draft exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SetDraft {
    /// Target repetitions in stored form
    #[serde(default)]
    pub reps: Option<String>,
    /// Target intensity in stored form
    #[serde(default)]
    pub intensity: Option<String>,
}

/// An in-progress new exercise as the creation modal accumulates it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExerciseDraft {
    /// The exercise this entry will represent; unset until the creator picks one
    #[serde(default)]
    pub primary: Option<ExerciseRef>,
    /// Alternative movement names grouped by library
    #[serde(default)]
    pub alternatives: std::collections::BTreeMap<uuid::Uuid, Vec<String>>,
    /// Measures configured manually or via preset
    #[serde(default)]
    pub measures: Vec<Measure>,
    /// Objectives configured manually or via preset
    #[serde(default)]
    pub objectives: Vec<Objective>,
    /// Labels for `Measure::Custom` entries
    #[serde(default)]
    pub custom_measure_labels: Vec<String>,
    /// Labels for `Objective::Custom` entries
    #[serde(default)]
    pub custom_objective_labels: Vec<String>,
    /// Explicitly added sets
    #[serde(default)]
    pub sets: Vec<SetDraft>,
    /// "Number of sets" field; implies that many default sets when no
    /// explicit sets were added
    #[serde(default)]
    pub planned_set_count: u32,
}

impl ExerciseDraft {
    /// Effective set count: explicit sets win over the planned count
    #[must_use]
    pub fn effective_set_count(&self) -> u32 {
        if self.sets.is_empty() {
            self.planned_set_count
        } else {
            self.sets.len() as u32
        }
    }
}

/// One unmet save requirement, enumerated for the creation UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRequirement {
    /// No primary exercise reference selected
    PrimaryExercise,
    /// Measures or objectives not configured (no preset applied, no manual data)
    MeasuresAndObjectives,
    /// No set added and no planned set count
    AtLeastOneSet,
}

impl MissingRequirement {
    /// Message shown next to the disabled save action
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::PrimaryExercise => "Select a primary exercise",
            Self::MeasuresAndObjectives => "Configure measures and objectives or apply a preset",
            Self::AtLeastOneSet => "Add at least one set",
        }
    }
}

/// Enumerate every unmet requirement for the draft, in display order
#[must_use]
pub fn missing_requirements(draft: &ExerciseDraft) -> Vec<MissingRequirement> {
    let mut missing = Vec::new();

    let primary_set = draft
        .primary
        .as_ref()
        .is_some_and(|p| !p.exercise_name.is_empty());
    if !primary_set {
        missing.push(MissingRequirement::PrimaryExercise);
    }

    if draft.measures.is_empty() || draft.objectives.is_empty() {
        missing.push(MissingRequirement::MeasuresAndObjectives);
    }

    if draft.effective_set_count() == 0 {
        missing.push(MissingRequirement::AtLeastOneSet);
    }

    missing
}

/// Whether the draft may be persisted. All three requirements must hold
/// simultaneously; a failing gate disables the create action entirely.
#[must_use]
pub fn can_save(draft: &ExerciseDraft) -> bool {
    missing_requirements(draft).is_empty()
}
