// ABOUTME: Session, exercise, and set models shared by library and override scopes
// ABOUTME: Includes the persisted-objective sentinel merge used by every write path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// What the trainee logs for an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    /// Repetitions performed
    Reps,
    /// Weight moved
    Weight,
    /// Creator-defined measure; labels live in `custom_measure_labels`
    Custom,
}

impl Measure {
    /// Convert to store string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reps => "reps",
            Self::Weight => "weight",
            Self::Custom => "custom",
        }
    }

    /// Parse from store string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "reps" => Self::Reps,
            "weight" => Self::Weight,
            _ => Self::Custom,
        }
    }
}

/// Per-set target the creator prescribes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Target repetitions
    Reps,
    /// Target intensity on the 1-10 scale
    Intensity,
    /// "Match what you did last time" - always persisted, hidden from editing
    Previous,
    /// Creator-defined objective; labels live in `custom_objective_labels`
    Custom,
}

impl Objective {
    /// The objective implicitly carried by every persisted exercise
    pub const SENTINEL: Self = Self::Previous;

    /// Convert to store string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reps => "reps",
            Self::Intensity => "intensity",
            Self::Previous => "previous",
            Self::Custom => "custom",
        }
    }

    /// Parse from store string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "reps" => Self::Reps,
            "intensity" => Self::Intensity,
            "previous" => Self::Previous,
            _ => Self::Custom,
        }
    }

    /// Append the hidden `previous` sentinel if the list does not carry it yet.
    ///
    /// Every write path funnels objectives through here so the sentinel is
    /// merged in exactly one place.
    #[must_use]
    pub fn merge_sentinel(mut objectives: Vec<Self>) -> Vec<Self> {
        if !objectives.contains(&Self::SENTINEL) {
            objectives.push(Self::SENTINEL);
        }
        objectives
    }
}

/// Reference to one exercise definition in one library
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExerciseRef {
    /// Library (creator) owning the definition
    pub library_id: Uuid,
    /// Exercise name, unique within that library
    pub exercise_name: String,
}

/// An exercise within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: Uuid,
    /// Dense zero-based position within the session
    pub order: u32,
    /// The exercise this entry visually represents
    pub primary: ExerciseRef,
    /// Alternative movements, grouped by library
    #[serde(default)]
    pub alternatives: BTreeMap<Uuid, Vec<String>>,
    /// What the trainee logs
    pub measures: Vec<Measure>,
    /// Per-set targets; always includes [`Objective::SENTINEL`] when persisted
    pub objectives: Vec<Objective>,
    /// Labels for `Measure::Custom` entries
    #[serde(default)]
    pub custom_measure_labels: Vec<String>,
    /// Labels for `Objective::Custom` entries
    #[serde(default)]
    pub custom_objective_labels: Vec<String>,
}

/// One prescribed unit of work within an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Unique identifier
    pub id: Uuid,
    /// Dense zero-based position within the exercise
    pub order: u32,
    /// Target repetitions, stored as `"10"` or `"8-12"`
    #[serde(default)]
    pub reps: Option<String>,
    /// Target intensity, stored as `"<1-10>/10"`
    #[serde(default)]
    pub intensity: Option<String>,
}

impl ExerciseSet {
    /// Create an empty set at the given position
    #[must_use]
    pub fn empty(order: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            order,
            reps: None,
            intensity: None,
        }
    }
}

/// The session document itself, without its exercise sub-collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDocument {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Optional cover image
    #[serde(default)]
    pub image_url: Option<String>,
    /// Day placement within a plan week (0-6); present only on plan-scoped copies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_index: Option<u8>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl SessionDocument {
    /// Create a new library session document
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            image_url: None,
            day_index: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// An exercise together with its ordered sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseWithSets {
    /// The exercise data
    #[serde(flatten)]
    pub exercise: Exercise,
    /// Sets ordered by their dense `order` values
    pub sets: Vec<ExerciseSet>,
}

/// A full session tree as the screens consume it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionWithExercises {
    /// The session document
    pub session: SessionDocument,
    /// Exercises ordered by their dense `order` values
    pub exercises: Vec<ExerciseWithSets>,
}
