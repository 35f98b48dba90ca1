// ABOUTME: Creator library catalog - exercise definitions keyed by unique name
// ABOUTME: Completeness of a definition drives the reference resolver flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use crate::models::session::{Measure, Objective};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Definition of a single exercise in a creator's library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExerciseDefinition {
    /// Demonstration video
    #[serde(default)]
    pub video_url: Option<String>,
    /// Muscle name to activation share (0.0-1.0)
    #[serde(default)]
    pub muscle_map: BTreeMap<String, f64>,
    /// Equipment needed to perform the exercise
    #[serde(default)]
    pub implements: Vec<String>,
    /// Measures suggested when the exercise is added to a session
    #[serde(default)]
    pub default_measures: Vec<Measure>,
    /// Objectives suggested when the exercise is added to a session
    #[serde(default)]
    pub default_objectives: Vec<Objective>,
}

impl ExerciseDefinition {
    /// A definition is complete when it has a video, a muscle map, and implements.
    /// All three are required; missing or empty any one makes it incomplete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.video_url.as_deref().is_some_and(|v| !v.is_empty())
            && !self.muscle_map.is_empty()
            && !self.implements.is_empty()
    }
}

/// A creator's exercise catalog. The map key enforces name uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    /// Creator owning the library; doubles as the library ID in references
    pub creator_id: Uuid,
    /// Exercise definitions keyed by exercise name
    #[serde(default)]
    pub exercises: BTreeMap<String, ExerciseDefinition>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Library {
    /// Create an empty library for a creator
    #[must_use]
    pub fn new(creator_id: Uuid) -> Self {
        Self {
            creator_id,
            exercises: BTreeMap::new(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_definition() -> ExerciseDefinition {
        ExerciseDefinition {
            video_url: Some("https://cdn.example.com/squat.mp4".into()),
            muscle_map: BTreeMap::from([("quadriceps".into(), 0.7), ("glutes".into(), 0.3)]),
            implements: vec!["barbell".into()],
            default_measures: vec![],
            default_objectives: vec![],
        }
    }

    #[test]
    fn test_complete_definition() {
        assert!(complete_definition().is_complete());
    }

    #[test]
    fn test_missing_any_field_is_incomplete() {
        let mut no_video = complete_definition();
        no_video.video_url = None;
        assert!(!no_video.is_complete());

        let mut empty_video = complete_definition();
        empty_video.video_url = Some(String::new());
        assert!(!empty_video.is_complete());

        let mut no_muscles = complete_definition();
        no_muscles.muscle_map.clear();
        assert!(!no_muscles.is_complete());

        let mut no_implements = complete_definition();
        no_implements.implements.clear();
        assert!(!no_implements.is_complete());
    }
}
