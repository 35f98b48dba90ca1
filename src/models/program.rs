// ABOUTME: Program documents - named weeks assigning library sessions to days
// ABOUTME: Programs give plan-week scopes their coordinates and power usage-conflict checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One session placed on one day of a program week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAssignment {
    /// Referenced library session
    pub session_id: Uuid,
    /// Library owning the session
    pub library_id: Uuid,
    /// Day within the week (0-6)
    pub day_index: u8,
}

/// One week of a program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProgramWeek {
    /// Module this week was built from, when assembled from a library module
    #[serde(default)]
    pub source_module_id: Option<Uuid>,
    /// Sessions assigned to this week
    #[serde(default)]
    pub assignments: Vec<SessionAssignment>,
}

/// A creator program: a grid of weeks referencing library sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Weeks keyed by week key (e.g. `"week_1"`), each holding session assignments
    #[serde(default)]
    pub weeks: BTreeMap<String, ProgramWeek>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Program {
    /// Create an empty program
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            weeks: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether any week of this program assigns the given session
    #[must_use]
    pub fn references_session(&self, session_id: Uuid) -> bool {
        self.weeks
            .values()
            .flat_map(|week| &week.assignments)
            .any(|assignment| assignment.session_id == session_id)
    }

    /// Whether any week of this program was built from the given module
    #[must_use]
    pub fn references_module(&self, module_id: Uuid) -> bool {
        self.weeks
            .values()
            .any(|week| week.source_module_id == Some(module_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_session() {
        let mut program = Program::new("Strength Block");
        let session_id = Uuid::new_v4();
        program.weeks.insert(
            "week_1".into(),
            ProgramWeek {
                source_module_id: None,
                assignments: vec![SessionAssignment {
                    session_id,
                    library_id: Uuid::new_v4(),
                    day_index: 0,
                }],
            },
        );

        assert!(program.references_session(session_id));
        assert!(!program.references_session(Uuid::new_v4()));
    }

    #[test]
    fn test_references_module() {
        let mut program = Program::new("Hypertrophy Block");
        let module_id = Uuid::new_v4();
        program.weeks.insert(
            "week_2".into(),
            ProgramWeek {
                source_module_id: Some(module_id),
                assignments: vec![],
            },
        );

        assert!(program.references_module(module_id));
        assert!(!program.references_module(Uuid::new_v4()));
    }
}
