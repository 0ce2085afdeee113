use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which board column a task lives in. Column membership is determined
/// solely by this field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }

    /// Form/wire value, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "☀",
            TimeOfDay::Afternoon => "🌇",
            TimeOfDay::Evening => "☾",
        }
    }

    pub fn parse(value: &str) -> Option<TimeOfDay> {
        match value {
            "morning" => Some(TimeOfDay::Morning),
            "afternoon" => Some(TimeOfDay::Afternoon),
            "evening" => Some(TimeOfDay::Evening),
            _ => None,
        }
    }

    /// Columns in display order.
    pub fn all() -> [TimeOfDay; 3] {
        [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// CSS class for the priority badge color.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Priority::Low => "priority-badge priority-low",
            Priority::Medium => "priority-badge priority-medium",
            Priority::High => "priority-badge priority-high",
        }
    }

    pub fn parse(value: &str) -> Option<Priority> {
        match value {
            "Low" => Some(Priority::Low),
            "Medium" => Some(Priority::Medium),
            "High" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn all() -> [Priority; 3] {
        [Priority::Low, Priority::Medium, Priority::High]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub time_of_day: TimeOfDay,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            time_of_day: draft.time_of_day,
            priority: draft.priority,
            notes: draft.notes,
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Replaces every field the edit form can change. `id`, `completed` and
    /// `created_at` are preserved.
    pub fn apply(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.time_of_day = draft.time_of_day;
        self.priority = draft.priority;
        self.notes = draft.notes;
    }
}

/// Validated form payload for creating or editing a task. The form layer is
/// responsible for a non-empty title; the enums take care of the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub time_of_day: TimeOfDay,
    pub priority: Priority,
    pub notes: Option<String>,
}

impl TaskDraft {
    /// Builds a draft from raw form field values. A blank notes field maps
    /// to `None` rather than an empty string.
    pub fn from_form(
        title: String,
        time_of_day: TimeOfDay,
        priority: Priority,
        notes: String,
    ) -> Self {
        let notes = notes.trim();
        Self {
            title,
            time_of_day,
            priority,
            notes: if notes.is_empty() {
                None
            } else {
                Some(notes.to_string())
            },
        }
    }
}
