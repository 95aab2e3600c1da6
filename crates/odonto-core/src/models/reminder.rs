use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReminderKind {
    Appointment,
    FollowUp,
    Medication,
    Treatment,
    Custom,
}

impl ReminderKind {
    pub const ALL: [ReminderKind; 5] = [
        ReminderKind::Appointment,
        ReminderKind::FollowUp,
        ReminderKind::Medication,
        ReminderKind::Treatment,
        ReminderKind::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReminderKind::Appointment => "appointment",
            ReminderKind::FollowUp => "follow_up",
            ReminderKind::Medication => "medication",
            ReminderKind::Treatment => "treatment",
            ReminderKind::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReminderKind::Appointment => "Appointment",
            ReminderKind::FollowUp => "Follow-up",
            ReminderKind::Medication => "Medication",
            ReminderKind::Treatment => "Treatment",
            ReminderKind::Custom => "Custom",
        }
    }
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReminderKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        ReminderKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownReminderKind(s.to_string()))
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(CoreError::UnknownPriority(s.to_string())),
        }
    }
}

/// Pending reminders move to exactly one of the other two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReminderStatus {
    Pending,
    Completed,
    Dismissed,
}

impl ReminderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReminderStatus::Pending => "pending",
            ReminderStatus::Completed => "completed",
            ReminderStatus::Dismissed => "dismissed",
        }
    }
}

impl fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reminder {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub reminder_date: Date,
    pub reminder_time: Option<Time>,
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    #[serde(default)]
    pub priority: Priority,
    pub status: ReminderStatus,
    pub created_by: String,
    pub created_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// Fields supplied when scheduling a reminder.
#[derive(Debug, Clone)]
pub struct NewReminder {
    pub title: String,
    pub description: Option<String>,
    pub reminder_date: Date,
    pub reminder_time: Option<Time>,
    pub kind: ReminderKind,
    pub priority: Priority,
}

impl Reminder {
    /// A new pending reminder. The title is trimmed and must not be empty;
    /// a blank description is dropped.
    pub fn new(
        patient_id: Uuid,
        input: NewReminder,
        created_by: impl Into<String>,
        now: Timestamp,
    ) -> Result<Self, CoreError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(CoreError::EmptyField { field: "title" });
        }
        let description = input
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            id: Uuid::new_v4(),
            patient_id,
            title: title.to_string(),
            description,
            reminder_date: input.reminder_date,
            reminder_time: input.reminder_time,
            kind: input.kind,
            priority: input.priority,
            status: ReminderStatus::Pending,
            created_by: created_by.into(),
            created_at: now,
            completed_at: None,
        })
    }

    pub fn complete(&mut self, now: Timestamp) -> Result<(), CoreError> {
        self.ensure_pending()?;
        self.status = ReminderStatus::Completed;
        self.completed_at = Some(now);
        Ok(())
    }

    pub fn dismiss(&mut self) -> Result<(), CoreError> {
        self.ensure_pending()?;
        self.status = ReminderStatus::Dismissed;
        Ok(())
    }

    /// Pending and due before `today`.
    pub fn is_overdue(&self, today: Date) -> bool {
        self.status == ReminderStatus::Pending && self.reminder_date < today
    }

    fn ensure_pending(&self) -> Result<(), CoreError> {
        match self.status {
            ReminderStatus::Pending => Ok(()),
            other => Err(CoreError::ReminderClosed(other)),
        }
    }
}

/// Which reminders a listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReminderFilter {
    All,
    #[default]
    Pending,
    Completed,
}

impl ReminderFilter {
    pub fn matches(self, reminder: &Reminder) -> bool {
        match self {
            ReminderFilter::All => true,
            ReminderFilter::Pending => reminder.status == ReminderStatus::Pending,
            ReminderFilter::Completed => reminder.status == ReminderStatus::Completed,
        }
    }
}

/// Reminders matching `filter`, soonest first.
pub fn filter_reminders(reminders: &[Reminder], filter: ReminderFilter) -> Vec<&Reminder> {
    let mut out: Vec<&Reminder> = reminders.iter().filter(|r| filter.matches(r)).collect();
    out.sort_by_key(|r| (r.reminder_date, r.reminder_time));
    out
}
