use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// An event announced through the slot bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct SlotbotEvent {
    pub id: String,
    pub title: String,
    /// ISO date or timestamp
    pub date: String,
    /// Local start time, e.g. "19:30"
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "durationHours", default)]
    pub duration_hours: f32,
    #[serde(rename = "type", default)]
    pub event_type: String,
    #[serde(rename = "eventUrl", default, skip_serializing_if = "Option::is_none")]
    pub event_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpcomingEventsResponse {
    #[serde(default)]
    pub events: Vec<SlotbotEvent>,
}

impl SlotbotEvent {
    pub fn date(&self) -> Option<NaiveDate> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.date) {
            return Some(dt.with_timezone(&Local).date_naive());
        }
        self.date
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// Compact date line for the sidebar, e.g. "Di, 14.10. 19:30 (4h)".
    pub fn schedule_display(&self) -> String {
        let date = self
            .date()
            .map(|d| format!("{}, {}", weekday_short(d), d.format("%d.%m.")))
            .unwrap_or_else(|| self.date.clone());
        format!("{} {} ({}h)", date, self.start_time, self.duration_hours)
    }
}

fn weekday_short(date: NaiveDate) -> &'static str {
    use chrono::{Datelike, Weekday};
    match date.weekday() {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Di",
        Weekday::Wed => "Mi",
        Weekday::Thu => "Do",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "So",
    }
}
