//! Faculty Development Programme schedule. Completed events keep their
//! participant counts and feedback summaries.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Completed,
    Scheduled,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FdpEvent {
    pub college: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    pub topics: &'static [&'static str],
    pub status: EventStatus,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<&'static str>,
}

pub fn schedule() -> &'static [FdpEvent] {
    SCHEDULE
}

static SCHEDULE: &[FdpEvent] = &[
    FdpEvent {
        college: "Sri Sai College of Pharmacy",
        location: "Pathankot, Punjab",
        date: "26th July 2024",
        topics: &["GenAI in Pharmaceutical Education", "Drug Discovery AI Tools", "Research Methodology"],
        status: EventStatus::Completed,
        featured: true,
        participants: Some(45),
        feedback: Some("4.9/5 rating from participants"),
    },
    FdpEvent {
        college: "Chandigarh University",
        location: "Chandigarh",
        date: "9th August 2025",
        topics: &["AI in Higher Education", "Teaching Excellence", "Digital Transformation"],
        status: EventStatus::Scheduled,
        featured: false,
        participants: None,
        feedback: None,
    },
    FdpEvent {
        college: "Mahayogi Goraknath University",
        location: "Gorakhpur",
        date: "23rd August 2025",
        topics: &["Research Innovation", "AI-Powered Learning", "Faculty Development"],
        status: EventStatus::Scheduled,
        featured: false,
        participants: None,
        feedback: None,
    },
    FdpEvent {
        college: "SRKR College of Engineering",
        location: "Bhimavaram",
        date: "5th September 2025",
        topics: &["Engineering Education", "AI Integration", "Industry-Academia Bridge"],
        status: EventStatus::Scheduled,
        featured: true,
        participants: None,
        feedback: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_events_carry_outcomes() {
        let completed: Vec<_> = schedule()
            .iter()
            .filter(|e| e.status == EventStatus::Completed)
            .collect();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].participants, Some(45));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_value(&schedule()[0]).unwrap();
        assert_eq!(json["status"], "completed");
        assert_eq!(json["college"], "Sri Sai College of Pharmacy");
    }
}
