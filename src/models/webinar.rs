use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::User;

/// Вебинар. Колонки таблицы `"Webinar"` названы в camelCase.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webinar {
    pub id: String,
    #[sqlx(rename = "organizerId")]
    pub organizer_id: String,
    pub title: String,
    #[sqlx(rename = "startDate")]
    pub start_date: DateTime<Utc>,
    #[sqlx(rename = "endDate")]
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

impl Webinar {
    // Только организатор может менять вебинар
    pub fn is_organizer(&self, user: &User) -> bool {
        self.organizer_id == user.id
    }

    pub fn change_seats(&mut self, seats: i32) {
        self.seats = seats;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn webinar() -> Webinar {
        Webinar {
            id: "webinar-id".to_string(),
            organizer_id: "user-alice-id".to_string(),
            title: "Webinar title".to_string(),
            start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap(),
            seats: 100,
        }
    }

    #[test]
    fn organizer_is_recognised_by_id() {
        let webinar = webinar();
        assert!(webinar.is_organizer(&User::new("user-alice-id")));
        assert!(!webinar.is_organizer(&User::new("user-bob-id")));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(webinar()).unwrap();
        assert_eq!(json["organizerId"], "user-alice-id");
        assert_eq!(json["seats"], 100);
        assert!(json.get("startDate").is_some());
    }
}
