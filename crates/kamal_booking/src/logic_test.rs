// --- File: crates/kamal_booking/src/logic_test.rs ---
#[cfg(test)]
mod tests {
    use crate::logic::*;
    use kamal_common::{Booking, NewBooking};

    fn booking(id: i64, name: &str) -> Booking {
        Booking {
            id,
            name: Some(name.to_string()),
            email: Some(format!("{}@x.com", name.to_lowercase())),
            phone: Some("555".to_string()),
            date: Some("2024-05-01".to_string()),
            time: Some("10:00".to_string()),
        }
    }

    /// Bookings 1..=n, most recent first
    fn history(n: i64) -> Vec<Booking> {
        (1..=n).rev().map(|id| booking(id, &format!("Customer{}", id))).collect()
    }

    #[test]
    fn test_booking_request_accepts_missing_and_null_fields() {
        let request: BookingRequest =
            serde_json::from_str(r#"{"name":"Asha","email":null}"#).unwrap();

        assert_eq!(request.name.as_deref(), Some("Asha"));
        assert_eq!(request.email, None);
        assert_eq!(request.phone, None);

        let empty: BookingRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, BookingRequest::default());
    }

    #[test]
    fn test_booking_request_keeps_scalars_as_text() {
        let request: BookingRequest =
            serde_json::from_str(r#"{"phone":5551234,"date":true,"time":"10:00","extra":1}"#).unwrap();

        assert_eq!(request.phone.as_deref(), Some("5551234"));
        assert_eq!(request.date.as_deref(), Some("true"));
        assert_eq!(request.time.as_deref(), Some("10:00"));

        let new_booking = NewBooking::from(request);
        assert_eq!(new_booking.phone.as_deref(), Some("5551234"));
        assert_eq!(new_booking.name, None);
    }

    #[test]
    fn test_dashboard_query_blank_email_is_missing() {
        let query = DashboardQuery {
            email: Some("   ".to_string()),
        };
        assert_eq!(query.email(), None);
        assert_eq!(DashboardQuery::default().email(), None);

        let query = DashboardQuery {
            email: Some("asha@x.com".to_string()),
        };
        assert_eq!(query.email(), Some("asha@x.com"));
    }

    #[test]
    fn test_stats_truncate() {
        let expected = [(0, 0, 0), (1, 0, 3), (3, 0, 11), (4, 1, 15), (7, 1, 26), (10, 2, 37)];
        for (calls, hours, cost) in expected {
            let stats = DashboardStats::from_call_count(calls);
            assert_eq!(stats.total_calls, calls);
            assert_eq!(stats.hours_saved, hours, "hours for {}", calls);
            assert_eq!(stats.cost_saved, cost, "cost for {}", calls);
            assert_eq!(stats.cost_saved, 15 * calls / 4);
        }
    }

    #[test]
    fn test_display_name_from_email() {
        assert_eq!(display_name_from_email("asha@x.com"), "Asha");
        assert_eq!(display_name_from_email("ömer@x.com"), "Ömer");
        assert_eq!(display_name_from_email("noat"), "Noat");
        assert_eq!(display_name_from_email("@x.com"), "Your");
    }

    #[test]
    fn test_mock_agents_use_display_name() {
        let agents = mock_agents("asha@x.com");
        assert_eq!(agents.len(), 2);
        assert_eq!(agents[0].name, "Asha's Voice Receptionist");
        assert!(agents.iter().all(|agent| agent.name.starts_with("Asha's")));
    }

    #[test]
    fn test_summary_limits_recent_activity() {
        let summary = summarize_dashboard("asha@x.com", &history(7));

        assert_eq!(summary.stats.total_calls, 7);
        assert_eq!(summary.recent_activity.len(), RECENT_ACTIVITY_LIMIT);
        let ids: Vec<i64> = summary.recent_activity.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
        assert_eq!(summary.recent_activity[0].customer.as_deref(), Some("Customer7"));
    }

    #[test]
    fn test_summary_of_empty_store() {
        let summary = summarize_dashboard("asha@x.com", &[]);

        assert_eq!(summary.stats, DashboardStats::from_call_count(0));
        assert!(summary.recent_activity.is_empty());
        assert_eq!(summary.active_agents.len(), 2);
    }

    #[test]
    fn test_table_escapes_values_and_keeps_order() {
        let mut first = booking(2, "Asha");
        first.name = Some("<script>alert(1)</script>".to_string());
        first.phone = None;
        let html = render_bookings_table(&[first, booking(1, "Ben")]);

        for column in ["ID", "Name", "Email", "Phone", "Date", "Time"] {
            assert!(html.contains(&format!("<th>{}</th>", column)));
        }
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<td></td>"));
        assert!(html.find("<td>2</td>").unwrap() < html.find("<td>1</td>").unwrap());
    }
}
