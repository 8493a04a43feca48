use super::*;

fn sample_collection() -> ActivityMap {
    serde_json::from_str(
        r#"{
            "Chess Club": {
                "description": "Learn strategies and compete in chess tournaments",
                "schedule": "Fridays, 3:30 PM - 5:00 PM",
                "max_participants": 12,
                "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
            },
            "Soccer Team": {
                "description": "Join the school soccer team and compete in local leagues",
                "schedule": "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                "max_participants": 22,
                "participants": []
            }
        }"#,
    )
    .expect("valid activity collection")
}

// =============================================================
// Activity deserialization
// =============================================================

#[test]
fn collection_deserializes_all_fields() {
    let map = sample_collection();
    let chess = &map["Chess Club"];
    assert_eq!(
        chess.description,
        "Learn strategies and compete in chess tournaments"
    );
    assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(chess.max_participants, 12);
    assert_eq!(
        chess.participants,
        vec!["michael@mergington.edu", "daniel@mergington.edu"]
    );
}

// =============================================================
// spots_left
// =============================================================

#[test]
fn spots_left_is_capacity_minus_roster_for_every_activity() {
    let map = sample_collection();
    for activity in map.values() {
        let roster = u32::try_from(activity.participants.len()).unwrap();
        assert_eq!(activity.spots_left(), activity.max_participants - roster);
    }
}

#[test]
fn chess_club_sample_shows_ten_spots_left() {
    let map = sample_collection();
    let chess = &map["Chess Club"];
    assert_eq!(chess.spots_left(), 10);
}

#[test]
fn two_of_ten_spots_taken_shows_eight_left() {
    let activity = Activity {
        description: "...".to_owned(),
        schedule: "...".to_owned(),
        max_participants: 10,
        participants: vec!["a@x.com".to_owned(), "b@x.com".to_owned()],
    };
    assert_eq!(format!("{} spots left", activity.spots_left()), "8 spots left");
}

#[test]
fn empty_roster_leaves_full_capacity() {
    let map = sample_collection();
    let soccer = &map["Soccer Team"];
    assert!(soccer.participants.is_empty());
    assert_eq!(soccer.spots_left(), 22);
}

#[test]
fn overfull_roster_saturates_at_zero() {
    let activity = Activity {
        description: String::new(),
        schedule: String::new(),
        max_participants: 1,
        participants: vec!["a@x.com".to_owned(), "b@x.com".to_owned()],
    };
    assert_eq!(activity.spots_left(), 0);
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn message_body_parses() {
    let body: MessageBody =
        serde_json::from_str(r#"{"message": "Signed up test@mergington.edu for Soccer Team"}"#)
            .unwrap();
    assert_eq!(body.message, "Signed up test@mergington.edu for Soccer Team");
}

#[test]
fn error_body_with_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail": "Activity not found"}"#).unwrap();
    assert_eq!(body.detail.as_deref(), Some("Activity not found"));
}

#[test]
fn error_body_without_detail_is_none() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.detail.is_none());
}
