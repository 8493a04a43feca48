use super::*;

#[test]
fn activities_url_is_collection_endpoint() {
    assert_eq!(activities_url(), "/activities");
}

#[test]
fn signup_url_encodes_activity_name_and_email() {
    assert_eq!(
        signup_url("Art Workshop", "test@mergington.edu"),
        "/activities/Art%20Workshop/signup?email=test%40mergington.edu"
    );
}

#[test]
fn signup_url_plain_name_passes_through() {
    assert_eq!(
        signup_url("Chess", "a@x.com"),
        "/activities/Chess/signup?email=a%40x.com"
    );
}

#[test]
fn unregister_url_encodes_activity_name_and_email() {
    assert_eq!(
        unregister_url("Chess Club", "a+b@x.com"),
        "/activities/Chess%20Club/unregister?email=a%2Bb%40x.com"
    );
}
