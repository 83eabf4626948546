//! Booking model tests — conflict detection, ownership scoping, and
//! the transactional create path.

mod common;

use roombook::models::booking;
use roombook::models::booking::NewBooking;
use common::*;

fn new_booking(room_id: i64, user_id: i64, start: &str, end: &str) -> NewBooking {
    NewBooking {
        room_id,
        user_id,
        start_time: start.to_string(),
        end_time: end.to_string(),
        no_of_persons: 5,
    }
}

#[test]
fn test_create_if_free_success() {
    let (_dir, mut conn) = setup_test_db();

    let user_id = insert_user(&conn, TEST_EMAIL, "testuser", TEST_PASSWORD);
    let room_id = insert_room(&conn, "Alpha Room", 10);

    let id = booking::create_if_free(
        &mut conn,
        &new_booking(room_id, user_id, "2026-03-01T10:00:00Z", "2026-03-01T12:00:00Z"),
    )
    .expect("Create failed")
    .expect("Slot should be free");

    assert!(id > 0);
    assert_eq!(booking::count_by_room(&conn, room_id).expect("count"), 1);
}

#[test]
fn test_create_if_free_rejects_overlap() {
    let (_dir, mut conn) = setup_test_db();

    let user_id = insert_user(&conn, TEST_EMAIL, "testuser", TEST_PASSWORD);
    let room_id = insert_room(&conn, "Alpha Room", 10);
    insert_booking(&conn, room_id, user_id, "2026-03-01T10:00:00Z", "2026-03-01T12:00:00Z", 5);

    // Shifted by an hour, still intersecting
    let result = booking::create_if_free(
        &mut conn,
        &new_booking(room_id, user_id, "2026-03-01T11:00:00Z", "2026-03-01T13:00:00Z"),
    )
    .expect("Create failed");

    assert!(result.is_none(), "Overlapping booking should be rejected");
    assert_eq!(booking::count_by_room(&conn, room_id).expect("count"), 1);
}

#[test]
fn test_create_if_free_rejects_contained_interval() {
    let (_dir, mut conn) = setup_test_db();

    let user_id = insert_user(&conn, TEST_EMAIL, "testuser", TEST_PASSWORD);
    let room_id = insert_room(&conn, "Alpha Room", 10);
    insert_booking(&conn, room_id, user_id, "2026-03-01T10:00:00Z", "2026-03-01T12:00:00Z", 5);

    let result = booking::create_if_free(
        &mut conn,
        &new_booking(room_id, user_id, "2026-03-01T10:30:00Z", "2026-03-01T11:30:00Z"),
    )
    .expect("Create failed");

    assert!(result.is_none());
}

#[test]
fn test_create_if_free_allows_back_to_back() {
    let (_dir, mut conn) = setup_test_db();

    let user_id = insert_user(&conn, TEST_EMAIL, "testuser", TEST_PASSWORD);
    let room_id = insert_room(&conn, "Alpha Room", 10);
    insert_booking(&conn, room_id, user_id, "2026-03-01T10:00:00Z", "2026-03-01T12:00:00Z", 5);

    // Starts exactly when the existing booking ends
    let result = booking::create_if_free(
        &mut conn,
        &new_booking(room_id, user_id, "2026-03-01T12:00:00Z", "2026-03-01T13:00:00Z"),
    )
    .expect("Create failed");

    assert!(result.is_some(), "Back-to-back bookings should not conflict");
}

#[test]
fn test_create_if_free_other_room_unaffected() {
    let (_dir, mut conn) = setup_test_db();

    let user_id = insert_user(&conn, TEST_EMAIL, "testuser", TEST_PASSWORD);
    let alpha = insert_room(&conn, "Alpha Room", 10);
    let beta = insert_room(&conn, "Beta Room", 6);
    insert_booking(&conn, alpha, user_id, "2026-03-01T10:00:00Z", "2026-03-01T12:00:00Z", 5);

    let result = booking::create_if_free(
        &mut conn,
        &new_booking(beta, user_id, "2026-03-01T10:00:00Z", "2026-03-01T12:00:00Z"),
    )
    .expect("Create failed");

    assert!(result.is_some(), "Same interval in another room should be free");
}

#[test]
fn test_overlap_exists_predicate() {
    let (_dir, conn) = setup_test_db();

    let user_id = insert_user(&conn, TEST_EMAIL, "testuser", TEST_PASSWORD);
    let room_id = insert_room(&conn, "Alpha Room", 10);
    insert_booking(&conn, room_id, user_id, "2026-03-01T10:00:00Z", "2026-03-01T12:00:00Z", 5);

    // Intersecting
    assert!(booking::overlap_exists(&conn, room_id, "2026-03-01T11:00:00Z", "2026-03-01T13:00:00Z")
        .expect("Query failed"));
    // Containing
    assert!(booking::overlap_exists(&conn, room_id, "2026-03-01T09:00:00Z", "2026-03-01T13:00:00Z")
        .expect("Query failed"));
    // Disjoint
    assert!(!booking::overlap_exists(&conn, room_id, "2026-03-01T13:00:00Z", "2026-03-01T14:00:00Z")
        .expect("Query failed"));
    // Touching boundaries (half-open)
    assert!(!booking::overlap_exists(&conn, room_id, "2026-03-01T12:00:00Z", "2026-03-01T13:00:00Z")
        .expect("Query failed"));
    assert!(!booking::overlap_exists(&conn, room_id, "2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z")
        .expect("Query failed"));
}

#[test]
fn test_find_by_user_embeds_room_and_orders_by_start() {
    let (_dir, conn) = setup_test_db();

    let user_id = insert_user(&conn, TEST_EMAIL, "testuser", TEST_PASSWORD);
    let other_id = insert_user(&conn, "other@example.com", "other", TEST_PASSWORD);
    let room_id = insert_room(&conn, "Alpha Room", 10);

    insert_booking(&conn, room_id, user_id, "2026-03-02T10:00:00Z", "2026-03-02T11:00:00Z", 3);
    insert_booking(&conn, room_id, user_id, "2026-03-01T10:00:00Z", "2026-03-01T11:00:00Z", 4);
    insert_booking(&conn, room_id, other_id, "2026-03-03T10:00:00Z", "2026-03-03T11:00:00Z", 2);

    let bookings = booking::find_by_user(&conn, user_id).expect("Query failed");
    assert_eq!(bookings.len(), 2, "Only the user's own bookings");
    assert_eq!(bookings[0].start_time, "2026-03-01T10:00:00Z");
    assert_eq!(bookings[1].start_time, "2026-03-02T10:00:00Z");
    assert_eq!(bookings[0].meeting_room.id, room_id);
    assert_eq!(bookings[0].meeting_room.room_name, "Alpha Room");
    assert_eq!(bookings[0].no_of_persons, 4);
}

#[test]
fn test_find_by_id_for_user_scopes_ownership() {
    let (_dir, conn) = setup_test_db();

    let owner = insert_user(&conn, TEST_EMAIL, "owner", TEST_PASSWORD);
    let stranger = insert_user(&conn, "other@example.com", "stranger", TEST_PASSWORD);
    let room_id = insert_room(&conn, "Alpha Room", 10);
    let booking_id =
        insert_booking(&conn, room_id, owner, "2026-03-01T10:00:00Z", "2026-03-01T11:00:00Z", 3);

    let found = booking::find_by_id_for_user(&conn, booking_id, owner).expect("Query failed");
    assert!(found.is_some());

    let hidden = booking::find_by_id_for_user(&conn, booking_id, stranger).expect("Query failed");
    assert!(hidden.is_none(), "Another user's booking must read as missing");
}

#[test]
fn test_delete_booking() {
    let (_dir, conn) = setup_test_db();

    let user_id = insert_user(&conn, TEST_EMAIL, "testuser", TEST_PASSWORD);
    let room_id = insert_room(&conn, "Alpha Room", 10);
    let booking_id =
        insert_booking(&conn, room_id, user_id, "2026-03-01T10:00:00Z", "2026-03-01T11:00:00Z", 3);

    booking::delete(&conn, booking_id).expect("Delete failed");
    assert_eq!(booking::count_by_room(&conn, room_id).expect("count"), 0);
}
