//! Integration tests for the guest booking flow: search, book, conflict
//! on double booking, cancellation freeing the room.

mod common;

use common::{date, TestApp};

use rincon_core::error::ErrorKind;
use rincon_core::types::RoomId;
use rincon_entity::reservation::ReservationStatus;
use rincon_service::booking::BookingRequest;

fn stay(room: i64) -> BookingRequest {
    BookingRequest {
        room_id: RoomId::new(room),
        check_in: date(2030, 6, 10),
        check_out: date(2030, 6, 15),
        guests: 2,
    }
}

#[test]
fn test_search_then_book_then_room_disappears_from_search() {
    let app = TestApp::new();
    let guest = app.guest("maria@example.com", "1034567890");

    let before = app
        .engine
        .find_available(date(2030, 6, 10), date(2030, 6, 15), 2)
        .unwrap();
    assert!(before.iter().any(|room| room.id == RoomId::new(1)));

    let reservation = app.booking.book(&guest, &stay(1)).unwrap();
    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert_eq!(reservation.nights, 5);
    // Suite Icónica: 4.786.092 × 5 = 23.930.460 → rounded to 23.930.000.
    assert_eq!(reservation.total_price, 23_930_000);
    assert_eq!(reservation.base_price, Some(4_786_092));
    assert!(reservation.price_breakdown.is_some());

    let after = app
        .engine
        .find_available(date(2030, 6, 10), date(2030, 6, 15), 2)
        .unwrap();
    assert!(!after.iter().any(|room| room.id == RoomId::new(1)));
}

#[test]
fn test_double_booking_is_a_conflict_with_interval() {
    let app = TestApp::new();
    let first = app.guest("maria@example.com", "1034567890");
    let second = app.guest("carlos@example.com", "2045678901");

    app.booking.book(&first, &stay(1)).unwrap();

    let err = app
        .booking
        .book(
            &second,
            &BookingRequest {
                room_id: RoomId::new(1),
                check_in: date(2030, 6, 12),
                check_out: date(2030, 6, 14),
                guests: 2,
            },
        )
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert!(err.message.contains("2030-06-10"));
    assert!(err.message.contains("2030-06-15"));
}

#[test]
fn test_back_to_back_stays_both_succeed() {
    let app = TestApp::new();
    let first = app.guest("maria@example.com", "1034567890");
    let second = app.guest("carlos@example.com", "2045678901");

    app.booking.book(&first, &stay(1)).unwrap();
    // Checking in the day the first guest checks out is fine.
    let adjacent = app
        .booking
        .book(
            &second,
            &BookingRequest {
                room_id: RoomId::new(1),
                check_in: date(2030, 6, 15),
                check_out: date(2030, 6, 18),
                guests: 2,
            },
        )
        .unwrap();
    assert_eq!(adjacent.status, ReservationStatus::Pending);
}

#[test]
fn test_cancellation_frees_the_room() {
    let app = TestApp::new();
    let guest = app.guest("maria@example.com", "1034567890");

    let reservation = app.booking.book(&guest, &stay(1)).unwrap();
    let err = app.booking.book(&guest, &stay(1)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    app.booking
        .cancel_own(&guest, reservation.id)
        .unwrap()
        .expect("reservation exists");

    // No compensating write needed: the next search simply no longer sees
    // an active reservation.
    let rebooked = app.booking.book(&guest, &stay(1)).unwrap();
    assert_ne!(rebooked.id, reservation.id);
}

#[test]
fn test_admins_cannot_book() {
    let app = TestApp::new();
    let admin = app.admin();
    let err = app.booking.book(&admin, &stay(1)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}

#[test]
fn test_guest_cannot_cancel_someone_elses_reservation() {
    let app = TestApp::new();
    let owner = app.guest("maria@example.com", "1034567890");
    let intruder = app.guest("carlos@example.com", "2045678901");

    let reservation = app.booking.book(&owner, &stay(1)).unwrap();
    let err = app.booking.cancel_own(&intruder, reservation.id).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}

#[test]
fn test_surcharge_applies_to_larger_party() {
    let app = TestApp::new();
    let guest = app.guest("maria@example.com", "1034567890");

    // Suite Element (id 5) holds four. 8.103.339/night, 2 nights, 4 guests:
    // base 16.206.678 + surcharge 2 × 1.620.667,8 × 2 = 6.482.671,2
    // → raw 22.689.349,2 → rounded 22.689.000.
    let reservation = app
        .booking
        .book(
            &guest,
            &BookingRequest {
                room_id: RoomId::new(5),
                check_in: date(2030, 7, 1),
                check_out: date(2030, 7, 3),
                guests: 4,
            },
        )
        .unwrap();
    assert_eq!(reservation.total_price, 22_689_000);
    assert_eq!(reservation.additional_guests, Some(2));
    let breakdown = reservation.price_breakdown.unwrap();
    assert_eq!(breakdown.len(), 3);
    assert!(breakdown[1].contains("20%"));
}

#[test]
fn test_capacity_is_enforced_at_booking_time() {
    let app = TestApp::new();
    let guest = app.guest("maria@example.com", "1034567890");

    let err = app
        .booking
        .book(
            &guest,
            &BookingRequest {
                room_id: RoomId::new(1),
                check_in: date(2030, 7, 1),
                check_out: date(2030, 7, 3),
                guests: 3,
            },
        )
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[test]
fn test_my_reservations_lists_only_own() {
    let app = TestApp::new();
    let maria = app.guest("maria@example.com", "1034567890");
    let carlos = app.guest("carlos@example.com", "2045678901");

    app.booking.book(&maria, &stay(1)).unwrap();
    app.booking.book(&carlos, &stay(2)).unwrap();

    assert_eq!(app.booking.my_reservations(&maria).len(), 1);
    assert_eq!(app.booking.my_reservations(&carlos).len(), 1);
    assert_eq!(app.booking.all_reservations(&app.admin()).unwrap().len(), 2);
    assert!(app.booking.all_reservations(&maria).is_err());
}
