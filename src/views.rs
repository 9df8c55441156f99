// View models for the front-desk screens
// Each screen splits into an explicit load phase (fan-out the fetches, fail
// the whole view if any of them fails) and a pure derivation step over the
// loaded collections. Rendering the resulting structs is out of scope.

use chrono::NaiveDate;
use futures::try_join;
use tracing::error;

use crate::api::{ApiError, FrontDeskApi};
use crate::availability::{resolve, CalendarDate, RoomDayStatus};
use crate::models::{
    Guest, Reservation, ReservationStatus, Room, RoomAvailability, RoomStatus,
};
use crate::week::week_days;

// Raw inputs for the availability calendar
pub struct CalendarData {
    pub rooms: Vec<Room>,
    pub reservations: Vec<Reservation>,
}

pub async fn load_calendar(api: &dyn FrontDeskApi) -> Result<CalendarData, ApiError> {
    let (rooms, reservations) = try_join!(api.list_rooms(), api.list_reservations())
        .map_err(|e| {
            error!("calendar load failed: {e}");
            e
        })?;
    Ok(CalendarData {
        rooms,
        reservations,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub status: RoomDayStatus,
}

#[derive(Debug, Clone)]
pub struct CalendarRow {
    pub room_id: u32,
    pub room_number: String,
    pub room_type: String,
    pub cells: Vec<DayCell>,
}

// One week of per-room occupancy, ready to render as a grid
#[derive(Debug, Clone)]
pub struct CalendarView {
    pub days: [NaiveDate; 7],
    pub rows: Vec<CalendarRow>,
}

impl CalendarView {
    pub fn build(data: &CalendarData, reference: NaiveDate) -> Self {
        let days = week_days(reference);
        let rows = data
            .rooms
            .iter()
            .map(|room| CalendarRow {
                room_id: room.id,
                room_number: room.room_number.clone(),
                room_type: room.room_type.clone(),
                cells: days
                    .iter()
                    .map(|day| DayCell {
                        date: *day,
                        status: resolve(
                            &data.rooms,
                            &data.reservations,
                            room.id,
                            &CalendarDate::new(*day),
                        ),
                    })
                    .collect(),
            })
            .collect();
        Self { days, rows }
    }
}

// Raw inputs for the admin dashboard
pub struct DashboardData {
    pub guests: Vec<Guest>,
    pub rooms: Vec<Room>,
    pub reservations: Vec<Reservation>,
    pub availability: Vec<RoomAvailability>,
}

pub async fn load_dashboard(
    api: &dyn FrontDeskApi,
    today: NaiveDate,
) -> Result<DashboardData, ApiError> {
    let date = CalendarDate::new(today);
    let (guests, rooms, reservations, availability) = try_join!(
        api.list_guests(),
        api.list_rooms(),
        api.list_reservations(),
        api.room_availability(&date),
    )
    .map_err(|e| {
        error!("dashboard load failed: {e}");
        e
    })?;
    Ok(DashboardData {
        guests,
        rooms,
        reservations,
        availability,
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub guests: usize,
    pub rooms: usize,
    pub reservations: usize,
    pub available_rooms: usize,
    pub occupied_rooms: usize,
    pub maintenance_rooms: usize,
    pub today_check_ins: usize,
    pub today_check_outs: usize,
    pub revenue: f64,
    pub amenities: usize,
}

impl DashboardStats {
    pub fn derive(data: &DashboardData, today: NaiveDate) -> Self {
        let today = CalendarDate::new(today);
        let available_rooms = data.availability.iter().filter(|r| r.available).count();
        Self {
            guests: data.guests.len(),
            rooms: data.rooms.len(),
            reservations: data.reservations.len(),
            available_rooms,
            occupied_rooms: data.availability.len() - available_rooms,
            maintenance_rooms: data
                .rooms
                .iter()
                .filter(|room| room.status == RoomStatus::Maintenance)
                .count(),
            today_check_ins: data
                .reservations
                .iter()
                .filter(|res| res.check_in_date == today.as_str())
                .count(),
            today_check_outs: data
                .reservations
                .iter()
                .filter(|res| res.check_out_date == today.as_str())
                .count(),
            // Revenue sums the nightly price of each reservation's embedded
            // room; reservations without one contribute nothing
            revenue: data
                .reservations
                .iter()
                .filter_map(|res| res.room.as_ref())
                .map(|room| room.price)
                .sum(),
            amenities: data.rooms.iter().map(|room| room.amenities.len()).sum(),
        }
    }
}

// Most recently registered guests, newest first
pub fn recent_guests(guests: &[Guest], limit: usize) -> Vec<&Guest> {
    let mut sorted: Vec<&Guest> = guests.iter().collect();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));
    sorted.truncate(limit);
    sorted
}

// Active reservations checking in today or later, soonest first
pub fn upcoming_reservations<'a>(
    reservations: &'a [Reservation],
    today: NaiveDate,
    limit: usize,
) -> Vec<&'a Reservation> {
    let today = CalendarDate::new(today);
    let mut upcoming: Vec<&Reservation> = reservations
        .iter()
        .filter(|res| res.status.is_active() && res.check_in_date.as_str() >= today.as_str())
        .collect();
    upcoming.sort_by(|a, b| a.check_in_date.cmp(&b.check_in_date));
    upcoming.truncate(limit);
    upcoming
}

// Optimistic list updates after a mutation: replace the record in place when
// the id is already present, append otherwise. Last render wins.
pub fn upsert_reservation(reservations: &mut Vec<Reservation>, updated: Reservation) {
    match reservations.iter_mut().find(|res| res.id == updated.id) {
        Some(existing) => *existing = updated,
        None => reservations.push(updated),
    }
}

pub fn upsert_room(rooms: &mut Vec<Room>, updated: Room) {
    match rooms.iter_mut().find(|room| room.id == updated.id) {
        Some(existing) => *existing = updated,
        None => rooms.push(updated),
    }
}

pub fn push_guest(guests: &mut Vec<Guest>, created: Guest) {
    guests.push(created);
}

// Status filters for the room and reservation list screens; None means "all"
pub fn filter_rooms(rooms: &[Room], status: Option<RoomStatus>) -> Vec<&Room> {
    rooms
        .iter()
        .filter(|room| status.map_or(true, |s| room.status == s))
        .collect()
}

pub fn filter_reservations(
    reservations: &[Reservation],
    status: Option<ReservationStatus>,
) -> Vec<&Reservation> {
    reservations
        .iter()
        .filter(|res| status.map_or(true, |s| res.status == s))
        .collect()
}

// The booking form only offers rooms whose manual status is available
pub fn bookable_rooms(rooms: &[Room]) -> Vec<&Room> {
    filter_rooms(rooms, Some(RoomStatus::Available))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::models::{Amenity, NewGuest, NewReservation, NewRoom};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room(id: u32, number: &str, status: RoomStatus, price: f64) -> Room {
        Room {
            id,
            room_number: number.to_string(),
            room_type: "Double".to_string(),
            price,
            capacity: 2,
            status,
            amenities: vec![],
        }
    }

    fn guest(id: u32, name: &str) -> Guest {
        Guest {
            id,
            name: name.to_string(),
            email: format!("guest{}@example.com", id),
            phone: "5550000".to_string(),
            address: None,
            id_type: "passport".to_string(),
            id_number: format!("ID{}", id),
        }
    }

    fn reservation(
        id: u32,
        room_id: u32,
        check_in: &str,
        check_out: &str,
        status: ReservationStatus,
    ) -> Reservation {
        Reservation {
            id,
            guest_id: id,
            room_id,
            check_in_date: check_in.to_string(),
            check_out_date: check_out.to_string(),
            status,
            special_requests: None,
            guest: Some(guest(id, "Jane")),
            room: None,
        }
    }

    async fn seeded_api() -> MockApi {
        let api = MockApi::new();
        let guest = api
            .create_guest(&NewGuest {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                phone: "5551234".to_string(),
                address: None,
                id_type: "passport".to_string(),
                id_number: "X1".to_string(),
            })
            .await
            .unwrap();
        let booked = api
            .create_room(&NewRoom {
                room_number: "101".to_string(),
                room_type: "Double".to_string(),
                price: 120.0,
                capacity: 2,
                status: RoomStatus::Available,
            })
            .await
            .unwrap();
        api.create_room(&NewRoom {
            room_number: "102".to_string(),
            room_type: "Suite".to_string(),
            price: 250.0,
            capacity: 4,
            status: RoomStatus::Maintenance,
        })
        .await
        .unwrap();
        api.create_reservation(&NewReservation {
            guest_id: guest.id,
            room_id: booked.id,
            check_in_date: "2024-06-03".to_string(),
            check_out_date: "2024-06-05".to_string(),
            status: ReservationStatus::Confirmed,
            special_requests: None,
        })
        .await
        .unwrap();
        api
    }

    #[tokio::test]
    async fn test_calendar_view_resolves_each_cell() {
        let api = seeded_api().await;
        let data = load_calendar(&api).await.unwrap();

        // Week of Sunday 2024-06-02 through Saturday 2024-06-08
        let view = CalendarView::build(&data, date(2024, 6, 5));
        assert_eq!(view.days[0], date(2024, 6, 2));
        assert_eq!(view.rows.len(), 2);

        let booked_row = &view.rows[0];
        assert_eq!(booked_row.room_number, "101");
        assert_eq!(booked_row.cells[0].status, RoomDayStatus::Available);
        // Monday through Wednesday covered by the reservation, inclusive
        for i in 1..=3 {
            assert_eq!(
                booked_row.cells[i].status,
                RoomDayStatus::Booked {
                    occupant: "Jane".to_string()
                },
                "day index {}",
                i
            );
        }
        assert_eq!(booked_row.cells[4].status, RoomDayStatus::Available);

        let maintenance_row = &view.rows[1];
        assert!(maintenance_row
            .cells
            .iter()
            .all(|cell| cell.status == RoomDayStatus::Maintenance));
    }

    #[tokio::test]
    async fn test_calendar_load_aborts_on_any_failed_fetch() {
        let api = seeded_api().await;
        api.fail_next();

        let result = load_calendar(&api).await;
        assert!(matches!(
            result,
            Err(ApiError::Api {
                status_code: 500,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_dashboard_load_and_derive() {
        let api = seeded_api().await;
        *api.availability.lock() = vec![
            RoomAvailability {
                room_id: 1,
                room_number: "101".to_string(),
                room_type: "Double".to_string(),
                available: true,
                status: RoomStatus::Available,
            },
            RoomAvailability {
                room_id: 2,
                room_number: "102".to_string(),
                room_type: "Suite".to_string(),
                available: false,
                status: RoomStatus::Maintenance,
            },
        ];

        let today = date(2024, 6, 3);
        let data = load_dashboard(&api, today).await.unwrap();
        let stats = DashboardStats::derive(&data, today);

        assert_eq!(stats.guests, 1);
        assert_eq!(stats.rooms, 2);
        assert_eq!(stats.reservations, 1);
        assert_eq!(stats.available_rooms, 1);
        assert_eq!(stats.occupied_rooms, 1);
        assert_eq!(stats.maintenance_rooms, 1);
        assert_eq!(stats.today_check_ins, 1);
        assert_eq!(stats.today_check_outs, 0);
        // The reservation embeds room 101 at 120.0/night
        assert_eq!(stats.revenue, 120.0);
    }

    #[test]
    fn test_amenity_count_sums_across_rooms() {
        let mut first = room(1, "101", RoomStatus::Available, 120.0);
        first.amenities = vec![
            Amenity {
                id: 1,
                name: "WiFi".to_string(),
                description: None,
            },
            Amenity {
                id: 2,
                name: "Minibar".to_string(),
                description: None,
            },
        ];
        let mut second = room(2, "102", RoomStatus::Available, 250.0);
        second.amenities = vec![Amenity {
            id: 1,
            name: "WiFi".to_string(),
            description: None,
        }];

        let data = DashboardData {
            guests: vec![],
            rooms: vec![first, second],
            reservations: vec![],
            availability: vec![],
        };
        let stats = DashboardStats::derive(&data, date(2024, 6, 1));
        assert_eq!(stats.amenities, 3);
    }

    #[test]
    fn test_recent_guests_newest_first_capped() {
        let guests: Vec<Guest> = (1..=8).map(|id| guest(id, "G")).collect();
        let recent = recent_guests(&guests, 5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].id, 8);
        assert_eq!(recent[4].id, 4);
    }

    #[test]
    fn test_upcoming_reservations_sorted_and_filtered() {
        let reservations = vec![
            reservation(1, 1, "2024-06-10", "2024-06-12", ReservationStatus::Confirmed),
            reservation(2, 1, "2024-05-01", "2024-05-02", ReservationStatus::Confirmed),
            reservation(3, 2, "2024-06-04", "2024-06-06", ReservationStatus::CheckedIn),
            reservation(4, 2, "2024-06-05", "2024-06-07", ReservationStatus::Cancelled),
        ];

        let upcoming = upcoming_reservations(&reservations, date(2024, 6, 3), 5);
        let ids: Vec<u32> = upcoming.iter().map(|res| res.id).collect();
        // Past and cancelled entries drop out; soonest check-in first
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_upsert_replaces_by_id_or_appends() {
        let mut reservations = vec![reservation(
            1,
            1,
            "2024-06-01",
            "2024-06-03",
            ReservationStatus::Confirmed,
        )];

        let mut updated = reservations[0].clone();
        updated.status = ReservationStatus::CheckedIn;
        upsert_reservation(&mut reservations, updated);
        assert_eq!(reservations.len(), 1);
        assert_eq!(reservations[0].status, ReservationStatus::CheckedIn);

        upsert_reservation(
            &mut reservations,
            reservation(2, 1, "2024-06-10", "2024-06-11", ReservationStatus::Confirmed),
        );
        assert_eq!(reservations.len(), 2);
    }

    #[test]
    fn test_room_upsert_and_guest_push() {
        let mut rooms = vec![room(1, "101", RoomStatus::Available, 120.0)];
        upsert_room(&mut rooms, room(1, "101", RoomStatus::Maintenance, 120.0));
        assert_eq!(rooms[0].status, RoomStatus::Maintenance);

        let mut guests = vec![guest(1, "Jane")];
        push_guest(&mut guests, guest(2, "Sam"));
        assert_eq!(guests.len(), 2);
    }

    #[test]
    fn test_status_filters() {
        let rooms = vec![
            room(1, "101", RoomStatus::Available, 120.0),
            room(2, "102", RoomStatus::Maintenance, 250.0),
            room(3, "103", RoomStatus::Occupied, 180.0),
        ];
        assert_eq!(filter_rooms(&rooms, None).len(), 3);
        assert_eq!(filter_rooms(&rooms, Some(RoomStatus::Maintenance)).len(), 1);

        let bookable = bookable_rooms(&rooms);
        assert_eq!(bookable.len(), 1);
        assert_eq!(bookable[0].room_number, "101");

        let reservations = vec![
            reservation(1, 1, "2024-06-01", "2024-06-02", ReservationStatus::Confirmed),
            reservation(2, 1, "2024-06-03", "2024-06-04", ReservationStatus::Cancelled),
        ];
        assert_eq!(
            filter_reservations(&reservations, Some(ReservationStatus::Cancelled)).len(),
            1
        );
        assert_eq!(filter_reservations(&reservations, None).len(), 2);
    }
}
