// Availability resolution for the room calendar
// Combines the room and reservation collections into a per-room, per-day
// occupancy status. Pure and synchronous: callers fetch the collections,
// this module only derives state from them.

use chrono::NaiveDate;

use crate::models::{Reservation, Room, RoomStatus};

// Shown when a booking's guest reference cannot be resolved
pub const OCCUPANT_FALLBACK: &str = "Guest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomDayStatus {
    Booked { occupant: String },
    Maintenance,
    Available,
}

// A calendar day in normalized yyyy-MM-dd form. Lexicographic order on the
// ISO string matches chronological order, which is how reservation date
// ranges are compared below.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate(String);

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    pub fn parse(value: &str) -> Option<Self> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// Resolve a room's status for one day.
//
// An active reservation (confirmed or checked-in) whose range contains the
// day inclusively on both ends wins; a reservation ending on day D still
// occupies day D. If several active reservations match (a data anomaly),
// the first in input order is used. With no booking, the room's manual
// maintenance flag applies; everything else is available. Dangling guest
// references degrade to a placeholder name, never an error.
pub fn resolve(
    rooms: &[Room],
    reservations: &[Reservation],
    room_id: u32,
    date: &CalendarDate,
) -> RoomDayStatus {
    let booking = reservations.iter().find(|res| {
        res.room_id == room_id
            && res.status.is_active()
            && res.check_in_date.as_str() <= date.as_str()
            && res.check_out_date.as_str() >= date.as_str()
    });

    if let Some(reservation) = booking {
        let occupant = reservation
            .guest
            .as_ref()
            .map(|guest| guest.name.clone())
            .unwrap_or_else(|| OCCUPANT_FALLBACK.to_string());
        return RoomDayStatus::Booked { occupant };
    }

    let room = rooms.iter().find(|room| room.id == room_id);
    match room {
        Some(room) if room.status == RoomStatus::Maintenance => RoomDayStatus::Maintenance,
        _ => RoomDayStatus::Available,
    }
}
