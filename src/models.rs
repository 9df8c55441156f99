// Data structures for the front-desk REST API
// Field names follow the JSON the server emits; request payloads use the
// shapes the server expects on POST/PATCH (note the camelCase id fields on
// guest creation).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Guest {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub id_type: String,
    pub id_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Room {
    pub id: u32,
    pub room_number: String,
    pub room_type: String,
    pub price: f64,
    pub capacity: u32,
    pub status: RoomStatus,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Amenity {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    // Active reservations are the ones that occupy a room on the calendar
    pub fn is_active(self) -> bool {
        matches!(self, Self::Confirmed | Self::CheckedIn)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Reservation {
    pub id: u32,
    pub guest_id: u32,
    pub room_id: u32,
    // ISO yyyy-MM-dd strings as delivered by the API
    pub check_in_date: String,
    pub check_out_date: String,
    pub status: ReservationStatus,
    pub special_requests: Option<String>,
    // Embedded records from the server's serializer; may be absent
    #[serde(default)]
    pub guest: Option<Guest>,
    #[serde(default)]
    pub room: Option<Room>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Staff {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

// Shape of the /rooms/availability endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoomAvailability {
    pub room_id: u32,
    pub room_number: String,
    pub room_type: String,
    pub available: bool,
    pub status: RoomStatus,
}

// Request payloads

#[derive(Debug, Clone, Serialize)]
pub struct NewGuest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    #[serde(rename = "idType")]
    pub id_type: String,
    #[serde(rename = "idNumber")]
    pub id_number: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewRoom {
    pub room_number: String,
    pub room_type: String,
    pub price: f64,
    pub capacity: u32,
    pub status: RoomStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReservation {
    pub guest_id: u32,
    pub room_id: u32,
    pub check_in_date: String,
    pub check_out_date: String,
    pub status: ReservationStatus,
    pub special_requests: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub position: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
