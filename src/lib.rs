// Main library file for the hotel front-desk core

// Export modules for each concern of the front-desk application
pub mod api;
pub mod availability;
pub mod forms;
pub mod models;
pub mod session;
pub mod views;
pub mod week;

// Re-export key types for convenience
pub use api::{ApiError, ClientConfig, FrontDeskApi, RestClient};
pub use availability::{resolve, CalendarDate, RoomDayStatus, OCCUPANT_FALLBACK};
pub use forms::{FieldError, GuestForm, LoginForm, ReservationForm, SignupForm};
pub use models::{
    Guest, Reservation, ReservationStatus, Room, RoomAvailability, RoomStatus, Staff,
};
pub use session::{MemorySessionStore, SessionContext, SessionStore};
pub use views::{CalendarView, DashboardStats};
pub use week::{next_week, previous_week, reset_to_today, week_days, week_start};
