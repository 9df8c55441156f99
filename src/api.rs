// REST API client for the front-desk server
// One attempt per request, no retry or timeout layer: a failed fetch surfaces
// directly to the caller, which aborts the view it was loading.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::availability::CalendarDate;
use crate::models::{
    Guest, LoginRequest, NewGuest, NewReservation, NewRoom, Reservation, ReservationStatus, Room,
    RoomAvailability, RoomStatus, SignupRequest, Staff,
};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("api error: {status_code} - {message}")]
    Api { status_code: u16, message: String },

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

// Non-2xx responses carry {"error": "..."} when the server produced them
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[async_trait]
pub trait FrontDeskApi: Send + Sync {
    async fn list_guests(&self) -> Result<Vec<Guest>, ApiError>;
    async fn create_guest(&self, guest: &NewGuest) -> Result<Guest, ApiError>;

    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError>;
    async fn create_room(&self, room: &NewRoom) -> Result<Room, ApiError>;
    async fn update_room_status(&self, id: u32, status: RoomStatus) -> Result<Room, ApiError>;

    async fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError>;
    async fn create_reservation(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, ApiError>;
    async fn update_reservation_status(
        &self,
        id: u32,
        status: ReservationStatus,
    ) -> Result<Reservation, ApiError>;

    async fn room_availability(
        &self,
        date: &CalendarDate,
    ) -> Result<Vec<RoomAvailability>, ApiError>;

    async fn login(&self, request: &LoginRequest) -> Result<Staff, ApiError>;
    async fn signup(&self, request: &SignupRequest) -> Result<Staff, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn check_auth(&self) -> Result<Staff, ApiError>;
}

pub struct RestClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "PATCH");
        let response = self.http.patch(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "DELETE");
        let response = self.http.delete(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(path, status = status.as_u16(), "request failed");
            return Err(ApiError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            warn!(status = status.as_u16(), %message, "request failed");
            return Err(ApiError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl FrontDeskApi for RestClient {
    async fn list_guests(&self) -> Result<Vec<Guest>, ApiError> {
        self.get_json("/guests").await
    }

    async fn create_guest(&self, guest: &NewGuest) -> Result<Guest, ApiError> {
        self.post_json("/guests", guest).await
    }

    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.get_json("/rooms").await
    }

    async fn create_room(&self, room: &NewRoom) -> Result<Room, ApiError> {
        self.post_json("/rooms", room).await
    }

    async fn update_room_status(&self, id: u32, status: RoomStatus) -> Result<Room, ApiError> {
        let path = format!("/rooms/{}", id);
        self.patch_json(&path, &serde_json::json!({ "status": status }))
            .await
    }

    async fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.get_json("/reservations").await
    }

    async fn create_reservation(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, ApiError> {
        self.post_json("/reservations", reservation).await
    }

    async fn update_reservation_status(
        &self,
        id: u32,
        status: ReservationStatus,
    ) -> Result<Reservation, ApiError> {
        let path = format!("/reservations/{}", id);
        self.patch_json(&path, &serde_json::json!({ "status": status }))
            .await
    }

    async fn room_availability(
        &self,
        date: &CalendarDate,
    ) -> Result<Vec<RoomAvailability>, ApiError> {
        let path = format!("/rooms/availability?date={}", date);
        self.get_json(&path).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<Staff, ApiError> {
        self.post_json("/staff/login", request).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<Staff, ApiError> {
        self.post_json("/staff/signup", request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.delete("/staff/logout").await
    }

    async fn check_auth(&self) -> Result<Staff, ApiError> {
        self.get_json("/staff/check-auth").await
    }
}
