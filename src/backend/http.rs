use serde::Deserialize;
use url::Url;

use crate::models::bookings::{Booking, BookingRequest, PaymentStatus};
use crate::models::payments::PaymentAttempt;
use crate::models::resource::{Rental, ResourceKind, Tour};

use super::{BackendError, BookingOperations};

/// Reqwest client for the remote REST backend. Auth is a bearer token
/// handed over by the surrounding auth layer; this client only attaches it.
pub struct HttpBackend {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

// Response envelopes, matching the backend's JSON shapes.
#[derive(Deserialize)]
struct BookingEnvelope {
    booking: Booking,
}

#[derive(Deserialize)]
struct BookingsEnvelope {
    #[serde(default)]
    bookings: Vec<Booking>,
}

#[derive(Deserialize)]
struct PaymentEnvelope {
    payment: PaymentAttempt,
}

#[derive(Deserialize)]
struct PaymentsEnvelope {
    #[serde(default)]
    payments: Vec<PaymentAttempt>,
}

#[derive(Deserialize)]
struct ToursEnvelope {
    #[serde(default)]
    tours: Vec<Tour>,
}

#[derive(Deserialize)]
struct RentalsEnvelope {
    #[serde(default)]
    rentals: Vec<Rental>,
}

#[derive(Deserialize)]
struct ImagesEnvelope {
    #[serde(default)]
    images: Vec<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, BackendError> {
        // Parse up front so a bad base URL fails at construction, not on
        // the first booking.
        let parsed = Url::parse(base_url)?;
        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn reject(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body),
            Err(_) => String::from("no response body"),
        };
        BackendError::Rejected { status, message }
    }
}

impl BookingOperations for HttpBackend {
    async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, BackendError> {
        let response = self
            .authorize(self.client.post(self.endpoint("/bookings")))
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        let envelope: BookingEnvelope = response.json().await?;
        Ok(envelope.booking)
    }

    async fn cancel_booking(&self, booking_id: &str) -> Result<(), BackendError> {
        let url = self.endpoint(&format!("/bookings/{}/cancel", booking_id));
        let response = self.authorize(self.client.put(&url)).send().await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        Ok(())
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, BackendError> {
        let response = self
            .authorize(self.client.get(self.endpoint("/bookings")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        let envelope: BookingsEnvelope = response.json().await?;
        Ok(envelope.bookings)
    }

    async fn create_payment(
        &self,
        attempt: &PaymentAttempt,
    ) -> Result<PaymentAttempt, BackendError> {
        let response = self
            .authorize(self.client.post(self.endpoint("/payments")))
            .json(attempt)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        let envelope: PaymentEnvelope = response.json().await?;
        Ok(envelope.payment)
    }

    async fn list_payments(&self) -> Result<Vec<PaymentAttempt>, BackendError> {
        let response = self
            .authorize(self.client.get(self.endpoint("/payments")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        let envelope: PaymentsEnvelope = response.json().await?;
        Ok(envelope.payments)
    }

    async fn set_payment_status(
        &self,
        booking_id: &str,
        status: PaymentStatus,
    ) -> Result<(), BackendError> {
        let url = self.endpoint(&format!("/bookings/{}", booking_id));
        let response = self
            .authorize(self.client.put(&url))
            .json(&serde_json::json!({ "paymentStatus": status }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        Ok(())
    }

    async fn list_tours(&self) -> Result<Vec<Tour>, BackendError> {
        let response = self
            .authorize(self.client.get(self.endpoint("/tours")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        let envelope: ToursEnvelope = response.json().await?;
        Ok(envelope.tours)
    }

    async fn list_rentals(&self) -> Result<Vec<Rental>, BackendError> {
        let response = self
            .authorize(self.client.get(self.endpoint("/rentals")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        let envelope: RentalsEnvelope = response.json().await?;
        Ok(envelope.rentals)
    }

    async fn resource_images(
        &self,
        kind: ResourceKind,
        resource_id: &str,
    ) -> Result<Vec<String>, BackendError> {
        let segment = match kind {
            ResourceKind::Tour => "tour",
            ResourceKind::Rental => "rental",
        };
        let url = self.endpoint(&format!("/images/{}/{}", segment, resource_id));
        let response = self.authorize(self.client.get(&url)).send().await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        let envelope: ImagesEnvelope = response.json().await?;
        Ok(envelope.images)
    }
}
