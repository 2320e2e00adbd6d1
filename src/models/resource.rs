use serde::{Deserialize, Serialize};

/// Which kind of bookable resource a selection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Tour,
    Rental,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Tour => write!(f, "Tour"),
            ResourceKind::Rental => write!(f, "Rental"),
        }
    }
}

/// A guided tour with a flat per-person price.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price per person in dollars.
    pub price: f64,
    /// Scheduled length in hours; tours without one default to 2 at booking time.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub max_capacity: Option<u32>,
    #[serde(default)]
    pub tour_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Tour {
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("Active")
    }
}

/// A rentable piece of equipment priced by the hour, with an optional
/// daily rate that takes over for full-day rentals.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    pub hourly_rate: f64,
    #[serde(default)]
    pub daily_rate: Option<f64>,
    #[serde(default)]
    pub quantity_available: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Rental {
    pub fn is_available(&self) -> bool {
        self.status.as_deref() == Some("Available")
    }
}

/// A bookable resource, read-only for the duration of a booking flow.
#[derive(Debug, Clone)]
pub enum Resource {
    Tour(Tour),
    Rental(Rental),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Tour(_) => ResourceKind::Tour,
            Resource::Rental(_) => ResourceKind::Rental,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Resource::Tour(tour) => &tour.id,
            Resource::Rental(rental) => &rental.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Resource::Tour(tour) => &tour.name,
            Resource::Rental(rental) => &rental.name,
        }
    }
}

/// What the customer picked in the booking form, before any validation.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub party_size: u32,
    /// Rentals choose from {1, 2, 4, 8}; tours always run for the
    /// resource's own duration and ignore this field.
    pub duration_hours: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_tours_are_bookable() {
        let mut tour = Tour {
            id: "t1".into(),
            name: "Sunset Kayak".into(),
            description: String::new(),
            price: 89.0,
            duration: Some(2),
            max_capacity: Some(12),
            tour_type: None,
            status: Some("Active".into()),
        };
        assert!(tour.is_active());
        tour.status = Some("Draft".into());
        assert!(!tour.is_active());
        tour.status = None;
        assert!(!tour.is_active());
    }

    #[test]
    fn rental_deserializes_from_backend_payload() {
        let rental: Rental = serde_json::from_str(
            r#"{
                "id": "r1",
                "name": "Paddle Board",
                "category": "Water",
                "hourlyRate": 35.0,
                "dailyRate": 150.0,
                "quantityAvailable": 4,
                "status": "Available"
            }"#,
        )
        .unwrap();
        assert!(rental.is_available());
        assert_eq!(rental.hourly_rate, 35.0);
        assert_eq!(rental.daily_rate, Some(150.0));
    }
}
