use crate::backend::{BackendError, BookingOperations};
use crate::models::resource::{Rental, Resource, ResourceKind, Tour};

/// The bookable slice of the inventory: active tours and available rentals.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub tours: Vec<Tour>,
    pub rentals: Vec<Rental>,
}

impl Catalog {
    pub fn tour(&self, id: &str) -> Option<&Tour> {
        self.tours.iter().find(|tour| tour.id == id)
    }

    pub fn rental(&self, id: &str) -> Option<&Rental> {
        self.rentals.iter().find(|rental| rental.id == id)
    }

    /// Look up a resource for a booking flow entry point.
    pub fn resource(&self, kind: ResourceKind, id: &str) -> Option<Resource> {
        match kind {
            ResourceKind::Tour => self.tour(id).cloned().map(Resource::Tour),
            ResourceKind::Rental => self.rental(id).cloned().map(Resource::Rental),
        }
    }
}

pub struct CatalogService;

impl CatalogService {
    /// Fetch tours and rentals and keep only what can actually be booked.
    pub async fn load<B: BookingOperations>(backend: &B) -> Result<Catalog, BackendError> {
        let mut tours = backend.list_tours().await?;
        tours.retain(Tour::is_active);
        let mut rentals = backend.list_rentals().await?;
        rentals.retain(Rental::is_available);
        log::debug!(
            "catalog loaded: {} tours, {} rentals",
            tours.len(),
            rentals.len()
        );
        Ok(Catalog { tours, rentals })
    }
}
