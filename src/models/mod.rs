pub mod bookings;
pub mod payments;
pub mod resource;
pub mod session;
