pub mod booking_request_service;
pub mod booking_service;
pub mod catalog_service;
pub mod payment;
pub mod pricing_service;
pub mod receipt_service;
pub mod records_service;
