use chrono::NaiveDateTime;

use crate::models::bookings::Booking;
use crate::models::payments::PaymentAttempt;
use crate::models::session::Customer;
use crate::services::pricing_service::PricingService;

const BUSINESS_NAME: &str = "BACKYARD ADVENTURES";
const SUPPORT_EMAIL: &str = "info@backyardadventures.com";
const SUPPORT_PHONE: &str = "(555) 123-4567";

pub struct ReceiptService;

impl ReceiptService {
    /// Render a completed booking + payment pair as a plain-text receipt.
    ///
    /// Deterministic: the generation timestamp is an input, and the caller
    /// handles offering the text as a download.
    pub fn render(
        booking: &Booking,
        attempt: &PaymentAttempt,
        customer: &Customer,
        generated_at: NaiveDateTime,
    ) -> String {
        let reference = attempt.receipt_reference();
        format!(
            "{business}\n\
             Payment Receipt\n\
             \n\
             Receipt ID: {reference}\n\
             Date: {date}\n\
             Time: {time}\n\
             \n\
             Customer Information:\n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             \n\
             Payment Details:\n\
             Booking: {booking_type} on {booking_date}, {start} - {end}\n\
             Amount: ${amount:.2}\n\
             Payment Method: {method}\n\
             Status: {status:?}\n\
             \n\
             Thank you for choosing Backyard Adventures!\n\
             \n\
             For questions or support:\n\
             Email: {support_email}\n\
             Phone: {support_phone}\n",
            business = BUSINESS_NAME,
            reference = reference,
            date = generated_at.format("%Y-%m-%d"),
            time = generated_at.format("%H:%M:%S"),
            name = customer.full_name,
            email = customer.email,
            phone = customer.phone.as_deref().unwrap_or("N/A"),
            booking_type = booking.booking_type,
            booking_date = booking.booking_date,
            start = booking.start_time.format("%H:%M"),
            end = booking.end_time.format("%H:%M"),
            amount = PricingService::round_for_display(attempt.amount),
            method = attempt.method,
            status = attempt.status,
            support_email = SUPPORT_EMAIL,
            support_phone = SUPPORT_PHONE,
        )
    }

    /// Deterministic download name derived from the transaction reference
    /// and date.
    pub fn file_name(attempt: &PaymentAttempt, generated_at: NaiveDateTime) -> String {
        format!(
            "BackyardAdventures-Receipt-{}-{}.txt",
            attempt.receipt_reference(),
            generated_at.format("%Y-%m-%d")
        )
    }
}
