//! Booking email bodies
//!
//! Every message carries a plain-text and an HTML body. Submitted values are escaped
//! before they are placed into HTML.

use html_escape::encode_text;
use kamal_common::{Booking, EmailMessage};
use kamal_config::MailConfig;

/// Confirmation sent to the customer who booked.
///
/// Returns `None` when the booking carries no usable email address.
pub fn customer_confirmation(booking: &Booking, mail: &MailConfig) -> Option<EmailMessage> {
    let to = booking
        .email
        .as_deref()
        .map(str::trim)
        .filter(|email| !email.is_empty())?;

    let brand = &mail.brand_name;
    let text_body = format!(
        "Hi {name},\n\nYour booking has been confirmed.\n\nDate: {date}\nTime: {time}\n\n– {brand} Team\n",
        name = booking.name_or_empty(),
        date = booking.date_or_empty(),
        time = booking.time_or_empty(),
    );
    let html_body = format!(
        "<h2>Demo Confirmed</h2>\
         <p>Hi {name},</p>\
         <p>Your booking has been confirmed.</p>\
         <p><strong>Date:</strong> {date}<br><strong>Time:</strong> {time}</p>\
         <p>– {brand} Team</p>",
        name = encode_text(booking.name_or_empty()),
        date = encode_text(booking.date_or_empty()),
        time = encode_text(booking.time_or_empty()),
        brand = encode_text(brand),
    );

    Some(EmailMessage {
        to: to.to_string(),
        from: mail.from_email.clone(),
        subject: format!("Booking Confirmation - {}", brand),
        text_body,
        html_body,
    })
}

/// Alert sent to the business inbox for every new booking.
pub fn internal_alert(booking: &Booking, mail: &MailConfig) -> EmailMessage {
    let fields = [
        ("Name", booking.name_or_empty()),
        ("Email", booking.email_or_empty()),
        ("Phone", booking.phone_or_empty()),
        ("Date", booking.date_or_empty()),
        ("Time", booking.time_or_empty()),
    ];

    let mut text_body = String::from("New booking received!\n\n");
    let mut html_body = format!("<h2>New Booking Alert</h2><p>Booking #{}</p><ul>", booking.id);
    for (label, value) in fields {
        text_body.push_str(&format!("{}: {}\n", label, value));
        html_body.push_str(&format!(
            "<li><strong>{}:</strong> {}</li>",
            label,
            encode_text(value)
        ));
    }
    html_body.push_str("</ul>");

    EmailMessage {
        to: mail.internal_recipient().to_string(),
        from: mail.from_email.clone(),
        subject: format!("New Demo Booking - {}", mail.brand_name),
        text_body,
        html_body,
    }
}
