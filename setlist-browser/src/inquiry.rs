//! Contact side of the inquiry hand-off.
//!
//! The browser sends favorites to the contact page as a `setlist` query
//! parameter. This module decodes that parameter, renders the booking
//! inquiry and passes it to a [`NotificationSender`].
use crate::export::{SETLIST_PARAM, parse_page};
use percent_encoding::percent_decode_str;
use setlist_catalog::Catalog;
use setlist_core::config::ContactConfig;
use setlist_core::error::{Result, SetlistError};
use setlist_core::song::Song;
use std::future::Future;
use tracing::{error, info, warn};

pub const SUCCESS_MESSAGE: &str =
    "Thank you for your inquiry! We'll be in touch within 24 hours to discuss your event.";
pub const FAILURE_MESSAGE: &str =
    "We're sorry, there was an error submitting your inquiry. Please try again or contact us directly.";

const NOT_SPECIFIED: &str = "Not specified";
const NONE_PROVIDED: &str = "None provided";

/// Split a raw `setlist` parameter value into song ids, decoding it the way
/// the contact page's query parser does (`+` is a space). Empty entries are
/// dropped; ids are not checked against any catalog.
pub fn decode_setlist_param(raw: &str) -> Vec<String> {
    let plus_as_space = raw.replace('+', " ");
    split_setlist_ids(&percent_decode_str(&plus_as_space).decode_utf8_lossy())
}

fn split_setlist_ids(decoded: &str) -> Vec<String> {
    decoded
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Pull the `setlist` parameter out of a contact page URL, absolute or
/// site-relative. The first occurrence wins.
pub fn contact_url_setlist(url: &str) -> Vec<String> {
    let Ok((url, _)) = parse_page(url) else {
        return Vec::new();
    };

    url.query_pairs()
        .find(|(key, _)| key == SETLIST_PARAM)
        .map(|(_, value)| split_setlist_ids(&value))
        .unwrap_or_default()
}

/// A booking inquiry as filled in on the contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_date: String,
    pub event_type: String,
    pub guests: String,
    pub venue: String,
    pub location: String,
    pub preferences: String,
    /// Raw `setlist` parameter carried over from the browser.
    pub setlist: String,
}

impl InquiryForm {
    /// Name, email and event date are required.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("event date", &self.event_date),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(SetlistError::InvalidInput(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            )));
        }

        if !self.email.contains('@') {
            return Err(SetlistError::InvalidInput(format!(
                "Invalid email address: {}",
                self.email
            )));
        }

        Ok(())
    }

    pub fn setlist_ids(&self) -> Vec<String> {
        decode_setlist_param(&self.setlist)
    }

    /// Plain-text notification body.
    pub fn render_message(&self, songs: &[&Song]) -> String {
        let mut out = format!(
            "New Contact Form Submission - Legacy Live Entertainment\n\
             \n\
             Contact Information:\n\
             - Name: {}\n\
             - Email: {}\n\
             - Phone: {}\n\
             \n\
             Event Details:\n\
             - Event Date: {}\n\
             - Event Type: {}\n\
             - Expected Guests: {}\n\
             - Venue: {}\n\
             - Location: {}\n\
             \n\
             Additional Information:\n\
             {}\n",
            self.name,
            self.email,
            self.phone,
            self.event_date,
            self.event_type,
            or_default(&self.guests, NOT_SPECIFIED),
            or_default(&self.venue, NOT_SPECIFIED),
            or_default(&self.location, NOT_SPECIFIED),
            or_default(&self.preferences, NONE_PROVIDED),
        );

        if !songs.is_empty() {
            out.push_str(&format!("\nRequested Songs ({}):\n", songs.len()));
            for song in songs {
                out.push_str(&format!("- {}\n", song.display_line()));
            }
        }

        out.push_str("\n---\nThis inquiry was submitted through the Legacy Live Entertainment website.");
        out
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
}

/// Delivers a rendered inquiry.
pub trait NotificationSender {
    fn send(&self, notification: &Notification) -> impl Future<Output = Result<()>> + Send;
}

/// Writes notifications to the log instead of delivering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSender;

impl NotificationSender for LogSender {
    async fn send(&self, notification: &Notification) -> Result<()> {
        info!(
            recipients = %notification.recipients.join(", "),
            subject = %notification.subject,
            "Inquiry notification"
        );
        info!("{}", notification.body);
        Ok(())
    }
}

/// What the contact page shows after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryOutcome {
    pub success: bool,
    pub message: String,
}

impl InquiryOutcome {
    fn success() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_owned(),
        }
    }

    fn failure() -> Self {
        Self {
            success: false,
            message: FAILURE_MESSAGE.to_owned(),
        }
    }
}

pub fn build_notification(form: &InquiryForm, catalog: &Catalog, contact: &ContactConfig) -> Notification {
    let ids = form.setlist_ids();
    let songs = catalog.resolve(&ids);
    if songs.len() < ids.len() {
        warn!(
            "{} requested song id(s) not in the catalog",
            ids.len() - songs.len()
        );
    }

    Notification {
        recipients: contact
            .recipients
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .map(str::to_owned)
            .collect(),
        subject: contact.subject.clone(),
        body: form.render_message(&songs),
    }
}

/// Validate, render and send an inquiry. Errors never escape; they become
/// the failure outcome and are logged.
pub async fn submit_inquiry<N>(
    sender: &N,
    form: &InquiryForm,
    catalog: &Catalog,
    contact: &ContactConfig,
) -> InquiryOutcome
where
    N: NotificationSender + ?Sized,
{
    if let Err(e) = form.validate() {
        warn!("Rejected inquiry: {}", e);
        return InquiryOutcome::failure();
    }

    let notification = build_notification(form, catalog, contact);
    match sender.send(&notification).await {
        Ok(()) => {
            info!("Inquiry from {} sent", form.email);
            InquiryOutcome::success()
        }
        Err(e) => {
            error!("Contact form error: {}", e);
            InquiryOutcome::failure()
        }
    }
}
