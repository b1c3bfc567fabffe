//! API Layer
//!
//! Abstract interface to the remote CRM service. The panel only talks to
//! this trait; `HttpCrmApi` is the production implementation.

mod http;


use async_trait::async_trait;

use crate::domain::{Contact, Stats};
use crate::error::CrmResult;

pub use http::{contact_path, stats_path, CreateContactRequest, HttpCrmApi};

/// Remote CRM operations
///
/// Futures are `?Send`: the browser event loop is single-threaded and
/// fetch-backed futures cannot cross threads.
#[async_trait(?Send)]
pub trait CrmApi {
    /// `GET /contacts/{userId}`
    async fn list_contacts(&self, user_id: &str) -> CrmResult<Vec<Contact>>;

    /// `GET /stats/{userId}`
    async fn fetch_stats(&self, user_id: &str) -> CrmResult<Stats>;

    /// `POST /contacts` with the raw template text; the server parses it.
    async fn create_contact(&self, user_id: &str, contact_data: &str) -> CrmResult<Option<Contact>>;
}
