use contracts::domain::a002_contact::message::ContactMessage;

use crate::shared::api::{ApiClient, ApiError};

pub const CONTACT_ENDPOINT: &str = "/contact/";

/// Submit the contact form as JSON. The response body is not used.
pub async fn send_contact(api: &ApiClient, message: &ContactMessage) -> Result<(), ApiError> {
    api.post_api(CONTACT_ENDPOINT, message).await.map(|_| ())
}
