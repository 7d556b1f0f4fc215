//! Contact and group endpoints.

use wapi_core::error::WapiResult;
use wapi_models::{Contact, Group};

use crate::client::WapiClient;
use crate::response::ApiResponse;
use crate::validate;

impl WapiClient {
    /// List the session's contacts.
    pub async fn get_contacts(&self, session_id: &str) -> WapiResult<ApiResponse<Vec<Contact>>> {
        validate::require_session_id(session_id)?;
        let url = self.endpoint(&["contact", "getcontacts"], Some(session_id))?;
        self.get(url).await
    }

    /// Get a single contact by phone number.
    pub async fn get_contact(
        &self,
        phone: &str,
        session_id: &str,
    ) -> WapiResult<ApiResponse<Contact>> {
        validate::require_phone(phone)?;
        validate::require_session_id(session_id)?;
        let url = self.endpoint(&["contact", "getcontact", phone], Some(session_id))?;
        self.get(url).await
    }

    /// Get the profile picture URL of a phone number.
    pub async fn get_profile_picture(
        &self,
        phone: &str,
        session_id: &str,
    ) -> WapiResult<ApiResponse<String>> {
        validate::require_phone(phone)?;
        validate::require_session_id(session_id)?;
        let url = self.endpoint(&["contact", "getprofilepic", phone], Some(session_id))?;
        self.get(url).await
    }

    /// Check whether a phone number has an account on the platform.
    pub async fn is_registered_user(
        &self,
        phone: &str,
        session_id: &str,
    ) -> WapiResult<ApiResponse<bool>> {
        validate::require_phone(phone)?;
        validate::require_session_id(session_id)?;
        let url = self.endpoint(&["contact", "isregistereduser", phone], Some(session_id))?;
        self.get(url).await
    }

    /// List the groups the session participates in.
    pub async fn get_groups(&self, session_id: &str) -> WapiResult<ApiResponse<Vec<Group>>> {
        validate::require_session_id(session_id)?;
        let url = self.endpoint(&["contact", "getgroups"], Some(session_id))?;
        self.get(url).await
    }
}
