use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use portfolio_api_types::{ContactResponse, ProjectImage, SearchResult, ToggleResponse};
use web_sys::{FormData, HtmlFormElement};

use crate::error::{AppError, AppResult, SystemError};
use crate::i18n::Language;

/// Looks up projects matching `query`. Safe to call repeatedly; the widget
/// layer is responsible for debouncing and for discarding stale responses.
pub(crate) async fn search(query: &str, lang: Language) -> AppResult<Vec<SearchResult>> {
    let q = utf8_percent_encode(query, NON_ALPHANUMERIC);
    let response = Request::get(&format!("/api/search?q={q}&lang={}", lang.as_str()))
        .send()
        .await
        .map_err(SystemError::from)?;
    if !response.ok() {
        return Err(AppError::Status(response.status()));
    }
    Ok(response.json().await.map_err(SystemError::from)?)
}

pub(crate) struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    fn form_data(&self) -> Result<FormData, SystemError> {
        let data = FormData::new().map_err(SystemError::js)?;
        data.append_with_str("name", &self.name)
            .map_err(SystemError::js)?;
        data.append_with_str("email", &self.email)
            .map_err(SystemError::js)?;
        data.append_with_str("subject", &self.subject)
            .map_err(SystemError::js)?;
        data.append_with_str("message", &self.message)
            .map_err(SystemError::js)?;
        Ok(data)
    }
}

/// Posts the contact form as multipart form data. Application-level
/// rejections come back as `ContactResponse { success: false, .. }`; an
/// `Err` here always means the transport or the body parse failed.
pub(crate) async fn send_contact(submission: &ContactSubmission) -> AppResult<ContactResponse> {
    let body = submission.form_data()?;
    let response = Request::post("/contact")
        .header("X-Requested-With", "XMLHttpRequest")
        .body(body)
        .map_err(SystemError::from)?
        .send()
        .await
        .map_err(SystemError::from)?;
    Ok(response.json().await.map_err(SystemError::from)?)
}

/// Streams the admin project form to its declared action and returns the
/// final URL after the server redirect.
pub(crate) async fn submit_project(action: &str, form: &HtmlFormElement) -> AppResult<String> {
    let data = FormData::new_with_form(form).map_err(SystemError::js)?;
    let response = Request::post(action)
        .body(data)
        .map_err(SystemError::from)?
        .send()
        .await
        .map_err(SystemError::from)?;
    if !response.ok() {
        return Err(AppError::Status(response.status()));
    }
    Ok(response.url())
}

pub(crate) async fn delete_project_image(image: &ProjectImage) -> AppResult<()> {
    let response = Request::delete(&image.delete_url())
        .send()
        .await
        .map_err(SystemError::from)?;
    if !response.ok() {
        return Err(AppError::Status(response.status()));
    }
    Ok(())
}

pub(crate) async fn toggle_dark() -> AppResult<bool> {
    let response = Request::get("/toggle_dark")
        .send()
        .await
        .map_err(SystemError::from)?;
    let toggled: ToggleResponse = response.json().await.map_err(SystemError::from)?;
    Ok(toggled.success)
}
