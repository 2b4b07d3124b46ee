use std::{error, fmt::Display, rc::Rc};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("server rejected the request with status {0}")]
    Status(u16),
    #[error("system error {0}")]
    SystemError(#[from] SystemError),
}

/// Transport-level failures: the server was unreachable or the response
/// could not be turned into the expected type. Application-level rejections
/// are carried in the response bodies themselves.
#[derive(Clone, Debug)]
pub enum SystemError {
    Message(String),
    GlooError(Rc<gloo_net::Error>),
    Anyhow(Rc<anyhow::Error>),
}

impl SystemError {
    /// Wraps a raw `JsValue` error from a DOM API such as `FormData`.
    pub(crate) fn js(value: wasm_bindgen::JsValue) -> Self {
        Self::Message(format!("{value:?}"))
    }
}

impl From<anyhow::Error> for SystemError {
    fn from(value: anyhow::Error) -> Self {
        Self::Anyhow(Rc::new(value))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        Self::SystemError(value.into())
    }
}

impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(Rc::new(value))
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        Self::SystemError(value.into())
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Message(message) => write!(f, "{}", message),
            SystemError::GlooError(gloo) => write!(f, "{}", gloo),
            SystemError::Anyhow(anyhow) => write!(f, "{}", anyhow),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SystemError::Message(_) => None,
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
            SystemError::Anyhow(anyhow) => Some(anyhow.root_cause()),
        }
    }
}

pub(crate) type AppResult<T> = Result<T, AppError>;
