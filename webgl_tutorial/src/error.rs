use failure::Fail;
use log::error;
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::canvas::ContextError;
use crate::fetch::FetchError;
use crate::scene::SceneError;
use crate::shader::{CreateProgramError, MissingAttribute};
use crate::util::js_error_message;

const UNSUPPORTED_MESSAGE: &str = "Webgl is not available in your browser";

/// The error a tutorial stage bails out with.
#[derive(Fail, Debug, PartialEq)]
pub enum StageError {
    #[fail(display = "{}", _0)]
    Context(#[cause] ContextError),
    #[fail(display = "{}", _0)]
    Program(#[cause] CreateProgramError),
    #[fail(display = "{}", _0)]
    Attribute(#[cause] MissingAttribute),
    #[fail(display = "{}", _0)]
    Fetch(#[cause] FetchError),
    #[fail(display = "{}", _0)]
    Scene(#[cause] SceneError),
    #[fail(display = "JavaScript error: {}", _0)]
    Js(String),
}

impl StageError {
    /// Logs the error; a browser without WebGL 2.0 additionally gets an alert.
    pub fn report(&self) {
        error!("{}", self);

        if let StageError::Context(ContextError::Unsupported) = self {
            if let Some(window) = window() {
                let _ = window.alert_with_message(UNSUPPORTED_MESSAGE);
            }
        }
    }
}

impl From<ContextError> for StageError {
    fn from(error: ContextError) -> Self {
        StageError::Context(error)
    }
}

impl From<CreateProgramError> for StageError {
    fn from(error: CreateProgramError) -> Self {
        StageError::Program(error)
    }
}

impl From<MissingAttribute> for StageError {
    fn from(error: MissingAttribute) -> Self {
        StageError::Attribute(error)
    }
}

impl From<FetchError> for StageError {
    fn from(error: FetchError) -> Self {
        StageError::Fetch(error)
    }
}

impl From<SceneError> for StageError {
    fn from(error: SceneError) -> Self {
        StageError::Scene(error)
    }
}

impl From<JsValue> for StageError {
    fn from(value: JsValue) -> Self {
        StageError::Js(js_error_message(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_error_display_forwards_cause() {
        let error = StageError::from(ContextError::MissingElement("c".to_string()));

        assert_eq!(error.to_string(), "No element with id `c`");
    }

    #[test]
    fn test_stage_error_from_scene_error() {
        let error: StageError = SceneError::Empty.into();

        assert_eq!(error, StageError::Scene(SceneError::Empty));
        assert!(error.cause().is_some());
    }
}
