use failure::Fail;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlCanvasElement, WebGl2RenderingContext as Gl};

use crate::context_options::ContextOptions;
use crate::util::js_error_message;

#[derive(Fail, Debug, PartialEq)]
pub enum ContextError {
    #[fail(display = "No global `window` or `document` exists")]
    NoWindow,
    #[fail(display = "No element with id `{}`", _0)]
    MissingElement(String),
    #[fail(display = "Element `{}` is not a canvas element", _0)]
    NotACanvas(String),
    #[fail(display = "WebGL 2.0 is not available in this browser")]
    Unsupported,
    #[fail(display = "Context attributes could not be converted: {}", _0)]
    InvalidOptions(String),
    #[fail(display = "Unable to create {} object", _0)]
    Allocation(&'static str),
    #[fail(display = "JavaScript error: {}", _0)]
    Js(String),
}

/// Computes the drawing buffer size that matches a canvas displayed at `client_width` by
/// `client_height` CSS pixels.
pub fn display_size(client_width: i32, client_height: i32, device_pixel_ratio: f64) -> (u32, u32) {
    let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };

    let width = (client_width.max(0) as f64 * ratio).floor() as u32;
    let height = (client_height.max(0) as f64 * ratio).floor() as u32;

    (width, height)
}

/// Resizes the drawing buffer of `canvas` to the size it is displayed at in device pixels.
///
/// Returns `true` if the size changed. The canvas is left untouched when it already has the
/// right size, since assigning its width or height clears the drawing buffer.
pub fn resize_to_display_size(canvas: &HtmlCanvasElement) -> bool {
    let ratio = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let (width, height) = display_size(canvas.client_width(), canvas.client_height(), ratio);

    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);

        true
    } else {
        false
    }
}

pub fn canvas_by_id(id: &str) -> Result<HtmlCanvasElement, ContextError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(ContextError::NoWindow)?;

    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| ContextError::MissingElement(id.to_string()))?;

    element
        .dyn_into()
        .map_err(|_| ContextError::NotACanvas(id.to_string()))
}

/// Obtains a WebGL 2.0 context for `canvas`.
pub fn webgl2_context(
    canvas: &HtmlCanvasElement,
    options: &ContextOptions,
) -> Result<Gl, ContextError> {
    let attributes = options
        .to_js()
        .map_err(|err| ContextError::InvalidOptions(err.to_string()))?;

    let context = canvas
        .get_context_with_context_options("webgl2", &attributes)
        .map_err(|err| ContextError::Js(js_error_message(&err)))?
        .ok_or(ContextError::Unsupported)?;

    context.dyn_into().map_err(|_| ContextError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_size() {
        assert_eq!(display_size(400, 300, 1.0), (400, 300));
        assert_eq!(display_size(400, 300, 2.0), (800, 600));
        assert_eq!(display_size(401, 301, 1.5), (601, 451));
    }

    #[test]
    fn test_display_size_invalid_ratio() {
        assert_eq!(display_size(400, 300, 0.0), (400, 300));
        assert_eq!(display_size(400, 300, -2.0), (400, 300));
        assert_eq!(display_size(400, 300, std::f64::NAN), (400, 300));
    }

    #[test]
    fn test_display_size_negative_client_size() {
        assert_eq!(display_size(-10, 300, 2.0), (0, 600));
    }
}
