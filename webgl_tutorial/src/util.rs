use wasm_bindgen::{JsCast, JsValue};

/// Turns a thrown JavaScript value into a message that can be stored in an error type.
///
/// JavaScript values are not `Send`, so errors keep the message rather than the value itself.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }

    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }

    format!("{:?}", value)
}
