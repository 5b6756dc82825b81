use failure::Fail;
use futures::future::try_join;
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlImageElement, Response};

use crate::event::next_event;
use crate::scene::{Scene, SceneError};
use crate::shader::ShaderSources;
use crate::util::js_error_message;

#[derive(Fail, Debug, PartialEq)]
pub enum FetchError {
    #[fail(display = "No global `window` exists")]
    NoWindow,
    #[fail(display = "Request for `{}` failed: {}", url, message)]
    Network { url: String, message: String },
    #[fail(display = "Request for `{}` returned status {}", url, status)]
    Status { url: String, status: u16 },
    #[fail(display = "Invalid scene `{}`: {}", url, error)]
    Scene { url: String, error: SceneError },
    #[fail(display = "Image `{}` failed to load: {}", url, message)]
    Image { url: String, message: String },
}

fn network_error(url: &str, value: &JsValue) -> FetchError {
    FetchError::Network {
        url: url.to_string(),
        message: js_error_message(value),
    }
}

fn image_error(url: &str, message: impl Into<String>) -> FetchError {
    FetchError::Image {
        url: url.to_string(),
        message: message.into(),
    }
}

/// Fetches `url` and returns the response body as text.
///
/// Responses with a status outside the `200-299` range are errors.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = window().ok_or(FetchError::NoWindow)?;

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| network_error(url, &err))?
        .dyn_into()
        .map_err(|err| network_error(url, &err))?;

    if !response.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = response.text().map_err(|err| network_error(url, &err))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|err| network_error(url, &err))?
        .as_string()
        .ok_or_else(|| FetchError::Network {
            url: url.to_string(),
            message: "response body is not text".to_string(),
        })?;

    debug!("fetched `{}` ({} bytes)", url, text.len());

    Ok(text)
}

/// Fetches the vertex and fragment shader text concurrently.
pub async fn load_shader_pair(
    vertex_url: &str,
    fragment_url: &str,
) -> Result<ShaderSources, FetchError> {
    let (vertex, fragment) = try_join(fetch_text(vertex_url), fetch_text(fragment_url)).await?;

    Ok(ShaderSources { vertex, fragment })
}

pub async fn load_scene(url: &str) -> Result<Scene, FetchError> {
    let text = fetch_text(url).await?;

    Scene::from_json(&text).map_err(|error| FetchError::Scene {
        url: url.to_string(),
        error,
    })
}

/// Loads an image element from `url`, resolving once the image has been decoded.
pub async fn load_image(url: &str) -> Result<HtmlImageElement, FetchError> {
    let image = HtmlImageElement::new().map_err(|err| image_error(url, js_error_message(&err)))?;

    // Listen before setting the source, so that a cached image can't fire `load` unobserved.
    let loaded = next_event(&image, &["load", "error"])
        .map_err(|err| image_error(url, js_error_message(&err)))?;

    image.set_src(url);

    let event = loaded
        .await
        .map_err(|err| image_error(url, js_error_message(&err)))?;

    if event.type_() == "error" {
        return Err(image_error(url, "the image could not be fetched or decoded"));
    }

    debug!(
        "loaded image `{}` ({}x{})",
        url,
        image.natural_width(),
        image.natural_height()
    );

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_error_is_not_a_network_error() {
        let error = image_error("public/img/f-texture.png", "listener dropped");

        assert_eq!(
            error,
            FetchError::Image {
                url: "public/img/f-texture.png".to_string(),
                message: "listener dropped".to_string(),
            }
        );
        assert_eq!(
            error.to_string(),
            "Image `public/img/f-texture.png` failed to load: listener dropped"
        );
    }
}
