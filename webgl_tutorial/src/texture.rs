use web_sys::{HtmlImageElement, WebGl2RenderingContext as Gl, WebGlTexture};

use crate::canvas::ContextError;
use crate::util::js_error_message;

#[derive(Clone)]
pub struct Texture {
    object: WebGlTexture,
}

impl Texture {
    /// A 2D texture holding a single `texel`, to draw with until the real image has loaded.
    pub fn placeholder(gl: &Gl, texel: [u8; 4]) -> Result<Self, ContextError> {
        let object = gl
            .create_texture()
            .ok_or(ContextError::Allocation("texture"))?;

        gl.bind_texture(Gl::TEXTURE_2D, Some(&object));
        gl.tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
            Gl::TEXTURE_2D,
            0,
            Gl::RGBA as i32,
            1,
            1,
            0,
            Gl::RGBA,
            Gl::UNSIGNED_BYTE,
            Some(&texel[..]),
        )
        .map_err(|err| ContextError::Js(js_error_message(&err)))?;

        Ok(Texture { object })
    }

    pub fn bind(&self, gl: &Gl) {
        gl.bind_texture(Gl::TEXTURE_2D, Some(&self.object));
    }

    /// Replaces the texture's image with `image` and generates its mipmap chain.
    pub fn upload_image(&self, gl: &Gl, image: &HtmlImageElement) -> Result<(), ContextError> {
        self.bind(gl);

        gl.tex_image_2d_with_u32_and_u32_and_html_image_element(
            Gl::TEXTURE_2D,
            0,
            Gl::RGBA as i32,
            Gl::RGBA,
            Gl::UNSIGNED_BYTE,
            image,
        )
        .map_err(|err| ContextError::Js(js_error_message(&err)))?;

        gl.generate_mipmap(Gl::TEXTURE_2D);

        Ok(())
    }
}
