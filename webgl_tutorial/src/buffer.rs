use js_sys::{Float32Array, Uint8Array};
use web_sys::{WebGl2RenderingContext as Gl, WebGlBuffer, WebGlVertexArrayObject};

use crate::canvas::ContextError;

/// A vertex array object.
///
/// Attribute pointers set up while the vertex array is bound are recorded on it; binding it
/// again before a draw call restores all of them at once.
pub struct VertexArray {
    object: WebGlVertexArrayObject,
}

impl VertexArray {
    pub fn new(gl: &Gl) -> Result<Self, ContextError> {
        let object = gl
            .create_vertex_array()
            .ok_or(ContextError::Allocation("vertex array"))?;

        Ok(VertexArray { object })
    }

    pub fn bind(&self, gl: &Gl) {
        gl.bind_vertex_array(Some(&self.object));
    }

    pub fn unbind(gl: &Gl) {
        gl.bind_vertex_array(None);
    }
}

fn create_array_buffer(gl: &Gl) -> Result<WebGlBuffer, ContextError> {
    let buffer = gl
        .create_buffer()
        .ok_or(ContextError::Allocation("buffer"))?;

    gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));

    Ok(buffer)
}

fn enable_attribute(gl: &Gl, location: u32, size: i32, data_type: u32, normalized: bool) {
    gl.enable_vertex_attrib_array(location);

    // Tightly packed (stride 0) and starting at the beginning of the buffer.
    gl.vertex_attrib_pointer_with_i32(location, size, data_type, normalized, 0, 0);
}

/// Uploads `data` into a new buffer and feeds it to the attribute at `location`, `size` floats
/// per vertex.
pub fn upload_f32_attribute(
    gl: &Gl,
    location: u32,
    data: &[f32],
    size: i32,
    normalized: bool,
) -> Result<WebGlBuffer, ContextError> {
    let buffer = create_array_buffer(gl)?;

    gl.buffer_data_with_array_buffer_view(
        Gl::ARRAY_BUFFER,
        &Float32Array::from(data),
        Gl::STATIC_DRAW,
    );
    enable_attribute(gl, location, size, Gl::FLOAT, normalized);

    Ok(buffer)
}

/// Like [upload_f32_attribute], for unsigned bytes (typically normalized colors).
pub fn upload_u8_attribute(
    gl: &Gl,
    location: u32,
    data: &[u8],
    size: i32,
    normalized: bool,
) -> Result<WebGlBuffer, ContextError> {
    let buffer = create_array_buffer(gl)?;

    gl.buffer_data_with_array_buffer_view(
        Gl::ARRAY_BUFFER,
        &Uint8Array::from(data),
        Gl::STATIC_DRAW,
    );
    enable_attribute(gl, location, size, Gl::UNSIGNED_BYTE, normalized);

    Ok(buffer)
}

/// Replaces the contents of `buffer` with `data`.
pub fn refill_f32(gl: &Gl, buffer: &WebGlBuffer, data: &[f32]) {
    gl.bind_buffer(Gl::ARRAY_BUFFER, Some(buffer));
    gl.buffer_data_with_array_buffer_view(
        Gl::ARRAY_BUFFER,
        &Float32Array::from(data),
        Gl::DYNAMIC_DRAW,
    );
}
