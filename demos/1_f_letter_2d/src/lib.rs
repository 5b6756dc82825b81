// A flat "F", positioned with a matrix.
//
// This stage builds on `0_rectangles`. Instead of sending the canvas resolution to the vertex
// shader, we now compute a single 3x3 matrix on the CPU that scales, rotates and translates the
// letter and then projects pixel coordinates into clip space. The vertex shader only has to
// multiply each position by `u_matrix`.
//
// The geometry is built in: three rectangles (the column, the top rung and the middle rung) make
// up the letter.

use cgmath::{Deg, Rad, Vector2};
use log::{info, LevelFilter};

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use webgl_tutorial::buffer::{upload_f32_attribute, VertexArray};
use webgl_tutorial::canvas::{canvas_by_id, resize_to_display_size, webgl2_context};
use webgl_tutorial::context_options::ContextOptions;
use webgl_tutorial::fetch::load_shader_pair;
use webgl_tutorial::geometry::f_letter_2d;
use webgl_tutorial::logging;
use webgl_tutorial::shader::Program;
use webgl_tutorial::transform::{matrix3_columns, Transform2D};
use webgl_tutorial::{Gl, StageError};

const COLOR: [f32; 4] = [0.2, 0.6, 0.9, 1.0];

fn transform() -> Transform2D {
    Transform2D {
        translation: Vector2::new(150.0, 100.0),
        rotation: Rad::from(Deg(20.0)),
        scale: Vector2::new(1.0, 1.0),
    }
}

async fn draw_scene() -> Result<(), StageError> {
    let canvas = canvas_by_id("c")?;
    let gl = webgl2_context(&canvas, &ContextOptions::default())?;

    let sources = load_shader_pair(
        "public/shader/vertex/shader.vert",
        "public/shader/fragment/fragment.frag",
    )
    .await?;
    let program = Program::from_sources(&gl, &sources)?;

    let vertices = f_letter_2d();
    let vertex_array = VertexArray::new(&gl)?;

    vertex_array.bind(&gl);
    upload_f32_attribute(
        &gl,
        program.attribute_location(&gl, "a_position")?,
        &vertices,
        2,
        false,
    )?;
    VertexArray::unbind(&gl);

    resize_to_display_size(&canvas);
    gl.viewport(0, 0, canvas.width() as i32, canvas.height() as i32);
    gl.clear_color(0.0, 0.0, 0.0, 0.0);
    gl.clear(Gl::COLOR_BUFFER_BIT);

    program.use_program(&gl);
    vertex_array.bind(&gl);

    let matrix = transform().matrix(canvas.client_width() as f32, canvas.client_height() as f32);

    gl.uniform_matrix3fv_with_f32_array(
        program.uniform_location(&gl, "u_matrix").as_ref(),
        false,
        &matrix3_columns(&matrix),
    );

    let [r, g, b, a] = COLOR;

    gl.uniform4f(program.uniform_location(&gl, "u_color").as_ref(), r, g, b, a);
    gl.draw_arrays(Gl::TRIANGLES, 0, (vertices.len() / 2) as i32);

    info!("drew the 2D F");

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    logging::init(LevelFilter::Debug);

    spawn_local(async {
        if let Err(err) = draw_scene().await {
            err.report();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    use cgmath::Vector3;

    #[test]
    fn test_letter_stays_on_a_400_by_300_canvas() {
        let matrix = transform().matrix(400.0, 300.0);

        for vertex in f_letter_2d().chunks(2) {
            let clip = matrix * Vector3::new(vertex[0], vertex[1], 1.0);

            assert!(clip.x >= -1.0 && clip.x <= 1.0, "x out of view: {}", clip.x);
            assert!(clip.y >= -1.0 && clip.y <= 1.0, "y out of view: {}", clip.y);
        }
    }
}
