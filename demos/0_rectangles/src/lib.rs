// Fifty random rectangles in random colors.
//
// The first stage: it fetches a shader pair, compiles and links it, and then draws 50 rectangles.
// The vertex shader works in pixels: we pass in the canvas resolution as the `u_resolution`
// uniform and let the shader convert pixel coordinates into clip space. Every rectangle reuses the
// same buffer: we refill it with 6 new vertices and pick a new `u_color` before each draw call.
//
// The scene is drawn once, after the window has finished loading.

use log::{info, LevelFilter};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use webgl_tutorial::buffer::{refill_f32, upload_f32_attribute, VertexArray};
use webgl_tutorial::canvas::{canvas_by_id, resize_to_display_size, webgl2_context};
use webgl_tutorial::context_options::ContextOptions;
use webgl_tutorial::event::window_loaded;
use webgl_tutorial::fetch::load_shader_pair;
use webgl_tutorial::geometry::{random_color, random_rectangle};
use webgl_tutorial::logging;
use webgl_tutorial::shader::Program;
use webgl_tutorial::{Gl, StageError};

const RECTANGLE_COUNT: usize = 50;

// Rectangle positions and sizes are random integers below this many pixels.
const RECTANGLE_RANGE: u32 = 300;

async fn draw_scene() -> Result<(), StageError> {
    window_loaded().await?;

    let canvas = canvas_by_id("c")?;
    let gl = webgl2_context(&canvas, &ContextOptions::default())?;

    resize_to_display_size(&canvas);

    // Tell WebGL how to convert from clip space to pixels.
    gl.viewport(0, 0, canvas.width() as i32, canvas.height() as i32);

    let sources = load_shader_pair(
        "public/shader/vertex/shader.vert",
        "public/shader/fragment/fragment.frag",
    )
    .await?;
    let program = Program::from_sources(&gl, &sources)?;

    let position_location = program.attribute_location(&gl, "a_position")?;
    let resolution_location = program.uniform_location(&gl, "u_resolution");
    let color_location = program.uniform_location(&gl, "u_color");

    // The attribute pointer for `a_position` gets recorded on the vertex array: 2 floats per
    // vertex, not normalized. The buffer starts out empty, each rectangle fills it.
    let vertex_array = VertexArray::new(&gl)?;

    vertex_array.bind(&gl);

    let position_buffer = upload_f32_attribute(&gl, position_location, &[], 2, false)?;

    gl.clear_color(0.0, 0.0, 0.0, 0.0);
    gl.clear(Gl::COLOR_BUFFER_BIT);

    program.use_program(&gl);
    vertex_array.bind(&gl);

    // Pass in the canvas resolution so the vertex shader can convert from pixels to clip space.
    gl.uniform2f(
        resolution_location.as_ref(),
        canvas.width() as f32,
        canvas.height() as f32,
    );

    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);

    for _ in 0..RECTANGLE_COUNT {
        refill_f32(
            &gl,
            &position_buffer,
            &random_rectangle(&mut rng, RECTANGLE_RANGE),
        );

        let [r, g, b, a] = random_color(&mut rng);

        gl.uniform4f(color_location.as_ref(), r, g, b, a);
        gl.draw_arrays(Gl::TRIANGLES, 0, 6);
    }

    info!("drew {} rectangles", RECTANGLE_COUNT);

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
