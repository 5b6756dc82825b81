// A spinning 3D "F" with per-vertex colors.
//
// The letter now has depth: 16 quads (96 vertices) loaded from `public/scene/f_letter_3d.json`,
// each quad with its own color. Colors are stored as `u8` RGB triples and normalized onto
// `0.0..=1.0` by the vertex attribute pointer, so the shader receives them as a `vec4`.
//
// The 2D projection matrix is replaced by an orthographic 4x4 projection, the depth test is
// enabled so that back faces don't draw over front faces, and the letter spins around its Y axis:
// every animation frame advances the rotation by the time elapsed since the previous frame.

use log::{info, LevelFilter};

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use web_sys::{HtmlCanvasElement, WebGlUniformLocation};

use webgl_tutorial::animation::{AnimationLoop, FrameClock};
use webgl_tutorial::buffer::{upload_f32_attribute, upload_u8_attribute, VertexArray};
use webgl_tutorial::canvas::{canvas_by_id, resize_to_display_size, webgl2_context};
use webgl_tutorial::config::FShapeConfig;
use webgl_tutorial::context_options::ContextOptions;
use webgl_tutorial::fetch::{load_scene, load_shader_pair};
use webgl_tutorial::logging;
use webgl_tutorial::scene::SceneAttribute;
use webgl_tutorial::shader::Program;
use webgl_tutorial::transform::{matrix4_columns, Transform3D};
use webgl_tutorial::{Gl, StageError};

struct ColoredF {
    gl: Gl,
    canvas: HtmlCanvasElement,
    program: Program,
    vertex_array: VertexArray,
    vertex_count: i32,
    matrix_location: Option<WebGlUniformLocation>,
    transform: Transform3D,
    clock: FrameClock,
    config: FShapeConfig,
}

impl ColoredF {
    async fn initialize(
        gl: Gl,
        canvas: HtmlCanvasElement,
        config: FShapeConfig,
    ) -> Result<Self, StageError> {
        let sources =
            load_shader_pair(config.vertex_shader_url(), config.fragment_shader_url()).await?;
        let scene = load_scene(config.scene_url()).await?;
        let vertex_count = scene.validate_with(3, &[SceneAttribute::Colors])?;

        let program = Program::from_sources(&gl, &sources)?;
        let vertex_array = VertexArray::new(&gl)?;

        vertex_array.bind(&gl);
        upload_f32_attribute(
            &gl,
            program.attribute_location(&gl, "a_position")?,
            &scene.vertices,
            3,
            false,
        )?;
        upload_u8_attribute(
            &gl,
            program.attribute_location(&gl, "a_color")?,
            &scene.colors,
            3,
            true,
        )?;
        VertexArray::unbind(&gl);

        let matrix_location = program.uniform_location(&gl, "u_matrix");

        gl.enable(Gl::DEPTH_TEST);

        info!("uploaded {} vertices", vertex_count);

        Ok(ColoredF {
            gl,
            canvas,
            program,
            vertex_array,
            vertex_count: vertex_count as i32,
            matrix_location,
            transform: config.initial_transform(),
            clock: FrameClock::new(),
            config,
        })
    }

    fn draw(&mut self, now: f64) {
        let delta = self.clock.tick(now);

        self.transform.rotate(self.config.rotation_speed(), delta);

        let gl = &self.gl;

        resize_to_display_size(&self.canvas);
        gl.viewport(0, 0, self.canvas.width() as i32, self.canvas.height() as i32);

        let [r, g, b, a] = self.config.clear_color();

        gl.clear_color(r, g, b, a);
        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);

        self.program.use_program(gl);
        self.vertex_array.bind(gl);

        let matrix = self.transform.matrix(
            self.canvas.client_width() as f32,
            self.canvas.client_height() as f32,
            self.config.depth(),
        );

        gl.uniform_matrix4fv_with_f32_array(
            self.matrix_location.as_ref(),
            false,
            &matrix4_columns(&matrix),
        );
        gl.draw_arrays(Gl::TRIANGLES, 0, self.vertex_count);
    }
}

async fn run() -> Result<(), StageError> {
    let canvas = canvas_by_id("c")?;
    let gl = webgl2_context(&canvas, &ContextOptions::default())?;
    let mut shape = ColoredF::initialize(gl, canvas, FShapeConfig::default()).await?;

    AnimationLoop::start(move |now| shape.draw(now))?.forget();

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    logging::init(LevelFilter::Debug);

    spawn_local(async {
        if let Err(err) = run().await {
            err.report();
        }
    });
}

#[cfg(test)]
mod tests {
    use webgl_tutorial::scene::{Scene, SceneAttribute};

    #[test]
    fn test_scene_file() {
        let scene = Scene::from_json(include_str!("../public/scene/f_letter_3d.json")).unwrap();

        assert_eq!(scene.validate_with(3, &[SceneAttribute::Colors]), Ok(96));
        assert_eq!(scene.colors.len(), 96 * 3);
        assert!(scene.textures.is_empty());
    }
}
