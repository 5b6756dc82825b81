// A spinning, textured 3D "F".
//
// The same spinning letter as `2_f_letter_3d`, but instead of a color per vertex every vertex now
// carries a texture coordinate (`a_texcoord`), and the fragment shader samples
// `public/img/f-texture.png`.
//
// Images load asynchronously. Rather than waiting for the image before we start drawing, we
// create the texture with a single blue texel and start the animation loop right away; the image
// replaces that texel (and gets its mipmaps generated) as soon as it has loaded.

use futures::future::try_join;
use log::{error, info, LevelFilter};

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use web_sys::{HtmlCanvasElement, WebGlUniformLocation};

use webgl_tutorial::animation::{AnimationLoop, FrameClock};
use webgl_tutorial::buffer::{upload_f32_attribute, VertexArray};
use webgl_tutorial::canvas::{canvas_by_id, resize_to_display_size, webgl2_context};
use webgl_tutorial::config::FShapeConfig;
use webgl_tutorial::context_options::ContextOptions;
use webgl_tutorial::fetch::{load_image, load_scene, load_shader_pair};
use webgl_tutorial::logging;
use webgl_tutorial::scene::SceneAttribute;
use webgl_tutorial::shader::Program;
use webgl_tutorial::texture::Texture;
use webgl_tutorial::transform::{matrix4_columns, Transform3D};
use webgl_tutorial::{Gl, StageError};

const PLACEHOLDER_TEXEL: [u8; 4] = [0, 0, 255, 255];

struct FShape {
    gl: Gl,
    canvas: HtmlCanvasElement,
    program: Program,
    vertex_array: VertexArray,
    vertex_count: i32,
    texture: Texture,
    matrix_location: Option<WebGlUniformLocation>,
    transform: Transform3D,
    clock: FrameClock,
    config: FShapeConfig,
}

impl FShape {
    async fn initialize(
        gl: Gl,
        canvas: HtmlCanvasElement,
        config: FShapeConfig,
    ) -> Result<Self, StageError> {
        let (sources, scene) = try_join(
            load_shader_pair(config.vertex_shader_url(), config.fragment_shader_url()),
            load_scene(config.scene_url()),
        )
        .await?;
        let vertex_count = scene.validate_with(3, &[SceneAttribute::Textures])?;

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
        upload_f32_attribute(
            &gl,
            program.attribute_location(&gl, "a_texcoord")?,
            &scene.textures,
            2,
            true,
        )?;
        VertexArray::unbind(&gl);

        let texture = Texture::placeholder(&gl, PLACEHOLDER_TEXEL)?;

        load_texture_image(gl.clone(), texture.clone(), config.texture_url().to_string());

        let matrix_location = program.uniform_location(&gl, "u_matrix");

        gl.enable(Gl::DEPTH_TEST);

        info!("uploaded {} textured vertices", vertex_count);

        Ok(FShape {
            gl,
            canvas,
            program,
            vertex_array,
            vertex_count: vertex_count as i32,
            texture,
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

        // `u_texture` is never set, so it samples texture unit 0.
        self.texture.bind(gl);

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

fn load_texture_image(gl: Gl, texture: Texture, url: String) {
    spawn_local(async move {
        let uploaded = match load_image(&url).await {
            Ok(image) => texture.upload_image(&gl, &image).map_err(StageError::from),
            Err(err) => Err(err.into()),
        };

        match uploaded {
            Ok(()) => info!("texture `{}` uploaded", url),
            Err(err) => error!("keeping the placeholder texture: {}", err),
        }
    });
}

async fn run() -> Result<(), StageError> {
    let canvas = canvas_by_id("c")?;
    let gl = webgl2_context(&canvas, &ContextOptions::default())?;
    let mut shape = FShape::initialize(gl, canvas, FShapeConfig::default()).await?;

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

        assert_eq!(scene.validate_with(3, &[SceneAttribute::Textures]), Ok(96));
        assert_eq!(scene.textures.len(), 96 * 2);
        assert!(scene
            .textures
            .iter()
            .all(|coordinate| *coordinate >= 0.0 && *coordinate <= 1.0));
    }
}
