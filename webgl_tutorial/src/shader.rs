use std::cell::RefCell;
use std::fmt;

use failure::Fail;
use fnv::FnvHashMap;
use log::{debug, error};
use web_sys::{WebGl2RenderingContext as Gl, WebGlProgram, WebGlShader, WebGlUniformLocation};

/// The programmable stage a shader object is compiled for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    pub fn id(&self) -> u32 {
        match self {
            ShaderKind::Vertex => Gl::VERTEX_SHADER,
            ShaderKind::Fragment => Gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShaderKind::Vertex => f.write_str("vertex"),
            ShaderKind::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Fail, Debug, PartialEq)]
#[fail(display = "Failed to compile {} shader: {}", kind, info)]
pub struct ShaderCompilationError {
    pub kind: ShaderKind,
    pub info: String,
}

#[derive(Fail, Debug, PartialEq)]
#[fail(display = "Failed to link program: {}", info)]
pub struct ShaderLinkingError {
    pub info: String,
}

#[derive(Fail, Debug, PartialEq)]
pub enum CreateProgramError {
    #[fail(display = "{}", _0)]
    Compilation(#[cause] ShaderCompilationError),
    #[fail(display = "{}", _0)]
    Linking(#[cause] ShaderLinkingError),
}

impl From<ShaderCompilationError> for CreateProgramError {
    fn from(error: ShaderCompilationError) -> Self {
        CreateProgramError::Compilation(error)
    }
}

impl From<ShaderLinkingError> for CreateProgramError {
    fn from(error: ShaderLinkingError) -> Self {
        CreateProgramError::Linking(error)
    }
}

#[derive(Fail, Debug, PartialEq)]
#[fail(display = "Program has no active attribute named `{}`", _0)]
pub struct MissingAttribute(pub String);

/// The GLSL text of a vertex/fragment shader pair.
#[derive(Clone, Debug, PartialEq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

/// Compiles `source` into a new shader object of the given `kind`.
///
/// If compilation fails, the shader object is deleted and the info log is returned as part of
/// the error.
pub fn compile_shader(
    gl: &Gl,
    kind: ShaderKind,
    source: &str,
) -> Result<WebGlShader, ShaderCompilationError> {
    let shader = gl
        .create_shader(kind.id())
        .ok_or_else(|| ShaderCompilationError {
            kind,
            info: "unable to create shader object".to_string(),
        })?;

    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);

    if compiled {
        return Ok(shader);
    }

    let info = gl.get_shader_info_log(&shader).unwrap_or_default();

    error!("{} shader failed to compile: {}", kind, info);
    gl.delete_shader(Some(&shader));

    Err(ShaderCompilationError { kind, info })
}

/// Attaches a vertex and a fragment shader to a new program object and links it.
pub fn link_program(
    gl: &Gl,
    vertex_shader: &WebGlShader,
    fragment_shader: &WebGlShader,
) -> Result<WebGlProgram, ShaderLinkingError> {
    let program = gl.create_program().ok_or_else(|| ShaderLinkingError {
        info: "unable to create program object".to_string(),
    })?;

    gl.attach_shader(&program, vertex_shader);
    gl.attach_shader(&program, fragment_shader);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);

    if linked {
        return Ok(program);
    }

    let info = gl.get_program_info_log(&program).unwrap_or_default();

    error!("program failed to link: {}", info);
    gl.delete_program(Some(&program));

    Err(ShaderLinkingError { info })
}

/// A linked program together with the attribute and uniform locations looked up so far.
pub struct Program {
    object: WebGlProgram,
    attributes: RefCell<FnvHashMap<String, u32>>,
    uniforms: RefCell<FnvHashMap<String, Option<WebGlUniformLocation>>>,
}

impl Program {
    pub fn new(
        gl: &Gl,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, CreateProgramError> {
        let vertex_shader = compile_shader(gl, ShaderKind::Vertex, vertex_source)?;

        let fragment_shader = match compile_shader(gl, ShaderKind::Fragment, fragment_source) {
            Ok(shader) => shader,
            Err(error) => {
                gl.delete_shader(Some(&vertex_shader));

                return Err(error.into());
            }
        };

        let linked = link_program(gl, &vertex_shader, &fragment_shader);

        // A linked program keeps its shaders alive; this only flags them for deletion.
        gl.delete_shader(Some(&vertex_shader));
        gl.delete_shader(Some(&fragment_shader));

        let object = linked?;

        debug!("linked program");

        Ok(Program {
            object,
            attributes: RefCell::new(FnvHashMap::default()),
            uniforms: RefCell::new(FnvHashMap::default()),
        })
    }

    pub fn from_sources(gl: &Gl, sources: &ShaderSources) -> Result<Self, CreateProgramError> {
        Program::new(gl, &sources.vertex, &sources.fragment)
    }

    pub fn object(&self) -> &WebGlProgram {
        &self.object
    }

    pub fn use_program(&self, gl: &Gl) {
        gl.use_program(Some(&self.object));
    }

    /// Looks up the location of the active attribute `name`.
    pub fn attribute_location(&self, gl: &Gl, name: &str) -> Result<u32, MissingAttribute> {
        if let Some(location) = self.attributes.borrow().get(name) {
            return Ok(*location);
        }

        let location = gl.get_attrib_location(&self.object, name);

        if location < 0 {
            return Err(MissingAttribute(name.to_string()));
        }

        let location = location as u32;

        self.attributes
            .borrow_mut()
            .insert(name.to_string(), location);

        Ok(location)
    }

    /// Looks up the location of the uniform `name`.
    ///
    /// Returns `None` if the program has no such active uniform, e.g. because the compiler
    /// removed it as unused. Passing `None` to the `uniform*` calls is a no-op.
    pub fn uniform_location(&self, gl: &Gl, name: &str) -> Option<WebGlUniformLocation> {
        if let Some(location) = self.uniforms.borrow().get(name) {
            return location.clone();
        }

        let location = gl.get_uniform_location(&self.object, name);

        if location.is_none() {
            debug!("program has no active uniform `{}`", name);
        }

        self.uniforms
            .borrow_mut()
            .insert(name.to_string(), location.clone());

        location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_kind_ids() {
        assert_eq!(ShaderKind::Vertex.id(), Gl::VERTEX_SHADER);
        assert_eq!(ShaderKind::Fragment.id(), Gl::FRAGMENT_SHADER);
    }

    #[test]
    fn test_compilation_error_display() {
        let error = ShaderCompilationError {
            kind: ShaderKind::Fragment,
            info: "ERROR: 0:3: 'outColor' : undeclared identifier".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Failed to compile fragment shader: ERROR: 0:3: 'outColor' : undeclared identifier"
        );
    }

    #[test]
    fn test_create_program_error_keeps_cause() {
        let error: CreateProgramError = ShaderLinkingError {
            info: "varying `v_color` not written".to_string(),
        }
        .into();

        assert_eq!(
            error.to_string(),
            "Failed to link program: varying `v_color` not written"
        );
        assert!(error.cause().is_some());
    }
}
