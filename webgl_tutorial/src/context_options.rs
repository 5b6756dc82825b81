use serde_derive::Serialize;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerPreference {
    Default,
    HighPerformance,
    LowPower,
}

impl Default for PowerPreference {
    fn default() -> Self {
        PowerPreference::Default
    }
}

/// The context attributes requested when obtaining a WebGL 2.0 context.
///
/// The defaults match the browser defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextOptions {
    alpha: bool,
    depth: bool,
    stencil: bool,
    antialias: bool,
    premultiplied_alpha: bool,
    preserve_drawing_buffer: bool,
    fail_if_major_performance_caveat: bool,
    power_preference: PowerPreference,
}

impl ContextOptions {
    pub fn begin() -> ContextOptionsBuilder {
        ContextOptionsBuilder {
            options: ContextOptions::default(),
        }
    }

    pub fn alpha(&self) -> bool {
        self.alpha
    }

    pub fn depth(&self) -> bool {
        self.depth
    }

    pub fn stencil(&self) -> bool {
        self.stencil
    }

    pub fn antialias(&self) -> bool {
        self.antialias
    }

    pub fn premultiplied_alpha(&self) -> bool {
        self.premultiplied_alpha
    }

    pub fn preserve_drawing_buffer(&self) -> bool {
        self.preserve_drawing_buffer
    }

    pub fn fail_if_major_performance_caveat(&self) -> bool {
        self.fail_if_major_performance_caveat
    }

    pub fn power_preference(&self) -> PowerPreference {
        self.power_preference
    }

    /// The options as a `WebGLContextAttributes` dictionary.
    #[allow(deprecated)]
    pub fn to_js(&self) -> Result<JsValue, serde_json::Error> {
        JsValue::from_serde(self)
    }
}

impl Default for ContextOptions {
    fn default() -> Self {
        ContextOptions {
            alpha: true,
            depth: true,
            stencil: false,
            antialias: true,
            premultiplied_alpha: true,
            preserve_drawing_buffer: false,
            fail_if_major_performance_caveat: false,
            power_preference: PowerPreference::default(),
        }
    }
}

pub struct ContextOptionsBuilder {
    options: ContextOptions,
}

impl ContextOptionsBuilder {
    pub fn alpha(mut self, alpha: bool) -> Self {
        self.options.alpha = alpha;

        self
    }

    pub fn depth(mut self, depth: bool) -> Self {
        self.options.depth = depth;

        self
    }

    pub fn stencil(mut self, stencil: bool) -> Self {
        self.options.stencil = stencil;

        self
    }

    pub fn antialias(mut self, antialias: bool) -> Self {
        self.options.antialias = antialias;

        self
    }

    pub fn premultiplied_alpha(mut self, premultiplied_alpha: bool) -> Self {
        self.options.premultiplied_alpha = premultiplied_alpha;

        self
    }

    pub fn preserve_drawing_buffer(mut self, preserve_drawing_buffer: bool) -> Self {
        self.options.preserve_drawing_buffer = preserve_drawing_buffer;

        self
    }

    pub fn fail_if_major_performance_caveat(
        mut self,
        fail_if_major_performance_caveat: bool,
    ) -> Self {
        self.options.fail_if_major_performance_caveat = fail_if_major_performance_caveat;

        self
    }

    pub fn power_preference(mut self, power_preference: PowerPreference) -> Self {
        self.options.power_preference = power_preference;

        self
    }

    pub fn finish(self) -> ContextOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_json() {
        assert_eq!(
            serde_json::to_string(&ContextOptions::default()).unwrap(),
            "{\"alpha\":true,\"depth\":true,\"stencil\":false,\"antialias\":true,\
             \"premultipliedAlpha\":true,\"preserveDrawingBuffer\":false,\
             \"failIfMajorPerformanceCaveat\":false,\"powerPreference\":\"default\"}"
        );
    }

    #[test]
    fn test_builder() {
        let options = ContextOptions::begin()
            .alpha(false)
            .stencil(true)
            .power_preference(PowerPreference::HighPerformance)
            .finish();

        assert!(!options.alpha());
        assert!(options.stencil());
        assert!(options.depth());
        assert_eq!(
            serde_json::to_value(&options).unwrap()["powerPreference"],
            "high-performance"
        );
    }
}
