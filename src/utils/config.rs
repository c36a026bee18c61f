/// Knobs for the emitted text and for batch conversion.
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the composite module that selects between patterns.
    pub selector_name: String,
    /// Wrap every module in `` `default_nettype none `` / `` `default_nettype wire ``.
    pub default_nettype: bool,
    /// Spaces per indentation level.
    pub indent: usize,
    /// Worker threads used by [`crate::Batch::convert`].
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selector_name: "pattern_selector".to_owned(),
            default_nettype: true,
            indent: 4,
            threads: 1,
        }
    }
}

impl Config {
    pub const X_INPUT: &'static str = "x_in";
    pub const Y_INPUT: &'static str = "y_in";
    pub const INDEX_INPUT: &'static str = "index_in";
    pub const ALIVE_OUTPUT: &'static str = "alive_out";
    /// Internal array collecting every pattern's output inside the selector.
    pub const ALIVE_ARRAY: &'static str = "alive";

    /// Indentation for nesting level `level`.
    pub fn indentation(&self, level: usize) -> String {
        " ".repeat(self.indent * level)
    }
}
