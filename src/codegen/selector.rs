use std::fmt;

use super::{is_identifier, GeneratedModule};
use crate::{Config, ConvertError, COORD_BITS};

/// Concatenates the pattern modules and appends a selector module that routes
/// `alive_out` of the module at position `index_in`.
///
/// Indices are positional: `modules[i]` answers for index `i`. The selector
/// name must be a legal identifier not used by any of `modules`.
pub fn assemble(modules: &[GeneratedModule], config: &Config) -> Result<String, ConvertError> {
    let selector = &config.selector_name;
    if !is_identifier(selector) || modules.iter().any(|m| &m.name == selector) {
        return Err(ConvertError::InvalidName(selector.clone()));
    }
    if modules.is_empty() {
        return Err(ConvertError::EmptyComposite);
    }
    let mut text = String::new();
    for module in modules {
        text.push_str(&module.text);
        text.push('\n');
    }
    text.push_str(&Selector { modules, config }.to_string());
    tracing::info!(
        selector = %config.selector_name,
        modules = modules.len(),
        "assembled composite"
    );
    Ok(text)
}

/// Bits needed to address indices `0..count`, at least one.
fn index_bits(count: usize) -> u32 {
    (usize::BITS - count.saturating_sub(1).leading_zeros()).max(1)
}

struct Selector<'a> {
    modules: &'a [GeneratedModule],
    config: &'a Config,
}

impl fmt::Display for Selector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x_in, y_in, out) = (Config::X_INPUT, Config::Y_INPUT, Config::ALIVE_OUTPUT);
        let (index_in, alive) = (Config::INDEX_INPUT, Config::ALIVE_ARRAY);
        let coord_msb = COORD_BITS - 1;
        let index_msb = index_bits(self.modules.len()) - 1;
        let last = self.modules.len() - 1;
        let name = &self.config.selector_name;
        let hang = " ".repeat("module (".len() + name.len());
        let i1 = self.config.indentation(1);

        if self.config.default_nettype {
            writeln!(f, "`default_nettype none")?;
        }
        writeln!(f, "module {name}(input wire[{index_msb}:0] {index_in},")?;
        writeln!(f, "{hang}input wire[{coord_msb}:0] {x_in},")?;
        writeln!(f, "{hang}input wire[{coord_msb}:0] {y_in},")?;
        writeln!(f, "{hang}output logic {out});")?;
        writeln!(f, "{i1}logic {alive}[{last}:0];")?;
        writeln!(f)?;
        for (i, module) in self.modules.iter().enumerate() {
            let module = &module.name;
            writeln!(
                f,
                "{i1}{module} {module}_{i}(.{x_in}({x_in}), .{y_in}({y_in}), .{out}({alive}[{i}]));"
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{i1}assign {out} = {alive}[{index_in}];")?;
        writeln!(f, "endmodule")?;
        if self.config.default_nettype {
            writeln!(f, "`default_nettype wire")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub(name: &str) -> GeneratedModule {
        GeneratedModule {
            name: name.to_owned(),
            text: format!("module {name}();\nendmodule\n"),
        }
    }

    #[test]
    fn index_width() {
        assert_eq!(index_bits(1), 1);
        assert_eq!(index_bits(2), 1);
        assert_eq!(index_bits(3), 2);
        assert_eq!(index_bits(4), 2);
        assert_eq!(index_bits(5), 3);
        assert_eq!(index_bits(256), 8);
        assert_eq!(index_bits(257), 9);
    }

    #[test]
    fn exact_text() {
        let modules = [stub("glider"), stub("blinker"), stub("block")];
        let text = assemble(&modules, &Config::default()).unwrap();
        assert_eq!(
            text,
            "module glider();
endmodule

module blinker();
endmodule

module block();
endmodule

`default_nettype none
module pattern_selector(input wire[1:0] index_in,
                        input wire[5:0] x_in,
                        input wire[5:0] y_in,
                        output logic alive_out);
    logic alive[2:0];

    glider glider_0(.x_in(x_in), .y_in(y_in), .alive_out(alive[0]));
    blinker blinker_1(.x_in(x_in), .y_in(y_in), .alive_out(alive[1]));
    block block_2(.x_in(x_in), .y_in(y_in), .alive_out(alive[2]));

    assign alive_out = alive[index_in];
endmodule
`default_nettype wire
"
        );
    }

    #[test]
    fn single_module() {
        let text = assemble(&[stub("glider")], &Config::default()).unwrap();
        assert!(text.contains("input wire[0:0] index_in,"));
        assert!(text.contains("logic alive[0:0];"));
    }

    #[test]
    fn selector_name_is_checked() {
        let config = Config {
            selector_name: "my selector".to_owned(),
            ..Config::default()
        };
        assert_eq!(
            assemble(&[stub("glider")], &config).unwrap_err(),
            ConvertError::InvalidName("my selector".to_owned())
        );
        let config = Config {
            selector_name: "table".to_owned(),
            ..Config::default()
        };
        assert!(assemble(&[stub("glider")], &config).is_err());
    }

    #[test]
    fn selector_name_must_not_clash() {
        let modules = [stub("glider"), stub("pattern_selector")];
        assert_eq!(
            assemble(&modules, &Config::default()).unwrap_err(),
            ConvertError::InvalidName("pattern_selector".to_owned())
        );
    }

    #[test]
    fn nothing_to_select() {
        assert_eq!(
            assemble(&[], &Config::default()).unwrap_err(),
            ConvertError::EmptyComposite
        );
    }
}
