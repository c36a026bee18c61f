use std::fmt;

use super::{is_identifier, GeneratedModule};
use crate::{Config, ConvertError, Grid, COORD_BITS};

/// A named grid, ready to be emitted as a lookup module.
#[derive(Clone, Debug)]
pub struct ModuleDescriptor {
    name: String,
    grid: Grid,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<String>, grid: Grid) -> Result<Self, ConvertError> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(ConvertError::InvalidName(name));
        }
        Ok(Self { name, grid })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Emits a combinational module with one case arm per alive cell and a
    /// default arm for the rest of the field.
    pub fn generate(&self, config: &Config) -> GeneratedModule {
        let text = CaseTable {
            module: self,
            config,
        }
        .to_string();
        tracing::debug!(
            module = %self.name,
            alive = self.grid.population(),
            "generated case table"
        );
        GeneratedModule {
            name: self.name.clone(),
            text,
        }
    }
}

struct CaseTable<'a> {
    module: &'a ModuleDescriptor,
    config: &'a Config,
}

impl fmt::Display for CaseTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x_in, y_in, out) = (Config::X_INPUT, Config::Y_INPUT, Config::ALIVE_OUTPUT);
        let bits = COORD_BITS;
        let msb = bits - 1;
        let name = &self.module.name;
        let hang = " ".repeat("module (".len() + name.len());
        let [i1, i2, i3] = [1, 2, 3].map(|level| self.config.indentation(level));

        if self.config.default_nettype {
            writeln!(f, "`default_nettype none")?;
        }
        writeln!(f, "module {name}(input wire[{msb}:0] {x_in},")?;
        writeln!(f, "{hang}input wire[{msb}:0] {y_in},")?;
        writeln!(f, "{hang}output logic {out});")?;
        writeln!(f, "{i1}always_comb begin")?;
        writeln!(f, "{i2}case ({{{x_in}, {y_in}}})")?;
        for (x, y) in self.module.grid.alive_cells() {
            writeln!(f, "{i3}{{{bits}'d{x}, {bits}'d{y}}}: {out} = 1;")?;
        }
        writeln!(f, "{i3}default: {out} = 0;")?;
        writeln!(f, "{i2}endcase")?;
        writeln!(f, "{i1}end")?;
        writeln!(f, "endmodule")?;
        if self.config.default_nettype {
            writeln!(f, "`default_nettype wire")?;
        }
        Ok(())
    }
}
