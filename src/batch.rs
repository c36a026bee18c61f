use std::collections::HashSet;

use anyhow::{Context, Result};

use crate::{
    assemble, Config, GeneratedModule, Grid, ModuleDescriptor, PatternDescriptor, SourceFormat,
};

/// One input pattern: its name (a file stem or similar), format and contents.
#[derive(Clone, Debug)]
pub struct PatternSource {
    pub name: String,
    pub format: SourceFormat,
    pub text: String,
}

impl PatternSource {
    pub fn new(name: impl Into<String>, format: SourceFormat, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format,
            text: text.into(),
        }
    }

    pub fn rle(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, SourceFormat::Rle, text)
    }

    pub fn plaintext(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, SourceFormat::Plaintext, text)
    }

    /// Runs the whole pipeline for this source: parse, build the grid, emit the module.
    ///
    /// The module is named with [`crate::module_name`] applied to the source name.
    pub fn convert(&self, config: &Config) -> Result<GeneratedModule> {
        let pattern = PatternDescriptor::parse(self.format, &self.text)
            .with_context(|| format!("failed to parse {}", self.name))?;
        let grid = Grid::from_pattern(&pattern)
            .with_context(|| format!("failed to lay out {}", self.name))?;
        let module = ModuleDescriptor::new(crate::module_name(&self.name), grid)?;
        Ok(module.generate(config))
    }
}

/// A source left out of the composite, with the reason.
#[derive(Debug)]
pub struct SkippedSource {
    pub name: String,
    pub error: anyhow::Error,
}

/// Result of converting many sources: the modules that made it, in input
/// order, and the ones that did not.
#[derive(Debug, Default)]
pub struct Batch {
    modules: Vec<GeneratedModule>,
    skipped: Vec<SkippedSource>,
}

impl Batch {
    /// Converts every source, skipping the ones that fail.
    ///
    /// Successful modules keep the relative order of `sources`, so their
    /// selector indices are contiguous from 0. A source whose module name is
    /// already taken by an earlier one or by the selector is skipped as well.
    pub fn convert(sources: &[PatternSource], config: &Config) -> Self {
        let mut batch = Self::default();
        let mut names = HashSet::from([config.selector_name.clone()]);
        for (source, result) in sources.iter().zip(convert_all(sources, config)) {
            let result = result.and_then(|module| {
                if names.insert(module.name.clone()) {
                    Ok(module)
                } else {
                    Err(anyhow::anyhow!("module name {} is already taken", module.name))
                }
            });
            match result {
                Ok(module) => batch.modules.push(module),
                Err(error) => {
                    tracing::warn!(source = %source.name, "skipping pattern: {error:#}");
                    batch.skipped.push(SkippedSource {
                        name: source.name.clone(),
                        error,
                    });
                }
            }
        }
        batch
    }

    pub fn modules(&self) -> &[GeneratedModule] {
        &self.modules
    }

    pub fn skipped(&self) -> &[SkippedSource] {
        &self.skipped
    }

    /// Emits the composite text for the successfully converted modules.
    pub fn assemble(&self, config: &Config) -> Result<String> {
        assemble(&self.modules, config)
            .with_context(|| format!("failed to assemble {}", config.selector_name))
    }
}

/// Converts `sources` on up to `config.threads` scoped threads; results come back in input order.
fn convert_all(sources: &[PatternSource], config: &Config) -> Vec<Result<GeneratedModule>> {
    let threads = config.threads.clamp(1, sources.len().max(1));
    if threads == 1 {
        return sources.iter().map(|s| s.convert(config)).collect();
    }
    let chunk_size = sources.len().div_ceil(threads);
    std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || chunk.iter().map(|s| s.convert(config)).collect::<Vec<_>>())
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    })
}
