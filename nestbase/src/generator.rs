//! Generation orchestrator.
//!
//! A run converts every schema model, places each resulting class in its own
//! file, resolves cross-file imports once every file is placed, then renders,
//! formats and writes the files, followed by the optional index file. In
//! dry-run mode the report carries every file's content instead.

use std::path::{Path, PathBuf};

use crate::client::ClientModule;
use crate::config::GeneratorConfig;
use crate::convert::Convertor;
use crate::dmmf::{EnvValue, GeneratorOptions};
use crate::error::{GeneratorResult, RenderError, WriteError};
use crate::file::{path_map, DraftFile, ResolvedFile};
use crate::format::{format_or_fallback, Formatter};
use crate::index;
use crate::paths;

/// Everything one run needs, derived once from the generator options.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub options: GeneratorOptions,
    pub config: GeneratorConfig,

    /// Absolute output directory.
    pub output_dir: PathBuf,

    pub client: ClientModule,
}

impl GenerationContext {
    /// Build a context from the options' own generator config map.
    pub fn new(options: GeneratorOptions, cwd: &Path) -> GeneratorResult<Self> {
        let config = GeneratorConfig::from_map(&options.generator.config)?;
        Ok(Self::with_config(options, config, cwd))
    }

    /// Build a context from an already resolved configuration.
    ///
    /// The generator block's `output` wins over the `output` option.
    pub fn with_config(options: GeneratorOptions, config: GeneratorConfig, cwd: &Path) -> Self {
        let output = options
            .generator
            .output
            .as_ref()
            .and_then(EnvValue::resolve)
            .map(PathBuf::from)
            .unwrap_or_else(|| config.output.clone());
        let output_dir = paths::absolutize(&output, cwd);
        let client = ClientModule::locate(&options);

        Self {
            options,
            config,
            output_dir,
            client,
        }
    }

    /// Replace the output directory.
    pub fn with_output_dir(mut self, output: &Path, cwd: &Path) -> Self {
        self.output_dir = paths::absolutize(output, cwd);
        self
    }
}

/// One planned output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,

    /// Final text, formatted when the formatter accepted it.
    pub content: String,

    pub formatted: bool,

    /// False in dry-run mode.
    pub written: bool,
}

impl GeneratedFile {
    pub fn bytes(&self) -> usize {
        self.content.len()
    }
}

/// Outcome of a run: one entry per planned file.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub files: Vec<GeneratedFile>,
    pub index: Option<GeneratedFile>,
}

impl GenerationReport {
    /// Every planned file, the index last.
    pub fn all(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().chain(self.index.iter())
    }

    /// Number of files actually written to disk.
    pub fn written(&self) -> usize {
        self.all().filter(|f| f.written).count()
    }
}

/// Runs the generation pipeline over one context.
#[derive(Debug)]
pub struct Generator {
    context: GenerationContext,
}

impl Generator {
    pub fn new(context: GenerationContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &GenerationContext {
        &self.context
    }

    /// Convert, place and resolve every class without rendering anything.
    pub fn plan(&self) -> GeneratorResult<Vec<ResolvedFile>> {
        let ctx = &self.context;
        let convertor = Convertor::new(&ctx.config);

        let mut drafts = Vec::new();
        for model in convertor.convert_models(&ctx.options.dmmf.datamodel) {
            if model.fields.is_empty() && ctx.config.separate_relation_fields {
                tracing::debug!(class = %model.name, "skipping class without fields");
                continue;
            }
            drafts.push(DraftFile::new(model, &ctx.output_dir, &ctx.client)?);
        }

        // Every draft is placed before any is resolved.
        let paths = path_map(&drafts);
        let resolved = drafts
            .into_iter()
            .map(|draft| draft.resolve(&paths))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(resolved)
    }

    /// Run the whole pipeline.
    pub fn run(&self, formatter: &dyn Formatter) -> GeneratorResult<GenerationReport> {
        let ctx = &self.context;
        tracing::info!(
            output = %ctx.output_dir.display(),
            models = ctx.options.dmmf.datamodel.models.len(),
            config = %serde_json::to_string(&ctx.config).unwrap_or_default(),
            "starting generation"
        );

        let files = self.plan()?;
        let mut report = GenerationReport::default();

        for file in &files {
            let source = file.render()?;
            report.files.push(self.emit(file.path(), &source, formatter)?);
        }

        if ctx.config.make_index_file {
            let path = index::index_path(&ctx.output_dir);
            let source = index::render_index(&path, &files);
            report.index = Some(self.emit(path, &source, formatter)?);
        }

        tracing::info!(
            files = report.all().count(),
            written = report.written(),
            "generation finished"
        );
        Ok(report)
    }

    /// Format `source` and write it, unless this is a dry run.
    fn emit(
        &self,
        path: PathBuf,
        source: &str,
        formatter: &dyn Formatter,
    ) -> GeneratorResult<GeneratedFile> {
        let formatted = format_or_fallback(formatter, &path, source);
        let written = !self.context.config.dry_run;

        if written {
            write_file(&path, &formatted.text)?;
            tracing::info!(path = %path.display(), bytes = formatted.text.len(), "wrote file");
        } else {
            tracing::info!(path = %path.display(), "dry run, skipping write");
        }

        Ok(GeneratedFile {
            path,
            content: formatted.text,
            formatted: formatted.formatted,
            written,
        })
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| WriteError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Render every planned file without formatting or writing.
pub fn render_all(files: &[ResolvedFile]) -> Result<Vec<(PathBuf, String)>, RenderError> {
    files
        .iter()
        .map(|file| file.render().map(|source| (file.path(), source)))
        .collect()
}
