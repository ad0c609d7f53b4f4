//! The format dispatcher.
//!
//! A [`Printer`] owns the one active back end plus the theme and pushes
//! formatted text through it. The configuration is threaded explicitly:
//! construct a printer once per invocation and pass it around, there is no
//! process-wide singleton to mutate.

use std::io;

use crate::mode::{self, Mode};
use crate::render::{engine_for, ConfigError, Engine, Stream};
use crate::style::StyleSet;

/// Errors surfaced by [`Printer::emit`].
///
/// Placeholder problems are unrecoverable by design: once substitution is
/// attempted (the argument list is non-empty), a template that does not
/// match its arguments fails the whole invocation rather than printing
/// something misleading.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("placeholder {{{index}}} has no matching argument ({provided} provided)")]
    MissingArgument { index: usize, provided: usize },

    #[error("invalid placeholder {{{placeholder}}}: expected a positional index like {{0}}")]
    BadPlaceholder { placeholder: String },

    #[error("unclosed '{{' in format template")]
    UnclosedPlaceholder,

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Substitute positional `{0}`, `{1}`, ... placeholders into `template`.
///
/// With no arguments the template is returned verbatim, so templates
/// containing literal braces never fail when nothing is substituted.
/// `{{` and `}}` escape literal braces when substitution runs.
pub(crate) fn substitute(template: &str, args: &[String]) -> Result<String, EmitError> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut placeholder = String::new();
                let mut closed = false;
                for d in chars.by_ref() {
                    if d == '}' {
                        closed = true;
                        break;
                    }
                    placeholder.push(d);
                }
                if !closed {
                    return Err(EmitError::UnclosedPlaceholder);
                }
                let index: usize = placeholder
                    .parse()
                    .map_err(|_| EmitError::BadPlaceholder {
                        placeholder: placeholder.clone(),
                    })?;
                let arg = args.get(index).ok_or(EmitError::MissingArgument {
                    index,
                    provided: args.len(),
                })?;
                out.push_str(arg);
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Formats text and dispatches it to the active back end.
pub struct Printer {
    engine: Box<dyn Engine>,
}

impl Printer {
    /// Resolve `mode` against the process environment and build the
    /// printer around the selected back end.
    pub fn new(mode: Mode, theme: Option<String>) -> Result<Printer, ConfigError> {
        let backend = mode::select(mode, &mode::process_env);
        Ok(Printer {
            engine: engine_for(backend, theme)?,
        })
    }

    /// Build a printer around an explicit engine.
    pub fn with_engine(engine: Box<dyn Engine>) -> Printer {
        Printer { engine }
    }

    /// Name of the active back end, for `--version` diagnostics.
    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    /// Render the styled text without writing it anywhere.
    pub fn render(&self, set: &StyleSet, text: &str) -> String {
        self.engine.render(set, text)
    }

    /// Substitute `args` into `template`, hand the result to the back
    /// end, and flush the stream so output is visible immediately.
    pub fn emit(
        &self,
        stream: Stream,
        set: &StyleSet,
        template: &str,
        args: &[String],
    ) -> Result<(), EmitError> {
        let text = substitute(template, args)?;
        tracing::debug!(engine = self.engine.name(), ?stream, "emitting");
        self.engine.write(stream, set, &text)?;
        stream.flush()?;
        Ok(())
    }
}
