use thiserror::Error;

/// Errors surfaced by the rendering pipeline.
///
/// Degenerate geometry (zero-length lines, zero-area triangles, coincident
/// dimension endpoints) is deliberately *not* an error; those draw nothing.
/// The one hard failure is dispatching on a variant the engine does not
/// implement, where drawing nothing would hide a caller bug.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("unsupported variant: {0}")]
    UnsupportedVariant(&'static str),
}
