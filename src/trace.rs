//! Feature-gated tracing macros.
//!
//! With the `tracing` feature enabled these forward to the `tracing` crate;
//! without it they expand to nothing, so call sites never need `cfg` guards.

/// Opens an info-level span around a pipeline stage (library build, scan).
///
/// With `tracing` enabled this is `tracing::info_span!` and the caller holds
/// the guard from `.entered()` for the stage's lifetime. Without it the macro
/// yields a `NoopSpan`, whose `entered` is the identity, so the same
/// `let _span = trace_span!(..).entered();` line compiles either way.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Emits an info-level event with key/value fields.
///
/// Enabled: forwards to `tracing::info!` with `$name` as the event name.
/// Disabled: the field values are still evaluated into a discarded tuple so
/// bindings used only for logging do not trigger unused warnings.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

/// Emits a debug-level event; used for per-match chatter inside the scan loop.
///
/// Same shape as `trace_event!` but at `debug`, so the default
/// `spritescan=info` filter of the CLI keeps it quiet. Disabled builds
/// evaluate and discard the values.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_debug;
pub(crate) use trace_event;
pub(crate) use trace_span;

/// Stand-in span guard when tracing is compiled out.
///
/// Lets `trace_span!` call sites chain `.entered()` without `cfg` guards.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `Span::entered()`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
