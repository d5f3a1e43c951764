use super::BitsView;
use std::io::{self, Write};

/// A snapshot of one streaming update, handed to [`ScanObserver::on_step`].
#[derive(Copy, Clone, Debug)]
pub struct ScanStep<'a> {
    /// Index of the consumed text byte.
    pub position: usize,
    /// The consumed text byte.
    pub symbol:   u8,
    /// The mismatch mask of `symbol`.
    pub mask:     BitsView<'a>,
    /// The state after the shift and OR.
    pub state:    BitsView<'a>,
    /// The start of the match ending at `position`, if any.
    pub matched:  Option<usize>,
}

/// Callbacks invoked at each step boundary of a scan.
///
/// Every method has an empty default, and [`Quiet`] implements none of
/// them, so an unobserved scan compiles down to the bare loop.
pub trait ScanObserver {
    /// Called once with the state of the first full window, before any
    /// streaming update. Not called when the pattern cannot fit in the text.
    #[inline]
    fn on_init(&mut self, state: BitsView<'_>, matched: bool) {
        let _ = (state, matched);
    }

    /// Called during every streaming update with the state after the shift
    /// and before the mask of `symbol` is OR-ed in.
    #[inline]
    fn on_shift(&mut self, position: usize, symbol: u8, shifted: BitsView<'_>) {
        let _ = (position, symbol, shifted);
    }

    /// Called after every streaming update.
    #[inline]
    fn on_step(&mut self, step: &ScanStep<'_>) {
        let _ = step;
    }
}

/// An observer that ignores every event.
#[derive(Copy, Clone, Default, Debug)]
pub struct Quiet;

impl ScanObserver for Quiet {}

impl<O: ScanObserver + ?Sized> ScanObserver for &mut O {
    #[inline]
    fn on_init(&mut self, state: BitsView<'_>, matched: bool) {
        (**self).on_init(state, matched);
    }

    #[inline]
    fn on_shift(&mut self, position: usize, symbol: u8, shifted: BitsView<'_>) {
        (**self).on_shift(position, symbol, shifted);
    }

    #[inline]
    fn on_step(&mut self, step: &ScanStep<'_>) {
        (**self).on_step(step);
    }
}

/// Writes a human-readable trace of the scan to `W`. Bits are printed bit 0
/// first.
///
/// Observer callbacks cannot fail, so the first write error is held and
/// returned by [`finish`](TraceWriter::finish); later events are dropped.
#[derive(Debug)]
pub struct TraceWriter<W: Write> {
    writer: W,
    error:  Option<io::Error>,
}

impl<W: Write> TraceWriter<W> {
    #[inline]
    pub fn new(writer: W) -> Self {
        TraceWriter { writer, error: None }
    }

    /// Flushes and returns the writer, or the first error encountered.
    ///
    /// ## Errors
    ///
    /// Any I/O error raised while writing or flushing the trace.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn record(&mut self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_none()
            && let Err(e) = f(&mut self.writer)
        {
            self.error = Some(e);
        }
    }
}

impl<W: Write> ScanObserver for TraceWriter<W> {
    fn on_init(&mut self, state: BitsView<'_>, matched: bool) {
        self.record(|w| {
            writeln!(w, "Initial state: {state}")?;
            if matched {
                writeln!(w, "Match found at position: 0")?;
            }
            writeln!(w)
        });
    }

    fn on_shift(&mut self, position: usize, symbol: u8, shifted: BitsView<'_>) {
        let symbol = symbol as char;
        self.record(|w| writeln!(w, "State after shift for text[{position}] = '{symbol}': {shifted}"));
    }

    fn on_step(&mut self, step: &ScanStep<'_>) {
        self.record(|w| {
            let ScanStep {
                position,
                symbol,
                mask,
                state,
                matched,
            } = *step;
            let symbol = symbol as char;

            writeln!(w, "Mask for text[{position}] = '{symbol}': {mask}")?;
            writeln!(w, "State after text[{position}] = '{symbol}': {state}")?;
            if let Some(start) = matched {
                writeln!(w, "Match found at position: {start}")?;
            }
            writeln!(w)
        });
    }
}
