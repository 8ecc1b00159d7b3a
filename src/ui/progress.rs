//! Terminal progress indicator.
//!
//! On a TTY the spinner is redrawn in place from a ticker thread; otherwise a
//! single start line is printed. JSON mode prints nothing.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{cursor, terminal, QueueableCommand};

use crate::domain::ports::Progress;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::spinner::Spinner;

const FRAME_INTERVAL: Duration = Duration::from_millis(80);

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

struct Ticker {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl Ticker {
    fn spawn(mut spinner: Spinner, out: SharedWriter, unicode: bool) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            while !stop_flag.load(Ordering::SeqCst) {
                {
                    let mut out = lock(&out);
                    let _ = redraw_line(&mut **out, &spinner.render(unicode));
                }
                spinner.tick();
                thread::sleep(FRAME_INTERVAL);
            }
            let mut out = lock(&out);
            let _ = redraw_line(&mut **out, "");
        });

        Self { stop, handle }
    }

    fn join(self) {
        self.stop.store(true, Ordering::SeqCst);
        let _ = self.handle.join();
    }
}

pub struct TerminalProgress {
    ui: UiContext,
    out: SharedWriter,
    spinner: Option<Spinner>,
    ticker: Option<Ticker>,
}

impl TerminalProgress {
    /// Progress drawn on stderr, leaving stdout for results.
    pub fn stderr(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stderr())
    }

    pub fn with_writer(ui: UiContext, out: impl Write + Send + 'static) -> Self {
        Self {
            ui,
            out: Arc::new(Mutex::new(Box::new(out))),
            spinner: None,
            ticker: None,
        }
    }

    fn finish(&mut self, render: impl FnOnce(&Spinner, &UiContext) -> String) {
        if let Some(ticker) = self.ticker.take() {
            ticker.join();
        }
        let Some(spinner) = self.spinner.take() else {
            return;
        };
        if self.ui.json {
            return;
        }

        let line = render(&spinner, &self.ui);
        let mut out = lock(&self.out);
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }
}

impl Progress for TerminalProgress {
    fn start(&mut self, label: &str) {
        if let Some(ticker) = self.ticker.take() {
            ticker.join();
        }

        let spinner = Spinner::new(label);
        if self.ui.json {
            self.spinner = Some(spinner);
            return;
        }

        if self.ui.animation {
            self.ticker = Some(Ticker::spawn(
                spinner.clone(),
                Arc::clone(&self.out),
                self.ui.unicode,
            ));
        } else {
            let mut out = lock(&self.out);
            let _ = writeln!(
                out,
                "{} {}",
                Icon::Progress.colored(self.ui.stderr_color, self.ui.unicode),
                spinner.message()
            );
            let _ = out.flush();
        }
        self.spinner = Some(spinner);
    }

    fn succeed(&mut self, label: &str) {
        self.finish(|spinner, ui| spinner.succeed(label, ui.stderr_color, ui.unicode));
    }

    fn fail(&mut self, label: &str) {
        self.finish(|spinner, ui| spinner.fail(label, ui.stderr_color, ui.unicode));
    }
}

impl Drop for TerminalProgress {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.join();
        }
    }
}

fn lock(out: &SharedWriter) -> MutexGuard<'_, Box<dyn Write + Send>> {
    out.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn redraw_line<W: Write + ?Sized>(out: &mut W, content: &str) -> io::Result<()> {
    out.queue(cursor::MoveToColumn(0))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.write_all(content.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn static_progress_prints_start_and_success_lines() {
        let buf = SharedBuf::default();
        let mut progress = TerminalProgress::with_writer(UiContext::plain(), buf.clone());

        progress.start("Deploying.");
        progress.succeed("Deployed.");

        assert_eq!(buf.contents(), "[..] Deploying.\n[OK] Deployed.\n");
    }

    #[test]
    fn static_progress_prints_failure_line() {
        let buf = SharedBuf::default();
        let mut progress = TerminalProgress::with_writer(UiContext::plain(), buf.clone());

        progress.start("Deploying.");
        progress.fail("Failed.");

        assert!(buf.contents().ends_with("[FAIL] Failed.\n"));
    }

    #[test]
    fn json_mode_prints_nothing() {
        let buf = SharedBuf::default();
        let ui = UiContext::plain().with_json(true);
        let mut progress = TerminalProgress::with_writer(ui, buf.clone());

        progress.start("Deploying.");
        progress.succeed("Deployed.");

        assert!(buf.contents().is_empty());
    }

    #[test]
    fn stop_without_start_is_silent() {
        let buf = SharedBuf::default();
        let mut progress = TerminalProgress::with_writer(UiContext::plain(), buf.clone());

        progress.succeed("Deployed.");

        assert!(buf.contents().is_empty());
    }

    #[test]
    fn animated_progress_clears_spinner_before_final_line() {
        let buf = SharedBuf::default();
        let mut ui = UiContext::plain();
        ui.animation = true;
        let mut progress = TerminalProgress::with_writer(ui, buf.clone());

        progress.start("Deploying.");
        thread::sleep(FRAME_INTERVAL * 2);
        progress.succeed("Deployed.");

        let out = buf.contents();
        assert!(out.contains("Deploying."));
        assert!(out.ends_with("[OK] Deployed.\n"));
    }
}
