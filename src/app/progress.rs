use std::io::{IsTerminal, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tokio::sync::watch;
use tokio::task::JoinHandle;

const BAR_WIDTH: usize = 30;
const BAR_FILL: &str = "#";
const BAR_EMPTY: &str = "-";

/// Redraw a completion-count progress line on stderr whenever the
/// collector publishes a new count. Presentation only; skipped entirely
/// when stderr is not a terminal.
pub(crate) fn setup_progress_indicator(
    total: u64,
    mut progress_rx: watch::Receiver<u64>,
    no_color: bool,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if !std::io::stderr().is_terminal() {
            return;
        }

        if render_progress_line(0, total, no_color).is_err() {
            return;
        }

        while progress_rx.changed().await.is_ok() {
            let done = *progress_rx.borrow_and_update();
            if render_progress_line(done, total, no_color).is_err() {
                return;
            }
            if done >= total {
                break;
            }
        }

        drop(finish_progress_line());
    })
}

fn render_progress_line(done: u64, total: u64, no_color: bool) -> Result<(), std::io::Error> {
    let line = build_progress_line(done, total, no_color);

    let mut out = std::io::stderr();
    queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    for segment in line {
        if let Some(color) = segment.color {
            queue!(
                out,
                SetForegroundColor(color),
                Print(&segment.text),
                ResetColor
            )?;
        } else {
            queue!(out, Print(&segment.text))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn finish_progress_line() -> Result<(), std::io::Error> {
    let mut out = std::io::stderr();
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn build_progress_line(done: u64, total: u64, no_color: bool) -> Vec<ProgressSegment> {
    let total = total.max(1);
    let done = done.min(total);

    let width = u128::from(u64::try_from(BAR_WIDTH).unwrap_or(u64::MAX));
    let scaled = u128::from(done)
        .saturating_mul(width)
        .checked_div(u128::from(total))
        .unwrap_or(0);
    let complete = usize::try_from(scaled).unwrap_or(BAR_WIDTH).min(BAR_WIDTH);
    let incomplete = BAR_WIDTH.saturating_sub(complete);

    let percent_x100 = u128::from(done)
        .saturating_mul(10_000)
        .checked_div(u128::from(total))
        .unwrap_or(0);
    let percent_text = format!(
        " {}.{:02}%",
        percent_x100.checked_div(100).unwrap_or(0),
        percent_x100.checked_rem(100).unwrap_or(0)
    );
    let count_text = format!(" | {}/{}", done, total);

    let bar = format!(
        "[{}{}]",
        BAR_FILL.repeat(complete),
        BAR_EMPTY.repeat(incomplete)
    );

    if no_color {
        vec![
            ProgressSegment::plain(bar),
            ProgressSegment::plain(percent_text),
            ProgressSegment::plain(count_text),
        ]
    } else {
        vec![
            ProgressSegment::plain(bar),
            ProgressSegment::colored(percent_text, Color::Cyan),
            ProgressSegment::colored(count_text, Color::Yellow),
        ]
    }
}

struct ProgressSegment {
    text: String,
    color: Option<Color>,
}

impl ProgressSegment {
    const fn plain(text: String) -> Self {
        Self { text, color: None }
    }

    const fn colored(text: String, color: Color) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }
}
