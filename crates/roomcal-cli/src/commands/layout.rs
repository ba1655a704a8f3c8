//! Month layout command.

use chrono::Datelike;

use roomcal_core::{
    Event, FormatOptions, LayoutContext, LayoutFormatter, OutputFormat, build_month_layout,
};

use crate::error::{CliError, CliResult};

/// Which part of the calendar to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub year: i32,
    pub month: u32,
    pub day: Option<u32>,
}

impl Selection {
    /// Fills unset year and month from the current date in the display zone.
    pub fn resolve(
        year: Option<i32>,
        month: Option<u32>,
        day: Option<u32>,
        ctx: &LayoutContext,
    ) -> Self {
        let today = ctx.zone.now();
        Self {
            year: year.unwrap_or_else(|| today.year()),
            month: month.unwrap_or_else(|| today.month()),
            day,
        }
    }
}

/// Lays out the selected month and renders it.
pub fn render(
    events: &[Event],
    selection: Selection,
    ctx: &LayoutContext,
    options: FormatOptions,
    format: OutputFormat,
) -> CliResult<String> {
    let layout = build_month_layout(events, selection.year, selection.month, ctx)?;
    let formatter = LayoutFormatter::new(options);

    let Some(day) = selection.day else {
        return Ok(match format {
            OutputFormat::Tty => formatter.format_tty(&layout),
            OutputFormat::Json => serde_json::to_string_pretty(&formatter.format_json(&layout))?,
        });
    };

    let day_layout = layout.day(day).ok_or(CliError::DayNotInMonth {
        year: selection.year,
        month: selection.month,
        day,
    })?;
    Ok(match format {
        OutputFormat::Tty => formatter.format_day_tty(day_layout, layout.rooms),
        OutputFormat::Json => serde_json::to_string_pretty(&formatter.format_day_json(day_layout))?,
    })
}

/// Renders the selection and prints it to stdout.
pub fn show(
    events: &[Event],
    selection: Selection,
    ctx: &LayoutContext,
    options: FormatOptions,
    format: OutputFormat,
) -> CliResult<()> {
    println!("{}", render(events, selection, ctx, options, format)?);
    Ok(())
}
