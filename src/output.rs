use std::io::Write;

use webinars::{Page, RecurringWebinar, Webinar};

use crate::error::CliError;

/// Write one line per webinar: TSV or JSON.
///
/// TSV columns: id, type code, start time (or `-`), duration, topic.
pub fn write_webinar<W: Write>(
    webinar: &Webinar,
    json_mode: bool,
    writer: &mut W,
) -> Result<(), CliError> {
    if json_mode {
        serde_json::to_writer(&mut *writer, webinar)?;
        writer.write_all(b"\n")?;
        return Ok(());
    }

    let start = webinar
        .start_time
        .map(|t| t.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| "-".to_string());
    let duration = webinar
        .duration
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    writeln!(
        writer,
        "{}\t{}\t{}\t{}\t{}",
        webinar.id,
        webinar.webinar_type.code(),
        start,
        duration,
        webinar.topic.as_deref().unwrap_or("").replace(['\t', '\n'], " ")
    )?;
    Ok(())
}

/// Write every webinar on a page, then a pagination summary on stderr.
pub fn write_page<W: Write>(
    page: &Page<Webinar>,
    json_mode: bool,
    writer: &mut W,
) -> Result<(), CliError> {
    for webinar in &page.items {
        write_webinar(webinar, json_mode, writer)?;
    }
    writer.flush()?;
    eprintln!(
        "page {}/{} ({} records total)",
        page.page_number, page.total_pages, page.total_records
    );
    Ok(())
}

/// Write a created series followed by its occurrences (TSV only).
pub fn write_series<W: Write>(
    series: &RecurringWebinar,
    json_mode: bool,
    writer: &mut W,
) -> Result<(), CliError> {
    if json_mode {
        serde_json::to_writer(&mut *writer, series)?;
        writer.write_all(b"\n")?;
        return Ok(());
    }

    write_webinar(&series.webinar, false, writer)?;
    for occurrence in &series.occurrences {
        let start = occurrence
            .start_time
            .map(|t| t.format("%Y-%m-%dT%H:%M:%SZ").to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(writer, "  occurrence\t{}\t{}", occurrence.occurrence_id, start)?;
    }
    Ok(())
}
