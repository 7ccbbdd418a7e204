use drive_insights::analysis::{AnalysisError, DriveAnalysisResult};
use std::io::{self, Write};

pub(crate) fn render_summary<W: Write>(
    out: &mut W,
    result: &DriveAnalysisResult,
    details: bool,
) -> io::Result<()> {
    writeln!(out, "Drive {}", result.drive_id)?;
    writeln!(out, "Safety score: {}", result.safety_score)?;
    writeln!(out, "Eco score: {}", result.eco_score)?;
    writeln!(out, "Attention score: {}", result.attention_score)?;
    writeln!(
        out,
        "Total score: {} ({})",
        result.total_score,
        result.rating().label()
    )?;

    if !details {
        return Ok(());
    }

    let stats = &result.statistics;
    writeln!(out, "\nStatistics")?;
    writeln!(out, "- Distance: {:.1} km", stats.total_distance)?;
    writeln!(out, "- Driving time: {:.1} min", stats.driving_time)?;
    writeln!(out, "- Idling time: {:.1} min", stats.idling_time)?;
    match stats.fuel_efficiency {
        Some(value) => writeln!(out, "- Fuel efficiency: {value:.2} km per unit")?,
        None => writeln!(out, "- Fuel efficiency: unknown")?,
    }
    match stats.carbon_intensity {
        Some(value) => writeln!(out, "- Carbon intensity: {value:.2} per km")?,
        None => writeln!(out, "- Carbon intensity: unknown")?,
    }

    render_list(out, "Insights", &result.insights)?;
    render_list(out, "Recommendations", &result.recommendations)
}

fn render_list<W: Write>(out: &mut W, heading: &str, lines: &[String]) -> io::Result<()> {
    if lines.is_empty() {
        return writeln!(out, "\n{heading}: none");
    }

    writeln!(out, "\n{heading}")?;
    for line in lines {
        writeln!(out, "- {line}")?;
    }
    Ok(())
}

pub(crate) fn render_batch_line<W: Write>(
    out: &mut W,
    index: usize,
    outcome: &Result<DriveAnalysisResult, AnalysisError>,
) -> io::Result<()> {
    match outcome {
        Ok(result) => writeln!(
            out,
            "{} | safety {} | eco {} | attention {} | total {} ({})",
            result.drive_id,
            result.safety_score,
            result.eco_score,
            result.attention_score,
            result.total_score,
            result.rating().label()
        ),
        Err(err) => writeln!(out, "trip #{} | failed: {err}", index + 1),
    }
}
