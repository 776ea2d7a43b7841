use super::*;

/// Writes itinerary as a human readable plain text.
pub fn write_text<W: Write>(itinerary: &Itinerary, writer: &mut BufWriter<W>) -> GenericResult<()> {
    write_summary(itinerary, writer)?;

    for day in itinerary.days.iter() {
        write_day(day, writer)?;
    }

    if !itinerary.notices.is_empty() {
        writeln!(writer)?;
        for notice in itinerary.notices.iter() {
            writeln!(writer, "Note: {}", notice.message)?;
        }
    }

    if let Some(share) = &itinerary.share {
        writeln!(writer)?;
        writeln!(writer, "{}", share.title)?;
        writeln!(writer, "{}", share.text)?;
    }

    Ok(())
}

fn write_summary<W: Write>(itinerary: &Itinerary, writer: &mut BufWriter<W>) -> GenericResult<()> {
    writeln!(writer, "Your {} Adventure", itinerary.requested_city)?;
    writeln!(writer, "Destination: {}", itinerary.requested_city)?;
    writeln!(writer, "Duration: {} days", itinerary.duration)?;
    writeln!(writer, "Style: {}", itinerary.travel_style)?;
    if let Some(budget) = &itinerary.budget {
        writeln!(writer, "Budget: {budget}")?;
    }
    if let Some(group_size) = &itinerary.group_size {
        writeln!(writer, "Group: {group_size}")?;
    }
    writeln!(writer, "Your Interests: {}", itinerary.interests.join(", "))?;

    Ok(())
}

fn write_day<W: Write>(day: &Day, writer: &mut BufWriter<W>) -> GenericResult<()> {
    writeln!(writer)?;
    writeln!(writer, "Day {} - Estimated {} hours", day.day, day.total_time)?;

    if day.attractions.is_empty() {
        writeln!(writer, "  No attractions planned, enjoy a free day.")?;
    }

    for (idx, attraction) in day.attractions.iter().enumerate() {
        writeln!(writer, "  {}. {}", idx + 1, attraction.name)?;
        writeln!(writer, "     {}", attraction.description)?;
        writeln!(
            writer,
            "     Duration: {} | Hours: {} | {}",
            attraction.time, attraction.hours, attraction.category
        )?;
    }

    Ok(())
}
