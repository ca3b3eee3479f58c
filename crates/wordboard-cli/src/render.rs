//! Plain-text renderings. Pure formatting.

use wordboard_core::word::{SweepReport, UserData, Word, WordRecord};

/// Whole weights print without decimals; decaying ones with three.
pub(crate) fn weight(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.3}")
    }
}

pub(crate) fn render_words(words: &[Word]) -> String {
    if words.is_empty() {
        return "no words yet".to_string();
    }
    let mut out = format!("{:<5} | {:<20} | {:<6} | {}\n", "ID", "Text", "Weight", "Created By");
    out.push_str(&"-".repeat(60));
    for word in words {
        let creator = word
            .created_by
            .as_ref()
            .map(|owner| owner.to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "\n{:<5} | {:<20} | {:<6} | {}",
            word.id.0,
            word.text,
            weight(word.weight),
            creator
        ));
        if let Some(description) = &word.description {
            out.push_str(&format!("\n      {description}"));
        }
    }
    out
}

pub(crate) fn render_user_data(data: &UserData) -> String {
    let mut out = format!("{}", data.identity);
    if data.is_privileged {
        out.push_str(" (privileged)");
    }
    out.push_str(&format!("\n\ncreated ({}):", data.created.len()));
    for word in &data.created {
        out.push_str(&format!("\n  #{} {} ({})", word.id, word.text, weight(word.weight)));
    }
    out.push_str(&format!("\n\nupvoted ({}):", data.upvoted.len()));
    for word in &data.upvoted {
        out.push_str(&format!("\n  #{} {} ({})", word.id, word.text, weight(word.weight)));
    }
    out
}

pub(crate) fn render_dump(records: &[WordRecord]) -> String {
    if records.is_empty() {
        return "no rows in words".to_string();
    }
    let mut out = format!(
        "{:<5} | {:<20} | {:<6} | {:<20} | {}\n",
        "ID", "Text", "Weight", "Created By", "Decay Start"
    );
    out.push_str(&"-".repeat(80));
    for record in records {
        out.push_str(&format!(
            "\n{:<5} | {:<20} | {:<6} | {:<20} | {}",
            record.id.0,
            record.text,
            weight(record.weight),
            record.created_by.as_deref().unwrap_or("unknown"),
            record.decay_start.as_deref().unwrap_or("stable"),
        ));
    }
    out
}

pub(crate) fn render_sweep(report: &SweepReport) -> String {
    format!(
        "scanned {}, purged {}, repaired {}",
        report.scanned,
        report.purged.len(),
        report.repaired
    )
}
