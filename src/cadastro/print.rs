use cadastro::api::{ListedRecord, Message, MessageLevel};
use cadastro::mask::{format_masked, MaskKind};
use cadastro::validate::Field;
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 28;
const TIME_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[Message]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_records(records: &[ListedRecord]) {
    if records.is_empty() {
        println!("No records registered.");
        return;
    }

    for lr in records {
        let idx_str = format!("{}. ", lr.position + 1);
        let name = pad_to_width(&lr.record.name, NAME_WIDTH);
        let id = format_masked(&lr.record.id_number, MaskKind::IdNumber);
        let postal = format_masked(&lr.record.postal_code, MaskKind::PostalCode);
        let time_ago = format_time_ago(lr.record.created_at);

        println!(
            "{:>4}{}  {}  {:>3}  {}  {}  {}",
            idx_str.normal(),
            name.bold(),
            id,
            lr.record.age,
            postal,
            lr.record.email,
            time_ago.dimmed()
        );
    }
}

pub(super) fn print_count(count: usize) {
    let label = if count == 1 { "record" } else { "records" };
    println!("{} {} registered", count, label);
}

pub(super) fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::IdNumber => "ID number",
        Field::Age => "age",
        Field::Email => "e-mail",
        Field::PostalCode => "postal code",
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    // A string that already fits is padded, never truncated.
    if s.width() <= width {
        return format!("{}{}", s, " ".repeat(width - s.width()));
    }

    let mut truncated = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if current + w > width.saturating_sub(1) {
            break;
        }
        truncated.push(c);
        current += w;
    }
    truncated.push('…');
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}


fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
