use colored::{ColoredString, Colorize};
use shelf::model::{Record, Status};
use unicode_width::UnicodeWidthStr;

/// Detail dump of a single record, one field per line.
pub(crate) fn print_record(record: &Record) {
    println!("  id:      {}", record.id);
    println!("  title:   {}", record.title.bold());
    println!("  author:  {}", record.author);
    println!("  year:    {}", record.year);
    println!("  status:  {}", status_label(record.status));
}

/// Tabular listing, one record per line, columns sized to content.
pub(crate) fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("The catalog is empty.");
        return;
    }

    let title_width = records.iter().map(|r| r.title.width()).max().unwrap_or(0);
    let author_width = records.iter().map(|r| r.author.width()).max().unwrap_or(0);

    for record in records {
        println!(
            "{:>4}. {}  {}  {:>5}  {}",
            record.id,
            pad_to_width(&record.title, title_width).bold(),
            pad_to_width(&record.author, author_width),
            record.year,
            status_label(record.status)
        );
    }
}

pub(crate) fn print_record_refs(records: &[&Record]) {
    let owned: Vec<Record> = records.iter().map(|r| (*r).clone()).collect();
    print_records(&owned);
}

fn status_label(status: Status) -> ColoredString {
    match status {
        Status::Available => status.to_string().green(),
        Status::CheckedOut => status.to_string().yellow(),
    }
}

// format! pads by char count, which misaligns wide glyphs; pad by display
// width instead.
fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}
