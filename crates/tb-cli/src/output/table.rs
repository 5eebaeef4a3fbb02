#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
}

impl TableOptions {
    /// Width limit taken from `COLUMNS`, ignored below 40 columns.
    #[must_use]
    pub fn from_env() -> Self {
        let max_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);
        Self { max_width }
    }
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                format_cell(&truncated, *width, numeric)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit() || ch == '-')
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}
