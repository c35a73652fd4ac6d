//! Box drawing (74 char width).

pub const BOX_WIDTH: usize = 74;

const INNER_WIDTH: usize = BOX_WIDTH - 4;
const FLAG_COLUMN: usize = 27;

/// ┌─ Title ───────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// │ content               │
pub fn box_line(content: &str) {
    println!("│ {} │", pad(content, INNER_WIDTH));
}

pub fn box_line_center(content: &str) {
    let total = INNER_WIDTH.saturating_sub(console_width(content));
    let left = total / 2;
    println!(
        "│ {}{}{} │",
        " ".repeat(left),
        content,
        " ".repeat(total - left)
    );
}

/// └───────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Flag in a fixed column, description word-wrapped beside it.
pub fn box_opt(flag: &str, desc: &str) {
    let desc_col = INNER_WIDTH - FLAG_COLUMN;
    let mut lines = wrap(desc, desc_col);
    if lines.is_empty() {
        lines.push(String::new());
    }

    for (i, line) in lines.iter().enumerate() {
        let flag_cell = if i == 0 {
            pad(flag, FLAG_COLUMN)
        } else {
            " ".repeat(FLAG_COLUMN)
        };
        println!("│ {}{} │", flag_cell, pad(line, desc_col));
    }
}

fn pad(content: &str, width: usize) -> String {
    let padding = width.saturating_sub(console_width(content));
    format!("{content}{}", " ".repeat(padding))
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
