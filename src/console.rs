use colored::Colorize;

use crate::error::FetchError;
use crate::page::Page;

/// Wrap width used when none is given on the command line.
pub const DEFAULT_WIDTH: usize = 70;

/// Green title on its own line, followed by the extract wrapped to `width`
/// columns.
pub fn render_page(page: &Page, width: usize) -> String {
    format!(
        "{}\n{}",
        page.title.green(),
        textwrap::fill(&page.extract, width)
    )
}

pub fn print_page(page: &Page, width: usize) {
    println!("{}", render_page(page, width));
}

pub fn render_error(error: &FetchError) -> String {
    format!("Error: {}", error.message())
}

pub fn print_error(error: &FetchError) {
    eprintln!("{}", render_error(error));
}
