// ABOUTME: Core utility library for dreamy.
// ABOUTME: Edit distance, text/number/date prettifiers, HTML entities, filesystem helpers, console output.

pub mod console;
pub mod containers;
pub mod dates;
pub mod distance;
pub mod error;
pub mod filesystem;
pub mod geometry;
pub mod html;
pub mod numbers;
pub mod text;

pub use console::{read_password, Console, Marker, TextOptions};
pub use containers::remove_duplicates;
pub use dates::{
    current_date, date_from_timestamp, format_pretty, parse_flexible_date, prettify_date,
    DEFAULT_DATE_FORMAT,
};
pub use distance::{edit_distance, levenshtein_distance};
pub use error::{CoreError, Result};
pub use filesystem::{
    copy_tree, find_executable, find_files, get_sanitized_file_name, get_unique_file_name,
    prepend_to_path_var, read_text_file, read_text_lines, remove_empty_directories,
    write_text_file,
};
pub use geometry::{dimensions_to_fit, Dimensions};
pub use html::{escape_html_entities, parse_document, read_element_text, unescape_html_entities};
pub use numbers::{deprettify_amount, deprettify_number, prettify_integer, prettify_number};
pub use text::{fill_template, is_roman_numeral, is_string_empty, stringify_bytes, truncate};
