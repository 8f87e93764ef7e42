use fundex::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_word_hyphenated_across_lines_then_it_is_rejoined() {
    let result = sanitize_extracted_text("total finan-\ncial commitments");

    assert_eq!(result, "total financial commitments");
}

#[test]
fn given_runs_of_spaces_then_they_collapse_to_one() {
    let result = sanitize_extracted_text("Fund   Name\t\tNorthwind");

    assert_eq!(result, "Fund Name Northwind");
}

#[test]
fn given_multiple_blank_lines_then_one_paragraph_break_remains() {
    let result = sanitize_extracted_text("first paragraph\n\n\n\nsecond paragraph");

    assert_eq!(result, "first paragraph\n\nsecond paragraph");
}

#[test]
fn given_single_newline_then_lines_stay_adjacent() {
    let result = sanitize_extracted_text("line one\nline two");

    assert_eq!(result, "line one\nline two");
}

#[test]
fn given_ligatures_then_they_are_folded_to_ascii() {
    let result = sanitize_extracted_text("\u{fb01}nancial report");

    assert_eq!(result, "financial report");
}

#[test]
fn given_leading_and_trailing_blank_lines_then_they_are_dropped() {
    let result = sanitize_extracted_text("\n\n  content  \n\n");

    assert_eq!(result, "content");
}

#[test]
fn given_empty_input_then_result_is_empty() {
    assert_eq!(sanitize_extracted_text(""), "");
    assert_eq!(sanitize_extracted_text("  \n \n  "), "");
}
