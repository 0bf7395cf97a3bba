use lopdf::Document;

use super::run_extractor;


fn is_line_boundary(character: char) -> bool {
    matches!(
        character,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits on every Unicode line boundary, treating `\r\n` as one.
/// A trailing boundary does not produce a final empty line.
pub(super) fn split_text_into_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let normalized_text = text.replace("\r\n", "\n");

    let mut lines = normalized_text
        .split(is_line_boundary)
        .map(str::to_string)
        .collect::<Vec<_>>();

    if normalized_text.ends_with(is_line_boundary) {
        lines.pop();
    }

    lines
}


fn split_bounded_text(text: &str, maximum_text_size_bytes: usize) -> Result<Vec<String>, String> {
    if text.len() > maximum_text_size_bytes {
        return Err(format!(
            "extracted text is larger than {} bytes",
            maximum_text_size_bytes
        ));
    }

    Ok(split_text_into_lines(text))
}


fn extract_with_pdf_extract(
    document_bytes: &[u8],
    maximum_text_size_bytes: usize,
) -> Result<Vec<String>, String> {
    let text = pdf_extract::extract_text_from_mem(document_bytes)
        .map_err(|error| error.to_string())?;

    split_bounded_text(&text, maximum_text_size_bytes)
}

fn extract_with_lopdf(
    document_bytes: &[u8],
    maximum_text_size_bytes: usize,
) -> Result<Vec<String>, String> {
    let document = Document::load_mem(document_bytes).map_err(|error| error.to_string())?;

    let mut page_texts = Vec::new();

    for page_number in document.get_pages().into_keys() {
        let page_text = document
            .extract_text(&[page_number])
            .map_err(|error| format!("page {}: {}", page_number, error))?;

        page_texts.push(page_text);
    }

    split_bounded_text(&page_texts.join("\n"), maximum_text_size_bytes)
}


pub(super) fn extract_lines(
    document_bytes: &[u8],
    maximum_text_size_bytes: usize,
) -> Result<Vec<String>, Vec<String>> {
    let primary_failure = match run_extractor("pdf-extract", || {
        extract_with_pdf_extract(document_bytes, maximum_text_size_bytes)
    }) {
        Ok(lines) => return Ok(lines),
        Err(failure) => failure,
    };

    run_extractor("lopdf", || {
        extract_with_lopdf(document_bytes, maximum_text_size_bytes)
    })
        .map_err(|fallback_failure| vec![primary_failure, fallback_failure])
}
