//! DOCX assembly for generated company profiles.

use docx_rs::{Docx, LineSpacing, Paragraph, Run};

/// Content type for the packaged document.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const HEADING_TEXT: &str = "Company Profile";
/// Run size in half-points (32 = 16pt).
const HEADING_SIZE: usize = 32;
/// Spacing after the heading paragraph, in twips.
const HEADING_SPACING_AFTER: u32 = 300;

/// Assemble the two-paragraph profile document and serialize it to a DOCX
/// buffer: a bold heading followed by the generated text verbatim, as a
/// single unformatted run.
pub fn render_company_profile(body: &str) -> Result<Vec<u8>, anyhow::Error> {
    let mut buffer = std::io::Cursor::new(Vec::new());
    Docx::new()
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(HEADING_TEXT).bold().size(HEADING_SIZE))
                .line_spacing(LineSpacing::new().after(HEADING_SPACING_AFTER)),
        )
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(body)))
        .build()
        .pack(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to package document: {}", e))?;

    Ok(buffer.into_inner())
}

/// Download filename for a bid: `Company_Profile_<sanitized-bid>.docx`.
pub fn profile_filename(bid: &str) -> String {
    format!("Company_Profile_{}.docx", sanitize_token(bid))
}

/// Collapse every maximal run of non-alphanumeric characters to a single
/// underscore.
fn sanitize_token(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_sep = false;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_separator_runs() {
        assert_eq!(sanitize_token("GEM/2025/B/1234"), "GEM_2025_B_1234");
        assert_eq!(sanitize_token("GEM//2025--B..1234"), "GEM_2025_B_1234");
        assert_eq!(sanitize_token("plain1234"), "plain1234");
        assert_eq!(sanitize_token("/leading/trailing/"), "_leading_trailing_");
    }

    #[test]
    fn profile_filename_for_gem_bid() {
        assert_eq!(
            profile_filename("GEM/2025/B/1234"),
            "Company_Profile_GEM_2025_B_1234.docx"
        );
    }

    #[test]
    fn render_produces_zip_container() {
        let bytes = render_company_profile("Generated profile text.").unwrap();
        // DOCX is a zip archive; check the local file header magic.
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }
}
