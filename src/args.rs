// Classification of positional arguments into documents and an industry label.

use crate::error::UsageError;
use std::path::{Path, PathBuf};

/// Extensions (lowercase, without the dot) treated as documents.
pub const DOCUMENT_EXTENSIONS: [&str; 4] = ["pdf", "docx", "txt", "doc"];

pub const DEFAULT_INDUSTRY: &str = "General";

/// What the user asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub files: Vec<PathBuf>,
    pub industry: String,
    /// Non-file tokens that were replaced by a later one.
    pub overridden_labels: Vec<String>,
}

pub fn is_document(arg: &str) -> bool {
    Path::new(arg)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| DOCUMENT_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Split arguments into document paths and an industry label. Any token
/// without a document extension is an industry label and the last one
/// wins. Whether the documents exist is checked later, by the upload step.
pub fn classify<I, S>(args: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut files = Vec::new();
    let mut label: Option<String> = None;
    let mut overridden_labels = Vec::new();
    let mut seen_any = false;

    for arg in args {
        seen_any = true;
        let arg = arg.as_ref();
        if is_document(arg) {
            files.push(PathBuf::from(arg));
        } else if let Some(previous) = label.replace(arg.to_string()) {
            tracing::warn!("industry '{}' overrides earlier '{}'", arg, previous);
            overridden_labels.push(previous);
        }
    }

    if !seen_any {
        return Err(UsageError::NoArguments);
    }
    if files.is_empty() {
        return Err(UsageError::NoDocuments);
    }

    Ok(Invocation {
        files,
        industry: label.unwrap_or_else(|| DEFAULT_INDUSTRY.to_string()),
        overridden_labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_and_default_industry() {
        let inv = classify(["doc1.pdf", "doc2.DOCX", "notes.txt"]).unwrap();
        assert_eq!(inv.files.len(), 3);
        assert_eq!(inv.industry, "General");
        assert!(inv.overridden_labels.is_empty());
    }

    #[test]
    fn industry_can_appear_anywhere() {
        let inv = classify(["Insurance", "a.pdf", "b.Doc"]).unwrap();
        assert_eq!(inv.files, vec![PathBuf::from("a.pdf"), PathBuf::from("b.Doc")]);
        assert_eq!(inv.industry, "Insurance");
    }

    #[test]
    fn last_label_wins() {
        let inv = classify(["Insurance", "a.pdf", "Healthcare", "image.png"]).unwrap();
        assert_eq!(inv.industry, "image.png");
        assert_eq!(inv.overridden_labels, vec!["Insurance", "Healthcare"]);
    }

    #[test]
    fn no_arguments() {
        let empty: [&str; 0] = [];
        assert_eq!(classify(empty), Err(UsageError::NoArguments));
    }

    #[test]
    fn no_documents() {
        assert_eq!(classify(["slides.pptx", "Tech"]), Err(UsageError::NoDocuments));
    }

    #[test]
    fn extension_rules() {
        assert!(is_document("dir/report.PDF"));
        assert!(!is_document(".pdf"));
        assert!(!is_document("pdf"));
        assert!(!is_document("archive.pdf.zip"));
    }
}
