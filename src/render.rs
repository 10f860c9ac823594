// Console rendering of an analysis result.

use crate::model::{AnalysisResult, Minutes};
use std::io::{self, Write};

const PLACEHOLDER: &str = "N/A";

/// Print file metadata, the curriculum summary, every module and the
/// topic/objective lists. Missing fields render as placeholders.
pub fn render_analysis(result: &AnalysisResult, out: &mut dyn Write) -> io::Result<()> {
    let curriculum = result.analysis.curriculum_view();

    writeln!(out, "Files processed: {}", result.files_count)?;
    writeln!(out, "Files: {}", result.file_names.join(", "))?;
    writeln!(out, "Total size: {:.2} KB", result.total_size as f64 / 1024.0)?;

    let total = curriculum.total_duration.unwrap_or(Minutes(0.0));
    writeln!(out)?;
    writeln!(out, "Course title: {}", text(&curriculum.title))?;
    writeln!(out, "Description: {}", text(&curriculum.description))?;
    writeln!(
        out,
        "Total duration: {} minutes ({:.1} hours)",
        total,
        total.hours()
    )?;
    writeln!(out, "Methodology: {}", text(&curriculum.methodology))?;

    writeln!(out)?;
    writeln!(out, "Modules: {}", curriculum.modules.len())?;
    if !curriculum.modules.is_empty() {
        writeln!(out)?;
        writeln!(out, "Module list:")?;
        for (i, module) in curriculum.modules.iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "  Module {}: {}", i + 1, text(&module.title))?;
            writeln!(out, "  - Description: {}", text(&module.description))?;
            writeln!(
                out,
                "  - Duration: {} minutes",
                module.duration.unwrap_or(Minutes(0.0))
            )?;
            writeln!(out, "  - Level: {}", text(&module.difficulty))?;
            writeln!(out, "  - Elements: {}", module.enhanced_elements.join(", "))?;
        }
    }

    let analysis = &result.analysis;
    if !analysis.key_topics.is_empty() {
        writeln!(out)?;
        writeln!(out, "Key topics: {}", analysis.key_topics.join(", "))?;
    }
    if !analysis.learning_objectives.is_empty() {
        writeln!(out)?;
        writeln!(out, "Learning objectives:")?;
        for objective in &analysis.learning_objectives {
            writeln!(out, "  + {}", objective)?;
        }
    }
    Ok(())
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rendered(body: serde_json::Value) -> String {
        let result: AnalysisResult = serde_json::from_value(body).unwrap();
        let mut out = Vec::new();
        render_analysis(&result, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_modules_and_lists() {
        let out = rendered(json!({
            "filesCount": 2,
            "fileNames": ["a.pdf", "b.txt"],
            "totalSize": 2048,
            "analysis": {
                "curriculum": {
                    "title": "Claims handling",
                    "description": "Basics",
                    "totalDuration": 150,
                    "methodology": "Blended",
                    "modules": [
                        {"title": "Intake", "description": "First contact", "duration": 45,
                         "difficulty": "Beginner", "enhancedElements": ["quiz"]},
                        {"title": "Fraud", "duration": 105, "difficulty": "Advanced"}
                    ]
                },
                "keyTopics": ["claims", "fraud"],
                "learningObjectives": ["Open a claim", "Spot fraud"]
            }
        }));

        assert!(out.contains("Files processed: 2"));
        assert!(out.contains("Files: a.pdf, b.txt"));
        assert!(out.contains("Total size: 2.00 KB"));
        assert!(out.contains("Total duration: 150 minutes (2.5 hours)"));
        assert!(out.contains("Module 1: Intake"));
        assert!(out.contains("  - Duration: 45 minutes"));
        assert!(out.contains("  - Level: Beginner"));
        assert!(out.contains("Module 2: Fraud"));
        assert!(out.contains("  - Duration: 105 minutes"));
        assert!(out.contains("  - Level: Advanced"));
        assert!(out.contains("Key topics: claims, fraud"));
        assert!(out.contains("  + Spot fraud"));
    }

    #[test]
    fn missing_fields_render_placeholders() {
        let out = rendered(json!({"analysis": {"curriculum": {"modules": [{}]}}}));

        assert!(out.contains("Files processed: 0"));
        assert!(out.contains("Course title: N/A"));
        assert!(out.contains("Total duration: 0 minutes (0.0 hours)"));
        assert!(out.contains("Module 1: N/A"));
        assert!(out.contains("  - Level: N/A"));
        assert!(!out.contains("Key topics"));
        assert!(!out.contains("Learning objectives"));
    }

    #[test]
    fn numeric_difficulty_does_not_hide_curriculum() {
        let out = rendered(json!({"analysis": {"curriculum": {
            "title": "Claims handling",
            "modules": [
                {"title": "Intake", "duration": 30, "difficulty": "beginner"},
                {"title": "Fraud", "duration": 45, "difficulty": 3}
            ]
        }}}));

        assert!(out.contains("Course title: Claims handling"));
        assert!(out.contains("Modules: 2"));
        assert!(out.contains("Module 1: Intake"));
        assert!(out.contains("  - Level: beginner"));
        assert!(out.contains("Module 2: Fraud"));
        assert!(out.contains("  - Duration: 45 minutes"));
        assert!(out.contains("  - Level: 3"));
    }
}
