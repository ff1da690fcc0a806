// ZeroDecay - core/sample.rs
//
// Built-in sample data shown on the Monitoring tab until a real scanner
// feeds the card list.

use crate::core::model::Card;

const T: bool = true;
const F: bool = false;

/// The fixed sample list, in display order.
pub fn sample_cards() -> Vec<Card> {
    vec![
        Card::new("John.json", [T; 8]),
        Card::new("cat.jpg", [T, T, F, F, T]),
        Card::new("lol.cs", [T, T]),
        Card::new("document_very_long_name_that_might_wrap_around.pdf", [T; 12]),
        Card::new("archive_with_many_issues.zip", [T, F, T, F, T, F, T, F, F, F]),
        Card::new("image_collection_large.tar.gz", [T; 28]),
        Card::new("another_file_mostly_healthy.txt", [T, T, T, T, F, T, T]),
        Card::new("critical_backup.dat", [F, F, F, F]),
        Card::new("config_system.ini", [T; 3]),
        Card::new(
            "research_paper_final_v2_urgent.docx",
            [T, T, F, T, T, F, T, T, T, F, T],
        ),
        Card::new("video_render_output_001.mp4", [T; 15]),
        Card::new("source_code_module.py", [T, T, T, F, T]),
        Card::new("temporary_file.tmp", [F]),
        Card::new("user_settings.xml", [T]),
        Card::new(
            "db_export_2025_05_12_detailed_report_for_analysis.sql",
            [T, T, T, T, T, T, T, T, T, T, F, T, T, T, T],
        ),
        Card::new(
            "presentation_slides_important_final_review_copy.pptx",
            [T, F, T, F, T, F],
        ),
        Card::new("financial_report_q1_audited_version.xlsx", [T; 9]),
        Card::new("utility_tool_v3.exe", [T, T, F]),
        Card::new("kernel_panic_log_archive_deep_dive.log", [T; 22]),
        Card::new("short.txt", [T, F]),
        Card::new("tiny.cfg", [T]),
        Card::new("backup_set_alpha.bak", [T; 2]),
        Card::new("backup_set_beta_needs_check.bak", [T, F, T]),
        Card::new("backup_set_gamma_all_good.bak", [T; 7]),
    ]
}
