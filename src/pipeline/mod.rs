pub mod stage1_aggregate;
pub mod stage2_radar;
pub mod stage3_overview;
pub mod stage4_report;
