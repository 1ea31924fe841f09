pub mod volume_report;
