//! Plain-text rendering for command output
//!
//! Aligned `println!` tables; no terminal styling.

use trisense_common::models::{Competition, MappingStatus, UnmappedSummary, UploadBatch};
use trisense_common::upload::UploadReport;

pub fn print_competitions(competitions: &[Competition]) {
    if competitions.is_empty() {
        println!("No competitions found.");
        return;
    }

    println!("{:<14} {:<34} {:<12} LOCATION", "ID", "NAME", "DATE");
    for comp in competitions {
        println!(
            "{:<14} {:<34} {:<12} {}",
            comp.id,
            comp.name,
            comp.date.as_deref().unwrap_or("-"),
            comp.location.as_deref().unwrap_or("-"),
        );
    }
}

pub fn print_upload_report(report: &UploadReport) {
    println!(
        "{} upload: {} succeeded, {} failed{}",
        report.sensor_type.label(),
        report.success,
        report.failed,
        if report.skipped > 0 {
            format!(", {} skipped", report.skipped)
        } else {
            String::new()
        },
    );

    for file in &report.files {
        println!(
            "  {}: {} succeeded, {} failed",
            file.file_name, file.success, file.failed
        );
        // One row per detected physical sensor in multiplexed CSVs
        for sensor in &file.sensors {
            println!(
                "    sensor {} ({}): {} succeeded, {} failed",
                sensor.sensor_number, sensor.sensor_id, sensor.success_count, sensor.failed_count
            );
        }
        for error in &file.errors {
            println!("    error: {}", error);
        }
    }

    if let Some(participants) = report.participants {
        println!("  participants after merge: {}", participants);
    }
    if let Some(superseded) = report.superseded_records {
        println!("  old records superseded: {}", superseded);
    }
    for error in &report.errors {
        println!("  error: {}", error);
    }
}

pub fn print_mapping_status(status: &MappingStatus, unmapped: Option<&UnmappedSummary>) {
    println!("Mapping status:");
    println!("  total mappings:     {}", status.total_mappings);
    println!("  active mappings:    {}", status.active_mappings);
    println!("  users with mapping: {}", status.users_with_mappings);
    println!("  fully mapped users: {}", status.fully_mapped_users);

    if !status.by_sensor_type.is_empty() {
        println!("  by sensor type:");
        for entry in &status.by_sensor_type {
            println!(
                "    {:<18} {}",
                entry.sensor_type.label(),
                entry.mapping_count
            );
        }
    }

    if let Some(summary) = unmapped {
        if summary.is_empty() {
            println!("  unmapped records:   none");
        } else {
            println!("  unmapped records:   {}", summary.total_records());
            for group in &summary.by_sensor_type {
                println!(
                    "    {:<18} {} records, sensors: {}",
                    group.sensor_type.label(),
                    group.record_count,
                    if group.sensor_ids.is_empty() {
                        "-".to_string()
                    } else {
                        group.sensor_ids.join(", ")
                    }
                );
            }
        }
    }
}

pub fn print_batches(batches: &[UploadBatch]) {
    if batches.is_empty() {
        println!("No upload batches found.");
        return;
    }

    println!(
        "{:<12} {:<18} {:<28} {:>7} {:>7} {:>7}  {:<22} UPLOADED AT",
        "ID", "SENSOR TYPE", "FILE", "TOTAL", "OK", "FAILED", "STATUS"
    );
    for batch in batches {
        println!(
            "{:<12} {:<18} {:<28} {:>7} {:>7} {:>7}  {:<22} {}",
            batch.id,
            batch.sensor_type.label(),
            batch.file_name,
            batch.total_records,
            batch.success_records,
            batch.failed_records,
            batch.status.label(),
            batch.uploaded_at.format("%Y-%m-%d %H:%M:%S UTC"),
        );
    }
}
