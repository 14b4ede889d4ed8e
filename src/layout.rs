//! Static memory-layout report — fixed data, pure formatting.
//!
//! Nothing here is measured or extracted; the region map and component table
//! describe the linked kernel image and are updated by hand when the linker
//! script changes.

const BANNER_WIDTH: usize = 70;
const TOTAL_MEMORY: u64 = 64 * 1024 * 1024;

struct MemoryRegion {
    start: &'static str,
    end: &'static str,
    size: &'static str,
    bytes: u64,
    description: &'static str,
    used: bool,
}

const REGIONS: &[MemoryRegion] = &[
    MemoryRegion { start: "0x00000000", end: "0x0000FFFF", size: "64KB", bytes: 64 * 1024, description: "Real Mode Area", used: false },
    MemoryRegion { start: "0x00010000", end: "0x0008FFFF", size: "512KB", bytes: 512 * 1024, description: "Kernel Code/Data", used: true },
    MemoryRegion { start: "0x00090000", end: "0x0009FFFF", size: "64KB", bytes: 64 * 1024, description: "Stack Space", used: true },
    MemoryRegion { start: "0x000B8000", end: "0x000B8FA0", size: "4KB", bytes: 4 * 1024, description: "VGA Text Buffer", used: true },
    MemoryRegion { start: "0x00100000", end: "0x01FFFFFF", size: "31MB", bytes: 31 * 1024 * 1024, description: "Available Memory", used: false },
];

/// (path, size label, size in bytes, role)
const KERNEL_FILES: &[(&str, &str, u64, &str)] = &[
    ("boot/boot.asm", "512B", 512, "Bootloader"),
    ("kernel/kernel.c", "~8KB", 8 * 1024, "Main Kernel"),
    ("kernel/driver.c", "~4KB", 4 * 1024, "Hardware Drivers"),
    ("kernel/loading.c", "~3KB", 3 * 1024, "Loading Screen"),
    ("src/string.c", "~2KB", 2 * 1024, "String Library"),
    ("src/io.c", "~2KB", 2 * 1024, "I/O Library"),
    ("src/memory.c", "~2KB", 2 * 1024, "Memory Library"),
];

const CHECKS: &[(&str, &str)] = &[
    ("Kernel alignment check", "Kernel properly aligned at 0x10000"),
    ("Stack boundary check", "Stack within allocated region"),
    ("VGA buffer access", "VGA memory accessible"),
    ("Memory overlap check", "No memory region overlaps"),
    ("Bootloader signature", "Valid boot signature at 0x7DFE"),
];

/// Build the full memory-check report.
pub fn report(timestamp: &str) -> String {
    let mut out = String::new();

    let rule = "=".repeat(BANNER_WIDTH);
    out.push_str(&rule);
    out.push_str("\n                       KERNEL MEMORY CHECK TOOL\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Run time: {}\n\n", timestamp));

    out.push_str(&memory_map());
    out.push_str(&component_sizes());
    out.push_str(&usage_stats());
    out.push_str(&integrity_checks());

    out.push_str(&rule);
    out.push_str("\nMemory check completed successfully!\n");
    out.push_str(&rule);
    out.push('\n');
    out
}

fn section_rule() -> String {
    "-".repeat(BANNER_WIDTH)
}

fn memory_map() -> String {
    let mut out = String::new();
    out.push_str("MEMORY MAP VISUALIZATION\n");
    out.push_str(&section_rule());
    out.push('\n');

    for region in REGIONS {
        // Scale each region onto a 50-character ruler, minimum one cell.
        let width = ((region.bytes * 50) / TOTAL_MEMORY).max(1) as usize;
        let (bar, color) = if region.used {
            ("█".repeat(width), "\x1b[91m")
        } else {
            ("░".repeat(width), "\x1b[92m")
        };
        out.push_str(&format!(
            "{:<10} - {:<10} {}{}\x1b[0m\n",
            region.start, region.end, color, bar
        ));
        out.push_str(&format!(
            "            {:<8} - {}\n\n",
            region.size, region.description
        ));
    }
    out
}

fn component_sizes() -> String {
    let mut out = String::new();
    out.push_str("KERNEL COMPONENT SIZES\n");
    out.push_str(&section_rule());
    out.push('\n');

    let mut total: u64 = 0;
    for (file, label, bytes, role) in KERNEL_FILES {
        total += bytes;
        let bar = "▓".repeat((*bytes / 1024).max(1) as usize);
        out.push_str(&format!("{:<20} {:<8} {:<30} {}\n", file, label, bar, role));
    }
    out.push_str(&format!(
        "\nTotal kernel size: {:.1}KB\n\n",
        total as f64 / 1024.0
    ));
    out
}

fn usage_stats() -> String {
    let mut out = String::new();
    out.push_str("MEMORY USAGE STATISTICS\n");
    out.push_str(&section_rule());
    out.push('\n');

    let used: u64 = REGIONS.iter().filter(|r| r.used).map(|r| r.bytes).sum();
    let free: u64 = REGIONS.iter().filter(|r| !r.used).map(|r| r.bytes).sum();
    let used_percent = used as f64 / TOTAL_MEMORY as f64 * 100.0;
    let free_percent = free as f64 / TOTAL_MEMORY as f64 * 100.0;

    out.push_str(&format!("Total Memory: {}MB\n\n", TOTAL_MEMORY / 1024 / 1024));
    out.push_str(&format!(
        "Used: {:.1}MB ({:.1}%)\n\x1b[91m{}\x1b[0m\n\n",
        used as f64 / 1024.0 / 1024.0,
        used_percent,
        "█".repeat((used_percent / 2.0) as usize)
    ));
    out.push_str(&format!(
        "Free: {:.1}MB ({:.1}%)\n\x1b[92m{}\x1b[0m\n\n",
        free as f64 / 1024.0 / 1024.0,
        free_percent,
        "░".repeat((free_percent / 2.0) as usize)
    ));
    out
}

fn integrity_checks() -> String {
    let mut out = String::new();
    out.push_str("MEMORY INTEGRITY CHECKS\n");
    out.push_str(&section_rule());
    out.push('\n');

    for (name, message) in CHECKS {
        out.push_str(&format!("\x1b[92m✓ {:<30} PASSED\x1b[0m\n", name));
        out.push_str(&format!("    {}\n", message));
    }
    out.push('\n');
    out
}
