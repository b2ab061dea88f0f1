//! Full blueprint walkthrough: build a worksheet, derive the three tables,
//! print them the way the worksheet lays them out.
//!
//! ```bash
//! cargo run --example worksheet
//! ```

use tos_core::blueprint::{CourseInfo, Table, Worksheet};

fn print_table(title: &str, table: &Table, col_names: &[&str], row_names: &[&str]) {
    println!("\n=== {} (grand total {}) ===", title, table.grand_total);
    print!("{:<36}", "");
    for name in col_names {
        print!("{:>6.6}", name);
    }
    println!("{:>7}{:>6}", "total", "rank");
    for (i, row) in table.rows.iter().enumerate() {
        print!("{:<36.36}", row_names[i]);
        for v in row {
            print!("{:>6}", v);
        }
        println!(
            "{:>7}{:>6}",
            table.row_sums[i],
            table.row_priorities[i].to_string()
        );
    }
    print!("{:<36}", "column total");
    for s in &table.col_sums {
        print!("{:>6}", s);
    }
    println!("{:>7}", table.grand_total);
    print!("{:<36}", "column rank");
    for p in &table.col_priorities {
        print!("{:>6}", p.to_string());
    }
    println!();
}

fn main() {
    let mut ws = Worksheet::with_standard_domains(CourseInfo {
        code: "21910-2010".into(),
        subject: "Computer Programming".into(),
        credits: "3 credits".into(),
        level: "Year 2".into(),
        branch: "Digital Business Technology".into(),
    });

    let units = [
        ws.add_unit("1. Business programming basics", 12),
        ws.add_unit("2. Data processing and decisions", 12),
        ws.add_unit("3. Functions and modular design", 16),
        ws.add_unit("4. Files and simple databases", 14),
    ];
    let domains: Vec<u32> = ws.domains().iter().map(|d| d.id).collect();
    for (r, &u) in units.iter().enumerate() {
        for (c, &d) in domains.iter().enumerate() {
            ws.set_score(u, d, ((r * 3 + c * 5) % 10) as u32 + 1);
        }
    }

    println!(
        "{} — {} ({}, {} periods)",
        ws.course.code,
        ws.course.subject,
        ws.course.level,
        ws.total_periods()
    );

    let tables = ws.derive();

    let all_names: Vec<&str> = ws.domains().iter().map(|d| d.name.as_str()).collect();
    let cognitive_names: Vec<&str> = ws
        .domains()
        .iter()
        .filter(|d| d.cognitive)
        .map(|d| d.name.as_str())
        .collect();
    let row_names: Vec<&str> = ws.units().iter().map(|u| u.name.as_str()).collect();

    print_table("Raw weights", &tables.weights, &all_names, &row_names);
    print_table("Percent (= 100)", &tables.percent, &cognitive_names, &row_names);
    print_table("Test items (= 60)", &tables.items, &cognitive_names, &row_names);
}
