use tally_client::{ExpenseSummary, GroupTotal};

use crate::output::format::currency;

pub fn render_summary(summary: &ExpenseSummary) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "--- Expense Summary ---".to_string(),
        format!("Total Spending: {}", currency(summary.total)),
    ];

    push_section(&mut lines, "Spending by Category:", &summary.by_category);
    push_section(&mut lines, "Spending by Date:", &summary.by_date);
    lines
}

fn push_section(lines: &mut Vec<String>, title: &str, groups: &[GroupTotal]) {
    lines.push(String::new());
    lines.push(title.to_string());
    for group in groups {
        lines.push(format!("{}: {}", group.label, currency(group.total)));
    }
}
