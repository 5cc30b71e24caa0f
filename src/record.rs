// src/record.rs
//
// One residency program as read from its directory page.
// Every value is the raw page substring, or "" when the label was missing.

/// Output columns, in file order.
pub const HEADERS: [&str; 19] = [
    "Name",
    "State",
    "City",
    "Salary PG1",
    "Salary PG2",
    "Salary PG3",
    "Salary PG4",
    "PTO PG1",
    "PTO PG2",
    "PTO PG3",
    "PTO PG4",
    "Min Step 1 Score",
    "Min Step 2 Score",
    "Avg. Step 1 Score",
    "Avg. Step 2 Score",
    "Residents (Total)",
    "Residents (Male)",
    "Residents (Female)",
    "Last Updated",
];

/// Resident head counts. Independently extracted; totals may not add up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demographics {
    pub total: String,
    pub male: String,
    pub female: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub state: String,
    pub city: String,
    /// By postgraduate year 1..=4
    pub salary: [String; 4],
    /// Paid time off by postgraduate year 1..=4
    pub pto: [String; 4],
    pub min_step_scores: [String; 2],
    pub avg_step_scores: [String; 2],
    pub demographics: Demographics,
    pub last_updated: String,
}

impl Record {
    /// Cells in `HEADERS` order.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(HEADERS.len());
        row.push(self.name.clone());
        row.push(self.state.clone());
        row.push(self.city.clone());
        row.extend(self.salary.iter().cloned());
        row.extend(self.pto.iter().cloned());
        row.extend(self.min_step_scores.iter().cloned());
        row.extend(self.avg_step_scores.iter().cloned());
        row.push(self.demographics.total.clone());
        row.push(self.demographics.male.clone());
        row.push(self.demographics.female.clone());
        row.push(self.last_updated.clone());
        row
    }
}
