// src/specs/residency.rs
//! Page rules for one residency directory entry (`/id/{id}`).
//!
//! Every value sits in a `<span class="bold">…</span>` after a label. Page-wide
//! fields have a unique label; the numeric ones share the bold span inside a
//! numbered section and are told apart only by position. Those positions are
//! fixed by the directory's page template, so they live in [`RULES`] as
//! literals:
//!
//! - Section 10 alternates salary and paid time off: salary at 1,3,5,7 and
//!   PTO at 2,4,6,8.
//! - Section 17: total at 1, female at 3, male at 4. Position 2 is an
//!   unrelated count.
//! - Section 19: average Step 1 / Step 2 at 1, 2.
//! - Section 27: minimum Step 1 / Step 2 at 2, 3. Position 1 is a yes/no
//!   "scores required" answer.
//!
//! A section that is missing fails the whole page. A missing field inside a
//! present section degrades to `""` and is reported in [`Assembled::degraded`].

use std::collections::BTreeMap;

use crate::core::extract::{item_between, section};
use crate::core::net::Fetch;
use crate::error::ScrapeError;
use crate::record::Record;

const BOLD_OPEN: &str = r#"<span class="bold">"#;
const BOLD_CLOSE: &str = "</span>";

pub const SALARY_SECTION: u32 = 10;
pub const DEMOGRAPHICS_SECTION: u32 = 17;
pub const AVG_SCORES_SECTION: u32 = 19;
pub const MIN_SCORES_SECTION: u32 = 27;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    State,
    City,
    /// Postgraduate year index, 0-based
    Salary(usize),
    Pto(usize),
    MinStep(usize),
    AvgStep(usize),
    ResidentsTotal,
    ResidentsMale,
    ResidentsFemale,
    LastUpdated,
}

impl Field {
    fn slot<'r>(&self, rec: &'r mut Record) -> &'r mut String {
        match *self {
            Field::Name => &mut rec.name,
            Field::State => &mut rec.state,
            Field::City => &mut rec.city,
            Field::Salary(i) => &mut rec.salary[i],
            Field::Pto(i) => &mut rec.pto[i],
            Field::MinStep(i) => &mut rec.min_step_scores[i],
            Field::AvgStep(i) => &mut rec.avg_step_scores[i],
            Field::ResidentsTotal => &mut rec.demographics.total,
            Field::ResidentsMale => &mut rec.demographics.male,
            Field::ResidentsFemale => &mut rec.demographics.female,
            Field::LastUpdated => &mut rec.last_updated,
        }
    }
}

/// Where one field lives on the page.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: Field,
    /// `None` searches the whole page.
    pub section: Option<u32>,
    pub before: &'static str,
    pub after: &'static str,
    /// 1-based piece index after splitting on `before`
    pub instance: usize,
}

const fn labeled(field: Field, before: &'static str, after: &'static str) -> FieldRule {
    FieldRule { field, section: None, before, after, instance: 1 }
}

const fn bold(field: Field, section: u32, instance: usize) -> FieldRule {
    FieldRule { field, section: Some(section), before: BOLD_OPEN, after: BOLD_CLOSE, instance }
}

pub const RULES: &[FieldRule] = &[
    labeled(Field::Name, r#"Program Name:&nbsp;<span class="bold">"#, BOLD_CLOSE),
    labeled(Field::State, r#"&nbsp;State/Providence:&nbsp;<span class="bold">"#, BOLD_CLOSE),
    labeled(Field::City, r#"City:&nbsp;<span class="bold">"#, BOLD_CLOSE),
    bold(Field::Salary(0), SALARY_SECTION, 1),
    bold(Field::Salary(1), SALARY_SECTION, 3),
    bold(Field::Salary(2), SALARY_SECTION, 5),
    bold(Field::Salary(3), SALARY_SECTION, 7),
    bold(Field::Pto(0), SALARY_SECTION, 2),
    bold(Field::Pto(1), SALARY_SECTION, 4),
    bold(Field::Pto(2), SALARY_SECTION, 6),
    bold(Field::Pto(3), SALARY_SECTION, 8),
    bold(Field::MinStep(0), MIN_SCORES_SECTION, 2),
    bold(Field::MinStep(1), MIN_SCORES_SECTION, 3),
    bold(Field::AvgStep(0), AVG_SCORES_SECTION, 1),
    bold(Field::AvgStep(1), AVG_SCORES_SECTION, 2),
    bold(Field::ResidentsTotal, DEMOGRAPHICS_SECTION, 1),
    bold(Field::ResidentsFemale, DEMOGRAPHICS_SECTION, 3),
    bold(Field::ResidentsMale, DEMOGRAPHICS_SECTION, 4),
    labeled(Field::LastUpdated, r#"Last Updated: <span class="bold">"#, "<"),
];

/// A record plus the fields that fell back to `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assembled {
    pub record: Record,
    pub degraded: Vec<Field>,
}

/// Apply every rule in [`RULES`] to one page.
///
/// Field lookups are best-effort here: a miss leaves the cell at `""`, as
/// [`item_between_or_empty`](crate::core::extract::item_between_or_empty)
/// would, and is also recorded in `degraded`. Section lookups are strict.
pub fn parse_page(page: &str) -> Result<Assembled, ScrapeError> {
    let mut sections: BTreeMap<u32, &str> = BTreeMap::new();
    let mut out = Assembled::default();

    for rule in RULES {
        let scope = match rule.section {
            None => page,
            Some(n) => match sections.get(&n).copied() {
                Some(text) => text,
                None => {
                    let text = section(page, n)
                        .map_err(|source| ScrapeError::SectionMissing { section: n, source })?;
                    sections.insert(n, text);
                    text
                }
            },
        };

        match item_between(scope, rule.before, rule.after, rule.instance) {
            Ok(value) => *rule.field.slot(&mut out.record) = s!(value),
            Err(_) => out.degraded.push(rule.field),
        }
    }

    Ok(out)
}

/// Fetch entry `id` and parse it.
pub fn fetch_and_extract(fetcher: &dyn Fetch, id: u32) -> Result<Assembled, ScrapeError> {
    let page = fetcher.fetch(id)?;
    let assembled = parse_page(&page)?;
    if !assembled.degraded.is_empty() {
        logd!("id {id}: empty fields {:?}", assembled.degraded);
    }
    Ok(assembled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    const FIXTURE: &str = include_str!("../../tests/fixtures/program.html");

    fn bold_values(values: &[&str]) -> String {
        values.iter().map(|v| format!("x {BOLD_OPEN}{v}{BOLD_CLOSE} ")).collect()
    }

    /// Minimal page: only the four required sections with the given bodies.
    fn page_with(salary: &str, demographics: &str, avg: &str, min: &str) -> String {
        format!(
            "10.&nbsp;{salary}11.&nbsp;\
             17.&nbsp;{demographics}18.&nbsp;\
             19.&nbsp;{avg}20.&nbsp;\
             27.&nbsp;{min}28.&nbsp;"
        )
    }

    #[test]
    fn fixture_parses_every_field() {
        let out = parse_page(FIXTURE).unwrap();
        let rec = &out.record;
        assert!(out.degraded.is_empty(), "degraded: {:?}", out.degraded);
        assert_eq!(rec.name, "Example Program");
        assert_eq!(rec.state, "CA");
        assert_eq!(rec.city, "Los Angeles");
        assert_eq!(rec.salary, ["50000", "52000", "54000", "56000"]);
        assert_eq!(rec.pto, ["10", "12", "14", "16"]);
        assert_eq!(rec.avg_step_scores, ["228", "241"]);
        assert_eq!(rec.min_step_scores, ["210", "220"]);
        assert_eq!(rec.demographics.total, "24");
        assert_eq!(rec.demographics.female, "20");
        assert_eq!(rec.demographics.male, "4");
        assert_eq!(rec.last_updated, "2016-03-01");
    }

    #[test]
    fn field_values_match_best_effort_lookup() {
        use crate::core::extract::item_between_or_empty;

        let page = FIXTURE.replace("Last Updated:", "Updated:");
        let rec = parse_page(&page).unwrap().record;
        for rule in RULES {
            let scope = match rule.section {
                None => page.as_str(),
                Some(n) => section(&page, n).unwrap(),
            };
            let mut expected = rec.clone();
            *rule.field.slot(&mut expected) =
                s!(item_between_or_empty(scope, rule.before, rule.after, rule.instance));
            assert_eq!(expected, rec, "{:?}", rule.field);
        }
    }

    #[test]
    fn salary_and_pto_alternate_within_one_section() {
        let salary = bold_values(&["a1", "b1", "a2", "b2", "a3", "b3", "a4", "b4"]);
        let page = page_with(&salary, "", "", "");
        let rec = parse_page(&page).unwrap().record;
        assert_eq!(rec.salary, ["a1", "a2", "a3", "a4"]);
        assert_eq!(rec.pto, ["b1", "b2", "b3", "b4"]);
    }

    #[test]
    fn skipped_positions_are_never_read() {
        let demo = bold_values(&["total", "SKIP", "female", "male"]);
        let min = bold_values(&["SKIP", "min1", "min2"]);
        let page = page_with("", &demo, "", &min);
        let rec = parse_page(&page).unwrap().record;
        assert_eq!(rec.demographics.total, "total");
        assert_eq!(rec.demographics.female, "female");
        assert_eq!(rec.demographics.male, "male");
        assert_eq!(rec.min_step_scores, ["min1", "min2"]);
        assert!(!rec.to_row().iter().any(|c| c == "SKIP"));
    }

    #[test]
    fn missing_label_degrades_single_field() {
        let page = FIXTURE.replace("Last Updated:", "Updated on:");
        let out = parse_page(&page).unwrap();
        assert_eq!(out.record.last_updated, "");
        assert_eq!(out.degraded, vec![Field::LastUpdated]);
        assert_eq!(out.record.name, "Example Program");
    }

    #[test]
    fn short_section_degrades_tail_values() {
        let salary = bold_values(&["50000", "10"]);
        let page = page_with(&salary, "", "", "");
        let out = parse_page(&page).unwrap();
        assert_eq!(out.record.salary, ["50000", "", "", ""]);
        assert_eq!(out.record.pto, ["10", "", "", ""]);
        assert!(out.degraded.contains(&Field::Salary(3)));
    }

    #[test]
    fn missing_section_fails_page() {
        for n in [SALARY_SECTION, DEMOGRAPHICS_SECTION, AVG_SCORES_SECTION, MIN_SCORES_SECTION] {
            let page = FIXTURE.replace(&format!("{n}.&nbsp;"), "");
            match parse_page(&page) {
                Err(ScrapeError::SectionMissing { section, .. }) => assert_eq!(section, n),
                other => panic!("section {n}: expected SectionMissing, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_closing_marker_fails_page() {
        let page = FIXTURE.replace("20.&nbsp;", "");
        assert!(matches!(
            parse_page(&page),
            Err(ScrapeError::SectionMissing { section: AVG_SCORES_SECTION, .. })
        ));
    }

    struct OnePage(Result<String, FetchError>);
    impl Fetch for OnePage {
        fn fetch(&self, _id: u32) -> Result<String, FetchError> {
            self.0.clone()
        }
    }

    #[test]
    fn fetch_errors_propagate_unchanged() {
        let fetcher = OnePage(Err(FetchError::NotAuthorized));
        assert_eq!(
            fetch_and_extract(&fetcher, 3).unwrap_err(),
            ScrapeError::Fetch(FetchError::NotAuthorized)
        );
    }

    #[test]
    fn fetch_and_extract_parses_fetched_page() {
        let fetcher = OnePage(Ok(s!(FIXTURE)));
        let out = fetch_and_extract(&fetcher, 1).unwrap();
        assert_eq!(out.record.city, "Los Angeles");
    }
}
