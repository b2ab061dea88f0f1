//! The editable blueprint worksheet and its three derived tables.
//!
//! A [`Worksheet`] owns what the educator edits: course metadata, the list of
//! learning units, the list of behavioral domains, and a sparse grid of raw
//! weight scores keyed by (unit, domain). Everything else is derived — calling
//! [`Worksheet::derive`] produces a fresh [`TableSet`]:
//!
//! 1. **weights** — the raw scores over every domain, with row/column sums
//!    and priority ranks.
//! 2. **percent** — the cognitive-domain columns rescaled so the grand total
//!    is exactly [`PERCENT_TARGET`], each cell capped at [`CELL_CEILING`].
//! 3. **items** — the percent table rescaled again so the grand total is
//!    exactly [`ITEM_TARGET`] test items.
//!
//! Derivation is a pure function of the worksheet value: no caching, no
//! interior mutability, no I/O. Two `derive()` calls on the same worksheet
//! return equal tables.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::matrix;
use crate::rank::{priorities, Priority};

// ─── Blueprint constants ────────────────────────────────────────────────────

/// Grand total of the percentage table.
pub const PERCENT_TARGET: u32 = 100;

/// Grand total of the test-item-count table.
pub const ITEM_TARGET: u32 = 60;

/// Per-cell cap applied when rescaling raw weights to [`PERCENT_TARGET`].
pub const CELL_CEILING: u32 = 10;

/// Smallest raw weight an educator can enter.
pub const SCORE_MIN: u32 = 1;

/// Largest raw weight an educator can enter.
pub const SCORE_MAX: u32 = 10;

// ─── Worksheet data ─────────────────────────────────────────────────────────

/// Course metadata printed on the worksheet header. Opaque to the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseInfo {
    /// Course code, e.g. `21910-2010`.
    pub code: String,
    /// Course title.
    pub subject: String,
    /// Credit description.
    pub credits: String,
    /// Study level / year.
    pub level: String,
    /// Program branch or competency track.
    pub branch: String,
}

/// One behavioral domain column.
///
/// Only cognitive domains participate in the percent and item tables; the
/// psychomotor and affective columns appear in the raw weight table alone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    /// Stable identifier within this worksheet.
    pub id: u32,
    /// Display name. Opaque to the engine.
    pub name: String,
    /// True for cognitive-domain columns (the testable ones).
    pub cognitive: bool,
}

/// One learning-unit row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LearningUnit {
    /// Stable identifier within this worksheet.
    pub id: u32,
    /// Display name. Opaque to the engine.
    pub name: String,
    /// Teaching periods allotted to the unit (header bookkeeping only).
    pub periods: u32,
}

/// The editable test-blueprint worksheet.
///
/// Rows are learning units, columns are behavioral domains, and the score
/// grid is sparse: an unset cell reads as zero. Units and domains get stable
/// ids on insertion, so removing a row or column drops exactly the scores
/// that referenced it and nothing else.
///
/// ```rust
/// use tos_core::blueprint::{CourseInfo, Worksheet};
///
/// let mut ws = Worksheet::with_standard_domains(CourseInfo::default());
/// let unit = ws.add_unit("1. Business programming basics", 12);
/// let knowledge = ws.domains()[0].id;
/// ws.set_score(unit, knowledge, 5);
///
/// let tables = ws.derive();
/// assert_eq!(tables.percent.grand_total, 100);
/// assert_eq!(tables.items.grand_total, 60);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worksheet {
    /// Header metadata. Never read by the engine.
    pub course: CourseInfo,
    units: Vec<LearningUnit>,
    domains: Vec<Domain>,
    #[cfg_attr(feature = "serde", serde(with = "score_map"))]
    scores: HashMap<(u32, u32), u32>,
    next_id: u32,
}

impl Worksheet {
    /// An empty worksheet: no units, no domains, no scores.
    pub fn new(course: CourseInfo) -> Self {
        Self {
            course,
            units: Vec::new(),
            domains: Vec::new(),
            scores: HashMap::new(),
            next_id: 1,
        }
    }

    /// A worksheet pre-seeded with the nine standard domain columns: the six
    /// cognitive levels (knowledge, comprehension, application, analysis,
    /// evaluation, creation) plus psychomotor, affective, and applied skills.
    pub fn with_standard_domains(course: CourseInfo) -> Self {
        let mut ws = Self::new(course);
        for name in [
            "Knowledge",
            "Comprehension",
            "Application",
            "Analysis",
            "Evaluation",
            "Creation",
        ] {
            ws.add_domain(name, true);
        }
        for name in ["Psychomotor", "Affective", "Applied"] {
            ws.add_domain(name, false);
        }
        ws
    }

    // ── Row / column editing ───────────────────────────────────────────────

    /// Append a learning-unit row. Returns its id.
    pub fn add_unit(&mut self, name: impl Into<String>, periods: u32) -> u32 {
        let id = self.fresh_id();
        self.units.push(LearningUnit {
            id,
            name: name.into(),
            periods,
        });
        id
    }

    /// Append a behavioral-domain column. Returns its id.
    pub fn add_domain(&mut self, name: impl Into<String>, cognitive: bool) -> u32 {
        let id = self.fresh_id();
        self.domains.push(Domain {
            id,
            name: name.into(),
            cognitive,
        });
        id
    }

    /// Remove a unit row and every score in it. Returns false if the id is
    /// unknown.
    pub fn remove_unit(&mut self, unit_id: u32) -> bool {
        let before = self.units.len();
        self.units.retain(|u| u.id != unit_id);
        if self.units.len() == before {
            return false;
        }
        self.scores.retain(|&(u, _), _| u != unit_id);
        true
    }

    /// Remove a domain column and every score in it. Returns false if the id
    /// is unknown.
    pub fn remove_domain(&mut self, domain_id: u32) -> bool {
        let before = self.domains.len();
        self.domains.retain(|d| d.id != domain_id);
        if self.domains.len() == before {
            return false;
        }
        self.scores.retain(|&(_, d), _| d != domain_id);
        true
    }

    // ── Score editing ──────────────────────────────────────────────────────

    /// Set a raw weight, clamped to [`SCORE_MIN`]..=[`SCORE_MAX`]. Returns
    /// false (and stores nothing) when either id is unknown.
    pub fn set_score(&mut self, unit_id: u32, domain_id: u32, raw: u32) -> bool {
        if !self.has_unit(unit_id) || !self.has_domain(domain_id) {
            return false;
        }
        self.scores
            .insert((unit_id, domain_id), raw.clamp(SCORE_MIN, SCORE_MAX));
        true
    }

    /// Clear one cell back to "not entered". Returns false if it was empty.
    pub fn clear_score(&mut self, unit_id: u32, domain_id: u32) -> bool {
        self.scores.remove(&(unit_id, domain_id)).is_some()
    }

    /// Clear every score, keeping units, domains, and metadata.
    pub fn clear_scores(&mut self) {
        self.scores.clear();
    }

    // ── Read accessors ─────────────────────────────────────────────────────

    /// The raw weight of one cell; an unset cell reads as zero.
    pub fn score(&self, unit_id: u32, domain_id: u32) -> u32 {
        self.scores.get(&(unit_id, domain_id)).copied().unwrap_or(0)
    }

    /// Learning-unit rows, in insertion order.
    pub fn units(&self) -> &[LearningUnit] {
        &self.units
    }

    /// Behavioral-domain columns, in insertion order.
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Number of unit rows.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Number of domain columns.
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    /// Total teaching periods across all units (worksheet header line).
    pub fn total_periods(&self) -> u32 {
        self.units.iter().map(|u| u.periods).sum()
    }

    /// Dense row-major snapshot of the raw grid over every domain.
    pub fn raw_matrix(&self) -> Vec<Vec<u32>> {
        self.matrix_for(|_| true)
    }

    /// Dense row-major snapshot over the cognitive domains only.
    pub fn cognitive_matrix(&self) -> Vec<Vec<u32>> {
        self.matrix_for(|d| d.cognitive)
    }

    // ── Derivation ─────────────────────────────────────────────────────────

    /// Derive the three blueprint tables from the current scores.
    ///
    /// Pure and idempotent: the worksheet is not touched, and equal
    /// worksheets derive equal tables. An all-zero (or empty) grid derives
    /// all-zero tables — the percentage split of nothing is left undefined
    /// rather than divided by zero.
    pub fn derive(&self) -> TableSet {
        let weights = Table::from_rows(self.raw_matrix());
        let percent = Table::from_rows(matrix::scale_matrix(
            &self.cognitive_matrix(),
            PERCENT_TARGET,
            Some(CELL_CEILING),
        ));
        let items = Table::from_rows(matrix::scale_matrix(&percent.rows, ITEM_TARGET, None));
        TableSet {
            weights,
            percent,
            items,
        }
    }

    // ── Internal helpers ───────────────────────────────────────────────────

    fn fresh_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn has_unit(&self, unit_id: u32) -> bool {
        self.units.iter().any(|u| u.id == unit_id)
    }

    fn has_domain(&self, domain_id: u32) -> bool {
        self.domains.iter().any(|d| d.id == domain_id)
    }

    fn matrix_for(&self, keep: impl Fn(&Domain) -> bool) -> Vec<Vec<u32>> {
        let cols: Vec<u32> = self
            .domains
            .iter()
            .filter(|d| keep(d))
            .map(|d| d.id)
            .collect();
        self.units
            .iter()
            .map(|u| cols.iter().map(|&d| self.score(u.id, d)).collect())
            .collect()
    }
}

// ─── Derived tables ─────────────────────────────────────────────────────────

/// One derived table: cells plus the totals and rank columns printed next to
/// them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Cell values, row-major, same shape as the source grid.
    pub rows: Vec<Vec<u32>>,
    /// Per-row totals, aligned with `rows`.
    pub row_sums: Vec<u32>,
    /// Per-column totals.
    pub col_sums: Vec<u32>,
    /// Sum of every cell.
    pub grand_total: u32,
    /// Dense priority of each row total; zero rows are unranked.
    pub row_priorities: Vec<Priority>,
    /// Dense priority of each column total; zero columns are unranked.
    pub col_priorities: Vec<Priority>,
}

impl Table {
    /// Build a table (sums, totals, rank columns) from its cell values.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        let row_sums = matrix::row_sums(&rows);
        let col_sums = matrix::col_sums(&rows);
        let grand_total = matrix::grand_total(&rows);
        let row_priorities = priorities(&row_sums);
        let col_priorities = priorities(&col_sums);
        Self {
            rows,
            row_sums,
            col_sums,
            grand_total,
            row_priorities,
            col_priorities,
        }
    }
}

/// The three tables a blueprint derives from one worksheet snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSet {
    /// Raw weights over every domain.
    pub weights: Table,
    /// Cognitive columns rescaled to [`PERCENT_TARGET`], cells capped at
    /// [`CELL_CEILING`] where reachable.
    pub percent: Table,
    /// The percent table rescaled to [`ITEM_TARGET`] test items.
    pub items: Table,
}

// ─── serde representation of the sparse score grid ──────────────────────────

// Tuple keys do not survive self-describing formats like JSON, so the grid
// serialises as a sorted list of (unit, domain, value) records.
#[cfg(feature = "serde")]
mod score_map {
    use alloc::vec::Vec;

    use hashbrown::HashMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        map: &HashMap<(u32, u32), u32>,
        ser: S,
    ) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(u32, u32, u32)> =
            map.iter().map(|(&(u, d), &v)| (u, d, v)).collect();
        entries.sort_unstable();
        entries.serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        de: D,
    ) -> Result<HashMap<(u32, u32), u32>, D::Error> {
        let entries = Vec::<(u32, u32, u32)>::deserialize(de)?;
        Ok(entries.into_iter().map(|(u, d, v)| ((u, d), v)).collect())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn course() -> CourseInfo {
        CourseInfo {
            code: String::from("21910-2010"),
            subject: String::from("Computer Programming"),
            credits: String::from("3 credits"),
            level: String::from("Year 2"),
            branch: String::from("Digital Business Technology"),
        }
    }

    /// Two units with scores in every standard domain.
    fn filled_worksheet() -> Worksheet {
        let mut ws = Worksheet::with_standard_domains(course());
        let u1 = ws.add_unit("1. Business programming basics", 12);
        let u2 = ws.add_unit("2. Data processing and decisions", 12);
        let domain_ids: Vec<u32> = ws.domains().iter().map(|d| d.id).collect();
        for (i, &d) in domain_ids.iter().enumerate() {
            ws.set_score(u1, d, (i as u32 % 5) + 1);
            ws.set_score(u2, d, ((i as u32 + 2) % 5) + 1);
        }
        ws
    }

    #[test]
    fn standard_domains_split_cognitive_and_not() {
        let ws = Worksheet::with_standard_domains(course());
        assert_eq!(ws.domain_count(), 9);
        let cognitive = ws.domains().iter().filter(|d| d.cognitive).count();
        assert_eq!(cognitive, 6);
    }

    #[test]
    fn unset_cells_read_zero() {
        let mut ws = Worksheet::with_standard_domains(course());
        let u = ws.add_unit("1.", 4);
        let d = ws.domains()[0].id;
        assert_eq!(ws.score(u, d), 0);
        ws.set_score(u, d, 7);
        assert_eq!(ws.score(u, d), 7);
        assert!(ws.clear_score(u, d));
        assert_eq!(ws.score(u, d), 0);
        assert!(!ws.clear_score(u, d));
    }

    #[test]
    fn scores_clamp_to_the_entry_range() {
        let mut ws = Worksheet::with_standard_domains(course());
        let u = ws.add_unit("1.", 4);
        let d = ws.domains()[0].id;
        ws.set_score(u, d, 0);
        assert_eq!(ws.score(u, d), SCORE_MIN);
        ws.set_score(u, d, 99);
        assert_eq!(ws.score(u, d), SCORE_MAX);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut ws = Worksheet::with_standard_domains(course());
        let u = ws.add_unit("1.", 4);
        assert!(!ws.set_score(u, 9999, 5));
        assert!(!ws.set_score(9999, ws.domains()[0].id, 5));
        assert!(!ws.remove_unit(9999));
        assert!(!ws.remove_domain(9999));
    }

    #[test]
    fn removing_a_unit_drops_its_row_of_scores() {
        let mut ws = filled_worksheet();
        let gone = ws.units()[0].id;
        let kept = ws.units()[1].id;
        let d = ws.domains()[0].id;
        let kept_score = ws.score(kept, d);

        assert!(ws.remove_unit(gone));
        assert_eq!(ws.unit_count(), 1);
        assert_eq!(ws.score(gone, d), 0);
        assert_eq!(ws.score(kept, d), kept_score);
    }

    #[test]
    fn removing_a_domain_drops_its_column_of_scores() {
        let mut ws = filled_worksheet();
        let gone = ws.domains()[0].id;
        let u = ws.units()[0].id;
        assert!(ws.remove_domain(gone));
        assert_eq!(ws.domain_count(), 8);
        assert_eq!(ws.score(u, gone), 0);
        assert_eq!(ws.raw_matrix()[0].len(), 8);
    }

    #[test]
    fn matrices_follow_insertion_order() {
        let mut ws = Worksheet::new(course());
        let da = ws.add_domain("A", true);
        let _db = ws.add_domain("B", false);
        let dc = ws.add_domain("C", true);
        let u = ws.add_unit("1.", 2);
        ws.set_score(u, da, 3);
        ws.set_score(u, dc, 9);

        assert_eq!(ws.raw_matrix(), vec![vec![3, 0, 9]]);
        assert_eq!(ws.cognitive_matrix(), vec![vec![3, 9]]);
    }

    #[test]
    fn derive_hits_both_grand_totals() {
        let tables = filled_worksheet().derive();
        assert_eq!(tables.percent.grand_total, PERCENT_TARGET);
        assert_eq!(tables.items.grand_total, ITEM_TARGET);
    }

    #[test]
    fn derive_preserves_shapes() {
        let ws = filled_worksheet();
        let tables = ws.derive();
        assert_eq!(tables.weights.rows.len(), ws.unit_count());
        assert_eq!(tables.weights.rows[0].len(), ws.domain_count());
        // Percent and item tables cover the cognitive columns only.
        assert_eq!(tables.percent.rows.len(), ws.unit_count());
        assert_eq!(tables.percent.rows[0].len(), 6);
        assert_eq!(tables.items.rows[0].len(), 6);
    }

    #[test]
    fn percent_cells_respect_the_ceiling_when_reachable() {
        let ws = filled_worksheet();
        // 2 units × 6 cognitive columns = 12 cells ≥ 100 / 10.
        let tables = ws.derive();
        for (i, row) in tables.percent.rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                assert!(v <= CELL_CEILING, "cell ({}, {}) = {}", i, j, v);
            }
        }
    }

    #[test]
    fn empty_worksheet_derives_empty_tables() {
        let tables = Worksheet::with_standard_domains(course()).derive();
        assert_eq!(tables.weights.grand_total, 0);
        assert_eq!(tables.percent.grand_total, 0);
        assert_eq!(tables.items.grand_total, 0);
        assert!(tables.percent.rows.is_empty());
    }

    #[test]
    fn unscored_worksheet_derives_zero_tables() {
        let mut ws = Worksheet::with_standard_domains(course());
        ws.add_unit("1.", 6);
        ws.add_unit("2.", 6);
        let tables = ws.derive();
        // No scores entered: everything is zero, nothing divides by zero.
        assert_eq!(tables.percent.grand_total, 0);
        assert!(tables.percent.rows.iter().flatten().all(|&v| v == 0));
        assert_eq!(
            tables.percent.row_priorities,
            vec![Priority::Unranked, Priority::Unranked]
        );
    }

    #[test]
    fn rank_columns_align_with_sums() {
        let tables = filled_worksheet().derive();
        let t = &tables.weights;
        assert_eq!(t.row_priorities.len(), t.row_sums.len());
        assert_eq!(t.col_priorities.len(), t.col_sums.len());
        assert_eq!(t.row_priorities, priorities(&t.row_sums));
        assert_eq!(t.col_priorities, priorities(&t.col_sums));
    }

    #[test]
    fn derive_is_pure_and_idempotent() {
        let ws = filled_worksheet();
        let a = ws.derive();
        let b = ws.derive();
        assert_eq!(a, b);
        assert_eq!(ws, filled_worksheet());
    }

    #[test]
    fn clear_scores_keeps_structure() {
        let mut ws = filled_worksheet();
        ws.clear_scores();
        assert_eq!(ws.unit_count(), 2);
        assert_eq!(ws.domain_count(), 9);
        assert_eq!(ws.derive().weights.grand_total, 0);
    }

    #[test]
    fn total_periods_sums_unit_headers() {
        let ws = filled_worksheet();
        assert_eq!(ws.total_periods(), 24);
    }
}
