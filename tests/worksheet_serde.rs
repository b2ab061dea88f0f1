//! Worksheet serde round-trip integration tests.
//!
//! Verifies that a populated worksheet survives a JSON round-trip exactly —
//! metadata, unit and domain lists, every sparse score cell — and that the
//! restored worksheet derives identical tables.

#[cfg(feature = "serde")]
mod tests {
    use tos_core::blueprint::{CourseInfo, TableSet, Worksheet};

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn make_worksheet() -> Worksheet {
        let mut ws = Worksheet::with_standard_domains(CourseInfo {
            code: String::from("21910-2010"),
            subject: String::from("Computer Programming"),
            credits: String::from("3 credits"),
            level: String::from("Year 2"),
            branch: String::from("Digital Business Technology"),
        });
        let u1 = ws.add_unit("1. Business programming basics", 12);
        let u2 = ws.add_unit("2. Data processing and decisions", 12);
        let domains: Vec<u32> = ws.domains().iter().map(|d| d.id).collect();
        for (i, &d) in domains.iter().enumerate() {
            ws.set_score(u1, d, (i as u32 % 10) + 1);
            if i % 2 == 0 {
                ws.set_score(u2, d, ((i as u32 * 3) % 10) + 1);
            }
        }
        ws
    }

    // ── Round trips ──────────────────────────────────────────────────────────

    #[test]
    fn worksheet_round_trips_exactly() {
        let ws = make_worksheet();
        let json = serde_json::to_string(&ws).unwrap();
        let restored: Worksheet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ws);
    }

    #[test]
    fn restored_worksheet_derives_identical_tables() {
        let ws = make_worksheet();
        let json = serde_json::to_string(&ws).unwrap();
        let restored: Worksheet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.derive(), ws.derive());
    }

    #[test]
    fn derived_tables_round_trip() {
        let tables = make_worksheet().derive();
        let json = serde_json::to_string(&tables).unwrap();
        let restored: TableSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, tables);
    }

    #[test]
    fn restored_worksheet_stays_editable() {
        // Ids allocated after a round-trip must not collide with stored ones.
        let ws = make_worksheet();
        let json = serde_json::to_string(&ws).unwrap();
        let mut restored: Worksheet = serde_json::from_str(&json).unwrap();

        let new_unit = restored.add_unit("3. Added after restore", 6);
        let holders = restored.units().iter().filter(|u| u.id == new_unit).count();
        assert_eq!(holders, 1, "fresh id {} collides", new_unit);
        let d = restored.domains()[0].id;
        assert!(restored.set_score(new_unit, d, 4));
        assert_eq!(restored.score(new_unit, d), 4);
    }

    #[test]
    fn empty_worksheet_round_trips() {
        let ws = Worksheet::new(CourseInfo::default());
        let json = serde_json::to_string(&ws).unwrap();
        let restored: Worksheet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ws);
        assert_eq!(restored.derive(), ws.derive());
    }
}
