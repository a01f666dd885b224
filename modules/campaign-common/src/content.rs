use crate::types::{UpdateKind, UpdateRecord};

/// Campaign updates shown in the filterable list, in display order.
pub static UPDATES: &[UpdateRecord] = &[
    UpdateRecord {
        id: "u1",
        kind: UpdateKind::Events,
        title: "Town-hall forum with youth & first-time voters",
        date: "2026-02-14",
        location: "Kericho Town",
        summary: "A listening session focused on jobs, skills, and entrepreneurship opportunities.",
    },
    UpdateRecord {
        id: "u2",
        kind: UpdateKind::Field,
        title: "Tea farmers’ roundtable on fair pricing and deductions",
        date: "2026-02-18",
        location: "Ainamoi",
        summary: "Commitment to push for transparency, timely payments, and farmer-first reforms.",
    },
    UpdateRecord {
        id: "u3",
        kind: UpdateKind::Press,
        title: "Statement: Integrity and accountability in public service",
        date: "2026-02-20",
        location: "Kericho County",
        summary: "A pledge for clean leadership, transparent reporting, and measurable results.",
    },
    UpdateRecord {
        id: "u4",
        kind: UpdateKind::Field,
        title: "Women groups engagement: financial inclusion & market access",
        date: "2026-02-23",
        location: "Buret",
        summary: "Partnership approach to training, linkages, and support for women-led enterprises.",
    },
    UpdateRecord {
        id: "u5",
        kind: UpdateKind::Events,
        title: "Community baraza: health services and education support",
        date: "2026-02-28",
        location: "Belgut",
        summary: "Discussing service delivery, bursary transparency, and local health priorities.",
    },
    UpdateRecord {
        id: "u6",
        kind: UpdateKind::Press,
        title: "Press brief: Unity across wards, dignity of work, and inclusion",
        date: "2026-03-02",
        location: "Kipkelion East",
        summary: "A call for respectful politics and development that reaches every household.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = UPDATES.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), UPDATES.len());
    }

    #[test]
    fn test_every_kind_is_represented() {
        for kind in UpdateKind::ALL {
            assert_eq!(UPDATES.iter().filter(|u| u.kind == kind).count(), 2);
        }
    }
}
