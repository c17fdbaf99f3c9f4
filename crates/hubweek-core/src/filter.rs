//! Predicates for selecting relevant projects and designers.
//!
//! Each predicate is pure; [`ProjectFilter`] composes them by logical AND
//! for the weekly report selection: active projects, on the focus list,
//! staffed by at least one designer from the target hub.

use std::collections::HashSet;

use hubweek_models::{Designer, Project};

/// Focus projects for the weekly report; matching is by name prefix.
pub const DEFAULT_FOCUS_PROJECTS: &[&str] = &[
    "AACo Westholme Nature-Led Brand",
    "Abbott Heart Failure Next Generation System",
    "ApneaCo Zephyr Patch Sprint",
    "BP Castrol Innovation",
    "Builders Vision - Innovation Engine",
    "C-A-T Resources Combat Tourniquet Design Improvement",
    "CalMHSA BHSA Planning Process Redesign",
    "Celo Innovation Studio",
    "Conrad Universal BMGF Refinement",
    "Elliptigo 11R Redesign",
    "ERG Council 2025",
    "Exact Sciences Cologuard Experience & Product Design",
    "HLTH Vegas 2024",
    "LA County Hollywood 2.0",
    "LeadingAge California - Year Long Innovation Program",
    "Lenovo AI Devices",
    "Rockefeller Year 2 Big Bets Climate",
    "Samsung Design Innovation Process",
    "SF Hub Gatherings",
    "Sigma Alimentos: The Studio",
    "Sony SIE Special Project: (TinkerToo)",
    "WSJ Phase 4",
];

/// True iff any status tag equals "Active" case-insensitively.
pub fn is_active(project: &Project) -> bool {
    project.is_active()
}

/// True iff the designer's hub set contains `target_hub`, exact case.
pub fn matches_hub(designer: &Designer, target_hub: &str) -> bool {
    designer.matches_hub(target_hub)
}

/// True iff the project name starts with any of the prefixes, exact case.
pub fn name_has_prefix(project: &Project, prefixes: &[impl AsRef<str>]) -> bool {
    prefixes
        .iter()
        .any(|prefix| project.name.starts_with(prefix.as_ref()))
}

/// True iff any designer reference (either role) is in `ids`.
pub fn references_any(project: &Project, ids: &HashSet<String>) -> bool {
    project.designer_refs().any(|id| ids.contains(id))
}

/// Ids of the designers assigned to the target hub.
pub fn hub_designer_ids(designers: &[Designer], target_hub: &str) -> HashSet<String> {
    designers
        .iter()
        .filter(|d| d.matches_hub(target_hub))
        .map(|d| d.id.clone())
        .collect()
}

/// AND-composed selection criteria for projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    active_only: bool,
    name_prefixes: Option<Vec<String>>,
    designer_ids: Option<HashSet<String>>,
}

impl ProjectFilter {
    /// Creates a filter that matches every project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires an active status tag.
    pub fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }

    /// Requires the display name to start with one of the prefixes.
    pub fn with_name_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.name_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Requires at least one designer reference from the given set.
    pub fn with_designer_ids(mut self, ids: HashSet<String>) -> Self {
        self.designer_ids = Some(ids);
        self
    }

    /// Returns true if the project matches every criterion.
    pub fn matches(&self, project: &Project) -> bool {
        if self.active_only && !is_active(project) {
            return false;
        }

        if let Some(prefixes) = &self.name_prefixes {
            if !name_has_prefix(project, prefixes) {
                return false;
            }
        }

        if let Some(ids) = &self.designer_ids {
            if !references_any(project, ids) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubweek_models::Record;
    use serde_json::json;

    fn project(fields: serde_json::Value) -> Project {
        let record = Record::new("recP", fields.as_object().cloned().unwrap());
        Project::from_record(&record)
    }

    fn designer(id: &str, fields: serde_json::Value) -> Designer {
        let record = Record::new(id, fields.as_object().cloned().unwrap());
        Designer::from_record(&record)
    }

    #[test]
    fn test_name_has_prefix_exact_case() {
        let p = project(json!({"Project Name (Editable)": "Lenovo AI Devices (123)"}));
        assert!(name_has_prefix(&p, &["Lenovo AI Devices"]));
        assert!(!name_has_prefix(&p, &["lenovo ai devices"]));
        assert!(!name_has_prefix(&p, &["AI Devices"]));
    }

    #[test]
    fn test_references_any_checks_both_roles() {
        let p = project(json!({
            "Locked Designers": ["d1"],
            "Open Roles & Added Designers (Complete)": ["d2"]
        }));
        let ids: HashSet<String> = ["d2".to_string()].into();
        assert!(references_any(&p, &ids));

        let none: HashSet<String> = ["d9".to_string()].into();
        assert!(!references_any(&p, &none));
    }

    #[test]
    fn test_hub_designer_ids() {
        let designers = vec![
            designer("d1", json!({"Hub": ["San Francisco"]})),
            designer("d2", json!({"Hub": ["Chicago"]})),
            designer("d3", json!({"Hub": "San Francisco"})),
        ];
        let ids = hub_designer_ids(&designers, "San Francisco");
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("d1") && ids.contains("d3"));
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = ProjectFilter::new();
        assert!(filter.matches(&project(json!({}))));
    }

    #[test]
    fn test_combined_selection() {
        let designers = vec![designer("d1", json!({"Hub": ["San Francisco"]}))];
        let filter = ProjectFilter::new()
            .active_only()
            .with_name_prefixes(["Lenovo AI Devices"])
            .with_designer_ids(hub_designer_ids(&designers, "San Francisco"));

        let matching = project(json!({
            "Project Name (Editable)": "Lenovo AI Devices (100001703)",
            "Project Status (WD)": ["Active"],
            "Locked Designers": ["d1"]
        }));
        assert!(filter.matches(&matching));

        let inactive = project(json!({
            "Project Name (Editable)": "Lenovo AI Devices (100001703)",
            "Project Status (WD)": ["Closed"],
            "Locked Designers": ["d1"]
        }));
        assert!(!filter.matches(&inactive));

        let off_list = project(json!({
            "Project Name (Editable)": "Internal Ops",
            "Project Status (WD)": ["Active"],
            "Locked Designers": ["d1"]
        }));
        assert!(!filter.matches(&off_list));

        let unstaffed = project(json!({
            "Project Name (Editable)": "Lenovo AI Devices (100001703)",
            "Project Status (WD)": ["Active"]
        }));
        assert!(!filter.matches(&unstaffed));
    }
}
