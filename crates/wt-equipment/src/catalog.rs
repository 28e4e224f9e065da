/// One manufactured bar-grate model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrateModel {
    pub mark: &'static str,
    /// Frame width × height, m
    pub width_m: f64,
    pub height_m: f64,
    /// Working cross-section, m²
    pub area_m2: f64,
    /// Clear slot width between rods, m
    pub slot_width_m: f64,
    pub rod_thickness_m: f64,
    pub slot_count: u32,
}

impl GrateModel {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.mark.to_lowercase().contains(&query)
    }
}

/// One manufactured hammer crusher for grate screenings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HammerCrusher {
    pub mark: &'static str,
    pub capacity_kg_h: f64,
    pub rotation_rpm: f64,
    pub mass_kg: f64,
    pub power_kw: f64,
}

const GRATES: [GrateModel; 21] = [
    GrateModel { mark: "МГ5Т",    width_m: 2.0, height_m: 3.0, area_m2: 6.0,  slot_width_m: 0.016, rod_thickness_m: 0.008, slot_count: 84 },
    GrateModel { mark: "МГ6Т",    width_m: 2.0, height_m: 2.0, area_m2: 4.0,  slot_width_m: 0.016, rod_thickness_m: 0.008, slot_count: 84 },
    GrateModel { mark: "МГ7Т",    width_m: 0.8, height_m: 1.4, area_m2: 1.12, slot_width_m: 0.016, rod_thickness_m: 0.008, slot_count: 31 },
    GrateModel { mark: "МГ8Т",    width_m: 1.4, height_m: 2.0, area_m2: 2.8,  slot_width_m: 0.016, rod_thickness_m: 0.008, slot_count: 55 },
    GrateModel { mark: "МГ9Т",    width_m: 1.0, height_m: 1.2, area_m2: 1.2,  slot_width_m: 0.016, rod_thickness_m: 0.008, slot_count: 39 },
    GrateModel { mark: "МГ10Т",   width_m: 1.0, height_m: 2.0, area_m2: 2.0,  slot_width_m: 0.016, rod_thickness_m: 0.008, slot_count: 39 },
    GrateModel { mark: "МГ11Т",   width_m: 1.0, height_m: 1.6, area_m2: 1.6,  slot_width_m: 0.016, rod_thickness_m: 0.008, slot_count: 39 },
    GrateModel { mark: "МГ12Т",   width_m: 1.6, height_m: 2.0, area_m2: 3.2,  slot_width_m: 0.016, rod_thickness_m: 0.008, slot_count: 64 },
    GrateModel { mark: "РМУ1",    width_m: 0.6, height_m: 0.8, area_m2: 0.48, slot_width_m: 0.016, rod_thickness_m: 0.006, slot_count: 21 },
    GrateModel { mark: "РМУ2",    width_m: 1.0, height_m: 1.0, area_m2: 1.0,  slot_width_m: 0.016, rod_thickness_m: 0.006, slot_count: 39 },
    GrateModel { mark: "РМУ3",    width_m: 1.0, height_m: 2.0, area_m2: 2.0,  slot_width_m: 0.016, rod_thickness_m: 0.006, slot_count: 39 },
    GrateModel { mark: "РМУ4",    width_m: 1.5, height_m: 2.0, area_m2: 3.0,  slot_width_m: 0.016, rod_thickness_m: 0.006, slot_count: 60 },
    GrateModel { mark: "РМУ5",    width_m: 2.0, height_m: 2.0, area_m2: 4.0,  slot_width_m: 0.016, rod_thickness_m: 0.006, slot_count: 84 },
    GrateModel { mark: "РМУ6",    width_m: 2.0, height_m: 2.5, area_m2: 5.0,  slot_width_m: 0.016, rod_thickness_m: 0.006, slot_count: 84 },
    GrateModel { mark: "РМУ7",    width_m: 2.5, height_m: 3.0, area_m2: 7.5,  slot_width_m: 0.016, rod_thickness_m: 0.006, slot_count: 107 },
    GrateModel { mark: "РМН(10)", width_m: 0.8, height_m: 3.0, area_m2: 2.4,  slot_width_m: 0.01,  rod_thickness_m: 0.01,  slot_count: 40 },
    GrateModel { mark: "РМН(6)",  width_m: 0.8, height_m: 3.0, area_m2: 2.4,  slot_width_m: 0.006, rod_thickness_m: 0.01,  slot_count: 50 },
    GrateModel { mark: "РГД",     width_m: 0.9, height_m: 1.0, area_m2: 0.9,  slot_width_m: 0.01,  rod_thickness_m: 0.01,  slot_count: 45 },
    GrateModel { mark: "РФС-01",  width_m: 0.9, height_m: 1.0, area_m2: 0.9,  slot_width_m: 0.004, rod_thickness_m: 0.003, slot_count: 130 },
    GrateModel { mark: "RS-16",   width_m: 0.8, height_m: 1.0, area_m2: 0.8,  slot_width_m: 0.005, rod_thickness_m: 0.003, slot_count: 100 },
    GrateModel { mark: "RS-35",   width_m: 1.5, height_m: 3.0, area_m2: 4.5,  slot_width_m: 0.003, rod_thickness_m: 0.003, slot_count: 250 },
];

const HAMMER_CRUSHERS: [HammerCrusher; 2] = [
    HammerCrusher { mark: "Д-3б",   capacity_kg_h: 600.0,  rotation_rpm: 1450.0, mass_kg: 623.0,  power_kw: 22.0 },
    HammerCrusher { mark: "ДК-1,0", capacity_kg_h: 1000.0, rotation_rpm: 1450.0, mass_kg: 2000.0, power_kw: 75.0 },
];

pub fn grates() -> &'static [GrateModel] {
    &GRATES
}

pub fn hammer_crushers() -> &'static [HammerCrusher] {
    &HAMMER_CRUSHERS
}

pub fn grate_by_mark(mark: &str) -> Option<&'static GrateModel> {
    grates().iter().find(|model| model.mark == mark)
}

pub fn filter_grates(query: &str) -> Vec<GrateModel> {
    grates()
        .iter()
        .copied()
        .filter(|model| model.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn marks_are_unique() {
        let mut seen = HashSet::new();
        for model in grates() {
            assert!(seen.insert(model.mark), "duplicate grate mark: {}", model.mark);
        }
    }

    #[test]
    fn lookup_by_mark() {
        let model = grate_by_mark("РМУ2").expect("РМУ2 should be in the catalogue");
        assert_eq!(model.area_m2, 1.0);
        assert_eq!(model.slot_count, 39);

        assert!(grate_by_mark("РМУ99").is_none());
    }

    #[test]
    fn query_is_case_insensitive() {
        let results = filter_grates("rs-");
        assert_eq!(results.len(), 2);
        assert!(results.iter().any(|model| model.mark == "RS-16"));
        assert!(results.iter().any(|model| model.mark == "RS-35"));
    }

    #[test]
    fn empty_query_returns_everything() {
        assert_eq!(filter_grates("").len(), grates().len());
    }

    #[test]
    fn crushers_present() {
        assert_eq!(hammer_crushers().len(), 2);
        assert!(hammer_crushers().iter().any(|c| c.capacity_kg_h == 1000.0));
    }
}
