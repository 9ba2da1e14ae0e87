//! Built-in reference tables.

use std::collections::BTreeMap;

use crate::file::{ReferenceFile, RegionEntry};

struct RegionSeed {
    name: &'static str,
    mobile_country_code: &'static str,
    carriers: &'static [(&'static str, &'static [&'static str])],
    phone_prefixes: &'static [&'static str],
}

const REGIONS: &[RegionSeed] = &[
    RegionSeed {
        name: "China",
        mobile_country_code: "460",
        carriers: &[
            ("China Mobile", &["00", "02", "07"]),
            ("China Unicom", &["01", "06", "09"]),
            ("China Telecom", &["03", "05", "11"]),
        ],
        phone_prefixes: &[
            "139", "138", "137", "136", "135", "134", "159", "158", "157", "152", "151", "150",
            "188", "187", "184", "183", "182", "178", "172", "170", "165", "157", "147", "144",
        ],
    },
    RegionSeed {
        name: "Hong Kong",
        mobile_country_code: "454",
        carriers: &[
            ("CSL", &["00", "02", "10", "16", "18", "19"]),
            ("HKT", &["03", "04", "12", "13", "29"]),
            ("3", &["05", "06"]),
            ("China Mobile HK", &["12", "13"]),
            ("Smartone", &["07", "15"]),
        ],
        phone_prefixes: &["5", "6", "9"],
    },
    RegionSeed {
        name: "Macao",
        mobile_country_code: "455",
        carriers: &[
            ("CTM", &["01", "04"]),
            ("China Telecom", &["02", "07"]),
            ("3", &["03", "05"]),
        ],
        phone_prefixes: &["6"],
    },
    RegionSeed {
        name: "Taiwan",
        mobile_country_code: "466",
        carriers: &[
            ("Far EasTone", &["01", "02"]),
            ("Chunghwa Telecom", &["05", "06", "11", "16", "26", "88", "89"]),
            ("TWN Mobile", &["89", "92", "97"]),
            ("Asia Pacific", &["05", "06", "10", "88", "89"]),
        ],
        phone_prefixes: &["09"],
    },
    RegionSeed {
        name: "USA",
        mobile_country_code: "310",
        carriers: &[
            ("Verizon", &["004", "010", "012", "013"]),
            (
                "AT&T",
                &["030", "070", "150", "170", "280", "380", "410", "560", "680"],
            ),
            ("T-Mobile", &["260", "310", "660", "800"]),
            ("Sprint", &["012", "120", "260", "490", "800"]),
        ],
        phone_prefixes: &[
            "201", "202", "203", "205", "206", "207", "208", "209", "210", "212", "213", "214",
            "215", "216", "217", "218", "219", "224", "225", "228", "229", "231", "234", "239",
            "248", "251", "252", "253", "254", "256", "260", "262", "267", "269", "270", "272",
            "276", "281", "283", "301", "302", "303", "304", "305", "307", "308", "309", "310",
        ],
    },
];

/// Brand, model name, type allocation code.
const MODELS: &[(&str, &str, &str)] = &[
    ("Samsung", "Galaxy S25", "35050556"),
    ("Apple", "iPhone 16e", "35281219"),
    ("Huawei", "P60 Art", "86312106"),
    ("Xiaomi", "14 Ultra", "86749806"),
    ("OPPO", "Reno 12 Pro", "86945807"),
    ("Vivo", "X90 Pro", "86004106"),
];

pub(crate) fn reference_file() -> ReferenceFile {
    let regions = REGIONS
        .iter()
        .map(|seed| {
            let carriers = seed
                .carriers
                .iter()
                .map(|(carrier, codes)| {
                    (
                        (*carrier).to_string(),
                        codes.iter().map(|code| (*code).to_string()).collect(),
                    )
                })
                .collect();
            let entry = RegionEntry {
                mobile_country_code: seed.mobile_country_code.to_string(),
                carriers,
                phone_prefixes: seed
                    .phone_prefixes
                    .iter()
                    .map(|prefix| (*prefix).to_string())
                    .collect(),
            };
            (seed.name.to_string(), entry)
        })
        .collect();

    let mut models: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
    for (brand, model, code) in MODELS {
        models
            .entry((*brand).to_string())
            .or_default()
            .insert((*model).to_string(), (*code).to_string());
    }

    ReferenceFile { regions, models }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_cover_five_regions_and_six_brands() {
        let file = reference_file();
        assert_eq!(file.regions.len(), 5);
        assert_eq!(file.models.len(), 6);
        assert_eq!(file.regions["USA"].carriers["AT&T"].len(), 9);
        assert_eq!(file.regions["China"].phone_prefixes.len(), 24);
    }
}
