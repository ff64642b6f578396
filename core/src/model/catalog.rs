use serde::{Deserialize, Serialize};

/// The eight activity types of the doctoral training programme.
/// Serde names match the keys used in the stored ledger record.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActivityType {
    #[serde(rename = "courses")]
    Courses,
    #[serde(rename = "seminars")]
    Seminars,
    #[serde(rename = "labs")]
    Labs,
    #[serde(rename = "transversal")]
    Transversal,
    #[serde(rename = "teaching")]
    Teaching,
    #[serde(rename = "tutoring")]
    Tutoring,
    #[serde(rename = "extraCurricular")]
    ExtraCurricular,
    #[serde(rename = "dissemination")]
    Dissemination,
}

impl ActivityType {
    /// Catalog order. Listings and the CSV export iterate in this order.
    pub const ALL: [ActivityType; 8] = [
        ActivityType::Courses,
        ActivityType::Seminars,
        ActivityType::Labs,
        ActivityType::Transversal,
        ActivityType::Teaching,
        ActivityType::Tutoring,
        ActivityType::ExtraCurricular,
        ActivityType::Dissemination,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ActivityType::Courses => "courses",
            ActivityType::Seminars => "seminars",
            ActivityType::Labs => "labs",
            ActivityType::Transversal => "transversal",
            ActivityType::Teaching => "teaching",
            ActivityType::Tutoring => "tutoring",
            ActivityType::ExtraCurricular => "extraCurricular",
            ActivityType::Dissemination => "dissemination",
        }
    }

    /// Lenient lookup for CLI input. Accepts the storage key, the singular
    /// form and a couple of obvious spellings.
    pub fn parse(input: &str) -> Option<ActivityType> {
        match input.to_lowercase().as_str() {
            "courses" | "course" => Some(ActivityType::Courses),
            "seminars" | "seminar" => Some(ActivityType::Seminars),
            "labs" | "lab" => Some(ActivityType::Labs),
            "transversal" | "skills" => Some(ActivityType::Transversal),
            "teaching" => Some(ActivityType::Teaching),
            "tutoring" => Some(ActivityType::Tutoring),
            "extracurricular" | "extra-curricular" | "extra" => Some(ActivityType::ExtraCurricular),
            "dissemination" => Some(ActivityType::Dissemination),
            _ => None,
        }
    }
}

/// How credits accrue for an activity type. Hour-based types require both a
/// classroom and an autonomous-study quota per unit; day-based types pay a
/// flat rate per day attended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CreditRule {
    HourBased {
        classroom_hours_per_unit: f64,
        autonomous_hours_per_unit: f64,
        credit_per_unit: f64,
    },
    DayBased {
        credit_per_day: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityDefinition {
    pub name: &'static str,
    pub rule: CreditRule,
}

const COURSES: ActivityDefinition = ActivityDefinition {
    name: "Courses (PhD, Unibo, external)",
    rule: CreditRule::HourBased {
        classroom_hours_per_unit: 5.0,
        autonomous_hours_per_unit: 20.0,
        credit_per_unit: 1.0,
    },
};

const SEMINARS: ActivityDefinition = ActivityDefinition {
    name: "Seminars",
    rule: CreditRule::HourBased {
        classroom_hours_per_unit: 10.0,
        autonomous_hours_per_unit: 15.0,
        credit_per_unit: 1.0,
    },
};

const LABS: ActivityDefinition = ActivityDefinition {
    name: "Labs",
    rule: CreditRule::HourBased {
        classroom_hours_per_unit: 15.0,
        autonomous_hours_per_unit: 10.0,
        credit_per_unit: 1.0,
    },
};

const TRANSVERSAL: ActivityDefinition = ActivityDefinition {
    name: "Transversal Skills",
    rule: CreditRule::HourBased {
        classroom_hours_per_unit: 15.0,
        autonomous_hours_per_unit: 10.0,
        credit_per_unit: 1.0,
    },
};

const TEACHING: ActivityDefinition = ActivityDefinition {
    name: "Teaching",
    rule: CreditRule::HourBased {
        classroom_hours_per_unit: 5.0,
        autonomous_hours_per_unit: 20.0,
        credit_per_unit: 1.0,
    },
};

const TUTORING: ActivityDefinition = ActivityDefinition {
    name: "Tutoring",
    rule: CreditRule::HourBased {
        classroom_hours_per_unit: 20.0,
        autonomous_hours_per_unit: 5.0,
        credit_per_unit: 1.0,
    },
};

const EXTRA_CURRICULAR: ActivityDefinition = ActivityDefinition {
    name: "Extra-curricular Activities",
    rule: CreditRule::DayBased { credit_per_day: 0.5 },
};

const DISSEMINATION: ActivityDefinition = ActivityDefinition {
    name: "Dissemination",
    rule: CreditRule::DayBased { credit_per_day: 0.5 },
};

/// Static catalog lookup. Total over the closed `ActivityType` set, so an
/// unknown key cannot reach this function.
pub fn definition_of(kind: ActivityType) -> &'static ActivityDefinition {
    match kind {
        ActivityType::Courses => &COURSES,
        ActivityType::Seminars => &SEMINARS,
        ActivityType::Labs => &LABS,
        ActivityType::Transversal => &TRANSVERSAL,
        ActivityType::Teaching => &TEACHING,
        ActivityType::Tutoring => &TUTORING,
        ActivityType::ExtraCurricular => &EXTRA_CURRICULAR,
        ActivityType::Dissemination => &DISSEMINATION,
    }
}
