//! Static option sets the lead form is built from. The form validates
//! membership against these tables, so they are the single source of truth
//! for what a submission may contain.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guide {
    pub id: &'static str,
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub static GUIDES: [Guide; 6] = [
    Guide {
        id: "coffee",
        image: "/assets/guide-coffee.png",
        title: "Coffee Makers & Espresso Equipment",
        subtitle: "Professional coffee and espresso machine solutions",
    },
    Guide {
        id: "ovens",
        image: "/assets/guide-ovens.png",
        title: "Commercial Ovens & Cooking Equipment",
        subtitle: "Industrial ovens and cooking solutions",
    },
    Guide {
        id: "refrigeration",
        image: "/assets/guide-refrigeration.png",
        title: "Refrigeration & Cooling Systems",
        subtitle: "Commercial refrigeration and cooling equipment",
    },
    Guide {
        id: "dishwashing",
        image: "/assets/guide-dishwashing.png",
        title: "Dishwashing & Cleaning Systems",
        subtitle: "Professional dishwashing and sanitation solutions",
    },
    Guide {
        id: "laundry",
        image: "/assets/guide-laundry.png",
        title: "Laundry & Washing Solutions",
        subtitle: "Commercial laundry and textile care equipment",
    },
    Guide {
        id: "bakery",
        image: "/assets/guide-bakery.png",
        title: "Bakery Equipment & Solutions",
        subtitle: "Professional baking and pastry equipment",
    },
];

pub static CITIES: [&str; 15] = [
    "Riyadh",
    "Jeddah",
    "Mecca",
    "Medina",
    "Dammam",
    "Khobar",
    "Dhahran",
    "Buraidah",
    "Tabuk",
    "Khamis Mushait",
    "Hail",
    "Najran",
    "Jazan",
    "Taif",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialCode {
    pub code: &'static str,
    pub country: &'static str,
}

pub static DIAL_CODES: [DialCode; 6] = [
    DialCode { code: "+966", country: "Saudi Arabia" },
    DialCode { code: "+971", country: "UAE" },
    DialCode { code: "+973", country: "Bahrain" },
    DialCode { code: "+974", country: "Qatar" },
    DialCode { code: "+965", country: "Kuwait" },
    DialCode { code: "+968", country: "Oman" },
];

pub static JOB_TITLES: [&str; 8] = [
    "CEO/Owner",
    "General Manager",
    "Operations Manager",
    "Marketing Manager",
    "Purchasing Manager",
    "Kitchen Manager",
    "F&B Manager",
    "Other",
];

pub static TIMELINES: [&str; 5] = [
    "Within 1 month",
    "1–3 months",
    "3–6 months",
    "6+ months",
    "Just researching",
];

/// Equipment categories cycled through on the hero's animated line.
pub static ROTATING_WORDS: [&str; 6] = [
    "Coffee Makers",
    "Commercial Ovens",
    "Refrigeration",
    "Dishwashing Equipment",
    "Laundry Solutions",
    "Bakery Equipment",
];

pub fn guide(id: &str) -> Option<&'static Guide> {
    GUIDES.iter().find(|guide| guide.id == id)
}

pub fn is_dial_code(code: &str) -> bool {
    DIAL_CODES.iter().any(|entry| entry.code == code)
}

pub fn is_city(city: &str) -> bool {
    CITIES.contains(&city)
}

pub fn is_job_title(title: &str) -> bool {
    JOB_TITLES.contains(&title)
}

pub fn is_timeline(timeline: &str) -> bool {
    TIMELINES.contains(&timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_lookup_by_id() {
        let found = guide("coffee").expect("coffee guide exists");
        assert_eq!(found.title, "Coffee Makers & Espresso Equipment");
        assert!(guide("sous-vide").is_none());
    }

    #[test]
    fn test_guide_ids_are_unique() {
        for (i, a) in GUIDES.iter().enumerate() {
            for b in GUIDES.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_membership_checks() {
        assert!(is_dial_code("+966"));
        assert!(!is_dial_code("+358"));
        assert!(is_city("Riyadh"));
        assert!(is_city("Other"));
        assert!(!is_city("Helsinki"));
        assert!(is_job_title("F&B Manager"));
        assert!(is_timeline("Just researching"));
        assert!(!is_timeline("Next decade"));
    }
}
