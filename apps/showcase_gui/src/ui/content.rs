//! Static page copy for each section.

use shared::domain::SectionId;

pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

pub struct SectionCopy {
    pub heading: &'static str,
    pub lead: &'static str,
    pub cards: &'static [Card],
    pub facts: &'static [Fact],
}

pub fn nav_label(section: SectionId) -> &'static str {
    match section {
        SectionId::Hero => "Home",
        SectionId::Characteristics => "Characteristics",
        SectionId::Habitat => "Habitat",
        SectionId::Behavior => "Behavior",
    }
}

pub const HERO_TITLE: &str = "HARPY";
pub const HERO_SUBTITLE: &str = "Harpy Eagle";
pub const HERO_BADGES: &[&str] = &[
    "Grip of 42 kg/cm²",
    "Wingspan: 200+ cm",
    "Weight: up to 9 kg",
    "Near Threatened",
];
pub const SCROLL_HINT: &str = "Scroll to discover";

pub fn section_copy(section: SectionId) -> Option<&'static SectionCopy> {
    match section {
        SectionId::Hero => None,
        SectionId::Characteristics => Some(&CHARACTERISTICS),
        SectionId::Habitat => Some(&HABITAT),
        SectionId::Behavior => Some(&BEHAVIOR),
    }
}

static CHARACTERISTICS: SectionCopy = SectionCopy {
    heading: "Anatomy of a Predator",
    lead: "Distinctive features and a slow road to adulthood.",
    cards: &[
        Card {
            title: "Royal Majesty",
            body: "The largest bird of prey in Brazil, between 90 and 105 cm long.",
        },
        Card {
            title: "Supreme Strength",
            body: "Counted among the strongest eagles alive, able to pull sloths off branches.",
        },
        Card {
            title: "Broad Wings",
            body: "Wide, rounded wings built for hunting inside dense rainforest.",
        },
        Card {
            title: "Keen Vision",
            body: "Dark brown eyes that spot prey from great distances.",
        },
    ],
    facts: &[
        Fact { label: "Upperparts", value: "Dark grey" },
        Fact { label: "Underparts", value: "White" },
        Fact { label: "Legs and feet", value: "Yellow" },
        Fact { label: "Talons", value: "Long, black" },
        Fact { label: "Bill", value: "Heavy hook" },
        Fact { label: "Crest", value: "Erectile" },
        Fact { label: "Adult plumage", value: "4-5 years" },
        Fact { label: "Physical maturity", value: "3 years" },
        Fact { label: "Breeding age", value: "5 years" },
    ],
};

static HABITAT: SectionCopy = SectionCopy {
    heading: "Tropical Forests",
    lead: "Lowland rainforest from southern Mexico to northern Argentina.",
    cards: &[
        Card {
            title: "Current Status",
            body: "Listed as Near Threatened by the IUCN.",
        },
        Card {
            title: "Habitat Loss",
            body: "Deforestation of tropical forests is the main pressure.",
        },
        Card {
            title: "Legal Protection",
            body: "Protected by national environmental law.",
        },
    ],
    facts: &[
        Fact { label: "Habitat", value: "Tropical forest" },
        Fact { label: "Region", value: "South America" },
        Fact { label: "National bird", value: "Panama" },
    ],
};

static BEHAVIOR: SectionCopy = SectionCopy {
    heading: "Strategy of a Predator",
    lead: "Patient ambush hunting and a long breeding cycle.",
    cards: &[
        Card {
            title: "Hunting Technique",
            body: "Ambush hunter that waits motionless for hours until the right prey appears.",
        },
        Card {
            title: "Diet",
            body: "Specialist in large tree-dwelling mammals.",
        },
        Card {
            title: "Social Behavior",
            body: "Monogamous pairs that form lasting bonds.",
        },
        Card {
            title: "Reproduction",
            body: "A long breeding cycle with extended parental care.",
        },
    ],
    facts: &[
        Fact { label: "Sloth hunt success", value: "85%" },
        Fact { label: "Talon pressure", value: "42 kg/cm²" },
        Fact { label: "Top speed", value: "80 km/h" },
        Fact { label: "Territory per pair", value: "30 km²" },
        Fact { label: "Feather development", value: "6 months" },
        Fact { label: "Parental feeding", value: "10 months" },
        Fact { label: "Breeding interval", value: "2-3 years" },
    ],
};

pub const FOOTER_FACTS: &[Fact] = &[
    Fact { label: "Length", value: "90-105 cm" },
    Fact { label: "Wingspan", value: "200+ cm" },
    Fact { label: "Weight", value: "4-9 kg" },
    Fact { label: "Habitat", value: "Tropical forests" },
];

pub const CONSERVATION_PARTNERS: &[Card] = &[
    Card { title: "ICMBio", body: "Chico Mendes Institute" },
    Card { title: "WWF", body: "World Wildlife Fund" },
    Card { title: "IUCN", body: "International Union for Conservation of Nature" },
    Card { title: "Projeto Harpia", body: "National conservation programme" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_after_hero_has_copy() {
        for section in SectionId::ALL {
            let copy = section_copy(section);
            assert_eq!(copy.is_none(), section == SectionId::Hero);
            if let Some(copy) = copy {
                assert!(!copy.cards.is_empty());
            }
        }
    }
}
