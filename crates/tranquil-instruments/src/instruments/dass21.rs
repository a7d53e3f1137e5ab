use tranquil_core::models::dass21::Dass21Subscale;

use crate::Instrument;
use crate::assessment::RESCALE_FACTOR;
use crate::scoring::{Domain, ResponseOption, ScoreRange, ScoreType, ScoredField};
use crate::severity::{SeverityTable, severity_table};

use Dass21Subscale::{Anxiety, Depression, Stress};

/// Number of items on the questionnaire.
pub const ITEM_COUNT: u8 = 21;

/// Highest permitted response value.
pub const MAX_RESPONSE: u8 = 3;

/// Items per subscale.
pub const ITEMS_PER_SUBSCALE: usize = 7;

/// A single questionnaire item and the subscale it loads on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub number: u8,
    pub subscale: Dass21Subscale,
    pub prompt: &'static str,
}

/// The published DASS-21 items in administration order. Subscales are
/// interleaved, not contiguous.
pub const ITEMS: [Item; ITEM_COUNT as usize] = [
    item(1, Stress, "I found it hard to wind down"),
    item(2, Anxiety, "I was aware of dryness of my mouth"),
    item(3, Depression, "I couldn't seem to experience any positive feeling at all"),
    item(
        4,
        Anxiety,
        "I experienced breathing difficulty (e.g. excessively rapid breathing, \
         breathlessness in the absence of physical exertion)",
    ),
    item(5, Depression, "I found it difficult to work up the initiative to do things"),
    item(6, Stress, "I tended to over-react to situations"),
    item(7, Anxiety, "I experienced trembling (e.g. in the hands)"),
    item(8, Stress, "I felt that I was using a lot of nervous energy"),
    item(
        9,
        Anxiety,
        "I was worried about situations in which I might panic and make a fool of myself",
    ),
    item(10, Depression, "I felt that I had nothing to look forward to"),
    item(11, Stress, "I found myself getting agitated"),
    item(12, Stress, "I found it difficult to relax"),
    item(13, Depression, "I felt down-hearted and blue"),
    item(
        14,
        Stress,
        "I was intolerant of anything that kept me from getting on with what I was doing",
    ),
    item(15, Anxiety, "I felt I was close to panic"),
    item(16, Depression, "I was unable to become enthusiastic about anything"),
    item(17, Depression, "I felt I wasn't worth much as a person"),
    item(18, Stress, "I felt that I was rather touchy"),
    item(
        19,
        Anxiety,
        "I was aware of the action of my heart in the absence of physical exertion \
         (e.g. sense of heart rate increase, heart missing a beat)",
    ),
    item(20, Anxiety, "I felt scared without any good reason"),
    item(21, Depression, "I felt that life was meaningless"),
];

const fn item(number: u8, subscale: Dass21Subscale, prompt: &'static str) -> Item {
    Item {
        number,
        subscale,
        prompt,
    }
}

pub const RESPONSE_OPTIONS: [ResponseOption; 4] = [
    ResponseOption {
        value: 0,
        label: "Did not apply to me at all",
    },
    ResponseOption {
        value: 1,
        label: "Applied to me to some degree, or some of the time",
    },
    ResponseOption {
        value: 2,
        label: "Applied to me to a considerable degree, or a good part of time",
    },
    ResponseOption {
        value: 3,
        label: "Applied to me very much, or most of the time",
    },
];

/// Look up an item by its 1-based number.
pub fn item_by_number(number: u8) -> Option<&'static Item> {
    number
        .checked_sub(1)
        .and_then(|index| ITEMS.get(usize::from(index)))
}

/// The subscale an item loads on, or `None` for numbers outside 1–21.
pub fn subscale_of(number: u8) -> Option<Dass21Subscale> {
    item_by_number(number).map(|i| i.subscale)
}

/// Item numbers belonging to `subscale`, ascending.
pub fn subscale_items(subscale: Dass21Subscale) -> Vec<u8> {
    ITEMS
        .iter()
        .filter(|i| i.subscale == subscale)
        .map(|i| i.number)
        .collect()
}

/// DASS-21: Depression Anxiety Stress Scales, 21-item short form.
/// Three subscales of 7 items, each item rated 0–3. Subscale sums are
/// doubled onto the DASS-42 scale before classification.
pub struct Dass21;

impl Instrument for Dass21 {
    fn id(&self) -> &str {
        "dass21"
    }

    fn name(&self) -> &str {
        "DASS-21"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let rating_range = ScoreRange {
                min: 0,
                max: u32::from(MAX_RESPONSE),
            };
            let rescaled_range = ScoreRange {
                min: 0,
                max: u32::from(MAX_RESPONSE) * ITEMS_PER_SUBSCALE as u32 * RESCALE_FACTOR,
            };

            Dass21Subscale::ALL
                .iter()
                .map(|&subscale| Domain {
                    id: subscale.id().to_string(),
                    name: subscale.name().to_string(),
                    fields: ITEMS
                        .iter()
                        .filter(|i| i.subscale == subscale)
                        .map(|i| ScoredField {
                            id: format!("item_{}", i.number),
                            name: i.prompt.to_string(),
                            score_type: ScoreType::Rating,
                            range: rating_range,
                            description: None,
                        })
                        .collect(),
                    composite_score_type: Some(ScoreType::Rescaled),
                    composite_range: Some(rescaled_range),
                    description: Some("Sum of 7 items, multiplied by 2".to_string()),
                })
                .collect()
        });
        &DOMAINS
    }

    fn response_options(&self) -> &[ResponseOption] {
        &RESPONSE_OPTIONS
    }

    fn severity_tables(&self) -> Vec<SeverityTable> {
        Dass21Subscale::ALL
            .iter()
            .map(|&subscale| SeverityTable {
                domain_id: subscale.id().to_string(),
                ranges: severity_table(subscale),
            })
            .collect()
    }
}
