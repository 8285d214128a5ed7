//! Wizard steps, in the order the seller walks through them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Title, category, condition, attributes, business details.
    Details,
    /// Photos and description.
    Photos,
    /// Price, free/negotiable flags, quantity.
    Pricing,
    /// Location and contact methods.
    Location,
    /// Summary, promotion add-ons, terms.
    Review,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Details,
        Step::Photos,
        Step::Pricing,
        Step::Location,
        Step::Review,
    ];

    pub const COUNT: u8 = 5;

    /// 1-based position of the step.
    pub fn number(self) -> u8 {
        match self {
            Step::Details => 1,
            Step::Photos => 2,
            Step::Pricing => 3,
            Step::Location => 4,
            Step::Review => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Step> {
        Step::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn next(self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Step> {
        Step::from_number(self.number() - 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Details => "Item details",
            Step::Photos => "Photos & description",
            Step::Pricing => "Pricing",
            Step::Location => "Location & contact",
            Step::Review => "Review & publish",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}
