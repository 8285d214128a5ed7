//! # Listing Draft
//!
//! The record a sell-flow session accumulates across its five steps, plus the
//! fixed enumerations the editing surfaces choose from.
//!
//! ```text
//! ListingDraft
//! ├── photos: Vec<MediaRef>          // 0..=10, photos[0] is the cover
//! ├── title / description            // capped at 80 / 1000 chars
//! ├── category / subcategory / condition
//! ├── materials / features           // multi-select
//! ├── brand: Option<String>
//! ├── is_business + business         // sub-record only read while is_business
//! ├── price / is_free / is_negotiable / quantity
//! ├── location: Location
//! ├── contact_methods + phone_number // "app" is implicit, never stored
//! ├── agreed_to_terms
//! └── promote_options
//! ```
//!
//! Field names serialize in camelCase so a draft reads the same as the
//! marketplace client's JSON payloads.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_PHOTOS: usize = 10;
pub const MAX_TITLE_CHARS: usize = 80;
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

// ============================================================================
// Enumerations
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    Furniture,
    Clothing,
    HomeGarden,
    Sports,
    Toys,
    Books,
    Vehicles,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Electronics,
        Category::Furniture,
        Category::Clothing,
        Category::HomeGarden,
        Category::Sports,
        Category::Toys,
        Category::Books,
        Category::Vehicles,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Clothing => "Clothing",
            Category::HomeGarden => "Home & Garden",
            Category::Sports => "Sports",
            Category::Toys => "Toys",
            Category::Books => "Books",
            Category::Vehicles => "Vehicles",
            Category::Other => "Other",
        }
    }

    /// Subcategory identifiers offered under this category.
    pub fn subcategories(self) -> &'static [&'static str] {
        match self {
            Category::Electronics => &["phones", "computers", "audio", "cameras", "gaming"],
            Category::Furniture => &["sofas", "tables", "chairs", "storage", "beds"],
            Category::Clothing => &["mens", "womens", "kids", "shoes", "accessories"],
            Category::HomeGarden => &["kitchen", "decor", "tools", "garden"],
            Category::Sports => &["fitness", "bikes", "outdoor", "team_sports"],
            Category::Toys => &["games", "puzzles", "outdoor_toys"],
            Category::Books => &["fiction", "non_fiction", "textbooks", "comics"],
            Category::Vehicles => &["cars", "motorcycles", "parts"],
            Category::Other => &[],
        }
    }

    pub fn offers(self, subcategory: &str) -> bool {
        self.subcategories().contains(&subcategory)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like new",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Wood,
    Metal,
    Plastic,
    Glass,
    Fabric,
    Leather,
    Ceramic,
    Stone,
}

impl Material {
    pub const ALL: [Material; 8] = [
        Material::Wood,
        Material::Metal,
        Material::Plastic,
        Material::Glass,
        Material::Fabric,
        Material::Leather,
        Material::Ceramic,
        Material::Stone,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Material::Wood => "Wood",
            Material::Metal => "Metal",
            Material::Plastic => "Plastic",
            Material::Glass => "Glass",
            Material::Fabric => "Fabric",
            Material::Leather => "Leather",
            Material::Ceramic => "Ceramic",
            Material::Stone => "Stone",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Handmade,
    Vintage,
    EcoFriendly,
    Warranty,
    OriginalPackaging,
    Smart,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Handmade,
        Feature::Vintage,
        Feature::EcoFriendly,
        Feature::Warranty,
        Feature::OriginalPackaging,
        Feature::Smart,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Feature::Handmade => "Handmade",
            Feature::Vintage => "Vintage",
            Feature::EcoFriendly => "Eco-friendly",
            Feature::Warranty => "Under warranty",
            Feature::OriginalPackaging => "Original packaging",
            Feature::Smart => "Smart / connected",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

// ============================================================================
// Sub-records
// ============================================================================

/// Reference to a captured or picked photo (a path or URI handed back by the
/// media collaborator).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MediaRef(pub String);

impl MediaRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessDetails {
    pub name: String,
    pub website: String,
    /// Free-text opening hours per weekday ("9am-5pm", "closed", ...).
    pub hours: BTreeMap<Weekday, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Contact channels a seller can opt into on top of in-app messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactChannel {
    Phone,
    Text,
}

impl ContactChannel {
    pub const ALL: [ContactChannel; 2] = [ContactChannel::Phone, ContactChannel::Text];

    pub fn label(self) -> &'static str {
        match self {
            ContactChannel::Phone => "Phone",
            ContactChannel::Text => "Text",
        }
    }
}

/// Label for in-app messaging, which every listing offers.
pub const APP_CONTACT_LABEL: &str = "In-app";

/// Optional contact channels. In-app messaging is not a field here: it is
/// always on and cannot be switched off.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactMethods {
    pub phone: bool,
    pub text: bool,
}

impl ContactMethods {
    pub fn is_selected(&self, channel: ContactChannel) -> bool {
        match channel {
            ContactChannel::Phone => self.phone,
            ContactChannel::Text => self.text,
        }
    }

    pub fn toggle(&mut self, channel: ContactChannel) {
        match channel {
            ContactChannel::Phone => self.phone = !self.phone,
            ContactChannel::Text => self.text = !self.text,
        }
    }

    /// Phone and text both need a number to reach the seller on.
    pub fn needs_phone_number(&self) -> bool {
        self.phone || self.text
    }

    /// How a buyer can reach the seller, in-app messaging first.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = vec![APP_CONTACT_LABEL];
        labels.extend(
            ContactChannel::ALL
                .into_iter()
                .filter(|c| self.is_selected(*c))
                .map(ContactChannel::label),
        );
        labels
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PromoteOptions {
    pub featured: bool,
    pub boosted: bool,
}

// ============================================================================
// Draft
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingDraft {
    pub photos: Vec<MediaRef>,
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub subcategory: Option<String>,
    pub condition: Option<Condition>,
    pub materials: BTreeSet<Material>,
    pub features: BTreeSet<Feature>,
    pub brand: Option<String>,
    pub is_business: bool,
    /// Kept when `is_business` is switched off; only read while it is on.
    pub business: Option<BusinessDetails>,
    pub price: String,
    pub is_free: bool,
    pub is_negotiable: bool,
    pub quantity: u32,
    pub location: Location,
    pub contact_methods: ContactMethods,
    pub phone_number: String,
    pub agreed_to_terms: bool,
    pub promote_options: PromoteOptions,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            photos: Vec::new(),
            title: String::new(),
            description: String::new(),
            category: None,
            subcategory: None,
            condition: None,
            materials: BTreeSet::new(),
            features: BTreeSet::new(),
            brand: None,
            is_business: false,
            business: None,
            price: String::new(),
            is_free: false,
            is_negotiable: false,
            quantity: 1,
            location: Location::default(),
            contact_methods: ContactMethods::default(),
            phone_number: String::new(),
            agreed_to_terms: false,
            promote_options: PromoteOptions::default(),
        }
    }
}

impl ListingDraft {
    /// The cover photo, if any photo has been added.
    pub fn cover(&self) -> Option<&MediaRef> {
        self.photos.first()
    }

    /// Business details, but only while the listing is marked as a business.
    pub fn active_business(&self) -> Option<&BusinessDetails> {
        if self.is_business {
            self.business.as_ref()
        } else {
            None
        }
    }
}

/// Partial draft for merge-patch updates.
///
/// `None` leaves a field untouched. Nested records (`location`, `business`)
/// are replaced whole, so callers pass the full nested value. Fields that can
/// be cleared carry a second `Option` layer: `Some(None)` clears.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftPatch {
    pub photos: Option<Vec<MediaRef>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub subcategory: Option<Option<String>>,
    pub condition: Option<Condition>,
    pub materials: Option<BTreeSet<Material>>,
    pub features: Option<BTreeSet<Feature>>,
    pub brand: Option<Option<String>>,
    pub is_business: Option<bool>,
    pub business: Option<BusinessDetails>,
    pub price: Option<String>,
    pub is_free: Option<bool>,
    pub is_negotiable: Option<bool>,
    pub quantity: Option<u32>,
    pub location: Option<Location>,
    pub contact_methods: Option<ContactMethods>,
    pub phone_number: Option<String>,
    pub agreed_to_terms: Option<bool>,
    pub promote_options: Option<PromoteOptions>,
}

/// A point-in-time copy of a session's draft, as handed to the publish and
/// draft-persistence collaborators.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraftSnapshot {
    pub session_id: Uuid,
    pub taken_at: DateTime<Utc>,
    pub draft: ListingDraft,
}

impl DraftSnapshot {
    pub fn new(session_id: Uuid, draft: ListingDraft) -> Self {
        Self {
            session_id,
            taken_at: Utc::now(),
            draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_has_quantity_one() {
        let draft = ListingDraft::default();
        assert_eq!(draft.quantity, 1);
        assert!(draft.photos.is_empty());
        assert!(draft.cover().is_none());
    }

    #[test]
    fn test_contact_methods_always_include_app() {
        let mut contact = ContactMethods::default();
        assert_eq!(contact.labels(), vec![APP_CONTACT_LABEL]);
        assert!(!contact.needs_phone_number());

        contact.toggle(ContactChannel::Text);
        assert_eq!(contact.labels(), vec![APP_CONTACT_LABEL, "Text"]);
        assert!(contact.is_selected(ContactChannel::Text));
        assert!(!contact.is_selected(ContactChannel::Phone));
        assert!(contact.needs_phone_number());
    }

    #[test]
    fn test_business_details_hidden_when_flag_off() {
        let draft = ListingDraft {
            is_business: false,
            business: Some(BusinessDetails {
                name: "Acme".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(draft.active_business().is_none());

        let draft = ListingDraft {
            is_business: true,
            ..draft
        };
        assert_eq!(draft.active_business().map(|b| b.name.as_str()), Some("Acme"));
    }

    #[test]
    fn test_draft_parses_camel_case_json() {
        let json = r#"{
            "category": "electronics",
            "title": "iPhone 13",
            "condition": "good",
            "photos": ["a.jpg"],
            "description": "Works great, minor scratch",
            "price": "200",
            "isFree": false,
            "location": {"city": "Seattle", "state": "WA", "zipCode": ""},
            "agreedToTerms": true
        }"#;
        let draft: ListingDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.category, Some(Category::Electronics));
        assert_eq!(draft.condition, Some(Condition::Good));
        assert_eq!(draft.photos, vec![MediaRef::new("a.jpg")]);
        assert_eq!(draft.location.city, "Seattle");
        assert!(draft.agreed_to_terms);
        // Absent keys fall back to defaults
        assert_eq!(draft.quantity, 1);
        assert!(draft.materials.is_empty());
    }

    #[test]
    fn test_subcategories_belong_to_category() {
        assert!(Category::Electronics.offers("phones"));
        assert!(!Category::Electronics.offers("sofas"));
        assert!(Category::Other.subcategories().is_empty());
    }
}
