//! # Surface Forms
//!
//! The terminal rendition of the five editing surfaces. Each surface becomes a
//! flat list of [`FieldRow`]s; a keystroke on the selected row is turned into
//! the core [`Action`] it stands for by [`apply`]. Rows never write to the
//! draft themselves.
//!
//! ```text
//! Surface ──rows()──► [FieldRow] ──(selected row, Edit)──apply()──► Action
//! ```

use crate::core::action::Action;
use crate::core::draft::{
    BusinessDetails, Category, Condition, ContactChannel, DraftPatch, Feature, ListingDraft,
    Location, MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS, Material, PromoteOptions, Weekday,
};
use crate::core::step::Step;
use crate::core::surface::Surface;
use crate::services::MediaSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    // Details
    Title,
    Category,
    Subcategory,
    Condition,
    Brand,
    Material(Material),
    Feature(Feature),
    IsBusiness,
    BusinessName,
    BusinessWebsite,
    BusinessHours(Weekday),
    // Photos
    TakePhoto,
    ChooseFromGallery,
    Photo(usize),
    Description,
    // Pricing
    Price,
    IsFree,
    IsNegotiable,
    Quantity,
    // Location
    UseCurrentLocation,
    City,
    State,
    ZipCode,
    AppMessages,
    Contact(ContactChannel),
    PhoneNumber,
    // Review
    EditStep(Step),
    Featured,
    Boosted,
    AgreedToTerms,
    Publish,
}

/// How a row reacts to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Typing edits the value.
    Text,
    /// Left/Right cycle through options.
    Choice,
    /// Space flips it.
    Toggle,
    /// Space triggers it.
    Button,
    /// Space makes it the cover, Backspace removes it.
    Photo,
    /// Left/Right step the number, digits type it.
    Stepper,
    /// Shown for information, never changes.
    Fixed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    pub id: FieldId,
    pub label: String,
    pub value: String,
    pub kind: FieldKind,
    pub enabled: bool,
}

impl FieldRow {
    fn new(id: FieldId, label: impl Into<String>, value: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id,
            label: label.into(),
            value: value.into(),
            kind,
            enabled: true,
        }
    }

    fn toggle(id: FieldId, label: impl Into<String>, on: bool) -> Self {
        Self::new(id, label, checkbox(on), FieldKind::Toggle)
    }

    fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// A keystroke aimed at the selected row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Char(char),
    Paste(String),
    Backspace,
    Left,
    Right,
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Rows for the active surface, top to bottom.
pub fn rows(surface: &Surface) -> Vec<FieldRow> {
    match surface {
        Surface::Details { draft, business } => details_rows(draft, *business),
        Surface::Photos {
            draft,
            remaining_slots,
            busy,
        } => photo_rows(draft, *remaining_slots, *busy),
        Surface::Pricing {
            draft,
            price_editable,
        } => pricing_rows(draft, *price_editable),
        Surface::Location { draft, locating } => location_rows(draft, *locating),
        Surface::Review {
            draft,
            jump_targets,
            publishing,
        } => review_rows(draft, jump_targets, *publishing),
        Surface::Published(_) | Surface::Closed => Vec::new(),
    }
}

fn details_rows(draft: &ListingDraft, business: Option<&BusinessDetails>) -> Vec<FieldRow> {
    let mut rows = vec![
        FieldRow::new(
            FieldId::Title,
            format!("Title ({}/{MAX_TITLE_CHARS})", draft.title.chars().count()),
            draft.title.clone(),
            FieldKind::Text,
        ),
        FieldRow::new(
            FieldId::Category,
            "Category",
            draft.category.map_or("< select >", Category::label),
            FieldKind::Choice,
        ),
        FieldRow::new(
            FieldId::Subcategory,
            "Subcategory",
            draft.subcategory.as_deref().unwrap_or("none"),
            FieldKind::Choice,
        )
        .enabled(draft.category.is_some_and(|c| !c.subcategories().is_empty())),
        FieldRow::new(
            FieldId::Condition,
            "Condition",
            draft.condition.map_or("< select >", Condition::label),
            FieldKind::Choice,
        ),
        FieldRow::new(
            FieldId::Brand,
            "Brand (optional)",
            draft.brand.clone().unwrap_or_default(),
            FieldKind::Text,
        ),
    ];
    rows.extend(Material::ALL.into_iter().map(|m| {
        FieldRow::toggle(
            FieldId::Material(m),
            format!("Material: {}", m.label()),
            draft.materials.contains(&m),
        )
    }));
    rows.extend(Feature::ALL.into_iter().map(|f| {
        FieldRow::toggle(
            FieldId::Feature(f),
            format!("Feature: {}", f.label()),
            draft.features.contains(&f),
        )
    }));
    rows.push(FieldRow::toggle(
        FieldId::IsBusiness,
        "Selling as a business",
        draft.is_business,
    ));
    if let Some(business) = business {
        rows.push(FieldRow::new(
            FieldId::BusinessName,
            "Business name",
            business.name.clone(),
            FieldKind::Text,
        ));
        rows.push(FieldRow::new(
            FieldId::BusinessWebsite,
            "Website",
            business.website.clone(),
            FieldKind::Text,
        ));
        rows.extend(Weekday::ALL.into_iter().map(|day| {
            FieldRow::new(
                FieldId::BusinessHours(day),
                format!("Hours: {}", day.label()),
                business.hours.get(&day).cloned().unwrap_or_default(),
                FieldKind::Text,
            )
        }));
    }
    rows
}

fn photo_rows(draft: &ListingDraft, remaining_slots: usize, busy: bool) -> Vec<FieldRow> {
    let status = if busy {
        "waiting for photos...".to_string()
    } else {
        format!("{remaining_slots} slot(s) left")
    };
    let mut rows = vec![
        FieldRow::new(FieldId::TakePhoto, "Take photo", status.clone(), FieldKind::Button)
            .enabled(!busy),
        FieldRow::new(
            FieldId::ChooseFromGallery,
            "Choose from gallery",
            status,
            FieldKind::Button,
        )
        .enabled(!busy),
    ];
    rows.extend(draft.photos.iter().enumerate().map(|(i, photo)| {
        let label = if i == 0 {
            "Cover photo".to_string()
        } else {
            format!("Photo {}", i + 1)
        };
        FieldRow::new(FieldId::Photo(i), label, photo.as_str(), FieldKind::Photo)
    }));
    rows.push(FieldRow::new(
        FieldId::Description,
        format!(
            "Description ({}/{MAX_DESCRIPTION_CHARS})",
            draft.description.chars().count()
        ),
        draft.description.clone(),
        FieldKind::Text,
    ));
    rows
}

fn pricing_rows(draft: &ListingDraft, price_editable: bool) -> Vec<FieldRow> {
    vec![
        FieldRow::new(FieldId::Price, "Price ($)", draft.price.clone(), FieldKind::Text)
            .enabled(price_editable),
        FieldRow::toggle(FieldId::IsFree, "Free", draft.is_free),
        FieldRow::toggle(FieldId::IsNegotiable, "Negotiable", draft.is_negotiable),
        FieldRow::new(
            FieldId::Quantity,
            "Quantity",
            format!("< {} >", draft.quantity),
            FieldKind::Stepper,
        ),
    ]
}

fn location_rows(draft: &ListingDraft, locating: bool) -> Vec<FieldRow> {
    let contact = &draft.contact_methods;
    vec![
        FieldRow::new(
            FieldId::UseCurrentLocation,
            "Use current location",
            if locating { "locating..." } else { "" },
            FieldKind::Button,
        )
        .enabled(!locating),
        FieldRow::new(FieldId::City, "City", draft.location.city.clone(), FieldKind::Text),
        FieldRow::new(FieldId::State, "State", draft.location.state.clone(), FieldKind::Text),
        FieldRow::new(
            FieldId::ZipCode,
            "ZIP code",
            draft.location.zip_code.clone(),
            FieldKind::Text,
        ),
        FieldRow::new(
            FieldId::AppMessages,
            "Contact: in-app messages",
            "[x] always on",
            FieldKind::Fixed,
        ),
        FieldRow::toggle(
            FieldId::Contact(ContactChannel::Phone),
            "Contact: phone call",
            contact.is_selected(ContactChannel::Phone),
        ),
        FieldRow::toggle(
            FieldId::Contact(ContactChannel::Text),
            "Contact: text message",
            contact.is_selected(ContactChannel::Text),
        ),
        FieldRow::new(
            FieldId::PhoneNumber,
            if contact.needs_phone_number() {
                "Phone number"
            } else {
                "Phone number (optional)"
            },
            draft.phone_number.clone(),
            FieldKind::Text,
        ),
    ]
}

fn review_rows(draft: &ListingDraft, jump_targets: &[Step], publishing: bool) -> Vec<FieldRow> {
    let mut rows: Vec<FieldRow> = jump_targets
        .iter()
        .map(|step| {
            FieldRow::new(
                FieldId::EditStep(*step),
                format!("Edit {}", step.title().to_lowercase()),
                format!("step {}", step.number()),
                FieldKind::Button,
            )
            .enabled(!publishing)
        })
        .collect();
    rows.push(FieldRow::toggle(
        FieldId::Featured,
        "Promote: featured listing",
        draft.promote_options.featured,
    ));
    rows.push(FieldRow::toggle(
        FieldId::Boosted,
        "Promote: boost reach",
        draft.promote_options.boosted,
    ));
    rows.push(FieldRow::toggle(
        FieldId::AgreedToTerms,
        "I agree to the terms of sale",
        draft.agreed_to_terms,
    ));
    rows.push(
        FieldRow::new(
            FieldId::Publish,
            "Publish listing",
            if publishing { "publishing..." } else { "" },
            FieldKind::Button,
        )
        .enabled(!publishing),
    );
    rows
}

/// The action a keystroke on `field` stands for, if any.
pub fn apply(field: FieldId, edit: &Edit, draft: &ListingDraft) -> Option<Action> {
    let activated = matches!(edit, Edit::Char(' '));
    let patch = |patch: DraftPatch| Some(Action::Patch(patch));

    match field {
        FieldId::Title => patch(DraftPatch {
            title: Some(edit_line(&draft.title, edit)?),
            ..Default::default()
        }),
        FieldId::Category => {
            let category = cycle(&Category::ALL, draft.category, edit)?;
            patch(DraftPatch {
                category: Some(category),
                ..Default::default()
            })
        }
        FieldId::Subcategory => {
            let category = draft.category?;
            let mut options: Vec<Option<&str>> = vec![None];
            options.extend(category.subcategories().iter().map(|s| Some(*s)));
            let next = cycle(&options, Some(draft.subcategory.as_deref()), edit)?;
            patch(DraftPatch {
                subcategory: Some(next.map(String::from)),
                ..Default::default()
            })
        }
        FieldId::Condition => {
            let condition = cycle(&Condition::ALL, draft.condition, edit)?;
            patch(DraftPatch {
                condition: Some(condition),
                ..Default::default()
            })
        }
        FieldId::Brand => patch(DraftPatch {
            brand: Some(Some(edit_line(draft.brand.as_deref().unwrap_or(""), edit)?)),
            ..Default::default()
        }),
        FieldId::Material(material) => activated.then_some(Action::ToggleMaterial(material)),
        FieldId::Feature(feature) => activated.then_some(Action::ToggleFeature(feature)),
        FieldId::IsBusiness => activated.then(|| {
            Action::Patch(DraftPatch {
                is_business: Some(!draft.is_business),
                ..Default::default()
            })
        }),
        FieldId::BusinessName | FieldId::BusinessWebsite | FieldId::BusinessHours(_) => {
            let mut business = draft.business.clone().unwrap_or_default();
            match field {
                FieldId::BusinessName => business.name = edit_line(&business.name, edit)?,
                FieldId::BusinessWebsite => business.website = edit_line(&business.website, edit)?,
                FieldId::BusinessHours(day) => {
                    let current = business.hours.get(&day).map_or("", String::as_str);
                    let hours = edit_line(current, edit)?;
                    if hours.is_empty() {
                        business.hours.remove(&day);
                    } else {
                        business.hours.insert(day, hours);
                    }
                }
                _ => return None,
            }
            patch(DraftPatch {
                business: Some(business),
                ..Default::default()
            })
        }

        FieldId::TakePhoto => activated.then_some(Action::RequestPhotos(MediaSource::Camera)),
        FieldId::ChooseFromGallery => {
            activated.then_some(Action::RequestPhotos(MediaSource::Gallery))
        }
        FieldId::Photo(index) => match edit {
            Edit::Backspace => Some(Action::RemovePhoto(index)),
            Edit::Char(' ') => Some(Action::MakeCover(index)),
            _ => None,
        },
        FieldId::Description => patch(DraftPatch {
            description: Some(edit_text(&draft.description, edit, true)?),
            ..Default::default()
        }),

        FieldId::Price => patch(DraftPatch {
            price: Some(edit_line(&draft.price, edit)?),
            ..Default::default()
        }),
        FieldId::IsFree => activated.then(|| {
            Action::Patch(DraftPatch {
                is_free: Some(!draft.is_free),
                ..Default::default()
            })
        }),
        FieldId::IsNegotiable => activated.then(|| {
            Action::Patch(DraftPatch {
                is_negotiable: Some(!draft.is_negotiable),
                ..Default::default()
            })
        }),
        FieldId::Quantity => {
            let quantity = step_quantity(draft.quantity, edit)?;
            patch(DraftPatch {
                quantity: Some(quantity),
                ..Default::default()
            })
        }

        FieldId::UseCurrentLocation => activated.then_some(Action::RequestLocation),
        FieldId::City | FieldId::State | FieldId::ZipCode => {
            let mut location: Location = draft.location.clone();
            let target = match field {
                FieldId::City => &mut location.city,
                FieldId::State => &mut location.state,
                _ => &mut location.zip_code,
            };
            *target = edit_line(target, edit)?;
            patch(DraftPatch {
                location: Some(location),
                ..Default::default()
            })
        }
        FieldId::AppMessages => None,
        FieldId::Contact(channel) => activated.then_some(Action::ToggleContact(channel)),
        FieldId::PhoneNumber => patch(DraftPatch {
            phone_number: Some(edit_line(&draft.phone_number, edit)?),
            ..Default::default()
        }),

        FieldId::EditStep(step) => activated.then_some(Action::JumpTo(step)),
        FieldId::Featured | FieldId::Boosted => {
            if !activated {
                return None;
            }
            let mut promote: PromoteOptions = draft.promote_options;
            if field == FieldId::Featured {
                promote.featured = !promote.featured;
            } else {
                promote.boosted = !promote.boosted;
            }
            patch(DraftPatch {
                promote_options: Some(promote),
                ..Default::default()
            })
        }
        FieldId::AgreedToTerms => activated.then(|| {
            Action::Patch(DraftPatch {
                agreed_to_terms: Some(!draft.agreed_to_terms),
                ..Default::default()
            })
        }),
        FieldId::Publish => activated.then_some(Action::Publish),
    }
}

fn edit_line(current: &str, edit: &Edit) -> Option<String> {
    edit_text(current, edit, false)
}

fn edit_text(current: &str, edit: &Edit, multiline: bool) -> Option<String> {
    let mut text = current.to_string();
    match edit {
        Edit::Char(c) => text.push(*c),
        Edit::Paste(pasted) if multiline => text.push_str(pasted),
        Edit::Paste(pasted) => text.push_str(&pasted.replace(['\r', '\n'], " ")),
        Edit::Backspace => {
            text.pop()?;
        }
        Edit::Left | Edit::Right => return None,
    }
    Some(text)
}

/// Next option in `options` after `current`, wrapping. Nothing selected yet
/// starts from either end.
fn cycle<T: Copy + PartialEq>(options: &[T], current: Option<T>, edit: &Edit) -> Option<T> {
    let len = options.len();
    if len == 0 {
        return None;
    }
    let forward = match edit {
        Edit::Right | Edit::Char(' ') => true,
        Edit::Left => false,
        _ => return None,
    };
    let index = match current.and_then(|c| options.iter().position(|o| *o == c)) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    options.get(index).copied()
}

fn step_quantity(quantity: u32, edit: &Edit) -> Option<u32> {
    match edit {
        Edit::Right | Edit::Char('+') => quantity.checked_add(1),
        Edit::Left | Edit::Char('-') => Some(quantity.saturating_sub(1)),
        Edit::Char(c) => {
            let digit = c.to_digit(10)?;
            quantity.checked_mul(10)?.checked_add(digit)
        }
        Edit::Backspace => Some(quantity / 10),
        Edit::Paste(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::draft::MediaRef;
    use crate::test_support::complete_draft;

    fn patch_of(action: Option<Action>) -> DraftPatch {
        match action {
            Some(Action::Patch(patch)) => patch,
            other => panic!("expected a patch, got {other:?}"),
        }
    }

    #[test]
    fn test_typing_title_patches_only_title() {
        let draft = ListingDraft::default();
        let patch = patch_of(apply(FieldId::Title, &Edit::Char('L'), &draft));
        assert_eq!(
            patch,
            DraftPatch {
                title: Some("L".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_backspace_on_empty_text_does_nothing() {
        let draft = ListingDraft::default();
        assert_eq!(apply(FieldId::City, &Edit::Backspace, &draft), None);
    }

    #[test]
    fn test_paste_flattens_single_line_fields() {
        let draft = ListingDraft::default();
        let patch = patch_of(apply(
            FieldId::Title,
            &Edit::Paste("Oak\ndesk".to_string()),
            &draft,
        ));
        assert_eq!(patch.title.as_deref(), Some("Oak desk"));

        let patch = patch_of(apply(
            FieldId::Description,
            &Edit::Paste("Line one\nLine two".to_string()),
            &draft,
        ));
        assert_eq!(patch.description.as_deref(), Some("Line one\nLine two"));
    }

    #[test]
    fn test_category_cycles_both_ways() {
        let draft = ListingDraft::default();
        let patch = patch_of(apply(FieldId::Category, &Edit::Right, &draft));
        assert_eq!(patch.category, Some(Category::Electronics));
        let patch = patch_of(apply(FieldId::Category, &Edit::Left, &draft));
        assert_eq!(patch.category, Some(Category::Other));

        let draft = complete_draft();
        let patch = patch_of(apply(FieldId::Category, &Edit::Right, &draft));
        assert_eq!(patch.category, Some(Category::Furniture));
    }

    #[test]
    fn test_subcategory_cycle_includes_none() {
        let mut draft = complete_draft();
        let patch = patch_of(apply(FieldId::Subcategory, &Edit::Right, &draft));
        assert_eq!(patch.subcategory, Some(Some("phones".to_string())));

        draft.subcategory = Some("phones".to_string());
        let patch = patch_of(apply(FieldId::Subcategory, &Edit::Left, &draft));
        assert_eq!(patch.subcategory, Some(None));

        draft.category = None;
        assert_eq!(apply(FieldId::Subcategory, &Edit::Right, &draft), None);
    }

    #[test]
    fn test_toggles_need_space() {
        let draft = ListingDraft::default();
        assert_eq!(
            apply(FieldId::Material(Material::Wood), &Edit::Char(' '), &draft),
            Some(Action::ToggleMaterial(Material::Wood))
        );
        assert_eq!(
            apply(FieldId::Material(Material::Wood), &Edit::Char('x'), &draft),
            None
        );
        let patch = patch_of(apply(FieldId::IsFree, &Edit::Char(' '), &draft));
        assert_eq!(patch.is_free, Some(true));
    }

    #[test]
    fn test_business_hours_edit_replaces_whole_record() {
        let mut draft = ListingDraft::default();
        draft.is_business = true;
        draft.business = Some(BusinessDetails {
            name: "Bob's".to_string(),
            ..Default::default()
        });
        let patch = patch_of(apply(
            FieldId::BusinessHours(Weekday::Friday),
            &Edit::Char('9'),
            &draft,
        ));
        let business = patch.business.unwrap();
        assert_eq!(business.name, "Bob's");
        assert_eq!(business.hours.get(&Weekday::Friday).map(String::as_str), Some("9"));
    }

    #[test]
    fn test_photo_row_actions() {
        let draft = ListingDraft::default();
        assert_eq!(
            apply(FieldId::Photo(2), &Edit::Backspace, &draft),
            Some(Action::RemovePhoto(2))
        );
        assert_eq!(
            apply(FieldId::Photo(2), &Edit::Char(' '), &draft),
            Some(Action::MakeCover(2))
        );
    }

    #[test]
    fn test_quantity_stepper() {
        let draft = ListingDraft::default();
        assert_eq!(patch_of(apply(FieldId::Quantity, &Edit::Right, &draft)).quantity, Some(2));
        assert_eq!(patch_of(apply(FieldId::Quantity, &Edit::Char('5'), &draft)).quantity, Some(15));
        assert_eq!(patch_of(apply(FieldId::Quantity, &Edit::Left, &draft)).quantity, Some(0));
        assert_eq!(apply(FieldId::Quantity, &Edit::Char('x'), &draft), None);
    }

    #[test]
    fn test_location_edit_keeps_other_parts() {
        let draft = complete_draft();
        let patch = patch_of(apply(FieldId::ZipCode, &Edit::Char('9'), &draft));
        let location = patch.location.unwrap();
        assert_eq!(location.city, "Seattle");
        assert_eq!(location.zip_code, "9");
    }

    #[test]
    fn test_app_messages_row_is_inert() {
        let draft = ListingDraft::default();
        assert_eq!(apply(FieldId::AppMessages, &Edit::Char(' '), &draft), None);
        assert_eq!(apply(FieldId::AppMessages, &Edit::Backspace, &draft), None);
    }

    #[test]
    fn test_details_rows_show_business_editor_only_when_active() {
        let mut draft = complete_draft();
        let surface = Surface::Details {
            draft: &draft,
            business: None,
        };
        assert!(!rows(&surface).iter().any(|r| r.id == FieldId::BusinessName));

        draft.is_business = true;
        let business = BusinessDetails::default();
        let surface = Surface::Details {
            draft: &draft,
            business: Some(&business),
        };
        let rows = rows(&surface);
        assert!(rows.iter().any(|r| r.id == FieldId::BusinessName));
        assert!(rows.iter().any(|r| r.id == FieldId::BusinessHours(Weekday::Sunday)));
    }

    #[test]
    fn test_photo_rows_list_cover_first() {
        let mut draft = ListingDraft::default();
        draft.photos = vec![MediaRef::new("a.jpg"), MediaRef::new("b.jpg")];
        let surface = Surface::Photos {
            draft: &draft,
            remaining_slots: 8,
            busy: true,
        };
        let rows = rows(&surface);
        assert!(!rows[0].enabled);
        let cover = rows.iter().find(|r| r.id == FieldId::Photo(0)).unwrap();
        assert_eq!(cover.label, "Cover photo");
        assert_eq!(cover.value, "a.jpg");
    }

    #[test]
    fn test_free_listing_disables_price_row() {
        let mut draft = ListingDraft::default();
        draft.is_free = true;
        draft.price = "0".to_string();
        let surface = Surface::Pricing {
            draft: &draft,
            price_editable: false,
        };
        let price = rows(&surface).into_iter().next().unwrap();
        assert_eq!(price.id, FieldId::Price);
        assert!(!price.enabled);
    }

    #[test]
    fn test_review_rows_jump_back() {
        let draft = complete_draft();
        let surface = Surface::Review {
            draft: &draft,
            jump_targets: &[Step::Details, Step::Photos],
            publishing: false,
        };
        let rows = rows(&surface);
        assert_eq!(rows[0].id, FieldId::EditStep(Step::Details));
        assert_eq!(rows.last().map(|r| r.id), Some(FieldId::Publish));
        assert_eq!(
            apply(FieldId::EditStep(Step::Photos), &Edit::Char(' '), &draft),
            Some(Action::JumpTo(Step::Photos))
        );
    }
}
