//! # Draft Store
//!
//! Owns the one `ListingDraft` of a wizard session. Every write goes through
//! [`DraftStore::update`] (a shallow merge-patch) or one of the list helpers
//! built on the same normalisation pass, so the draft invariants hold after
//! every call:
//!
//! - at most [`MAX_PHOTOS`] photos, cover at index 0
//! - title/description clamped to their character caps
//! - `quantity >= 1`
//! - `is_free` forces `price == "0"`
//! - a subcategory is only kept if the category offers it
//! - a business listing always carries a `BusinessDetails` record
//!
//! The store never fails and never validates step completeness; that is the
//! validator's job.

use std::mem;

use log::debug;

use crate::core::draft::{
    BusinessDetails, ContactChannel, DraftPatch, Feature, ListingDraft, MAX_DESCRIPTION_CHARS,
    MAX_PHOTOS, MAX_TITLE_CHARS, Material, MediaRef,
};

const FREE_PRICE: &str = "0";

#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    draft: ListingDraft,
    /// Price the seller had typed before marking the item free; restored when
    /// the item stops being free.
    price_before_free: Option<String>,
}

impl DraftStore {
    pub fn new(initial: ListingDraft) -> Self {
        // A free draft may still carry the price it had before being made free
        let price_before_free = (initial.is_free && initial.price != FREE_PRICE)
            .then(|| initial.price.clone());
        let mut store = Self {
            draft: initial,
            price_before_free,
        };
        store.normalize();
        store
    }

    /// Current snapshot. Read-only; writes go through `update`.
    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    /// Shallow merge of `patch` into the draft.
    pub fn update(&mut self, patch: DraftPatch) {
        // Destructure so a new patch field can't be silently ignored here.
        let DraftPatch {
            photos,
            title,
            description,
            category,
            subcategory,
            condition,
            materials,
            features,
            brand,
            is_business,
            business,
            price,
            is_free,
            is_negotiable,
            quantity,
            location,
            contact_methods,
            phone_number,
            agreed_to_terms,
            promote_options,
        } = patch;

        let d = &mut self.draft;
        if let Some(v) = photos {
            d.photos = v;
        }
        if let Some(v) = title {
            d.title = v;
        }
        if let Some(v) = description {
            d.description = v;
        }
        if let Some(v) = category {
            d.category = Some(v);
        }
        if let Some(v) = subcategory {
            d.subcategory = v;
        }
        if let Some(v) = condition {
            d.condition = Some(v);
        }
        if let Some(v) = materials {
            d.materials = v;
        }
        if let Some(v) = features {
            d.features = v;
        }
        if let Some(v) = brand {
            d.brand = v.filter(|b| !b.is_empty());
        }
        if let Some(v) = business {
            d.business = Some(v);
        }
        if let Some(v) = is_business {
            d.is_business = v;
        }
        if let Some(v) = is_negotiable {
            d.is_negotiable = v;
        }
        if let Some(v) = quantity {
            d.quantity = v;
        }
        if let Some(v) = location {
            d.location = v;
        }
        if let Some(v) = contact_methods {
            d.contact_methods = v;
        }
        if let Some(v) = phone_number {
            d.phone_number = v;
        }
        if let Some(v) = agreed_to_terms {
            d.agreed_to_terms = v;
        }
        if let Some(v) = promote_options {
            d.promote_options = v;
        }

        // Free flag before price: a price in the same patch as `is_free: false`
        // wins over the restored one, and is ignored alongside `is_free: true`.
        if let Some(free) = is_free {
            self.set_free(free);
        }
        if let Some(v) = price
            && !self.draft.is_free
        {
            self.draft.price = v;
        }

        self.normalize();
    }

    fn set_free(&mut self, free: bool) {
        let d = &mut self.draft;
        match (d.is_free, free) {
            (false, true) => {
                self.price_before_free = Some(mem::take(&mut d.price));
                debug!("Listing marked free, price forced to {FREE_PRICE}");
            }
            (true, false) => {
                d.price = self.price_before_free.take().unwrap_or_default();
                debug!("Listing no longer free, price restored to {:?}", d.price);
            }
            _ => {}
        }
        d.is_free = free;
    }

    /// Number of photos that can still be added.
    pub fn remaining_photo_slots(&self) -> usize {
        MAX_PHOTOS.saturating_sub(self.draft.photos.len())
    }

    /// Append picked photos as one merge-patch, dropping whatever does not
    /// fit. Returns how many were kept.
    pub fn add_photos(&mut self, picked: Vec<MediaRef>) -> usize {
        let offered = picked.len();
        let accepted = offered.min(self.remaining_photo_slots());
        let mut photos = self.draft.photos.clone();
        photos.extend(picked.into_iter().take(accepted));
        self.update(DraftPatch {
            photos: Some(photos),
            ..Default::default()
        });
        if accepted < offered {
            debug!("Dropped {} photo(s) over the {MAX_PHOTOS} limit", offered - accepted);
        }
        accepted
    }

    /// Remove a photo; later photos shift down, so index 0 stays the cover.
    pub fn remove_photo(&mut self, index: usize) -> Option<MediaRef> {
        (index < self.draft.photos.len()).then(|| self.draft.photos.remove(index))
    }

    /// Move a photo to the front so it becomes the cover.
    pub fn make_cover(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.draft.photos.len() {
            return false;
        }
        let photo = self.draft.photos.remove(index);
        self.draft.photos.insert(0, photo);
        true
    }

    pub fn toggle_material(&mut self, material: Material) {
        if !self.draft.materials.remove(&material) {
            self.draft.materials.insert(material);
        }
    }

    pub fn toggle_feature(&mut self, feature: Feature) {
        if !self.draft.features.remove(&feature) {
            self.draft.features.insert(feature);
        }
    }

    pub fn toggle_contact(&mut self, channel: ContactChannel) {
        self.draft.contact_methods.toggle(channel);
    }

    fn normalize(&mut self) {
        let d = &mut self.draft;
        d.photos.truncate(MAX_PHOTOS);
        truncate_chars(&mut d.title, MAX_TITLE_CHARS);
        truncate_chars(&mut d.description, MAX_DESCRIPTION_CHARS);
        d.quantity = d.quantity.max(1);
        if d.is_business && d.business.is_none() {
            d.business = Some(BusinessDetails::default());
        }
        if d.is_free && d.price != FREE_PRICE {
            d.price = FREE_PRICE.to_string();
        }
        let subcategory_fits = match (d.category, d.subcategory.as_deref()) {
            (_, None) => true,
            (Some(category), Some(sub)) => category.offers(sub),
            (None, Some(_)) => false,
        };
        if !subcategory_fits {
            d.subcategory = None;
        }
    }
}

/// Truncate `s` to at most `max` characters (not bytes).
fn truncate_chars(s: &mut String, max: usize) {
    if let Some((byte_idx, _)) = s.char_indices().nth(max) {
        s.truncate(byte_idx);
    }
}
