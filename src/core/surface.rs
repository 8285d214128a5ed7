//! Step → editing surface dispatch.
//!
//! Exactly one surface is active at a time. Each variant carries the slice of
//! session state that surface needs; surfaces write back only by emitting
//! actions.

use crate::core::draft::{BusinessDetails, ListingDraft};
use crate::core::publish::Published;
use crate::core::sequencer::Phase;
use crate::core::state::Wizard;
use crate::core::step::Step;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface<'a> {
    Details {
        draft: &'a ListingDraft,
        /// Present only while the listing is marked as a business; mounts the
        /// business sub-editor.
        business: Option<&'a BusinessDetails>,
    },
    Photos {
        draft: &'a ListingDraft,
        remaining_slots: usize,
        busy: bool,
    },
    Pricing {
        draft: &'a ListingDraft,
        /// False while the listing is free and the price is pinned to 0.
        price_editable: bool,
    },
    Location {
        draft: &'a ListingDraft,
        locating: bool,
    },
    Review {
        draft: &'a ListingDraft,
        /// Steps the seller can jump back into for a fix.
        jump_targets: &'static [Step],
        publishing: bool,
    },
    Published(&'a Published),
    Closed,
}

const REVIEW_JUMP_TARGETS: &[Step] = &[Step::Details, Step::Photos, Step::Pricing, Step::Location];

pub fn surface_for(wizard: &Wizard) -> Surface<'_> {
    let draft = wizard.draft();
    match &wizard.phase {
        Phase::Editing(Step::Details) => Surface::Details {
            draft,
            business: draft.active_business(),
        },
        Phase::Editing(Step::Photos) => Surface::Photos {
            draft,
            remaining_slots: wizard.store.remaining_photo_slots(),
            busy: wizard.pending.media,
        },
        Phase::Editing(Step::Pricing) => Surface::Pricing {
            draft,
            price_editable: !draft.is_free,
        },
        Phase::Editing(Step::Location) => Surface::Location {
            draft,
            locating: wizard.pending.location,
        },
        Phase::Editing(Step::Review) => Surface::Review {
            draft,
            jump_targets: REVIEW_JUMP_TARGETS,
            publishing: wizard.pending.publish,
        },
        Phase::Published(published) => Surface::Published(published),
        Phase::Closed(_) => Surface::Closed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::draft::DraftPatch;
    use crate::test_support::{complete_draft, wizard_at};

    #[test]
    fn test_each_step_maps_to_its_surface() {
        for step in Step::ALL {
            let wizard = wizard_at(complete_draft(), step);
            let surface = surface_for(&wizard);
            let matched = match step {
                Step::Details => matches!(surface, Surface::Details { .. }),
                Step::Photos => matches!(surface, Surface::Photos { .. }),
                Step::Pricing => matches!(surface, Surface::Pricing { .. }),
                Step::Location => matches!(surface, Surface::Location { .. }),
                Step::Review => matches!(surface, Surface::Review { .. }),
            };
            assert!(matched, "{step} rendered {surface:?}");
        }
    }

    #[test]
    fn test_business_editor_follows_flag() {
        let mut wizard = wizard_at(complete_draft(), Step::Details);
        assert!(matches!(
            surface_for(&wizard),
            Surface::Details { business: None, .. }
        ));

        update(
            &mut wizard,
            Action::Patch(DraftPatch {
                is_business: Some(true),
                ..Default::default()
            }),
        );
        assert!(matches!(
            surface_for(&wizard),
            Surface::Details {
                business: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_photos_surface_reports_slots() {
        let wizard = wizard_at(complete_draft(), Step::Photos);
        match surface_for(&wizard) {
            Surface::Photos {
                remaining_slots,
                busy,
                ..
            } => {
                assert_eq!(remaining_slots, 9);
                assert!(!busy);
            }
            other => panic!("unexpected surface {other:?}"),
        }
    }

    #[test]
    fn test_free_listing_locks_price() {
        let mut draft = complete_draft();
        draft.is_free = true;
        let wizard = wizard_at(draft, Step::Pricing);
        assert!(matches!(
            surface_for(&wizard),
            Surface::Pricing {
                price_editable: false,
                ..
            }
        ));
    }

    #[test]
    fn test_review_offers_earlier_steps() {
        let wizard = wizard_at(complete_draft(), Step::Review);
        match surface_for(&wizard) {
            Surface::Review { jump_targets, .. } => {
                assert_eq!(jump_targets.len(), 4);
                assert!(!jump_targets.contains(&Step::Review));
            }
            other => panic!("unexpected surface {other:?}"),
        }
    }
}
