//! # Actions
//!
//! Everything that can happen in a sell-flow session becomes an `Action`.
//! The seller types a title? That's `Action::Patch(..)`. The gallery returns?
//! That's `Action::PhotosPicked(refs)`.
//!
//! The `update()` function takes the current wizard and an action, mutates the
//! wizard, and returns the `Effect` the host must carry out. No I/O happens
//! here; collaborator calls are described by effects and their results come
//! back as actions.
//!
//! ```text
//! Wizard + Action  →  update()  →  Wizard' + Effect
//! ```
//!
//! Editing surfaces only ever emit actions, so they stay decoupled from the
//! sequencing rules that live in this reducer.

use log::{debug, info, warn};

use crate::core::abandon::{AbandonChoice, Abandonment, CloseReason, ExitChoice, on_abandon};
use crate::core::draft::{
    ContactChannel, DraftPatch, DraftSnapshot, Feature, Location, Material, MediaRef,
};
use crate::core::publish::{self, ListingReceipt, Published};
use crate::core::sequencer::{Nav, Phase, Transition, transition};
use crate::core::state::{Notice, Wizard};
use crate::core::step::Step;
use crate::services::{CollaboratorError, MediaSource};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Editing surfaces
    Patch(DraftPatch),
    ToggleMaterial(Material),
    ToggleFeature(Feature),
    ToggleContact(ContactChannel),
    RemovePhoto(usize),
    MakeCover(usize),
    RequestPhotos(MediaSource),
    RequestLocation,

    // Navigation
    Next,
    Back,
    JumpTo(Step),
    Publish,

    // Leaving
    /// The host wants the wizard gone (window closed, Ctrl+C).
    Close,
    Abandon(AbandonChoice),
    KeepEditing,
    Exit(ExitChoice),
    DismissNotice,

    // Collaborator results
    PhotosPicked(Vec<MediaRef>),
    PhotosFailed(CollaboratorError),
    LocationResolved(Location),
    LocationFailed(CollaboratorError),
    PublishSucceeded(ListingReceipt),
    PublishFailed(CollaboratorError),
    DraftSaved,
    DraftSaveFailed(CollaboratorError),
}

impl Action {
    /// Seller-initiated, as opposed to a collaborator reporting back.
    pub fn is_user_intent(&self) -> bool {
        !matches!(
            self,
            Action::PhotosPicked(_)
                | Action::PhotosFailed(_)
                | Action::LocationResolved(_)
                | Action::LocationFailed(_)
                | Action::PublishSucceeded(_)
                | Action::PublishFailed(_)
                | Action::DraftSaved
                | Action::DraftSaveFailed(_)
        )
    }
}

/// Work the host performs after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Open the camera or gallery for at most `max` photos.
    RequestMedia { source: MediaSource, max: usize },
    RequestLocation,
    /// Hand the listing to the publish collaborator.
    Submit(DraftSnapshot),
    /// Hand a partial draft to the draft-persistence collaborator.
    SaveDraft(DraftSnapshot),
    /// Listing is live: fire `on_publish`, play the celebration.
    Celebrate(Published),
    /// Session is over: fire `on_close`.
    Close(CloseReason),
}

pub fn update(wizard: &mut Wizard, action: Action) -> Effect {
    if wizard.is_closed() {
        debug!("Session closed, ignoring {:?}", action);
        return Effect::None;
    }
    if action.is_user_intent() {
        wizard.notice = None;
    }

    match action {
        Action::Patch(patch) => edit(wizard, |w| w.store.update(patch)),
        Action::ToggleMaterial(material) => edit(wizard, |w| w.store.toggle_material(material)),
        Action::ToggleFeature(feature) => edit(wizard, |w| w.store.toggle_feature(feature)),
        Action::ToggleContact(channel) => edit(wizard, |w| w.store.toggle_contact(channel)),
        Action::RemovePhoto(index) => edit(wizard, |w| {
            w.store.remove_photo(index);
        }),
        Action::MakeCover(index) => edit(wizard, |w| {
            w.store.make_cover(index);
        }),
        Action::RequestPhotos(source) => request_photos(wizard, source),
        Action::RequestLocation => {
            if editable_step(wizard).is_none() || wizard.pending.location {
                return Effect::None;
            }
            wizard.pending.location = true;
            Effect::RequestLocation
        }

        Action::Next => navigate(wizard, Nav::Next),
        Action::Back => navigate(wizard, Nav::Back),
        Action::JumpTo(step) => navigate(wizard, Nav::JumpTo(step)),
        Action::Publish => {
            if editable_step(wizard) == Some(Step::Review) {
                start_publish(wizard)
            } else {
                debug!("Publish is only offered on the review step");
                Effect::None
            }
        }

        Action::Close => match &wizard.phase {
            Phase::Published(_) => exit(wizard, ExitChoice::ReturnHome),
            Phase::Editing(_) if !wizard.pending.publish => {
                wizard.abandon_prompt = true;
                Effect::None
            }
            _ => Effect::None,
        },
        Action::Abandon(choice) => abandon(wizard, choice),
        Action::KeepEditing => {
            if !wizard.pending.draft_save {
                wizard.abandon_prompt = false;
            }
            Effect::None
        }
        Action::Exit(choice) => exit(wizard, choice),
        Action::DismissNotice => Effect::None,

        Action::PhotosPicked(refs) => {
            if !wizard.pending.media {
                return unrequested("media");
            }
            wizard.pending.media = false;
            if wizard.current_step().is_some() {
                let kept = wizard.store.add_photos(refs);
                debug!("Added {} photo(s), {} total", kept, wizard.draft().photos.len());
            }
            Effect::None
        }
        Action::PhotosFailed(err) => {
            if !wizard.pending.media {
                return unrequested("media");
            }
            wizard.pending.media = false;
            warn!("Media request failed: {}", err);
            wizard.notice = Some(Notice::MediaFailed(err));
            Effect::None
        }
        Action::LocationResolved(location) => {
            if !wizard.pending.location {
                return unrequested("location");
            }
            wizard.pending.location = false;
            if wizard.current_step().is_some() {
                wizard.store.update(DraftPatch {
                    location: Some(location),
                    ..Default::default()
                });
            }
            Effect::None
        }
        Action::LocationFailed(err) => {
            if !wizard.pending.location {
                return unrequested("location");
            }
            wizard.pending.location = false;
            warn!("Location request failed: {}", err);
            wizard.notice = Some(Notice::LocationFailed(err));
            Effect::None
        }
        Action::PublishSucceeded(receipt) => {
            if !wizard.pending.publish {
                return unrequested("publish");
            }
            wizard.pending.publish = false;
            let published = publish::confirm(receipt, wizard.draft());
            info!("Listing {} is live", published.listing_id);
            wizard.phase = Phase::Published(published.clone());
            Effect::Celebrate(published)
        }
        Action::PublishFailed(err) => {
            if !wizard.pending.publish {
                return unrequested("publish");
            }
            wizard.pending.publish = false;
            warn!("Publish failed: {}", err);
            wizard.notice = Some(Notice::PublishFailed(err));
            Effect::None
        }
        Action::DraftSaved => {
            if !wizard.pending.draft_save {
                return unrequested("draft_save");
            }
            wizard.pending.draft_save = false;
            close(wizard, CloseReason::DraftSaved)
        }
        Action::DraftSaveFailed(err) => {
            if !wizard.pending.draft_save {
                return unrequested("draft_save");
            }
            wizard.pending.draft_save = false;
            warn!("Draft save failed: {}", err);
            wizard.notice = Some(Notice::DraftSaveFailed(err));
            Effect::None
        }
    }
}

/// A collaborator result with no outstanding request behind it.
fn unrequested(request: &str) -> Effect {
    debug!("No {} request outstanding, dropping result", request);
    Effect::None
}

/// The step whose surface accepts input right now. `None` while the abandon
/// prompt is up, while publishing, and outside the editing phase.
fn editable_step(wizard: &Wizard) -> Option<Step> {
    if wizard.abandon_prompt || wizard.pending.publish {
        return None;
    }
    wizard.current_step()
}

fn edit(wizard: &mut Wizard, apply: impl FnOnce(&mut Wizard)) -> Effect {
    if editable_step(wizard).is_some() {
        apply(wizard);
    }
    Effect::None
}

fn request_photos(wizard: &mut Wizard, source: MediaSource) -> Effect {
    if editable_step(wizard).is_none() || wizard.pending.media {
        return Effect::None;
    }
    let max = wizard.store.remaining_photo_slots();
    if max == 0 {
        wizard.notice = Some(Notice::PhotoLimitReached);
        return Effect::None;
    }
    wizard.pending.media = true;
    Effect::RequestMedia { source, max }
}

fn navigate(wizard: &mut Wizard, nav: Nav) -> Effect {
    if editable_step(wizard).is_none() {
        return Effect::None;
    }
    match transition(&wizard.phase, nav, wizard.draft()) {
        Transition::Moved { from, to } => {
            debug!("Moved from {} to {}", from, to);
            wizard.phase = Phase::Editing(to);
            Effect::None
        }
        Transition::Incomplete(err) => {
            debug!("Next rejected on {}: {}", err.step, err);
            wizard.rejected_transitions += 1;
            wizard.notice = Some(Notice::Incomplete(err));
            Effect::None
        }
        Transition::JumpRejected { current, target } => {
            debug!("Jump from {} to {} rejected", current, target);
            wizard.rejected_transitions += 1;
            Effect::None
        }
        Transition::Abandon => {
            wizard.abandon_prompt = true;
            Effect::None
        }
        Transition::Publish => start_publish(wizard),
        Transition::Ignored => Effect::None,
    }
}

fn start_publish(wizard: &mut Wizard) -> Effect {
    match publish::publish(wizard.session_id, wizard.draft()) {
        Ok(snapshot) => {
            info!("Submitting listing for session {}", wizard.session_id);
            wizard.pending.publish = true;
            Effect::Submit(snapshot)
        }
        Err(err) => {
            debug!("Publish rejected: {}", err);
            wizard.rejected_transitions += 1;
            wizard.notice = Some(Notice::Incomplete(err));
            Effect::None
        }
    }
}

fn abandon(wizard: &mut Wizard, choice: AbandonChoice) -> Effect {
    if !wizard.abandon_prompt || wizard.pending.draft_save {
        return Effect::None;
    }
    match on_abandon(choice, wizard.session_id, wizard.draft()) {
        Abandonment::Close(reason) => close(wizard, reason),
        Abandonment::Save(snapshot) => {
            info!("Saving draft for session {}", wizard.session_id);
            wizard.pending.draft_save = true;
            Effect::SaveDraft(snapshot)
        }
    }
}

fn exit(wizard: &mut Wizard, choice: ExitChoice) -> Effect {
    let Phase::Published(published) = &wizard.phase else {
        return Effect::None;
    };
    let reason = match choice {
        ExitChoice::ViewListing => CloseReason::ViewListing {
            listing_id: published.listing_id.clone(),
        },
        ExitChoice::ReturnHome => CloseReason::ReturnHome,
    };
    close(wizard, reason)
}

fn close(wizard: &mut Wizard, reason: CloseReason) -> Effect {
    info!("Closing session {}: {:?}", wizard.session_id, reason);
    wizard.abandon_prompt = false;
    wizard.phase = Phase::Closed(reason.clone());
    Effect::Close(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::draft::{ListingDraft, MAX_PHOTOS};
    use crate::core::state::Pending;
    use crate::services::Capability;
    use crate::test_support::{complete_draft, photo_refs, wizard_at};

    fn receipt() -> ListingReceipt {
        ListingReceipt {
            listing_id: "lst_test".to_string(),
        }
    }

    #[test]
    fn test_next_rejected_keeps_step_and_raises_notice() {
        let mut wizard = Wizard::open(Some(ListingDraft {
            title: String::new(),
            ..complete_draft()
        }));
        let effect = update(&mut wizard, Action::Next);
        assert_eq!(effect, Effect::None);
        assert_eq!(wizard.current_step(), Some(Step::Details));
        assert!(matches!(wizard.notice, Some(Notice::Incomplete(_))));
        assert_eq!(wizard.rejected_transitions, 1);
    }

    #[test]
    fn test_next_advances_and_clears_notice() {
        let mut wizard = Wizard::open(None);
        update(&mut wizard, Action::Next);
        assert!(wizard.notice.is_some());

        update(
            &mut wizard,
            Action::Patch(DraftPatch {
                title: Some("Lamp".to_string()),
                category: Some(crate::core::draft::Category::HomeGarden),
                condition: Some(crate::core::draft::Condition::Good),
                ..Default::default()
            }),
        );
        assert!(wizard.notice.is_none());
        update(&mut wizard, Action::Next);
        assert_eq!(wizard.current_step(), Some(Step::Photos));
    }

    #[test]
    fn test_back_on_first_step_opens_prompt() {
        let mut wizard = Wizard::open(None);
        update(&mut wizard, Action::Back);
        assert_eq!(wizard.current_step(), Some(Step::Details));
        assert!(wizard.abandon_prompt);
    }

    #[test]
    fn test_jump_ahead_is_rejected() {
        let mut wizard = wizard_at(complete_draft(), Step::Photos);
        update(&mut wizard, Action::JumpTo(Step::Location));
        assert_eq!(wizard.current_step(), Some(Step::Photos));
        assert_eq!(wizard.rejected_transitions, 1);

        update(&mut wizard, Action::JumpTo(Step::Details));
        assert_eq!(wizard.current_step(), Some(Step::Details));
    }

    #[test]
    fn test_publish_without_terms_stays_on_review() {
        let mut draft = complete_draft();
        draft.agreed_to_terms = false;
        let mut wizard = wizard_at(draft, Step::Review);

        let effect = update(&mut wizard, Action::Publish);
        assert_eq!(effect, Effect::None);
        assert_eq!(wizard.current_step(), Some(Step::Review));
        match &wizard.notice {
            Some(Notice::Incomplete(err)) => assert_eq!(err.to_string(), "must agree to terms"),
            other => panic!("expected terms notice, got {other:?}"),
        }
    }

    #[test]
    fn test_publish_flow_reaches_published_then_closes() {
        let mut wizard = wizard_at(complete_draft(), Step::Review);

        let effect = update(&mut wizard, Action::Next);
        let Effect::Submit(snapshot) = effect else {
            panic!("expected Submit, got {effect:?}");
        };
        assert_eq!(snapshot.session_id, wizard.session_id);
        assert!(wizard.pending.publish);

        // Edits are frozen while the submission is in flight
        update(
            &mut wizard,
            Action::Patch(DraftPatch {
                title: Some("changed".to_string()),
                ..Default::default()
            }),
        );
        assert_eq!(wizard.draft().title, "iPhone 13");

        let effect = update(&mut wizard, Action::PublishSucceeded(receipt()));
        assert!(matches!(effect, Effect::Celebrate(ref p) if p.listing_id == "lst_test"));
        assert!(matches!(wizard.phase, Phase::Published(_)));

        // Terminal: navigation can't return to editing
        assert_eq!(update(&mut wizard, Action::Back), Effect::None);
        assert_eq!(update(&mut wizard, Action::JumpTo(Step::Details)), Effect::None);
        assert!(matches!(wizard.phase, Phase::Published(_)));

        let effect = update(&mut wizard, Action::Exit(ExitChoice::ViewListing));
        assert_eq!(
            effect,
            Effect::Close(CloseReason::ViewListing {
                listing_id: "lst_test".to_string()
            })
        );
        assert!(wizard.is_closed());

        // Close is only ever reported once
        assert_eq!(update(&mut wizard, Action::Exit(ExitChoice::ReturnHome)), Effect::None);
    }

    #[test]
    fn test_publish_failure_keeps_wizard_on_review() {
        let mut wizard = wizard_at(complete_draft(), Step::Review);
        update(&mut wizard, Action::Publish);
        update(
            &mut wizard,
            Action::PublishFailed(CollaboratorError::Unavailable("offline".to_string())),
        );
        assert_eq!(wizard.current_step(), Some(Step::Review));
        assert!(!wizard.pending.publish);
        assert!(matches!(wizard.notice, Some(Notice::PublishFailed(_))));
    }

    #[test]
    fn test_stray_publish_receipt_is_ignored() {
        let mut wizard = wizard_at(complete_draft(), Step::Review);
        assert_eq!(update(&mut wizard, Action::PublishSucceeded(receipt())), Effect::None);
        assert_eq!(wizard.current_step(), Some(Step::Review));
    }

    #[test]
    fn test_discard_closes_session() {
        let mut wizard = Wizard::open(None);
        update(&mut wizard, Action::Back);
        let effect = update(&mut wizard, Action::Abandon(AbandonChoice::Discard));
        assert_eq!(effect, Effect::Close(CloseReason::Discarded));
        assert!(wizard.is_closed());
    }

    #[test]
    fn test_abandon_requires_prompt() {
        let mut wizard = Wizard::open(None);
        assert_eq!(
            update(&mut wizard, Action::Abandon(AbandonChoice::Discard)),
            Effect::None
        );
        assert!(!wizard.is_closed());
    }

    #[test]
    fn test_save_draft_then_close() {
        let mut wizard = Wizard::open(Some(ListingDraft {
            title: "Half done".to_string(),
            ..Default::default()
        }));
        update(&mut wizard, Action::Back);
        let effect = update(&mut wizard, Action::Abandon(AbandonChoice::SaveDraft));
        let Effect::SaveDraft(snapshot) = effect else {
            panic!("expected SaveDraft, got {effect:?}");
        };
        assert_eq!(snapshot.draft.title, "Half done");
        assert!(!wizard.is_closed());

        let effect = update(&mut wizard, Action::DraftSaved);
        assert_eq!(effect, Effect::Close(CloseReason::DraftSaved));
        assert!(wizard.is_closed());
    }

    #[test]
    fn test_draft_save_failure_keeps_prompt_open() {
        let mut wizard = Wizard::open(None);
        update(&mut wizard, Action::Back);
        update(&mut wizard, Action::Abandon(AbandonChoice::SaveDraft));
        update(
            &mut wizard,
            Action::DraftSaveFailed(CollaboratorError::Rejected("disk full".to_string())),
        );
        assert!(wizard.abandon_prompt);
        assert!(!wizard.is_closed());
        assert!(matches!(wizard.notice, Some(Notice::DraftSaveFailed(_))));
    }

    #[test]
    fn test_keep_editing_dismisses_prompt() {
        let mut wizard = Wizard::open(None);
        update(&mut wizard, Action::Close);
        assert!(wizard.abandon_prompt);
        update(&mut wizard, Action::KeepEditing);
        assert!(!wizard.abandon_prompt);
    }

    #[test]
    fn test_edits_blocked_while_prompt_open() {
        let mut wizard = Wizard::open(None);
        update(&mut wizard, Action::Back);
        update(
            &mut wizard,
            Action::Patch(DraftPatch {
                title: Some("ignored".to_string()),
                ..Default::default()
            }),
        );
        assert_eq!(wizard.draft().title, "");
    }

    #[test]
    fn test_photo_request_bounded_by_remaining_slots() {
        let mut wizard = wizard_at(ListingDraft::default(), Step::Photos);
        wizard.store.add_photos(photo_refs(7));

        let effect = update(&mut wizard, Action::RequestPhotos(MediaSource::Gallery));
        assert_eq!(
            effect,
            Effect::RequestMedia {
                source: MediaSource::Gallery,
                max: 3
            }
        );
        assert!(wizard.pending.media);

        // Duplicate request while busy is dropped
        assert_eq!(
            update(&mut wizard, Action::RequestPhotos(MediaSource::Camera)),
            Effect::None
        );

        update(&mut wizard, Action::PhotosPicked(photo_refs(12)));
        assert_eq!(wizard.draft().photos.len(), MAX_PHOTOS);
        assert!(!wizard.pending.media);

        assert_eq!(
            update(&mut wizard, Action::RequestPhotos(MediaSource::Gallery)),
            Effect::None
        );
        assert_eq!(wizard.notice, Some(Notice::PhotoLimitReached));
    }

    #[test]
    fn test_permission_denied_leaves_draft_unchanged() {
        let mut wizard = wizard_at(ListingDraft::default(), Step::Photos);
        let before = wizard.draft().clone();
        update(&mut wizard, Action::RequestPhotos(MediaSource::Camera));
        update(
            &mut wizard,
            Action::PhotosFailed(CollaboratorError::PermissionDenied(Capability::Camera)),
        );
        assert_eq!(wizard.draft(), &before);
        assert_eq!(wizard.current_step(), Some(Step::Photos));
        assert!(matches!(wizard.notice, Some(Notice::MediaFailed(_))));

        update(&mut wizard, Action::DismissNotice);
        assert!(wizard.notice.is_none());
    }

    #[test]
    fn test_location_resolves_into_draft() {
        let mut wizard = wizard_at(ListingDraft::default(), Step::Location);
        assert_eq!(update(&mut wizard, Action::RequestLocation), Effect::RequestLocation);
        assert!(wizard.pending.location);

        // The rest of the wizard stays interactive while locating
        update(
            &mut wizard,
            Action::Patch(DraftPatch {
                phone_number: Some("555-0100".to_string()),
                ..Default::default()
            }),
        );

        update(
            &mut wizard,
            Action::LocationResolved(Location {
                city: "Seattle".to_string(),
                state: "WA".to_string(),
                zip_code: "98101".to_string(),
            }),
        );
        assert!(!wizard.pending.location);
        assert_eq!(wizard.draft().location.city, "Seattle");
        assert_eq!(wizard.draft().phone_number, "555-0100");
    }

    #[test]
    fn test_background_results_do_not_clear_notice() {
        let mut wizard = wizard_at(ListingDraft::default(), Step::Photos);
        update(&mut wizard, Action::RequestPhotos(MediaSource::Gallery));
        update(&mut wizard, Action::Next);
        assert!(wizard.notice.is_some());
        update(&mut wizard, Action::PhotosPicked(photo_refs(1)));
        assert_eq!(wizard.draft().photos.len(), 1);
        assert!(wizard.notice.is_some());
    }

    #[test]
    fn test_unrequested_location_is_ignored() {
        let mut wizard = wizard_at(complete_draft(), Step::Location);
        let before = wizard.draft().clone();
        let effect = update(
            &mut wizard,
            Action::LocationResolved(Location {
                city: "Nowhere".to_string(),
                state: "NV".to_string(),
                zip_code: String::new(),
            }),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(wizard.draft(), &before);
        assert_eq!(wizard.draft().location.city, "Seattle");
    }

    #[test]
    fn test_unrequested_results_change_nothing() {
        let mut wizard = wizard_at(complete_draft(), Step::Photos);
        let before = wizard.draft().clone();
        update(&mut wizard, Action::PhotosPicked(photo_refs(3)));
        update(
            &mut wizard,
            Action::LocationFailed(CollaboratorError::Unavailable("no fix".to_string())),
        );
        update(
            &mut wizard,
            Action::PublishFailed(CollaboratorError::Unavailable("offline".to_string())),
        );
        update(
            &mut wizard,
            Action::DraftSaveFailed(CollaboratorError::Unavailable("disk full".to_string())),
        );
        assert_eq!(wizard.draft(), &before);
        assert!(wizard.notice.is_none());
        assert_eq!(wizard.pending, Pending::default());
    }

    #[test]
    fn test_close_on_published_returns_home() {
        let mut wizard = wizard_at(complete_draft(), Step::Review);
        update(&mut wizard, Action::Publish);
        update(&mut wizard, Action::PublishSucceeded(receipt()));
        assert_eq!(
            update(&mut wizard, Action::Close),
            Effect::Close(CloseReason::ReturnHome)
        );
    }
}
