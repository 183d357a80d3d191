//! Lead capture modal: visibility, Creator/Brand tabs and the thank-you
//! landing state that forms redirect back to.

use crate::config::{LEAD_MODAL_DELAY_MS, LEAD_MODAL_SHOWN_KEY};
use crate::storage::FlagStore;

const THANK_YOU_FRAGMENT: &str = "#thank-you";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeadTab {
    #[default]
    Creator,
    Brand,
}

impl LeadTab {
    pub fn key(&self) -> &'static str {
        match self {
            LeadTab::Creator => "creator",
            LeadTab::Brand => "brand",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeadTab::Creator => "I'm a Creator",
            LeadTab::Brand => "I'm a Brand",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThankYou {
    Creator,
    Brand,
    Generic,
}

impl ThankYou {
    pub fn message(&self) -> &'static str {
        match self {
            ThankYou::Creator => "Creator form received. We’ll reach out soon with next steps.",
            ThankYou::Brand => "Brand inquiry received. We’ll reach out within 24–48 hours.",
            ThankYou::Generic => "Your details have been received. We’ll reach out shortly.",
        }
    }
}

/// Matches `#thank-you`, optionally followed by something carrying
/// `type=creator` or `type=brand` (any case, percent-encoding allowed).
pub fn parse_thank_you(fragment: &str) -> Option<ThankYou> {
    let decoded = urlencoding::decode(fragment)
        .map(|d| d.into_owned())
        .unwrap_or_else(|_| fragment.to_string());
    if !decoded.starts_with(THANK_YOU_FRAGMENT) {
        return None;
    }

    // First `type=` naming a known form wins; `ref_type=ad` and friends are skipped.
    let lowered = decoded.to_ascii_lowercase();
    let kind = lowered
        .match_indices("type=")
        .map(|(at, key)| &lowered[at + key.len()..])
        .find_map(|rest| {
            if rest.starts_with("creator") {
                Some(ThankYou::Creator)
            } else if rest.starts_with("brand") {
                Some(ThankYou::Brand)
            } else {
                None
            }
        })
        .unwrap_or(ThankYou::Generic);
    Some(kind)
}

/// Absolute `_next` target for the form relay, which refuses relative URLs.
pub fn thank_you_redirect(origin: &str, tab: LeadTab) -> String {
    format!(
        "{}/{}?type={}",
        origin.trim_end_matches('/'),
        THANK_YOU_FRAGMENT,
        tab.key()
    )
}

/// What the page should do with the modal right after it loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPlan {
    /// Landed back from a form submit: show the thank-you note, never auto-open.
    ThankYou(ThankYou),
    AutoOpenAfter(u32),
    /// Already shown on an earlier visit.
    Stay,
}

pub fn plan_on_load(fragment: &str, flags: &impl FlagStore) -> LoadPlan {
    if let Some(kind) = parse_thank_you(fragment) {
        return LoadPlan::ThankYou(kind);
    }
    if flags.get(LEAD_MODAL_SHOWN_KEY).is_some() {
        return LoadPlan::Stay;
    }
    LoadPlan::AutoOpenAfter(LEAD_MODAL_DELAY_MS)
}

pub fn mark_shown(flags: &impl FlagStore) {
    flags.set(LEAD_MODAL_SHOWN_KEY, "1");
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadModalAction {
    Open,
    Close,
    SelectTab(LeadTab),
    /// Hovering a tab only switches it on devices with a real pointer.
    PreviewTab { tab: LeadTab, hover_capable: bool },
    ShowThankYou(ThankYou),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeadModalState {
    pub open: bool,
    pub tab: LeadTab,
    pub thank_you: Option<ThankYou>,
}

impl LeadModalState {
    pub fn apply(self, action: LeadModalAction) -> Self {
        match action {
            LeadModalAction::Open => Self { open: true, ..self },
            LeadModalAction::Close => Self { open: false, ..self },
            LeadModalAction::SelectTab(tab) => Self { tab, ..self },
            LeadModalAction::PreviewTab { tab, hover_capable } if hover_capable => {
                Self { tab, ..self }
            }
            LeadModalAction::PreviewTab { .. } => self,
            LeadModalAction::ShowThankYou(kind) => Self {
                thank_you: Some(kind),
                ..self
            },
        }
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }

    pub fn form_hidden(&self, form: LeadTab) -> bool {
        self.tab != form
    }
}
