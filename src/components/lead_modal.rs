use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::LEAD_FORM_ENDPOINT;
use crate::dom::{
    location_hash, matches_media, page_origin, scroll_into_view_smooth, set_root_scroll_locked,
};
use crate::state::lead_modal::{
    mark_shown, plan_on_load, thank_you_redirect, LeadModalAction, LeadModalState, LeadTab,
    LoadPlan, ThankYou,
};
use crate::storage::LocalStorageFlags;

impl Reducible for LeadModalState {
    type Action = LeadModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            next.into()
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadModalProps {
    pub modal: UseReducerHandle<LeadModalState>,
}

#[function_component(LeadModal)]
pub fn lead_modal(props: &LeadModalProps) -> Html {
    let modal = props.modal.clone();

    // Decide once per page load: thank-you note, timed open, or nothing.
    {
        let modal = modal.dispatcher();
        use_effect_with_deps(
            move |_| {
                let timeout = match plan_on_load(&location_hash(), &LocalStorageFlags) {
                    LoadPlan::ThankYou(kind) => {
                        modal.dispatch(LeadModalAction::ShowThankYou(kind));
                        None
                    }
                    LoadPlan::AutoOpenAfter(delay) => Some(Timeout::new(delay, move || {
                        info!("Opening lead modal");
                        modal.dispatch(LeadModalAction::Open);
                        mark_shown(&LocalStorageFlags);
                    })),
                    LoadPlan::Stay => None,
                };
                move || drop(timeout)
            },
            (),
        );
    }

    use_effect_with_deps(
        move |open: &bool| {
            set_root_scroll_locked(*open);
            || ()
        },
        modal.open,
    );

    {
        let modal = modal.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                modal.dispatch(LeadModalAction::Close);
            }
        });
    }

    let close = {
        let modal = modal.dispatcher();
        Callback::from(move |_: MouseEvent| modal.dispatch(LeadModalAction::Close))
    };

    let tabs = [LeadTab::Creator, LeadTab::Brand].into_iter().map(|tab| {
        let active = modal.tab == tab;
        let select = {
            let modal = modal.dispatcher();
            Callback::from(move |_: MouseEvent| modal.dispatch(LeadModalAction::SelectTab(tab)))
        };
        let preview = {
            let modal = modal.dispatcher();
            Callback::from(move |_: MouseEvent| {
                modal.dispatch(LeadModalAction::PreviewTab {
                    tab,
                    hover_capable: matches_media("(hover: hover)"),
                })
            })
        };

        html! {
            <button
                type="button"
                role="tab"
                class={classes!("lead-tab", active.then(|| "is-active"))}
                aria-selected={if active { "true" } else { "false" }}
                data-lead-tab={tab.key()}
                onclick={select}
                onmouseenter={preview}
            >
                {tab.label()}
            </button>
        }
    });

    html! {
        <div
            id="leadModal"
            class={classes!("lead-modal", modal.open.then(|| "is-open"))}
            aria-hidden={modal.aria_hidden()}
        >
            <div class="lead-backdrop" data-lead-close="" onclick={close.clone()}></div>
            <div class="lead-dialog" role="dialog" aria-modal="true" aria-labelledby="leadTitle">
                <button type="button" class="lead-close" aria-label="Close" data-lead-close="" onclick={close}>
                    {"×"}
                </button>
                <h2 id="leadTitle">{"Let's work together"}</h2>
                <div class="lead-tabs" role="tablist">
                    { for tabs }
                </div>
                <CreatorForm hidden={modal.form_hidden(LeadTab::Creator)} />
                <BrandForm hidden={modal.form_hidden(LeadTab::Brand)} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LeadFormProps {
    hidden: bool,
}

fn redirect_for(tab: LeadTab) -> String {
    thank_you_redirect(&page_origin(), tab)
}

#[function_component(CreatorForm)]
fn creator_form(props: &LeadFormProps) -> Html {
    html! {
        <form
            class={classes!("lead-form", props.hidden.then(|| "is-hidden"))}
            data-lead-form="creator"
            action={LEAD_FORM_ENDPOINT}
            method="post"
        >
            <input type="hidden" name="_next" value={redirect_for(LeadTab::Creator)} />
            <input type="hidden" name="type" value="creator" />
            <label>{"Name"}<input type="text" name="name" required=true /></label>
            <label>{"Email"}<input type="email" name="email" required=true /></label>
            <label>{"Main platform handle"}<input type="text" name="handle" required=true /></label>
            <label>
                {"Audience size"}
                <select name="audience">
                    <option value="under-10k">{"Under 10K"}</option>
                    <option value="10k-100k">{"10K – 100K"}</option>
                    <option value="100k-1m">{"100K – 1M"}</option>
                    <option value="over-1m">{"1M+"}</option>
                </select>
            </label>
            <button type="submit" class="lead-submit">{"Join the creator network"}</button>
        </form>
    }
}

#[function_component(BrandForm)]
fn brand_form(props: &LeadFormProps) -> Html {
    html! {
        <form
            class={classes!("lead-form", props.hidden.then(|| "is-hidden"))}
            data-lead-form="brand"
            action={LEAD_FORM_ENDPOINT}
            method="post"
        >
            <input type="hidden" name="_next" value={redirect_for(LeadTab::Brand)} />
            <input type="hidden" name="type" value="brand" />
            <label>{"Name"}<input type="text" name="name" required=true /></label>
            <label>{"Work email"}<input type="email" name="email" required=true /></label>
            <label>{"Company"}<input type="text" name="company" required=true /></label>
            <label>{"What are you launching?"}<textarea name="brief" rows="3" /></label>
            <button type="submit" class="lead-submit">{"Request a proposal"}</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThankYouProps {
    pub thank_you: Option<ThankYou>,
}

/// Shown after a form redirects back with `#thank-you`; scrolls itself into view.
#[function_component(ThankYouSection)]
pub fn thank_you_section(props: &ThankYouProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |thank_you: &Option<ThankYou>| {
                if thank_you.is_some() {
                    if let Some(el) = node.cast::<Element>() {
                        scroll_into_view_smooth(&el);
                    }
                }
                || ()
            },
            props.thank_you,
        );
    }

    html! {
        <section id="thank-you" class="thank-you" ref={node} hidden={props.thank_you.is_none()}>
            <h2>{"Thank you!"}</h2>
            <p id="thankYouLine">
                { props.thank_you.map(|t| t.message()).unwrap_or_default() }
            </p>
        </section>
    }
}
