use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::{
    brands::BrandsStrip,
    counter::Counter,
    fade_up::FadeUp,
    lead_modal::{LeadModal, ThankYouSection},
    testimonials::Testimonials,
    video_gallery::CampaignVideos,
};
use crate::state::lead_modal::{LeadModalAction, LeadModalState};

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal = use_reducer(LeadModalState::default);

    // Manual open ignores the "already shown" flag.
    let open_lead_modal = {
        let modal = modal.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            modal.dispatch(LeadModalAction::Open);
        })
    };

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>

            <header class="hero" id="top">
                <div class="hero-content">
                    <h1>{"Creator campaigns that move the numbers"}</h1>
                    <p class="hero-subtitle">
                        {"Echove Media pairs brands with creators their audience already trusts, then runs the whole campaign from brief to report."}
                    </p>
                    <div class="hero-cta-group">
                        <button id="openLeadModal" class="hero-cta" onclick={open_lead_modal.clone()}>
                            {"Work with us"}
                        </button>
                        <a href="#campaigns" class="hero-link">{"See our campaigns"}</a>
                    </div>
                </div>
            </header>

            <FadeUp id="results" class="stats">
                <h2>{"Results so far"}</h2>
                <div class="stats-grid">
                    <div class="stat">
                        <Counter target="48200000" compact=true decimals="1" suffix="+" />
                        <p>{"Organic views delivered"}</p>
                    </div>
                    <div class="stat">
                        <Counter target="12300" compact=true decimals="1" />
                        <p>{"Pieces of creator content"}</p>
                    </div>
                    <div class="stat">
                        <Counter target="350" suffix="+" duration="2500" />
                        <p>{"Creators in our network"}</p>
                    </div>
                    <div class="stat">
                        <Counter target="4.8" decimals="1" suffix="x" duration="3000" />
                        <p>{"Average return on ad spend"}</p>
                    </div>
                </div>
            </FadeUp>

            <FadeUp id="campaigns" class="campaigns">
                <h2>{"Campaigns"}</h2>
                <p class="section-lead">{"Tap a reel to play it."}</p>
                <CampaignVideos />
            </FadeUp>

            <FadeUp id="brands" class="brands-section">
                <BrandsStrip />
            </FadeUp>

            <FadeUp id="testimonials" class="testimonials">
                <h2>{"What people say"}</h2>
                <Testimonials />
            </FadeUp>

            <FadeUp id="contact" class="contact">
                <h2>{"Ready to launch?"}</h2>
                <p>{"Tell us whether you're a creator or a brand and we'll take it from there."}</p>
                <button class="hero-cta" onclick={open_lead_modal}>{"Get in touch"}</button>
            </FadeUp>

            <ThankYouSection thank_you={modal.thank_you} />
            <LeadModal modal={modal.clone()} />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .animate-fade-up {
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .animate-fade-up.visible {
        opacity: 1;
        transform: none;
    }
    .nav-links {
        display: flex;
        gap: 1.5rem;
    }
    @media (max-width: 768px) {
        .nav-links {
            display: none;
            flex-direction: column;
        }
        .nav-links.open {
            display: flex;
        }
    }
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
        gap: 2rem;
    }
    .counter {
        font-size: 2.75rem;
        font-weight: 700;
        font-variant-numeric: tabular-nums;
    }
    .video-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 1.25rem;
    }
    .video-box {
        position: relative;
        cursor: pointer;
        border-radius: 16px;
        overflow: hidden;
    }
    .video-box video {
        width: 100%;
        display: block;
    }
    .video-box.playing .video-overlay {
        opacity: 0;
    }
    .brands-marquee {
        overflow: hidden;
    }
    .marquee-track {
        display: flex;
        gap: 3rem;
        width: max-content;
        animation: marquee 30s linear infinite;
    }
    .brands-marquee.paused .marquee-track {
        animation-play-state: paused;
    }
    @keyframes marquee {
        from { transform: translateX(0); }
        to { transform: translateX(-50%); }
    }
    .brands-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
        gap: 1rem;
    }
    .t-carousel {
        overflow: hidden;
    }
    .t-track {
        display: flex;
        transition: transform 0.6s ease;
    }
    .t-card {
        flex: 0 0 calc(100% / 3);
        opacity: 0.5;
        transition: opacity 0.4s ease, transform 0.4s ease;
    }
    .t-card.is-active {
        opacity: 1;
        transform: scale(1.04);
    }
    .t-carousel.is-stacked .t-track {
        flex-direction: column;
        gap: 1rem;
    }
    .lead-modal {
        position: fixed;
        inset: 0;
        display: none;
        z-index: 50;
    }
    .lead-modal.is-open {
        display: grid;
        place-items: center;
    }
    .lead-backdrop {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.6);
    }
    .lead-dialog {
        position: relative;
        max-width: 480px;
        width: calc(100% - 2rem);
        background: #111;
        border-radius: 20px;
        padding: 2rem;
    }
    .lead-tab.is-active {
        border-bottom: 2px solid currentColor;
    }
    .lead-form.is-hidden {
        display: none;
    }
"#;
